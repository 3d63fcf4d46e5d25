use chrono::{DateTime, Datelike};
use itertools::Itertools;
use rand::Rng;

use crate::documents::{
    CategorySlice, GameRecord, PricedGame, ProfileSnapshot, SpendingEstimate, YearlySpend,
};

/// Fabricates plausible spending figures for a profile.
///
/// Prices are drawn from coarse tiers through `rng`, so repeated calls over
/// the same snapshot produce different documents unless the caller seeds the
/// generator. Degenerate inputs (empty library) produce a zero-valued
/// estimate rather than an error.
pub fn estimate_spending(
    snapshot: &ProfileSnapshot,
    current_year: i32,
    rng: &mut impl Rng,
) -> SpendingEstimate {
    let total_games = snapshot.owned_games.game_count;
    let estimated_free_games = (total_games as f64 * FREE_GAME_RATIO) as u64;
    let estimated_paid_games = total_games - estimated_free_games;

    let priced = price_games(&snapshot.owned_games.games, rng);
    let total_spent: u64 = priced.iter().map(|game| game.price).sum();

    let average_per_game = match estimated_paid_games {
        0 => 0.0,
        paid => round2(total_spent as f64 / paid as f64),
    };

    // Stable descending sort, so the head is the first encountered maximum.
    let top_expensive: Vec<PricedGame> = priced
        .iter()
        .sorted_by(|a, b| b.price.cmp(&a.price))
        .take(TOP_EXPENSIVE_SIZE)
        .cloned()
        .collect();
    let most_expensive = top_expensive.first().cloned();

    SpendingEstimate {
        total_spent,
        average_per_game,
        estimated_free_games,
        estimated_paid_games,
        most_expensive,
        top_expensive,
        yearly: yearly_breakdown(
            total_spent,
            snapshot.player_summary.timecreated,
            current_year,
        ),
        categories: category_breakdown(total_games, total_spent),
    }
}

fn price_games(games: &[GameRecord], rng: &mut impl Rng) -> Vec<PricedGame> {
    games
        .iter()
        .map(|game| PricedGame {
            name: game.name.clone(),
            price: synthetic_price(game.playtime_forever, rng),
            playtime_minutes: game.playtime_forever,
        })
        .collect()
}

/// Draws a synthetic price: AAA tier [40,70), indie tier [5,30), budget tier
/// [1,10). Unplayed games have a 15% chance of being free.
fn synthetic_price(playtime_minutes: u64, rng: &mut impl Rng) -> u64 {
    if playtime_minutes == 0 && rng.gen_bool(UNPLAYED_FREE_CHANCE) {
        return 0;
    }

    let tier = rng.gen::<f64>();
    if tier < 0.3 {
        rng.gen_range(40..70)
    } else if tier < 0.8 {
        rng.gen_range(5..30)
    } else {
        rng.gen_range(1..10)
    }
}

/// Distributes the total over the trailing years of the account, at most
/// five, with weights 0.30, 0.25, 0.20, 0.15, 0.10. The series is an
/// approximation and does not sum back to the total.
fn yearly_breakdown(total_spent: u64, account_created: i64, current_year: i32) -> Vec<YearlySpend> {
    let created_year = match DateTime::from_timestamp(account_created, 0) {
        Some(created) => created.year(),
        None => current_year,
    };
    let account_years = (current_year - created_year + 1).min(MAX_BREAKDOWN_YEARS);

    (0..account_years.max(0))
        .map(|i| YearlySpend {
            year: current_year - i,
            amount: (total_spent as f64 * (0.3 - i as f64 * 0.05)).max(0.0) as u64,
        })
        .collect()
}

/// Fixed display buckets. These are estimates floored independently and are
/// not derived from the per-game tier assignment.
fn category_breakdown(total_games: u64, total_spent: u64) -> Vec<CategorySlice> {
    CATEGORY_SPLITS
        .iter()
        .map(|(label, count_share, spend_share)| CategorySlice {
            label: (*label).to_owned(),
            game_count: (total_games as f64 * count_share) as u64,
            amount: (total_spent as f64 * spend_share) as u64,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

const FREE_GAME_RATIO: f64 = 0.15;
const UNPLAYED_FREE_CHANCE: f64 = 0.15;
const TOP_EXPENSIVE_SIZE: usize = 5;
const MAX_BREAKDOWN_YEARS: i32 = 5;

// (label, share of game count, share of total spend)
const CATEGORY_SPLITS: &[(&str, f64, f64)] = &[
    ("AAA Titles", 0.3, 0.55),
    ("Indie Games", 0.5, 0.3),
    ("Budget Games", 0.2, 0.15),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{OwnedGames, PlayerSummary};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CURRENT_YEAR: i32 = 2026;

    // 2013-01-01T00:00:00Z
    const CREATED_2013: i64 = 1356998400;

    fn game(appid: u64, name: &str, playtime_forever: u64) -> GameRecord {
        GameRecord {
            appid,
            name: name.to_owned(),
            playtime_forever,
            ..Default::default()
        }
    }

    fn snapshot(games: Vec<GameRecord>, game_count: u64) -> ProfileSnapshot {
        ProfileSnapshot {
            owned_games: OwnedGames { game_count, games },
            player_summary: PlayerSummary {
                timecreated: CREATED_2013,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn free_paid_split() {
        let snapshot = snapshot(vec![], 100);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let estimate = estimate_spending(&snapshot, CURRENT_YEAR, &mut rng);
        assert_eq!(estimate.estimated_free_games, 15);
        assert_eq!(estimate.estimated_paid_games, 85);
    }

    #[test]
    fn seeded_rng_makes_the_estimate_reproducible() {
        let snapshot = snapshot(
            (1..=30).map(|i| game(i, "game", i % 4 * 100)).collect(),
            30,
        );

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let first = estimate_spending(&snapshot, CURRENT_YEAR, &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let second = estimate_spending(&snapshot, CURRENT_YEAR, &mut rng);

        assert_eq!(first, second);
        assert!(first.total_spent > 0);
    }

    #[test]
    fn empty_library_produces_zero_estimate() {
        let snapshot = snapshot(vec![], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let estimate = estimate_spending(&snapshot, CURRENT_YEAR, &mut rng);
        assert_eq!(estimate.total_spent, 0);
        assert_eq!(estimate.average_per_game, 0.0);
        assert_eq!(estimate.estimated_paid_games, 0);
        assert!(estimate.most_expensive.is_none());
        assert!(estimate.top_expensive.is_empty());
        assert!(estimate.categories.iter().all(|c| c.amount == 0));
    }

    #[test]
    fn prices_stay_within_tier_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        for _ in 0..1000 {
            let price = synthetic_price(500, &mut rng);
            assert!((1..70).contains(&price));
        }
        for _ in 0..1000 {
            // Unplayed games may additionally roll free.
            assert!(synthetic_price(0, &mut rng) < 70);
        }
    }

    #[test]
    fn top_expensive_is_capped_and_headed_by_the_maximum() {
        let snapshot = snapshot((1..=20).map(|i| game(i, "game", 60)).collect(), 20);
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let estimate = estimate_spending(&snapshot, CURRENT_YEAR, &mut rng);
        assert_eq!(estimate.top_expensive.len(), 5);
        assert_eq!(
            estimate.most_expensive.as_ref(),
            estimate.top_expensive.first()
        );

        let prices: Vec<u64> = estimate.top_expensive.iter().map(|g| g.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(prices, sorted);
    }

    #[test]
    fn yearly_breakdown_is_front_loaded_and_capped() {
        let yearly = yearly_breakdown(1000, CREATED_2013, CURRENT_YEAR);

        assert_eq!(yearly.len(), 5);
        assert_eq!(yearly[0].year, CURRENT_YEAR);
        assert_eq!(yearly[4].year, CURRENT_YEAR - 4);

        let amounts: Vec<u64> = yearly.iter().map(|y| y.amount).collect();
        assert_eq!(amounts, vec![300, 250, 200, 150, 100]);
    }

    #[test]
    fn yearly_breakdown_covers_young_accounts_only_partially() {
        // Account created this year.
        let created = chrono::NaiveDate::from_ymd_opt(CURRENT_YEAR, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();

        let yearly = yearly_breakdown(1000, created, CURRENT_YEAR);
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].year, CURRENT_YEAR);
        assert_eq!(yearly[0].amount, 300);
    }

    #[test]
    fn category_counts_do_not_exceed_the_library_size() {
        let snapshot = snapshot(vec![], 99);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let estimate = estimate_spending(&snapshot, CURRENT_YEAR, &mut rng);
        assert_eq!(estimate.categories.len(), 3);

        let count_sum: u64 = estimate.categories.iter().map(|c| c.game_count).sum();
        assert!(count_sum <= 99);

        let labels: Vec<&str> = estimate
            .categories
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["AAA Titles", "Indie Games", "Budget Games"]);
    }
}
