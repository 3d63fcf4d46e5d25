use itertools::Itertools;

use crate::documents::{GameRecord, RankedGame};

/// Returns the top `n` games by lifetime playtime.
///
/// Games that were never launched are dropped. The sort is stable so equal
/// playtimes keep their input order.
pub fn select_top(games: &[GameRecord], n: usize) -> Vec<GameRecord> {
    games
        .iter()
        .filter(|game| game.playtime_forever > 0)
        .sorted_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever))
        .take(n)
        .cloned()
        .collect()
}

/// Builds 1-based leaderboard rows for the top `n` games.
pub fn ranked(games: &[GameRecord], n: usize) -> Vec<RankedGame> {
    select_top(games, n)
        .into_iter()
        .enumerate()
        .map(|(i, game)| RankedGame {
            rank: i as u64 + 1,
            playtime_minutes: game.playtime_forever,
            playtime_hours: playtime_hours(game.playtime_forever),
            playtime_formatted: format_playtime(game.playtime_forever),
            appid: game.appid,
            name: game.name,
            img_icon_url: game.img_icon_url,
        })
        .collect()
}

pub fn total_playtime_minutes(games: &[GameRecord]) -> u64 {
    games.iter().map(|game| game.playtime_forever).sum()
}

/// Playtime in hours, rounded to two decimals.
pub fn playtime_hours(minutes: u64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// Human readable playtime, e.g. "45 minutes", "3.5 hours",
/// "2.1 days (50 hours)".
pub fn format_playtime(minutes: u64) -> String {
    let hours = minutes as f64 / 60.0;
    if hours < 1.0 {
        format!("{minutes} minutes")
    } else if hours < 24.0 {
        format!("{hours:.1} hours")
    } else {
        let days = hours / 24.0;
        format!("{days:.1} days ({hours:.0} hours)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(appid: u64, name: &str, playtime_forever: u64) -> GameRecord {
        GameRecord {
            appid,
            name: name.to_owned(),
            playtime_forever,
            ..Default::default()
        }
    }

    #[test]
    fn select_top_drops_unplayed_games() {
        let games = vec![
            game(1, "Warframe", 96973),
            game(2, "Stardew Valley", 0),
        ];

        let top = select_top(&games, 4);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Warframe");
    }

    #[test]
    fn select_top_sorts_descending() {
        let games = vec![
            game(1, "Trove", 120),
            game(2, "Warframe", 96973),
            game(3, "Hollow Knight", 4100),
        ];

        let top = select_top(&games, 10);
        let playtimes: Vec<u64> = top.iter().map(|g| g.playtime_forever).collect();
        assert_eq!(playtimes, vec![96973, 4100, 120]);
    }

    #[test]
    fn select_top_truncates_to_n() {
        let games: Vec<GameRecord> = (1..=20).map(|i| game(i, "game", i * 10)).collect();

        assert_eq!(select_top(&games, 4).len(), 4);
        assert_eq!(select_top(&games, 10).len(), 10);
        assert!(select_top(&games, 0).is_empty());
    }

    #[test]
    fn select_top_is_stable_for_ties() {
        let games = vec![
            game(1, "first", 300),
            game(2, "second", 300),
            game(3, "third", 300),
        ];

        let top = select_top(&games, 3);
        let names: Vec<&str> = top.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn select_top_on_empty_input() {
        assert!(select_top(&[], 4).is_empty());
    }

    #[test]
    fn ranked_assigns_one_based_ranks() {
        let games = vec![
            game(1, "Trove", 120),
            game(2, "Warframe", 96973),
            game(3, "Stardew Valley", 0),
        ];

        let rows = ranked(&games, 50);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "Warframe");
        assert_eq!(rows[0].playtime_minutes, 96973);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].name, "Trove");
        assert_eq!(rows[1].playtime_hours, 2.0);
    }

    #[test]
    fn format_playtime_buckets() {
        assert_eq!(format_playtime(45), "45 minutes");
        assert_eq!(format_playtime(90), "1.5 hours");
        assert_eq!(format_playtime(2880), "2.0 days (48 hours)");
    }

    #[test]
    fn playtime_hours_rounds_to_two_decimals() {
        assert_eq!(playtime_hours(96973), 1616.22);
        assert_eq!(playtime_hours(0), 0.0);
    }

    #[test]
    fn total_playtime_sums_all_games() {
        let games = vec![
            game(1, "a", 100),
            game(2, "b", 0),
            game(3, "c", 50),
        ];

        assert_eq!(total_playtime_minutes(&games), 150);
    }
}
