use chrono::Utc;
use clap::Parser;
use tracing::{error, info, instrument, warn};

use steamdash_backend::{
    api::SteamApi,
    documents::{ProfileAggregates, ProfileSnapshot, TopGamesLeaderboard},
    stats::top_games,
    util::{datasets::DatasetStore, keys::Keys},
    Status, Tracing,
};

/// Steamdash batch job that fetches player profiles from the Steam Web API
/// and writes the JSON datasets consumed by the dashboard frontend.
#[derive(Parser)]
struct Opts {
    /// JSON file that contains application keys for the steamdash service.
    #[clap(long, default_value = "keys.json")]
    key_store: String,

    /// Output directory for the generated datasets.
    #[clap(long, default_value = "datasets")]
    data_dir: String,

    /// 64-bit Steam ids, community profile urls or vanity names to generate
    /// datasets for. Falls back to the user id from the key store.
    players: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("batch/generate_datasets")?;

    let opts: Opts = Opts::parse();
    let keys = Keys::from_file(&opts.key_store)?;

    let players = match opts.players.is_empty() {
        false => opts.players.clone(),
        true => match keys.steam.user_id.is_empty() {
            false => vec![keys.steam.user_id.clone()],
            true => {
                return Err(Box::from(
                    "No player id was given and the key store has no default user_id.",
                ))
            }
        },
    };

    let datasets = DatasetStore::new(&opts.data_dir);
    info! {
        "generating datasets for {} player(s) into '{}'", players.len(), opts.data_dir
    }

    for player in &players {
        // Anything that does not carry an id64 is treated as a vanity name.
        let steam_id = match SteamApi::parse_steam_id(player) {
            Some(id) => id.to_owned(),
            None => {
                let steam = SteamApi::new(&keys.steam.client_key, player);
                match steam.resolve_vanity_url(player).await {
                    Ok(id) => id,
                    Err(status) => {
                        error! {"Cannot resolve '{player}' to a steam id: {status}"}
                        continue;
                    }
                }
            }
        };

        // Failures are per player; the batch moves on to the next one.
        if let Err(status) = generate_profile(&keys, &steam_id, &datasets).await {
            error! {"Failed to generate datasets for '{steam_id}': {status}"}
        }
    }

    Ok(())
}

#[instrument(level = "info", skip(keys, datasets))]
async fn generate_profile(
    keys: &Keys,
    steam_id: &str,
    datasets: &DatasetStore,
) -> Result<(), Status> {
    let steam = SteamApi::new(&keys.steam.client_key, steam_id);

    let (player_summary, owned_games, recently_played, steam_level) = futures::join!(
        steam.get_player_summary(),
        steam.get_owned_games(),
        steam.get_recently_played_games(),
        steam.get_steam_level(),
    );

    let player_summary = player_summary?;
    let owned_games = owned_games?;

    // Recently played and level are nice-to-haves; a profile without them is
    // still a valid dataset.
    let recently_played = recently_played.unwrap_or_else(|status| {
        warn! {"No recently played games for '{steam_id}': {status}"}
        Default::default()
    });
    let steam_level = steam_level.unwrap_or_else(|status| {
        warn! {"No steam level for '{steam_id}': {status}"}
        0
    });

    let total_minutes = top_games::total_playtime_minutes(&owned_games.games);
    let snapshot = ProfileSnapshot {
        steam_id: steam_id.to_owned(),
        generated_at: Utc::now().timestamp(),
        stats: ProfileAggregates {
            total_games: owned_games.game_count,
            total_playtime_hours: top_games::playtime_hours(total_minutes),
            games_played_2weeks: recently_played.game_count,
        },
        player_summary,
        owned_games,
        recently_played,
        steam_level,
    };

    let path = datasets.save_json(&snapshot, &format!("profile_{steam_id}.json"))?;
    info! {"Saved profile dataset at '{}'", path.display()}

    if let Some(most_played) = top_games::select_top(&snapshot.owned_games.games, 1).first() {
        info! {
            "Most played: {most_played} at {}",
            top_games::format_playtime(most_played.playtime_forever)
        }
    }

    let leaderboard = TopGamesLeaderboard {
        steam_id: steam_id.to_owned(),
        generated_at: snapshot.generated_at,
        total_games: snapshot.owned_games.games.len() as u64,
        top_games: top_games::ranked(&snapshot.owned_games.games, LEADERBOARD_SIZE),
    };

    let path = datasets.save_json(&leaderboard, &format!("top_games_{steam_id}.json"))?;
    info! {"Saved leaderboard dataset at '{}'", path.display()}

    Ok(())
}

const LEADERBOARD_SIZE: usize = 50;
