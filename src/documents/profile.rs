use serde::{Deserialize, Serialize};
use std::fmt;

/// Document for 'profile_{steam_id}.json' produced by the dataset generator
/// and consumed by the dashboard frontend.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct ProfileSnapshot {
    pub steam_id: String,

    #[serde(default)]
    pub generated_at: i64,

    #[serde(default)]
    pub player_summary: PlayerSummary,

    #[serde(default)]
    pub owned_games: OwnedGames,

    #[serde(default)]
    pub recently_played: OwnedGames,

    #[serde(default)]
    pub steam_level: u64,

    #[serde(default)]
    pub stats: ProfileAggregates,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct PlayerSummary {
    #[serde(default)]
    pub steamid: String,

    #[serde(default)]
    pub personaname: String,

    /// Unix timestamp (seconds) of account creation.
    #[serde(default)]
    pub timecreated: i64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profileurl: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatarfull: Option<String>,

    #[serde(default)]
    pub personastate: u64,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct OwnedGames {
    /// Authoritative count of owned games. May exceed the length of `games`
    /// if the source list was truncated upstream.
    #[serde(default)]
    #[serde(alias = "total_count")]
    pub game_count: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<GameRecord>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct GameRecord {
    pub appid: u64,
    pub name: String,

    /// Lifetime playtime in minutes, as reported by Steam.
    #[serde(default)]
    pub playtime_forever: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct ProfileAggregates {
    #[serde(default)]
    pub total_games: u64,

    #[serde(default)]
    pub total_playtime_hours: f64,

    #[serde(default)]
    pub games_played_2weeks: u64,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameRecord({}): '{}'", &self.appid, &self.name)
    }
}
