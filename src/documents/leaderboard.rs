use serde::{Deserialize, Serialize};

/// Document for 'top_games_{steam_id}.json' that ranks the player's library
/// by lifetime playtime.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct TopGamesLeaderboard {
    pub steam_id: String,

    #[serde(default)]
    pub generated_at: i64,

    #[serde(default)]
    pub total_games: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_games: Vec<RankedGame>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct RankedGame {
    /// 1-based rank within the leaderboard.
    pub rank: u64,

    pub appid: u64,
    pub name: String,

    pub playtime_minutes: u64,
    pub playtime_hours: f64,
    pub playtime_formatted: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
}
