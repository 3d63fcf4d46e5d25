use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TopGamesOp {
    pub steam_id: String,

    /// Number of entries to return. The dashboard scroller asks for 4, the
    /// analytics chart for 10.
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    4
}

impl std::fmt::Display for TopGamesOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (top {})", self.steam_id, self.count)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ThemeOp {
    pub title: String,
}

impl std::fmt::Display for ThemeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SpendingOp {
    pub steam_id: String,
}

impl std::fmt::Display for SpendingOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steam_id)
    }
}
