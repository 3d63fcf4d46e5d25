pub mod spending;
pub mod themes;
pub mod top_games;
