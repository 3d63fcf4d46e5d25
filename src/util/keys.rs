use serde::{Deserialize, Serialize};

use crate::Status;

/// Application keys for the steamdash service, loaded from a JSON file.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Keys {
    pub steam: SteamKeys,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct SteamKeys {
    /// Web API key from https://steamcommunity.com/dev/apikey.
    pub client_key: String,

    /// Default 64-bit Steam id used when no player id is given.
    #[serde(default)]
    pub user_id: String,
}

impl Keys {
    pub fn from_file(path: &str) -> Result<Keys, Status> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
