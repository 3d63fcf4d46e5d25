use tracing::{info, instrument};

use crate::{
    documents::{OwnedGames, PlayerSummary},
    Status,
};

pub struct SteamApi {
    client_key: String,
    user_id: String,
}

impl SteamApi {
    pub fn new(client_key: &str, user_id: &str) -> SteamApi {
        SteamApi {
            client_key: String::from(client_key),
            user_id: String::from(user_id),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn get_owned_games(&self) -> Result<OwnedGames, Status> {
        let uri = format!(
            "{STEAM_HOST}{GETOWNEDGAMES_SERVICE}?key={}&steamid={}&include_appinfo=1&include_played_free_games=1&format=json",
            self.client_key, self.user_id
        );

        let resp = self.get::<OwnedGames>(&uri).await?;
        info! {
            "steam games: {}", resp.game_count
        }

        Ok(resp)
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn get_recently_played_games(&self) -> Result<OwnedGames, Status> {
        let uri = format!(
            "{STEAM_HOST}{GETRECENTLYPLAYED_SERVICE}?key={}&steamid={}&format=json",
            self.client_key, self.user_id
        );

        self.get::<OwnedGames>(&uri).await
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn get_player_summary(&self) -> Result<PlayerSummary, Status> {
        let uri = format!(
            "{STEAM_HOST}{GETPLAYERSUMMARIES_SERVICE}?key={}&steamids={}&format=json",
            self.client_key, self.user_id
        );

        let resp = self.get::<PlayerSummariesResponse>(&uri).await?;
        match resp.players.into_iter().next() {
            Some(player) => Ok(player),
            None => Err(Status::not_found(format!(
                "No player summary for steam id '{}'",
                self.user_id
            ))),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn get_steam_level(&self) -> Result<u64, Status> {
        let uri = format!(
            "{STEAM_HOST}{GETSTEAMLEVEL_SERVICE}?key={}&steamid={}&format=json",
            self.client_key, self.user_id
        );

        let resp = self.get::<SteamLevelResponse>(&uri).await?;
        Ok(resp.player_level)
    }

    /// Resolves a community vanity name to a 64-bit Steam id.
    #[instrument(level = "trace", skip(self))]
    pub async fn resolve_vanity_url(&self, vanity: &str) -> Result<String, Status> {
        let uri = format!(
            "{STEAM_HOST}{RESOLVEVANITYURL_SERVICE}?key={}&vanityurl={vanity}&format=json",
            self.client_key
        );

        let resp = self.get::<VanityUrlResponse>(&uri).await?;
        match resp.steamid {
            Some(steamid) if resp.success == 1 => Ok(steamid),
            _ => Err(Status::not_found(format!(
                "Vanity url '{vanity}' did not resolve to a steam id"
            ))),
        }
    }

    /// Extracts a 64-bit Steam id from raw input or a community profile url,
    /// e.g. "https://steamcommunity.com/profiles/76561198095524866".
    pub fn parse_steam_id(input: &str) -> Option<&str> {
        lazy_static! {
            static ref STEAM_ID: Regex = Regex::new(r"(?P<id>7656119\d{10})").unwrap();
        }
        STEAM_ID
            .captures(input)
            .and_then(|cap| cap.name("id").map(|id| id.as_str()))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, uri: &str) -> Result<T, Status> {
        let resp = reqwest::get(uri).await?;
        let text = resp.text().await?;
        let resp = serde_json::from_str::<SteamResponse<T>>(&text).map_err(|e| {
            Status::internal(format!(
                "({}) Parse error: {}\n Steam response: {}",
                self.user_id, e, &text
            ))
        })?;

        Ok(resp.response)
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SteamResponse<T> {
    response: T,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerSummariesResponse {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct SteamLevelResponse {
    #[serde(default)]
    player_level: u64,
}

#[derive(Debug, Default, Deserialize)]
struct VanityUrlResponse {
    #[serde(default)]
    success: u64,

    #[serde(default)]
    steamid: Option<String>,
}

const STEAM_HOST: &str = "http://api.steampowered.com";
const GETOWNEDGAMES_SERVICE: &str = "/IPlayerService/GetOwnedGames/v0001/";
const GETRECENTLYPLAYED_SERVICE: &str = "/IPlayerService/GetRecentlyPlayedGames/v0001/";
const GETSTEAMLEVEL_SERVICE: &str = "/IPlayerService/GetSteamLevel/v1/";
const GETPLAYERSUMMARIES_SERVICE: &str = "/ISteamUser/GetPlayerSummaries/v0002/";
const RESOLVEVANITYURL_SERVICE: &str = "/ISteamUser/ResolveVanityURL/v0001/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_steam_id_accepts_bare_ids() {
        assert_eq!(
            SteamApi::parse_steam_id("76561198095524866"),
            Some("76561198095524866")
        );
    }

    #[test]
    fn parse_steam_id_accepts_profile_urls() {
        assert_eq!(
            SteamApi::parse_steam_id("https://steamcommunity.com/profiles/76561197960287930"),
            Some("76561197960287930")
        );
    }

    #[test]
    fn parse_steam_id_rejects_other_input() {
        assert_eq!(SteamApi::parse_steam_id("gabelogannewell"), None);
        assert_eq!(SteamApi::parse_steam_id("12345"), None);
    }
}
