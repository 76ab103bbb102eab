//! Google Play Games and Google People API client.
//!
//! Every request is a single bearer-authenticated GET. Failures on the three
//! known Play Games endpoints are absorbed into sample data, reported as
//! [`PlatformData::Mock`] so callers can tell it apart from a real response.
//! The profile lookup never falls back; it yields `None` instead.

mod profile;
mod records;

pub use profile::ProfileData;
pub use records::{AchievementRecord, FriendRecord, GamePlayRecord};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::config::Config;
use crate::{Error, Result};

const PROFILE_PATH: &str = "/v1/people/me?personFields=names,photos,emailAddresses";

/// Which Play Games resource to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEndpoint {
    PlayedGames,
    Achievements,
    Friends,
    /// Absolute URL with no sample fallback.
    Custom(String),
}

impl PlatformEndpoint {
    /// Map a CLI-style name to a known endpoint; anything else is taken as a URL.
    pub fn from_name(name: &str) -> Self {
        match name {
            "played-games" | "playedGames" => Self::PlayedGames,
            "achievements" => Self::Achievements,
            "friends" => Self::Friends,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Self::PlayedGames => format!("{}/players/me/playedGames", base),
            Self::Achievements => format!("{}/players/me/achievements", base),
            Self::Friends => format!("{}/players/me/players/friends", base),
            Self::Custom(url) => url.clone(),
        }
    }

    fn sample_payload(&self) -> Option<Value> {
        let payload = match self {
            Self::PlayedGames => serde_json::to_value(records::sample_played_games()),
            Self::Achievements => serde_json::to_value(records::sample_achievements()),
            Self::Friends => serde_json::to_value(records::sample_friends()),
            Self::Custom(_) => return None,
        };
        payload.ok()
    }
}

impl fmt::Display for PlatformEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayedGames => write!(f, "played games"),
            Self::Achievements => write!(f, "achievements"),
            Self::Friends => write!(f, "friends"),
            Self::Custom(url) => write!(f, "{}", url),
        }
    }
}

/// Outcome of a successful [`PlayGamesClient::fetch_platform_data`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformData {
    /// Body returned by the remote API.
    Real(Value),
    /// Sample payload substituted after `cause` made the real request fail.
    Mock { payload: Value, cause: String },
}

impl PlatformData {
    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock { .. })
    }

    pub fn value(&self) -> &Value {
        match self {
            Self::Real(value) => value,
            Self::Mock { payload, .. } => payload,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Real(value) => value,
            Self::Mock { payload, .. } => payload,
        }
    }

    /// Deserialize the payload as a list of records.
    ///
    /// Accepts a bare array or an object wrapping the array in `items`.
    /// Google omits `items` from empty list responses, so such an object is an empty list.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let value = self.value();
        let list = match value {
            Value::Object(fields) => match fields.get("items") {
                Some(items) => items,
                None => return Ok(Vec::new()),
            },
            other => other,
        };
        Ok(serde_json::from_value(list.clone())?)
    }
}

pub struct PlayGamesClient {
    client: Client,
    play_games_base_url: String,
    people_base_url: String,
}

impl PlayGamesClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("friender/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            play_games_base_url: config.play_games_base_url.clone(),
            people_base_url: config.people_base_url.clone(),
        })
    }

    /// Fetch a Play Games resource, substituting sample data when a known endpoint fails.
    ///
    /// Only [`PlatformEndpoint::Custom`] failures are returned as errors, wrapped
    /// in [`Error::DataFetch`].
    pub async fn fetch_platform_data(
        &self,
        endpoint: &PlatformEndpoint,
        access_token: &str,
    ) -> Result<PlatformData> {
        let url = endpoint.url(&self.play_games_base_url);
        log::debug!("Fetching {} from {}", endpoint, url);

        let err = match self.get_json(&url, access_token).await {
            Ok(value) => return Ok(PlatformData::Real(value)),
            Err(e) => e,
        };

        match endpoint.sample_payload() {
            Some(payload) => {
                log::warn!(
                    "Failed to fetch {}: {}. Using sample data instead",
                    endpoint,
                    err
                );
                Ok(PlatformData::Mock {
                    payload,
                    cause: err.to_string(),
                })
            }
            None => {
                log::error!("Failed to fetch {}: {}", endpoint, err);
                Err(Error::DataFetch(err.to_string()))
            }
        }
    }

    /// Fetch the signed-in user's name, photo and email. `None` on any failure.
    pub async fn fetch_user_profile(&self, access_token: &str) -> Option<Value> {
        let url = format!("{}{}", self.people_base_url.trim_end_matches('/'), PROFILE_PATH);

        match self.get_json(&url, access_token).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::error!("Failed to fetch user profile: {}", e);
                None
            }
        }
    }

    async fn get_json(&self, url: &str, access_token: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}
