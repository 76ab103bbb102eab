use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, PlatformConfig, SpotifyConfig};
use crate::{Error, Result};

const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const SPOTIFY_SCOPE: &str = "user-read-recently-played user-read-currently-playing";

/// Build the Google OAuth implicit-grant URL the user opens to sign in.
pub fn authorization_url(config: &PlatformConfig, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("response_type", "token"),
            ("scope", config.scope.as_str()),
            ("state", state),
            ("include_granted_scopes", "true"),
        ],
    )
    .map_err(|e| Error::Config(format!("Invalid auth URL '{}': {}", config.auth_url, e)))?;

    Ok(url.into())
}

pub fn spotify_authorization_url(config: &SpotifyConfig, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        SPOTIFY_AUTH_URL,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("response_type", "token"),
            ("scope", SPOTIFY_SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Config(e.to_string()))?;

    Ok(url.into())
}

/// Opaque value for the OAuth `state` parameter.
pub fn new_state() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{:x}{:x}", nanos, std::process::id())
}

/// Extract the access token from the URL the provider redirected to.
///
/// The implicit grant puts the token in the fragment; a query string is
/// accepted too. If `expected_state` is given it must match.
pub fn parse_redirect_fragment(redirect: &str, expected_state: Option<&str>) -> Result<AccessToken> {
    let mut url = Url::parse(redirect.trim())
        .map_err(|e| Error::Auth(format!("Invalid redirect URL: {}", e)))?;

    if let Some(fragment) = url.fragment().map(str::to_string) {
        url.set_query(Some(&fragment));
    }

    let mut access_token = None;
    let mut expires_in = None;
    let mut state = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "state" => state = Some(value.into_owned()),
            "error" => {
                return Err(Error::Auth(format!("Authorization denied: {}", value)));
            }
            _ => {}
        }
    }

    if let Some(expected) = expected_state {
        if state.as_deref() != Some(expected) {
            return Err(Error::Auth("OAuth state mismatch".to_string()));
        }
    }

    let access_token = access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Auth("Redirect URL has no access_token".to_string()))?;

    Ok(AccessToken {
        access_token,
        expires_at: expires_in.map(|secs| Utc::now() + chrono::Duration::seconds(secs)),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    /// `None` when the provider did not say.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, serde_json::to_string(self)?)?;

        // Set restrictive file permissions (0600) on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        match serde_json::from_str(&contents) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                log::error!("Failed to parse stored token: {}", e);
                Err(Error::Auth("Failed to load access token".to_string()))
            }
        }
    }

    fn default_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("token.json"))
    }
}

/// The signed-in user's token, backed by a file in the data directory.
#[derive(Clone)]
pub struct TokenStore {
    token: Option<AccessToken>,
    path: PathBuf,
}

impl TokenStore {
    pub fn open() -> Result<Self> {
        Self::open_at(AccessToken::default_path()?)
    }

    pub fn open_at(path: PathBuf) -> Result<Self> {
        let token = AccessToken::load_from(&path)?;
        Ok(Self { token, path })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_expired())
    }

    pub fn get_token(&self) -> Result<&AccessToken> {
        match &self.token {
            Some(token) if !token.is_expired() => Ok(token),
            _ => Err(Error::NotAuthenticated),
        }
    }

    pub fn set_token(&mut self, token: AccessToken) -> Result<()> {
        token.save_to(&self.path)?;
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_authorization_url_params() {
        let config = PlatformConfig::new("client.apps.googleusercontent.com", "secret");
        let url = Url::parse(&authorization_url(&config, "xyz").unwrap()).unwrap();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("client_id".into(), "client.apps.googleusercontent.com".into())));
        assert!(pairs.contains(&("response_type".into(), "token".into())));
        assert!(pairs.contains(&("scope".into(), "https://www.googleapis.com/auth/games".into())));
        assert!(pairs.contains(&("state".into(), "xyz".into())));
        // The client secret never goes into the browser URL.
        assert!(!pairs.iter().any(|(_, v)| v == "secret"));
    }

    #[test]
    fn test_spotify_authorization_url() {
        let config = SpotifyConfig::from_vars(|k| match k {
            "VITE_SPOTIFY_CLIENT_ID" => Some("spotify-id".to_string()),
            _ => None,
        });
        let url = spotify_authorization_url(&config, "s").unwrap();
        assert!(url.starts_with(SPOTIFY_AUTH_URL));
        assert!(url.contains("client_id=spotify-id"));
    }

    #[test]
    fn test_parse_redirect_fragment() {
        let token = parse_redirect_fragment(
            "http://localhost:5173/auth/callback#access_token=ya29.abc&token_type=Bearer&expires_in=3599&state=xyz",
            Some("xyz"),
        )
        .unwrap();
        assert_eq!(token.access_token, "ya29.abc");
        assert!(token.expires_at.is_some());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_parse_redirect_rejects_bad_input() {
        let denied = parse_redirect_fragment("http://localhost/cb#error=access_denied", None);
        assert!(matches!(denied, Err(Error::Auth(_))));

        let mismatch = parse_redirect_fragment("http://localhost/cb#access_token=t&state=a", Some("b"));
        assert!(mismatch.is_err());

        let missing = parse_redirect_fragment("http://localhost/cb", None);
        assert!(missing.is_err());
    }

    #[test]
    fn test_token_expiry() {
        let expired = AccessToken {
            access_token: "test".to_string(),
            expires_at: Some(Utc::now() - chrono::Duration::hours(1)),
        };
        assert!(expired.is_expired());
        assert!(!AccessToken::new("test").is_expired());
    }

    #[test]
    fn test_token_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("token.json");

        let mut store = TokenStore::open_at(path.clone()).unwrap();
        assert!(!store.is_authenticated());
        assert!(matches!(store.get_token(), Err(Error::NotAuthenticated)));

        store.set_token(AccessToken::new("ya29.token")).unwrap();
        let reopened = TokenStore::open_at(path.clone()).unwrap();
        assert_eq!(reopened.get_token().unwrap().access_token, "ya29.token");

        store.logout().unwrap();
        assert!(!path.exists());
        assert!(!store.is_authenticated());
    }
}
