//! OAuth client credentials sourced from the environment.
//!
//! Values are read once at startup and handed to the clients that need them.
//! Missing variables never fail the load; [`PlatformConfig::is_valid`] reports
//! whether the Google Play Games integration can actually be used.

use std::env;

pub const CLIENT_ID_PLACEHOLDER: &str = "your-google-play-client-id.apps.googleusercontent.com";
pub const CLIENT_SECRET_PLACEHOLDER: &str = "your-google-play-client-secret";

const SPOTIFY_CLIENT_ID_PLACEHOLDER: &str = "your-spotify-client-id";
const SPOTIFY_CLIENT_SECRET_PLACEHOLDER: &str = "your-spotify-client-secret";

const PLAY_GAMES_SCOPE: &str = "https://www.googleapis.com/auth/games";
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:5173/auth/callback";
const DEFAULT_SPOTIFY_REDIRECT_URI: &str = "http://localhost:5173/spotify-callback.html";

/// Google Play Games OAuth parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
}

impl PlatformConfig {
    /// Read credentials from the process environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            client_id: lookup("VITE_GOOGLE_PLAY_CLIENT_ID").unwrap_or_default(),
            client_secret: lookup("VITE_GOOGLE_PLAY_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: lookup("VITE_GOOGLE_PLAY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            scope: PLAY_GAMES_SCOPE.to_string(),
            auth_url: GOOGLE_AUTH_URL.to_string(),
        }
    }

    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: PLAY_GAMES_SCOPE.to_string(),
            auth_url: GOOGLE_AUTH_URL.to_string(),
        }
    }

    /// True when both credentials are set to something other than the shipped placeholders.
    ///
    /// Logs a warning for each credential that fails the check.
    pub fn is_valid(&self) -> bool {
        let id_ok = credential_is_set(
            &self.client_id,
            CLIENT_ID_PLACEHOLDER,
            "Google Play Games client ID",
        );
        let secret_ok = credential_is_set(
            &self.client_secret,
            CLIENT_SECRET_PLACEHOLDER,
            "Google Play Games client secret",
        );
        id_ok && secret_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl SpotifyConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            client_id: lookup("VITE_SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: lookup("VITE_SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: lookup("VITE_SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_REDIRECT_URI.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        let id_ok = credential_is_set(
            &self.client_id,
            SPOTIFY_CLIENT_ID_PLACEHOLDER,
            "Spotify client ID",
        );
        let secret_ok = credential_is_set(
            &self.client_secret,
            SPOTIFY_CLIENT_SECRET_PLACEHOLDER,
            "Spotify client secret",
        );
        id_ok && secret_ok
    }
}

/// Backend settings. Only reported by `status`; nothing talks to Supabase yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl SupabaseConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("VITE_SUPABASE_URL").filter(|v| !v.is_empty()),
            anon_key: lookup("VITE_SUPABASE_ANON_KEY").filter(|v| !v.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

fn credential_is_set(value: &str, placeholder: &str, what: &str) -> bool {
    if value.is_empty() {
        log::warn!("{} is not set", what);
        return false;
    }
    if value == placeholder {
        log::warn!("{} is still the placeholder value", what);
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Records log lines per test thread so parallel tests don't see each other's output.
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT_LOGGER: Once = Once::new();

    fn warnings_from(f: impl FnOnce()) -> Vec<String> {
        INIT_LOGGER.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Trace);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
        f();
        CAPTURED.with(|c| {
            c.borrow_mut()
                .drain(..)
                .filter(|(level, _)| *level == log::Level::Warn)
                .map(|(_, message)| message)
                .collect()
        })
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_credentials_are_invalid() {
        assert!(!PlatformConfig::new("", "").is_valid());
        assert!(!PlatformConfig::new("", "real-secret").is_valid());
        assert!(!PlatformConfig::new("real-id", "").is_valid());
    }

    #[test]
    fn test_placeholders_are_invalid() {
        assert!(!PlatformConfig::new(CLIENT_ID_PLACEHOLDER, "real-secret").is_valid());
        assert!(!PlatformConfig::new("real-id", CLIENT_SECRET_PLACEHOLDER).is_valid());
        assert!(!PlatformConfig::new(CLIENT_ID_PLACEHOLDER, CLIENT_SECRET_PLACEHOLDER).is_valid());
    }

    #[test]
    fn test_real_credentials_are_valid() {
        assert!(PlatformConfig::new("123.apps.googleusercontent.com", "s3cret").is_valid());
        assert!(PlatformConfig::new("a", "b").is_valid());
    }

    #[test]
    fn test_invalid_credentials_warn() {
        let warnings = warnings_from(|| {
            assert!(!PlatformConfig::new("", "").is_valid());
        });
        assert_eq!(
            warnings,
            vec![
                "Google Play Games client ID is not set".to_string(),
                "Google Play Games client secret is not set".to_string(),
            ]
        );

        let warnings = warnings_from(|| {
            assert!(!PlatformConfig::new(CLIENT_ID_PLACEHOLDER, "real-secret").is_valid());
        });
        assert_eq!(
            warnings,
            vec!["Google Play Games client ID is still the placeholder value".to_string()]
        );
    }

    #[test]
    fn test_valid_credentials_do_not_warn() {
        let warnings = warnings_from(|| {
            assert!(PlatformConfig::new("123.apps.googleusercontent.com", "s3cret").is_valid());
        });
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = PlatformConfig::from_vars(|_| None);
        assert!(config.client_id.is_empty());
        assert_eq!(config.redirect_uri, DEFAULT_REDIRECT_URI);
        assert_eq!(config.scope, PLAY_GAMES_SCOPE);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_from_vars_reads_values() {
        let env = vars(&[
            ("VITE_GOOGLE_PLAY_CLIENT_ID", "id"),
            ("VITE_GOOGLE_PLAY_CLIENT_SECRET", "secret"),
            ("VITE_GOOGLE_PLAY_REDIRECT_URI", "http://localhost:3000/cb"),
        ]);
        let config = PlatformConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(config.client_id, "id");
        assert_eq!(config.redirect_uri, "http://localhost:3000/cb");
        assert!(config.is_valid());
    }

    #[test]
    fn test_spotify_and_supabase() {
        let env = vars(&[
            ("VITE_SPOTIFY_CLIENT_ID", SPOTIFY_CLIENT_ID_PLACEHOLDER),
            ("VITE_SPOTIFY_CLIENT_SECRET", "secret"),
            ("VITE_SUPABASE_URL", "https://project.supabase.co"),
            ("VITE_SUPABASE_ANON_KEY", ""),
        ]);
        let spotify = SpotifyConfig::from_vars(|k| env.get(k).cloned());
        assert!(!spotify.is_valid());
        assert_eq!(spotify.redirect_uri, DEFAULT_SPOTIFY_REDIRECT_URI);

        let supabase = SupabaseConfig::from_vars(|k| env.get(k).cloned());
        assert!(!supabase.is_configured());
    }
}
