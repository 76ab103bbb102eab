use clap::Parser;
use friender::{
    api::{PlatformData, PlatformEndpoint, PlayGamesClient},
    auth::{self, TokenStore},
    cli::{Cli, Commands},
    config::{Config, PlatformConfig, SpotifyConfig, SupabaseConfig},
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging before loading config so its warnings are not lost.
    // RUST_LOG, when set, takes precedence over --verbose and the config file.
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !rust_log_set {
        log::set_max_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });
    }

    // Load configuration
    let config = Config::load()?;
    if !rust_log_set && !cli.verbose {
        log::set_max_level(config.level_filter());
    }
    log::debug!("Configuration loaded");

    let platform = PlatformConfig::from_env();
    let mut tokens = TokenStore::open()?;

    match cli.command {
        None | Some(Commands::Gui) => {
            friender::gui::run(config, platform, tokens)?;
        }

        Some(Commands::CheckConfig) => {
            let google_ok = platform.is_valid();
            let spotify_ok = SpotifyConfig::from_env().is_valid();

            println!("Google Play Games: {}", if google_ok { "configured" } else { "NOT configured" });
            println!("Spotify:           {}", if spotify_ok { "configured" } else { "NOT configured" });

            if !google_ok {
                println!();
                println!("Set VITE_GOOGLE_PLAY_CLIENT_ID and VITE_GOOGLE_PLAY_CLIENT_SECRET");
                println!("in the environment or a .env file. Screens will show sample data until then.");
                std::process::exit(1);
            }
        }

        Some(Commands::Login { no_browser }) => {
            if !platform.is_valid() {
                eprintln!("Error: Google Play Games credentials are not configured. Run 'friender check-config'.");
                std::process::exit(1);
            }

            let url = auth::authorization_url(&platform, &auth::new_state())?;

            println!("Google Play Games sign-in");
            println!("=========================");
            println!();
            println!("  1. Open this URL: {}", url);
            println!("  2. Approve access, then copy the URL you are redirected to");
            println!("  3. Run: friender token '<redirect url>'");

            if !no_browser {
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("Could not open browser: {}", e);
                }
            }
        }

        Some(Commands::Token { redirect_url }) => {
            match auth::parse_redirect_fragment(&redirect_url, None) {
                Ok(token) => {
                    tokens.set_token(token)?;
                    println!("✓ Signed in to Google Play Games");
                }
                Err(e) => {
                    eprintln!("Failed to read token: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Logout) => {
            tokens.logout()?;
            println!("Successfully logged out");
        }

        Some(Commands::Fetch { endpoint, token }) => {
            let token = resolve_token(token, &tokens);
            let client = PlayGamesClient::new(&config)?;
            let endpoint = PlatformEndpoint::from_name(&endpoint);

            match client.fetch_platform_data(&endpoint, &token).await {
                Ok(data) => {
                    if let PlatformData::Mock { cause, .. } = &data {
                        eprintln!("Note: request failed ({}); showing sample data", cause);
                    }
                    println!("{}", serde_json::to_string_pretty(data.value())?);
                }
                Err(e) => {
                    eprintln!("Failed to fetch {}: {}", endpoint, e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Profile { token }) => {
            let token = resolve_token(token, &tokens);
            let client = PlayGamesClient::new(&config)?;

            match client.fetch_user_profile(&token).await {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => {
                    eprintln!("Profile unavailable");
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Status) => {
            let supabase = SupabaseConfig::from_env();

            println!("Friender Status");
            println!("===============");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!(
                "Signed in: {}",
                if tokens.is_authenticated() { "Yes" } else { "No" }
            );
            println!(
                "Google Play Games credentials: {}",
                if platform.is_valid() { "valid" } else { "missing" }
            );
            println!(
                "Supabase: {}",
                if supabase.is_configured() { "configured" } else { "not configured" }
            );
            println!();
            println!("Configuration:");
            println!("  Log Level: {}", config.log_level);
            println!("  Request Timeout: {}s", config.request_timeout_secs);
            println!("  Play Games API: {}", config.play_games_base_url);
            println!("  People API: {}", config.people_base_url);
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }

            if let Ok(data_dir) = Config::data_dir() {
                println!("Data Directory: {:?}", data_dir);
            }
        }
    }

    Ok(())
}

/// Explicit `--token` wins; otherwise the stored one.
fn resolve_token(explicit: Option<String>, tokens: &TokenStore) -> String {
    if let Some(token) = explicit {
        return token;
    }

    match tokens.get_token() {
        Ok(token) => token.access_token.clone(),
        Err(_) => {
            eprintln!("Error: Not authenticated. Run 'friender login' or pass --token.");
            std::process::exit(1);
        }
    }
}
