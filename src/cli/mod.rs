use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "friender")]
#[command(author, version, about = "See what your friends are playing - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that OAuth credentials are configured
    CheckConfig,

    /// Start Google sign-in and print the authorization URL
    Login {
        /// Print the URL without opening a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Store the access token from the URL Google redirected to
    Token {
        /// Full redirect URL including the #access_token fragment
        redirect_url: String,
    },

    /// Forget the stored access token
    Logout,

    /// Fetch Play Games data as JSON
    Fetch {
        /// played-games, achievements, friends, or a full URL
        endpoint: String,

        /// Access token to use instead of the stored one
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Fetch your Google profile as JSON
    Profile {
        /// Access token to use instead of the stored one
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Show status and configuration
    Status,

    /// Launch the GUI
    Gui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_gui() {
        let cli = Cli::try_parse_from(["friender"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_fetch_args() {
        let cli = Cli::try_parse_from(["friender", "fetch", "friends", "--token", "abc", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Fetch { endpoint, token }) => {
                assert_eq!(endpoint, "friends");
                assert_eq!(token.as_deref(), Some("abc"));
            }
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_token_requires_url() {
        assert!(Cli::try_parse_from(["friender", "token"]).is_err());
    }
}
