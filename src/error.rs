use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Remote API error: {status} {status_text}")]
    RemoteApi { status: u16, status_text: String },

    #[error("Failed to fetch data: {0}")]
    DataFetch(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
