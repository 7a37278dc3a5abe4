//! Error types for the tiktok-scraper application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("No {0} given")]
    MissingArgument(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Error getting object for {kind}: {identifier} (status {status})")]
    LookupFailed {
        kind: String,
        identifier: String,
        status: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a lookup failure for an identifier of the given kind.
    pub fn lookup_failed(kind: &str, identifier: &str, status: Option<i64>) -> Self {
        Error::LookupFailed {
            kind: kind.to_string(),
            identifier: identifier.to_string(),
            status: status.map_or_else(|| "missing".to_string(), |s| s.to_string()),
        }
    }

    /// Whether this error only concerns one identifier of a batch.
    ///
    /// Batch lookups log and skip these instead of aborting.
    pub fn is_per_item(&self) -> bool {
        matches!(self, Error::LookupFailed { .. } | Error::MalformedResponse(_))
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
