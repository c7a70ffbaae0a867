use thiserror::Error;

/// Result type alias for Overture operations
pub type Result<T> = std::result::Result<T, OvertureError>;

/// Errors that can occur during Overture operations
#[derive(Error, Debug)]
pub enum OvertureError {
    /// Malformed "key=value" build parameter
    #[error("invalid build parameter {0:?}")]
    InvalidParameter(String),

    /// Malformed "vcs/username/project" identifier
    #[error("invalid project name {0:?}")]
    InvalidProjectName(String),

    /// Flags do not map to any defined trigger action
    #[error("invalid flag combination")]
    InvalidFlagCombination,

    /// Missing required configuration
    #[error("{0}")]
    ConfigMissing(String),

    /// API error with HTTP status
    #[error("CircleCI API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Endpoint URL construction error
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

impl OvertureError {
    /// Create an API error from HTTP status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a config missing error with helpful message
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::ConfigMissing(message.into())
    }

    /// Process exit status for this error.
    ///
    /// Local validation failures exit with 2; everything that made it past
    /// validation (configuration, network, API, IO) exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidParameter(_)
            | Self::InvalidProjectName(_)
            | Self::InvalidFlagCombination => 2,
            _ => 1,
        }
    }
}
