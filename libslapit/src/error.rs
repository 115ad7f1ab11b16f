//! Error types for Slapit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlapitError>;

#[derive(Error, Debug)]
pub enum SlapitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl SlapitError {
    /// Short name of the failure class, printed before `::` in the error banner
    pub fn kind(&self) -> &'static str {
        match self {
            SlapitError::Config(_) => "ConfigError",
            SlapitError::Api(ApiError::Authentication(_)) => "AuthenticationError",
            SlapitError::Api(ApiError::RateLimit(_)) => "RateLimitError",
            SlapitError::Api(ApiError::Http { .. }) => "HttpError",
            SlapitError::Api(ApiError::Network(_)) => "NetworkError",
            SlapitError::Api(ApiError::Response(_)) => "ResponseError",
            SlapitError::Api(ApiError::Signing(_)) => "SigningError",
            SlapitError::Io(_) => "IOError",
        }
    }

    /// The inner message without the wrapping category prefix
    pub fn detail(&self) -> String {
        match self {
            SlapitError::Config(e) => e.to_string(),
            SlapitError::Api(e) => e.to_string(),
            SlapitError::Io(e) => e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read credentials file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse credentials file: {0}")]
    ParseError(String),

    #[error("Missing section [{0}] in credentials file")]
    MissingSection(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Cannot locate {0}")]
    NoPath(String),
}

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Twitter sent status {status} for {endpoint}: {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}
