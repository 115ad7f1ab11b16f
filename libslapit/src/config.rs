//! Runtime configuration for Slapit

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1.1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CREDS_DIR: &str = ".twitter_api";
const CREDS_FILE: &str = "twitter_creds.ini";

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials_path: PathBuf,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from the environment and default locations
    pub fn load() -> Result<Self> {
        let credentials_path = resolve_credentials_path()?;
        let api_url = std::env::var("SLAPIT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            credentials_path,
            api_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Configuration pointing at an explicit credentials file
    pub fn with_credentials_path(path: impl AsRef<Path>) -> Self {
        Self {
            credentials_path: path.as_ref().to_path_buf(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

/// Resolve the credentials file path
///
/// `SLAPIT_CREDS` wins; otherwise `~/.twitter_api/twitter_creds.ini`.
pub fn resolve_credentials_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SLAPIT_CREDS") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| ConfigError::NoPath("home directory".to_string()))?;

    Ok(home.join(CREDS_DIR).join(CREDS_FILE))
}
