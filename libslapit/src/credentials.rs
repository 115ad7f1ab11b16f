//! OAuth credential loading
//!
//! Credentials live in an INI file with a single section:
//!
//! ```ini
//! [TWITTER_CREDS]
//! token = 370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb
//! token_secret = LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE
//! consumer_key = xvz1evFS4wEEPTGEFPHBog
//! consumer_secret = kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw
//! ```
//!
//! Values are taken verbatim. Nothing is validated locally; a bad token only
//! shows up as an authentication failure from the API.

use std::path::Path;

use ini::{Ini, ParseOption, Properties};
use secrecy::SecretString;
use tracing::debug;

use crate::error::{ConfigError, Result};

pub const SECTION: &str = "TWITTER_CREDS";

/// The four OAuth 1.0a values needed to sign user-context requests
#[derive(Debug)]
pub struct Credentials {
    pub token: String,
    pub token_secret: SecretString,
    pub consumer_key: String,
    pub consumer_secret: SecretString,
}

impl Credentials {
    pub fn new(
        token: impl Into<String>,
        token_secret: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            token_secret: SecretString::from(token_secret.into()),
            consumer_key: consumer_key.into(),
            consumer_secret: SecretString::from(consumer_secret.into()),
        }
    }

    /// Read credentials from an INI file on disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Reading credentials file");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_ini_str(&content)
    }

    /// Parse credentials from INI text
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_str_opt(content, options)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let section = ini
            .section(Some(SECTION))
            .ok_or_else(|| ConfigError::MissingSection(SECTION.to_string()))?;

        Ok(Self::new(
            field(section, "token")?,
            field(section, "token_secret")?,
            field(section, "consumer_key")?,
            field(section, "consumer_secret")?,
        ))
    }
}

/// Look up a key, ignoring ASCII case
fn field(section: &Properties, key: &str) -> Result<String> {
    section
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.to_string())
        .ok_or_else(|| ConfigError::MissingField(format!("{}.{}", SECTION, key)).into())
}
