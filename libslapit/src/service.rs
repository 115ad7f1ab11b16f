//! Command handlers
//!
//! `SlapitService` holds the API handle and implements the three operations
//! the CLI exposes. Rendering is left to the caller so the handlers can be
//! driven by tests against `MockTwitter`.
//!
//! ```no_run
//! use libslapit::config::Config;
//! use libslapit::service::SlapitService;
//!
//! # async fn example() -> libslapit::Result<()> {
//! let service = SlapitService::from_config(&Config::load()?)?;
//! service.say(&["hello".to_string(), "world".to_string()]).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::platforms::twitter::TwitterClient;
use crate::platforms::TwitterApi;
use crate::types::{Timeline, Tweet};

pub const DEFAULT_COUNT: u32 = 5;

/// What `get` should fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRequest {
    pub timeline: Timeline,
    pub count: u32,
}

impl Default for TimelineRequest {
    fn default() -> Self {
        Self {
            timeline: Timeline::Home,
            count: DEFAULT_COUNT,
        }
    }
}

pub struct SlapitService {
    api: Arc<dyn TwitterApi>,
}

impl SlapitService {
    pub fn new(api: Arc<dyn TwitterApi>) -> Self {
        Self { api }
    }

    /// Load credentials and build a live client
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = TwitterClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Post the words as one status update
    pub async fn say(&self, words: &[String]) -> Result<u64> {
        let status = format_message(words);
        let id = self.api.update_status(&status).await?;

        info!(id, "Status posted");
        Ok(id)
    }

    /// Fetch a timeline in the order the API returns it
    pub async fn get(&self, request: &TimelineRequest) -> Result<Vec<Tweet>> {
        let tweets = self.api.timeline(&request.timeline, request.count).await?;

        debug!(count = tweets.len(), "Timeline fetched");
        Ok(tweets)
    }

    /// Resolve `recipient` and send the words as a direct message
    ///
    /// If the lookup fails nothing is sent.
    pub async fn tell(&self, recipient: &str, words: &[String]) -> Result<()> {
        let recipient_id = self.api.lookup_user_id(recipient).await?;
        debug!(recipient, recipient_id, "Recipient resolved");

        self.api
            .send_direct_message(recipient_id, &format_message(words))
            .await?;

        info!(recipient, "Direct message sent");
        Ok(())
    }
}

/// Join word tokens with single spaces
pub fn format_message(words: &[String]) -> String {
    words.join(" ")
}
