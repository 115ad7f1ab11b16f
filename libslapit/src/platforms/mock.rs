//! Mock API for testing
//!
//! Records every call in order and can be configured to fail individual
//! operations, so handler behavior can be verified without credentials or
//! network access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::{ApiError, Result};
use crate::platforms::TwitterApi;
use crate::types::{Timeline, Tweet, TweetAuthor};

/// A call made against the mock, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    UpdateStatus(String),
    Timeline(Timeline, u32),
    LookupUserId(String),
    SendDirectMessage(u64, String),
}

/// Configuration for mock behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Entries returned by `timeline`
    pub timeline: Vec<Tweet>,

    /// Id returned by `lookup_user_id`
    pub user_id: u64,

    /// Id returned by `update_status`
    pub status_id: u64,

    pub fail_update_status: Option<ApiError>,
    pub fail_timeline: Option<ApiError>,
    pub fail_lookup: Option<ApiError>,
    pub fail_send: Option<ApiError>,

    /// Shared call log
    pub calls: Arc<Mutex<Vec<MockCall>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            timeline: Vec::new(),
            user_id: 1,
            status_id: 1,
            fail_update_status: None,
            fail_timeline: None,
            fail_lookup: None,
            fail_send: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

pub struct MockTwitter {
    config: MockConfig,
}

impl MockTwitter {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// A mock where every call succeeds
    pub fn success() -> Self {
        Self::new(MockConfig::default())
    }

    /// A mock whose timelines return `tweets`
    pub fn with_timeline(tweets: Vec<Tweet>) -> Self {
        Self::new(MockConfig {
            timeline: tweets,
            ..Default::default()
        })
    }

    /// A mock that resolves every handle to `user_id`
    pub fn with_user_id(user_id: u64) -> Self {
        Self::new(MockConfig {
            user_id,
            ..Default::default()
        })
    }

    /// A mock whose user lookup fails
    pub fn lookup_failure(error: ApiError) -> Self {
        Self::new(MockConfig {
            fail_lookup: Some(error),
            ..Default::default()
        })
    }

    /// A mock whose direct message send fails
    pub fn send_failure(error: ApiError) -> Self {
        Self::new(MockConfig {
            fail_send: Some(error),
            ..Default::default()
        })
    }

    /// All calls made so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.config.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.config.calls.lock().unwrap().push(call);
    }
}

/// Build a tweet for tests
pub fn sample_tweet(id: u64, name: &str, text: &str) -> Tweet {
    Tweet {
        id,
        created_at: "Wed Oct 10 20:19:24 +0000 2018".to_string(),
        full_text: text.to_string(),
        user: TweetAuthor {
            name: name.to_string(),
            screen_name: name.to_lowercase().replace(' ', ""),
        },
    }
}

fn check(failure: &Option<ApiError>) -> Result<()> {
    match failure {
        Some(error) => Err(error.clone().into()),
        None => Ok(()),
    }
}

#[async_trait]
impl TwitterApi for MockTwitter {
    async fn update_status(&self, status: &str) -> Result<u64> {
        self.record(MockCall::UpdateStatus(status.to_string()));
        check(&self.config.fail_update_status)?;
        Ok(self.config.status_id)
    }

    async fn timeline(&self, timeline: &Timeline, count: u32) -> Result<Vec<Tweet>> {
        self.record(MockCall::Timeline(timeline.clone(), count));
        check(&self.config.fail_timeline)?;
        Ok(self.config.timeline.clone())
    }

    async fn lookup_user_id(&self, screen_name: &str) -> Result<u64> {
        self.record(MockCall::LookupUserId(screen_name.to_string()));
        check(&self.config.fail_lookup)?;
        Ok(self.config.user_id)
    }

    async fn send_direct_message(&self, recipient_id: u64, text: &str) -> Result<()> {
        self.record(MockCall::SendDirectMessage(recipient_id, text.to_string()));
        check(&self.config.fail_send)
    }
}
