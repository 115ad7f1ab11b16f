//! Remote API abstraction
//!
//! `TwitterApi` is the seam between the command handlers and the network.
//! The live implementation signs every request with OAuth 1.0a; the mock
//! records calls so handler behavior can be checked without a server.
//!
//! # Examples
//!
//! ```no_run
//! use libslapit::config::Config;
//! use libslapit::platforms::{twitter::TwitterClient, TwitterApi};
//! use libslapit::types::Timeline;
//!
//! # async fn example() -> libslapit::Result<()> {
//! let client = TwitterClient::from_config(&Config::load()?)?;
//!
//! for tweet in client.timeline(&Timeline::Home, 5).await? {
//!     println!("{}: {}", tweet.user.name, tweet.full_text);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Timeline, Tweet};

pub mod oauth;
pub mod twitter;

// Available outside of cfg(test) so integration tests can use it
pub mod mock;

/// Operations slapit performs against the remote API
///
/// Each method is exactly one HTTP request. Implementations never retry.
#[async_trait]
pub trait TwitterApi: Send + Sync {
    /// Post a new status and return its id
    async fn update_status(&self, status: &str) -> Result<u64>;

    /// Fetch up to `count` entries of a timeline, untruncated, in API order
    async fn timeline(&self, timeline: &Timeline, count: u32) -> Result<Vec<Tweet>>;

    /// Resolve a handle to its numeric id
    async fn lookup_user_id(&self, screen_name: &str) -> Result<u64>;

    /// Send a direct message to an already-resolved recipient
    async fn send_direct_message(&self, recipient_id: u64, text: &str) -> Result<()>;
}
