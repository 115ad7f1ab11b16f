//! Core types for Slapit

use serde::{Deserialize, Serialize};

pub const PERMALINK_BASE: &str = "https://twitter.com/i/web/status/";

/// A timeline entry as returned by the v1.1 timeline endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tweet {
    pub id: u64,
    pub created_at: String,
    /// Untruncated text; older responses without `tweet_mode=extended` only carry `text`
    #[serde(alias = "text")]
    pub full_text: String,
    pub user: TweetAuthor,
}

impl Tweet {
    pub fn permalink(&self) -> String {
        format!("{}{}", PERMALINK_BASE, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TweetAuthor {
    pub name: String,
    #[serde(default)]
    pub screen_name: String,
}

/// Which timeline `get` reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeline {
    /// The authenticated account's home timeline
    Home,
    /// Another account's public timeline, by handle
    User(String),
}

impl Timeline {
    pub fn for_user(user: Option<String>) -> Self {
        match user {
            Some(handle) => Timeline::User(handle),
            None => Timeline::Home,
        }
    }
}

/// Subset of `users/show.json` we need to address a direct message
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookup {
    pub id: u64,
    #[serde(default)]
    pub screen_name: String,
}

/// Subset of `statuses/update.json`
#[derive(Debug, Clone, Deserialize)]
pub struct PostedStatus {
    pub id: u64,
}

/// Body of `direct_messages/events/new.json`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectMessageRequest {
    pub event: DirectMessageEvent,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectMessageEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub message_create: MessageCreate,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageCreate {
    pub target: MessageTarget,
    pub message_data: MessageData,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageTarget {
    pub recipient_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageData {
    pub text: String,
}

impl DirectMessageRequest {
    pub fn new(recipient_id: u64, text: &str) -> Self {
        Self {
            event: DirectMessageEvent {
                event_type: "message_create".to_string(),
                message_create: MessageCreate {
                    target: MessageTarget {
                        recipient_id: recipient_id.to_string(),
                    },
                    message_data: MessageData {
                        text: text.to_string(),
                    },
                },
            },
        }
    }
}
