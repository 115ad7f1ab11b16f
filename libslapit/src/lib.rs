//! Slapit - post, read, and direct-message on Twitter from the terminal
//!
//! The library holds everything except argument parsing: credential loading,
//! the signed REST client, the command handlers, and output rendering.

pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod output;
pub mod platforms;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use credentials::Credentials;
pub use error::{ApiError, ConfigError, Result, SlapitError};
pub use service::{SlapitService, TimelineRequest};
pub use types::{Timeline, Tweet};
