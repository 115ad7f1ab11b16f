//! Twitter v1.1 REST client
//!
//! Thin wrapper over `reqwest` that signs each request and maps failures onto
//! `ApiError`. One call, one request: nothing here retries or paginates.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::{ApiError, Result};
use crate::platforms::oauth::OAuthSigner;
use crate::platforms::TwitterApi;
use crate::types::{DirectMessageRequest, PostedStatus, Timeline, Tweet, UserLookup};

/// Live client for the v1.1 API
#[derive(Debug)]
pub struct TwitterClient {
    client: Client,
    base_url: String,
    signer: OAuthSigner,
}

impl TwitterClient {
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("slapit/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(credentials),
        })
    }

    /// Read the credentials file named by `config` and build a signed client
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = Credentials::load_from_path(&config.credentials_path)?;
        Self::new(config, credentials)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    #[instrument(skip(self, params))]
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        let auth_header = self.signer.sign("GET", &url, params)?;

        let request = self
            .client
            .get(&url)
            .query(params)
            .header("Authorization", auth_header);

        self.send(endpoint, request).await
    }

    #[instrument(skip(self, params))]
    async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        let auth_header = self.signer.sign("POST", &url, params)?;

        let request = self
            .client
            .post(&url)
            .form(params)
            .header("Authorization", auth_header);

        self.send(endpoint, request).await
    }

    #[instrument(skip(self, body))]
    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(endpoint);
        let auth_header = self.signer.sign("POST", &url, &[])?;

        let request = self
            .client
            .post(&url)
            .json(body)
            .header("Authorization", auth_header);

        self.send(endpoint, request).await
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: &str, request: RequestBuilder) -> Result<T> {
        debug!(endpoint, "Making Twitter API request");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(endpoint, response).await
    }
}

async fn handle_response<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    debug!(endpoint, status = status.as_u16(), "Twitter API responded");

    if status.is_success() {
        return serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Response(format!("{endpoint}: {e}")).into());
    }

    let message = error_message(status, &bytes);

    let error = match status {
        StatusCode::UNAUTHORIZED => ApiError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(message),
        _ => ApiError::Http {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            message,
        },
    };

    Err(error.into())
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

/// Condense a v1.1 error body (`{"errors":[{"code":..,"message":..}]}`)
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if !parsed.errors.is_empty() {
            return parsed
                .errors
                .iter()
                .map(|e| match e.code {
                    Some(code) => format!("{} (code {})", e.message, code),
                    None => e.message.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ");
        }
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        text
    }
}

#[async_trait]
impl TwitterApi for TwitterClient {
    async fn update_status(&self, status: &str) -> Result<u64> {
        let params = vec![("status".to_string(), status.to_string())];
        let posted: PostedStatus = self.post_form("statuses/update.json", &params).await?;
        Ok(posted.id)
    }

    async fn timeline(&self, timeline: &Timeline, count: u32) -> Result<Vec<Tweet>> {
        let mut params = Vec::with_capacity(3);
        let endpoint = match timeline {
            Timeline::Home => "statuses/home_timeline.json",
            Timeline::User(screen_name) => {
                params.push(("screen_name".to_string(), screen_name.clone()));
                "statuses/user_timeline.json"
            }
        };
        params.push(("count".to_string(), count.to_string()));
        params.push(("tweet_mode".to_string(), "extended".to_string()));

        self.get(endpoint, &params).await
    }

    async fn lookup_user_id(&self, screen_name: &str) -> Result<u64> {
        let params = vec![("screen_name".to_string(), screen_name.to_string())];
        let user: UserLookup = self.get("users/show.json", &params).await?;
        Ok(user.id)
    }

    async fn send_direct_message(&self, recipient_id: u64, text: &str) -> Result<()> {
        let body = DirectMessageRequest::new(recipient_id, text);
        let _event: serde_json::Value = self
            .post_json("direct_messages/events/new.json", &body)
            .await?;
        Ok(())
    }
}
