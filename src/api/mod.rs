//! HTTP client for the SlideSpeak REST API
//!
//! Module Structure:
//! - `account`: account details and document uploads
//! - `error`: error taxonomy shared by every endpoint
//! - `presentations`: generation endpoints and template listing
//! - `request`: request payloads and their local validation
//! - `tasks`: task status polling
//! - `types`: wire types returned by the API
//!
//! Generation is asynchronous on the SlideSpeak side: submitting a request
//! yields a task handle, and the result is fetched by polling that task
//! until it reaches a terminal state.
//!
//! ```no_run
//! use slidespeak_mcp::api::{GenerationRequest, PollConfig, SlideSpeakClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SlideSpeakClient::new("sk-my-api-key");
//!     let request = GenerationRequest::new("Q3 Results", 10, "business");
//!     let result = client.generate(&request, &PollConfig::default()).await?;
//!     println!("{}", result.url);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub mod error;
pub mod types;

mod account;
mod presentations;
mod request;
mod tasks;

pub use error::{ApiError, Result};
pub use request::{GenerationRequest, SlideBySlideRequest, SlideLayout, SlideSpec};
pub use tasks::PollConfig;
pub use types::{
    AccountInfo, GenerationResult, TaskHandle, TaskState, TaskStatusReport, Template,
    TemplateImages, UploadReceipt,
};

/// Base URL of the public SlideSpeak API.
pub const DEFAULT_API_BASE: &str = "https://api.slidespeak.co/api/v1";

/// Timeout for ordinary API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for submitting a generation request.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(90);

/// Delay between two task status polls.
pub const POLLING_INTERVAL: Duration = Duration::from_secs(2);

/// Timeout for a single task status poll.
pub const POLLING_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("slidespeak-mcp/", env!("CARGO_PKG_VERSION"));

/// Client for the SlideSpeak REST API.
///
/// Holds the API key and base URL; all endpoint methods live in the
/// submodules and hang off this type.
#[derive(Clone)]
pub struct SlideSpeakClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SlideSpeakClient {
    /// Create a client against the public SlideSpeak API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE, api_key)
    }

    /// Create a client against a custom base URL, e.g. a staging deployment.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, endpoint: &str, timeout: Duration) -> RequestBuilder {
        self.prepare(self.client.get(format!("{}{}", self.base_url, endpoint)), timeout)
    }

    fn post(&self, endpoint: &str, timeout: Duration) -> RequestBuilder {
        self.prepare(self.client.post(format!("{}{}", self.base_url, endpoint)), timeout)
    }

    fn prepare(&self, builder: RequestBuilder, timeout: Duration) -> RequestBuilder {
        builder
            .timeout(timeout)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .header("X-API-Key", &self.api_key)
    }
}

// The API key must never leak into logs or error chains.
impl fmt::Debug for SlideSpeakClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideSpeakClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Turn a raw HTTP response into a typed result.
///
/// Non-success statuses become [`ApiError::UpstreamRejected`] with the
/// response body as the message; success bodies that fail to parse become
/// [`ApiError::InvalidResponse`].
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ApiError::rejected(status.as_u16(), message));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("failed to parse JSON response: {e}")))
}
