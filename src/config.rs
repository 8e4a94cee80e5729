use std::fmt;

use anyhow::{Context, Result};

use crate::api::SlideSpeakClient;

/// Resolved runtime configuration: the API key plus the base URL of the
/// SlideSpeak deployment to talk to.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
}

impl Settings {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Turn the command line values into usable settings.
    ///
    /// Clap already backs `api_key` with the `SLIDESPEAK_API_KEY`
    /// environment variable; blank keys are rejected here so an empty
    /// variable does not masquerade as credentials.
    pub fn resolve(api_key: Option<String>, base_url: String) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .context("no API key configured, set SLIDESPEAK_API_KEY or pass --api-key")?;
        Ok(Self { api_key, base_url })
    }

    /// Build an API client from these settings.
    pub fn client(&self) -> SlideSpeakClient {
        SlideSpeakClient::with_base_url(&self.base_url, &self.api_key)
    }
}

// The API key must never leak into logs or error chains.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
