//! HTTP-backed insights provider.
//!
//! Implements the core provider trait against the external
//! text-generation endpoint: one JSON POST with the prompt, one JSON
//! response with the text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use donorhub_core::insights::InsightsProviderTrait;
use donorhub_core::{Error, Result};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

pub struct HttpInsightsProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpInsightsProvider {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl InsightsProviderTrait for HttpInsightsProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest { prompt });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Insights(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Insights(format!(
                "Provider returned status {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Insights(format!("Malformed provider response: {}", e)))?;
        Ok(body.text)
    }
}

/// Stand-in used when no endpoint is configured; the API surfaces it as
/// 503 rather than hiding the route.
pub struct UnconfiguredInsightsProvider;

#[async_trait]
impl InsightsProviderTrait for UnconfiguredInsightsProvider {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::Insights(
            "No insights provider configured (set DH_INSIGHTS_URL)".to_string(),
        ))
    }
}
