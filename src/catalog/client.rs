//! OpenRouter API client.
//!
//! One blocking GET against `/models` per run; failures are fatal for
//! the run and propagated, never retried here.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Response envelope from the `/models` endpoint.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<Value>,
}

/// Client for the OpenRouter API.
pub struct OpenRouterClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl OpenRouterClient {
    /// Build a client with auth and attribution headers set.
    pub fn new(api_key: &str, config: &ApiConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth = reqwest::header::HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::Config("API key contains invalid header characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);
        headers.insert(
            "HTTP-Referer",
            reqwest::header::HeaderValue::from_static(
                "https://github.com/modelscrapor/modelscrapor",
            ),
        );
        headers.insert(
            "X-Title",
            reqwest::header::HeaderValue::from_static("ModelScrapOR"),
        );

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("modelscrapor/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw model catalog.
    ///
    /// Returns the `data` array of the response as untyped JSON values;
    /// normalization is the adapter's job.
    pub fn fetch_raw_catalog(&self) -> Result<Vec<Value>> {
        info!("Fetching models from OpenRouter API...");
        let response = self.http.get(format!("{}/models", self.base_url)).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body: ModelsResponse = response.json()?;
        info!("Received {} raw model records", body.data.len());
        Ok(body.data)
    }
}
