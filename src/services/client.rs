// src/services/client.rs

//! API client with retry and rate-limit handling.
//!
//! Policy: connection timeouts retry immediately, rate-limited responses
//! sleep and retry unconditionally, other network failures consume a
//! bounded attempt budget. A request the API itself rejects is fatal and
//! never retried.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{ApiResponse, Config};
use crate::utils::http;

/// Client for the public Codeforces API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    attempts: u32,
    retry_delay: Duration,
    rate_limit_delay: Duration,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: http::create_client(&config.api)?,
            base_url: config.api.base_url.clone(),
            attempts: config.retry.attempts,
            retry_delay: Duration::from_millis(config.retry.retry_delay_ms),
            rate_limit_delay: Duration::from_millis(config.retry.rate_limit_delay_ms),
        })
    }

    /// Issue a GET for `query` and decode the enveloped `result` payload.
    pub async fn get<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        let url = url::Url::parse(&format!("{}{}", self.base_url, query))?;
        let mut remaining_attempts = self.attempts;

        loop {
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(e) if e.is_timeout() => {
                    log::warn!("Connection timeout for {query}, retrying...");
                    continue;
                }
                Err(e) => {
                    log::error!("Unexpected error for {query}: {e}");
                    if remaining_attempts == 0 {
                        return Err(e.into());
                    }
                    log::warn!(
                        "Remaining attempts: {}, sleeping {:?} and retrying...",
                        remaining_attempts,
                        self.retry_delay
                    );
                    remaining_attempts -= 1;
                    tokio::time::sleep(self.retry_delay).await;
                    continue;
                }
            };

            let code = response.status();
            if code == StatusCode::TOO_MANY_REQUESTS {
                log::debug!("Call limit exceeded, sleeping {:?}", self.rate_limit_delay);
                tokio::time::sleep(self.rate_limit_delay).await;
                continue;
            }

            let body = response.text().await?;
            let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
            return envelope.into_result(query, code.as_u16());
        }
    }
}
