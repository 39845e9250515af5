//! Forecast retrieval over HTTP.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::types::{ForecastSample, parse_forecast};
use crate::config::ForecastConfig;
use crate::constants::forecast::CONNECT_TIMEOUT_SECS;
use crate::error::{Error, Result};

/// A resolved forecast request.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    url: Url,
    timeout: Duration,
}

impl ForecastRequest {
    /// Build the request from configuration.
    ///
    /// Returns `Ok(None)` when the forecast is disabled or no API key is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn from_config(config: &ForecastConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }
        let Some(api_key) = config.api_key.as_deref() else {
            return Ok(None);
        };

        let units = config.units.to_string();
        let url = Url::parse_with_params(
            &config.endpoint,
            &[
                ("q", config.location.as_str()),
                ("units", units.as_str()),
                ("appid", api_key),
            ],
        )
        .map_err(|e| Error::ConfigValidation {
            message: format!("forecast.endpoint is not a valid URL: {e}"),
        })?;

        Ok(Some(Self {
            url,
            timeout: Duration::from_secs(config.timeout_secs),
        }))
    }

    /// Full request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request URL with the API key masked, for logs and errors.
    pub fn redacted_url(&self) -> String {
        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == "appid" { "***".into() } else { v };
                (k.into_owned(), v.into_owned())
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url.to_string()
    }

    /// Perform the request once, without retries.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a body
    /// that is not a forecast.
    pub async fn send(&self) -> Result<Vec<ForecastSample>> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Internal {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        let response = client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::ForecastFetch {
                url: self.redacted_url(),
                source: Box::new(e),
            })?;

        if !response.status().is_success() {
            return Err(Error::ForecastFetch {
                url: self.redacted_url(),
                source: format!("HTTP {}", response.status()).into(),
            });
        }

        let body = response.text().await.map_err(|e| Error::ForecastFetch {
            url: self.redacted_url(),
            source: Box::new(e),
        })?;

        parse_forecast(&body)
    }
}

/// Fetch the forecast, degrading every failure to an empty list.
///
/// Failures are logged, never returned. A disabled forecast or missing API
/// key also yields an empty list.
pub async fn fetch_forecast(config: &ForecastConfig) -> Vec<ForecastSample> {
    let request = match ForecastRequest::from_config(config) {
        Ok(Some(request)) => request,
        Ok(None) => {
            debug!("Forecast disabled or no API key configured");
            return Vec::new();
        }
        Err(e) => {
            warn!("Forecast unavailable: {e}");
            return Vec::new();
        }
    };

    debug!("Fetching forecast: {}", request.redacted_url());
    match request.send().await {
        Ok(samples) => {
            debug!("Received {} forecast samples", samples.len());
            samples
        }
        Err(e) => {
            let cause = std::error::Error::source(&e).map(ToString::to_string);
            warn!(
                "Forecast unavailable: {e}{}",
                cause.map(|c| format!(" ({c})")).unwrap_or_default()
            );
            Vec::new()
        }
    }
}
