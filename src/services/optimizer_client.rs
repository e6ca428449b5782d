//! Client for the optional local optimizer backend.
//!
//! The backend is an independent process reached over loopback HTTP and
//! consulted for page prefetch, metrics, and optimization. All calls are
//! plain request/response with an opaque JSON body; nothing in the
//! browsing-state core depends on the response shape, and callers must
//! tolerate the backend being absent.

use std::time::Duration;

use crate::types::errors::OptimizerError;
use crate::types::settings::OptimizerSettings;

/// Trait defining the optimizer backend calls.
pub trait OptimizerClientTrait {
    fn prefetch(&self, url: &str) -> Result<serde_json::Value, OptimizerError>;
    fn metrics(&self) -> Result<serde_json::Value, OptimizerError>;
    fn optimize(&self) -> Result<serde_json::Value, OptimizerError>;
}

/// Blocking HTTP client with a short timeout against the local backend.
pub struct OptimizerClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OptimizerClient {
    pub fn new(settings: &OptimizerSettings) -> Result<Self, OptimizerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| OptimizerError::Network(e.to_string()))?;
        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn json_body(
        response: reqwest::blocking::Response,
    ) -> Result<serde_json::Value, OptimizerError> {
        if !response.status().is_success() {
            return Err(OptimizerError::InvalidResponse(format!(
                "status {}",
                response.status()
            )));
        }
        response
            .json()
            .map_err(|e| OptimizerError::InvalidResponse(e.to_string()))
    }
}

impl OptimizerClientTrait for OptimizerClient {
    /// `POST /api/prefetch` with the page URL.
    fn prefetch(&self, url: &str) -> Result<serde_json::Value, OptimizerError> {
        let response = self
            .client
            .post(format!("{}/api/prefetch", self.base_url))
            .json(&serde_json::json!({ "url": url }))
            .send()
            .map_err(|e| OptimizerError::Network(e.to_string()))?;
        Self::json_body(response)
    }

    /// `GET /api/metrics`.
    fn metrics(&self) -> Result<serde_json::Value, OptimizerError> {
        let response = self
            .client
            .get(format!("{}/api/metrics", self.base_url))
            .send()
            .map_err(|e| OptimizerError::Network(e.to_string()))?;
        Self::json_body(response)
    }

    /// `POST /api/optimize`.
    fn optimize(&self) -> Result<serde_json::Value, OptimizerError> {
        let response = self
            .client
            .post(format!("{}/api/optimize", self.base_url))
            .json(&serde_json::json!({}))
            .send()
            .map_err(|e| OptimizerError::Network(e.to_string()))?;
        Self::json_body(response)
    }
}
