//! HTTP module store.
//!
//! Talks to the module server that hosts the workbench:
//!
//! - `GET  {base}/loadIndex`  → JSON array of module summaries
//! - `POST {base}/saveModule` → JSON `{ "module": ..., "content": ... }`
//! - `GET  {base}/exit`       → asks the server to shut down

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::store::{ModuleStore, ModuleSummary, SaveRequest, StoreError};

pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maps a non-success response to `StoreError::Api`, passing successes through.
    async fn check_status(
        response: reqwest::Response,
        what: &str,
    ) -> Result<reqwest::Response, StoreError> {
        debug!("{} response status: {}", what, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("{} failed: {} - {}", what, status, err_body);
            return Err(StoreError::Api {
                status,
                message: err_body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ModuleStore for HttpStore {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_index(&self) -> Result<Vec<ModuleSummary>, StoreError> {
        let response = self
            .client
            .get(format!("{}/loadIndex", self.base_url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::check_status(response, "loadIndex").await?;

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let entries: Vec<ModuleSummary> =
            serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))?;

        info!("Fetched index: {} modules", entries.len());
        Ok(entries)
    }

    async fn save_module(&self, request: SaveRequest) -> Result<(), StoreError> {
        info!("Saving module '{}'", request.module);
        let response = self
            .client
            .post(format!("{}/saveModule", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_status(response, "saveModule").await?;
        Ok(())
    }

    async fn stop_server(&self) -> Result<(), StoreError> {
        warn!("Requesting server exit at {}", self.base_url);
        let response = self
            .client
            .get(format!("{}/exit", self.base_url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_status(response, "exit").await?;
        Ok(())
    }
}
