//! HTTP client for the realtime-database REST surface.
//!
//! One collection read is one GET of `{base}/{collection}.json`, answered
//! with the full JSON subtree. An optional database secret travels as the
//! `auth` query parameter.

use serde_json::Value;
use std::future::Future;

use super::error::StoreError;
use super::snapshot::{Snapshot, SnapshotSource};
use crate::config::Config;

/// Client for the readings store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    collection: String,
    auth_token: Option<String>,
}

impl StoreClient {
    /// Creates a client with explicit parameters.
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: collection.into(),
            auth_token: None,
        }
    }

    /// Attaches a database secret sent as the `auth` query parameter.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Builds a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        if config.store_url.is_empty() {
            return Err(StoreError::NotConfigured);
        }

        let mut client = Self::new(&config.store_url, &config.collection);
        if let Some(token) = &config.auth_token {
            client = client.with_auth_token(token);
        }
        Ok(client)
    }

    /// Builds the collection URL, defaulting the scheme to https.
    fn build_collection_url(&self) -> String {
        let base_url = if !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            format!("https://{}", self.base_url)
        } else {
            self.base_url.clone()
        };

        let mut url = format!(
            "{}/{}.json",
            base_url.trim_end_matches('/'),
            self.collection
        );
        if let Some(token) = &self.auth_token {
            url.push_str(&format!("?auth={}", urlencoding::encode(token)));
        }
        url
    }
}

impl SnapshotSource for StoreClient {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, StoreError>> + Send {
        async move {
            let url = self.build_collection_url();
            let client = reqwest::Client::new();

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

            if !response.status().is_success() {
                return Err(StoreError::HttpError(format!(
                    "Server returned status {}",
                    response.status()
                )));
            }

            let value: Value = response
                .json()
                .await
                .map_err(|e| StoreError::DecodeError(e.to_string()))?;

            Ok(Snapshot::from_value(value))
        }
    }
}
