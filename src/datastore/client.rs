//! Datastore API client wrapper.

use std::time::Instant;

use axum::http::{header, HeaderValue};
use tracing::{instrument, warn};

use crate::config::Config;
use crate::error::DatastoreError;
use crate::metrics;

use super::types::{BookWritePayload, OBJTYPE_BOOK};

/// HTTP client for the datastore service.
///
/// Each method performs exactly one call, forwards the caller's
/// Authorization header verbatim, and returns the raw response body so
/// the front-end can relay it unmodified. No retries.
#[derive(Debug, Clone)]
pub struct DatastoreClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the datastore API.
    base_url: String,
}

impl DatastoreClient {
    /// Create a new datastore client from config with bounded timeouts.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(config.connect_timeout_ms))
            .tcp_nodelay(true)
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.datastore_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Fetch a book record by key.
    #[instrument(skip(self, auth), fields(objkey = %objkey))]
    pub async fn read(
        &self,
        auth: &HeaderValue,
        objkey: &str,
    ) -> Result<Vec<u8>, DatastoreError> {
        let start = Instant::now();
        let response = self
            .http
            .get(self.endpoint("read"))
            .query(&[("objtype", OBJTYPE_BOOK), ("objkey", objkey)])
            .header(header::AUTHORIZATION, auth.clone())
            .send()
            .await?;

        self.relay("read", response, start).await
    }

    /// Create a book record.
    #[instrument(skip(self, auth, payload))]
    pub async fn write(
        &self,
        auth: &HeaderValue,
        payload: &BookWritePayload,
    ) -> Result<Vec<u8>, DatastoreError> {
        let start = Instant::now();
        let response = self
            .http
            .post(self.endpoint("write"))
            .json(payload)
            .header(header::AUTHORIZATION, auth.clone())
            .send()
            .await?;

        self.relay("write", response, start).await
    }

    /// Delete a book record by key.
    #[instrument(skip(self, auth), fields(objkey = %objkey))]
    pub async fn delete(
        &self,
        auth: &HeaderValue,
        objkey: &str,
    ) -> Result<Vec<u8>, DatastoreError> {
        let start = Instant::now();
        let response = self
            .http
            .delete(self.endpoint("delete"))
            .query(&[("objtype", OBJTYPE_BOOK), ("objkey", objkey)])
            .header(header::AUTHORIZATION, auth.clone())
            .send()
            .await?;

        self.relay("delete", response, start).await
    }

    /// Validate and hand back the datastore's response body.
    ///
    /// The datastore's status code is collapsed to 200 at the front-end,
    /// matching the existing contract; non-2xx statuses are logged.
    async fn relay(
        &self,
        endpoint: &'static str,
        response: reqwest::Response,
        start: Instant,
    ) -> Result<Vec<u8>, DatastoreError> {
        let status = response.status();
        if !status.is_success() {
            warn!("datastore {} returned HTTP {}", endpoint, status);
        }

        let body = response.bytes().await?.to_vec();

        if serde_json::from_slice::<serde_json::Value>(&body).is_err() {
            return Err(DatastoreError::NonJsonResponse { endpoint });
        }

        metrics::record_datastore_call(endpoint, start);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        let config = Config {
            datastore_url: "http://cmpt756db:30002/api/v1/datastore".to_string(),
            ..Config::default()
        };
        let client = DatastoreClient::new(&config);

        assert_eq!(
            client.endpoint("read"),
            "http://cmpt756db:30002/api/v1/datastore/read"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = Config {
            datastore_url: "http://cmpt756db:30002/api/v1/datastore/".to_string(),
            ..Config::default()
        };
        let client = DatastoreClient::new(&config);

        assert_eq!(
            client.endpoint("delete"),
            "http://cmpt756db:30002/api/v1/datastore/delete"
        );
    }
}
