//! Mutation gateway: the REST boundary for record reads and writes

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{DnsRecord, NewRecord};

/// Error body the API attaches to non-success responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Boundary trait for the records API.
///
/// Both mutations and the bulk read normalize every failure (explicit error
/// body, non-success status, transport exception) into [`CoreError`], so
/// calling code has one failure path, not two.
#[async_trait]
pub trait RecordsGateway: Send + Sync {
    /// Fetch all records.
    async fn list(&self) -> CoreResult<Vec<DnsRecord>>;

    /// Create a new record.
    async fn create(&self, record: &NewRecord) -> CoreResult<()>;

    /// Delete the record identified by `fqdn`.
    async fn remove(&self, fqdn: &str) -> CoreResult<()>;
}

/// `reqwest`-backed gateway against `/api/records`.
pub struct HttpRecordsGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecordsGateway {
    /// Create a gateway rooted at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn records_url(&self) -> String {
        format!("{}/api/records", self.base_url)
    }

    /// URL for one record; the fqdn is percent-encoded as a path segment.
    fn record_url(&self, fqdn: &str) -> String {
        format!("{}/api/records/{}", self.base_url, urlencoding::encode(fqdn))
    }

    /// Turn a non-success response into an [`CoreError::Api`], preferring
    /// the server-supplied `{error}` text.
    async fn api_error(response: reqwest::Response) -> CoreError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(msg) }) => msg,
            _ => format!("HTTP {status}"),
        };
        CoreError::Api { status, message }
    }
}

#[async_trait]
impl RecordsGateway for HttpRecordsGateway {
    async fn list(&self) -> CoreResult<Vec<DnsRecord>> {
        let response = self.client.get(self.records_url()).send().await?;
        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            log::warn!("record list rejected: {err}");
            return Err(err);
        }

        response
            .json::<Vec<DnsRecord>>()
            .await
            .map_err(|e| CoreError::Decode(e.to_string()))
    }

    async fn create(&self, record: &NewRecord) -> CoreResult<()> {
        let response = self
            .client
            .post(self.records_url())
            .json(record)
            .send()
            .await?;
        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            log::warn!("create {} rejected: {err}", record.fqdn);
            return Err(err);
        }

        log::debug!("created record {}", record.fqdn);
        Ok(())
    }

    async fn remove(&self, fqdn: &str) -> CoreResult<()> {
        let response = self.client.delete(self.record_url(fqdn)).send().await?;
        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            log::warn!("delete {fqdn} rejected: {err}");
            return Err(err);
        }

        log::debug!("deleted record {fqdn}");
        Ok(())
    }
}
