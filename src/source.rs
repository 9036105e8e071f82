//! Telemetry source: the single external fetch the core depends on.
//!
//! The refresh controller talks to the outside world through the
//! [`TelemetrySource`] trait, so tests can substitute a canned or failing
//! source without a network. The production implementation is
//! [`HttpTelemetrySource`], a thin reqwest client performing one GET against
//! the station's endpoint.
//!
//! No retry or backoff lives here: transport-level resilience belongs to the
//! surrounding application, and the observed design retries only on manual
//! refresh.

use serde_json::Value;

use crate::error::Error;

/// Provider of raw telemetry payloads.
pub trait TelemetrySource {
    /// Fetch the current raw telemetry payload.
    ///
    /// Network errors, non-2xx statuses, and non-JSON bodies all surface as
    /// [`Error::Fetch`]. The payload's shape is deliberately unconstrained;
    /// the normalizer is total over whatever comes back.
    fn fetch(&self) -> impl Future<Output = Result<Value, Error>> + Send;
}

/// HTTP client for the field station's telemetry endpoint.
#[derive(Clone)]
pub struct HttpTelemetrySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTelemetrySource {
    /// Create a source fetching from `endpoint`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// The endpoint this source fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TelemetrySource for HttpTelemetrySource {
    async fn fetch(&self) -> Result<Value, Error> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
