//! Error taxonomy for the telemetry core.
//!
//! Only two failures can surface from this crate:
//!
//! - [`Error::Fetch`] — the telemetry fetch failed (network, HTTP status, or
//!   body parsing). Recoverable: the controller enters `Failed` and a manual
//!   refresh retries.
//! - [`Error::Config`] — invalid startup configuration such as a zero page
//!   size. Fatal at startup, not user-recoverable.
//!
//! Normalization and rule evaluation are total functions and have no error
//! path at all; a malformed payload field degrades that single reading to
//! `Unknown` inside the normalizer.

use thiserror::Error;

/// Failures surfaced by the telemetry core.
#[derive(Debug, Error)]
pub enum Error {
    /// The telemetry fetch failed. The message is descriptive text for
    /// display, not a structured code; no retry policy discriminates
    /// sub-kinds.
    #[error("failed to fetch telemetry: {0}")]
    Fetch(String),

    /// Startup configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}
