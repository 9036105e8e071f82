//! Fieldsense - Telemetry core for a smart-farm sensor dashboard.
//!
//! Headless dashboard binary: performs the startup fetch, logs the
//! normalized readings page by page and the derived alerts, and optionally
//! keeps polling on an interval.
//!
//! # Configuration (environment)
//!
//! - `FIELDSENSE_ENDPOINT` (required): telemetry endpoint URL
//! - `FIELDSENSE_PAGE_SIZE` (optional, default 3): sensor cards per page
//! - `FIELDSENSE_POLL_SECONDS` (optional): re-fetch interval; absent means
//!   fetch once and exit

use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fieldsense::controller::{Lifecycle, RefreshController};
use fieldsense::error::Error;
use fieldsense::model::SensorValue;
use fieldsense::pager::DEFAULT_PAGE_SIZE;
use fieldsense::source::HttpTelemetrySource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("fieldsense=info".parse()?))
        .init();

    let endpoint = env::var("FIELDSENSE_ENDPOINT")
        .map_err(|_| Error::Config("FIELDSENSE_ENDPOINT is not set".to_string()))?;

    let page_size = page_size_from_env()?;

    let poll_seconds: Option<u64> = env::var("FIELDSENSE_POLL_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok());

    info!(endpoint = %endpoint, page_size, "Starting Fieldsense dashboard");

    let source = HttpTelemetrySource::new(&endpoint);
    let mut controller = RefreshController::new(source, page_size);

    controller.request_refresh().await;
    log_dashboard(&controller);

    if let Some(seconds) = poll_seconds {
        let mut ticker = tokio::time::interval(Duration::from_secs(seconds.max(1)));
        ticker.tick().await; // first tick fires immediately

        loop {
            ticker.tick().await;
            controller.request_refresh().await;
            log_dashboard(&controller);
        }
    }

    Ok(())
}

/// Read and validate the page size from the environment.
fn page_size_from_env() -> Result<NonZeroUsize, Error> {
    let raw = match env::var("FIELDSENSE_PAGE_SIZE") {
        Ok(value) => value
            .parse::<usize>()
            .map_err(|_| Error::Config(format!("FIELDSENSE_PAGE_SIZE is not a number: {value}")))?,
        Err(_) => DEFAULT_PAGE_SIZE,
    };

    NonZeroUsize::new(raw)
        .ok_or_else(|| Error::Config("FIELDSENSE_PAGE_SIZE must be positive".to_string()))
}

/// Log the current snapshot, page layout, and alerts.
fn log_dashboard<S: fieldsense::source::TelemetrySource>(controller: &RefreshController<S>) {
    if controller.lifecycle() == Lifecycle::Failed {
        warn!(
            error = controller.last_error().unwrap_or("unknown"),
            stale_snapshot = controller.snapshot().is_some(),
            "Refresh failed"
        );
        if controller.snapshot().is_none() {
            return;
        }
    }

    let view = controller.page_view();
    for (page_index, page) in view.pages.iter().enumerate() {
        for reading in page {
            match reading.value {
                SensorValue::Known(value) => info!(
                    page = page_index,
                    sensor = reading.display_name,
                    value,
                    unit = reading.unit,
                    "Reading"
                ),
                SensorValue::Unknown => info!(
                    page = page_index,
                    sensor = reading.display_name,
                    "Reading unavailable"
                ),
            }
        }
    }

    for alert in controller.alerts() {
        warn!(
            rule = alert.rule_id,
            severity = alert.severity.label(),
            title = alert.title,
            action = alert.action_label,
            "{}",
            alert.message
        );
    }
}
