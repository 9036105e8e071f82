//! Refresh orchestration and snapshot ownership.
//!
//! The [`RefreshController`] is the only component that owns a
//! [`TelemetrySnapshot`]. It drives the fetch lifecycle
//! (`Idle → Loading → Ready | Failed`, with manual refresh looping back to
//! `Loading`), and exposes the derived views — alerts, page view, active
//! page index — as pure recomputations over the current snapshot. Nothing
//! downstream holds a copy or a back-reference.
//!
//! Policy on failure: the last good snapshot is **retained**. The
//! presentation layer keeps showing stale data and surfaces
//! [`RefreshController::last_error`] as a non-blocking banner rather than a
//! full-screen replacement.

use std::num::NonZeroUsize;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::model::{Alert, TelemetrySnapshot};
use crate::normalize::normalize;
use crate::pager::{PageView, PagerState, page_count_for, paginate};
use crate::rules::evaluate;
use crate::source::TelemetrySource;

/// Fetch lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Constructed, startup fetch not yet requested.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded and a snapshot is published.
    Ready,
    /// The latest fetch failed; a previous snapshot may still be published.
    Failed,
}

/// Owns the current snapshot and orchestrates refreshes.
///
/// Single-writer discipline: all mutation happens through `&mut self` entry
/// points (`request_refresh`, `report_scroll`), so there is never more than
/// one fetch in flight and readers always observe a complete snapshot.
pub struct RefreshController<S> {
    source: S,
    page_size: NonZeroUsize,
    lifecycle: Lifecycle,
    snapshot: Option<TelemetrySnapshot>,
    last_error: Option<String>,
    pager: PagerState,
}

impl<S: TelemetrySource> RefreshController<S> {
    /// Create a controller in the `Idle` state.
    ///
    /// The caller triggers the startup fetch with
    /// [`request_refresh`](Self::request_refresh) immediately after
    /// construction.
    pub fn new(source: S, page_size: NonZeroUsize) -> Self {
        Self {
            source,
            page_size,
            lifecycle: Lifecycle::Idle,
            snapshot: None,
            last_error: None,
            pager: PagerState::new(),
        }
    }

    /// Fetch a fresh snapshot.
    ///
    /// No-op while a fetch is already in flight; duplicate refresh requests
    /// coalesce rather than race. On success the new snapshot replaces the
    /// old one atomically and the pager adopts the new page count. On
    /// failure the previous snapshot is retained and the error description
    /// is stored for display.
    pub async fn request_refresh(&mut self) {
        if self.lifecycle == Lifecycle::Loading {
            debug!("refresh requested while a fetch is in flight, ignoring");
            return;
        }

        self.lifecycle = Lifecycle::Loading;

        match self.source.fetch().await {
            Ok(raw) => {
                let snapshot = normalize(&raw, Utc::now());
                let known = snapshot.readings.iter().filter(|r| r.value.is_known()).count();

                self.pager.resync(page_count_for(snapshot.len(), self.page_size));
                info!(
                    readings = snapshot.len(),
                    known,
                    pages = self.pager.page_count,
                    "Telemetry snapshot refreshed"
                );

                self.snapshot = Some(snapshot);
                self.last_error = None;
                self.lifecycle = Lifecycle::Ready;
            }
            Err(e) => {
                warn!(error = %e, "Telemetry fetch failed");
                self.last_error = Some(e.to_string());
                self.lifecycle = Lifecycle::Failed;
            }
        }
    }

    /// Apply a scroll signal from the sensor carousel and return the
    /// resulting active page index.
    pub fn report_scroll(&mut self, offset: f64, viewport_width: f64) -> usize {
        self.pager.on_scroll(offset, viewport_width);
        self.pager.active_index
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The current published snapshot, if any fetch has succeeded.
    pub fn snapshot(&self) -> Option<&TelemetrySnapshot> {
        self.snapshot.as_ref()
    }

    /// Description of the most recent fetch failure, if the controller is
    /// (or was last) in the `Failed` state.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Alerts derived from the current snapshot. Empty before the first
    /// successful fetch. Recomputed fresh on every call.
    pub fn alerts(&self) -> Vec<Alert> {
        self.snapshot.as_ref().map(evaluate).unwrap_or_default()
    }

    /// The current snapshot partitioned into pages. Empty before the first
    /// successful fetch. Recomputed fresh on every call.
    pub fn page_view(&self) -> PageView {
        self.snapshot
            .as_ref()
            .map(|s| paginate(s, self.page_size))
            .unwrap_or_default()
    }

    /// Index of the page currently in view.
    pub fn active_index(&self) -> usize {
        self.pager.active_index
    }

    /// Number of pages in the current snapshot.
    pub fn page_count(&self) -> usize {
        self.pager.page_count
    }
}
