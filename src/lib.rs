//! Fieldsense - Telemetry core for a smart-farm sensor dashboard.
//!
//! # Overview
//!
//! Fieldsense ingests a periodic snapshot of environmental sensor telemetry
//! (soil moisture, air quality, UV index, rainfall, wind, temperature) from
//! a single remote endpoint and derives two things:
//!
//! - A prioritized, ordered list of actionable alerts from a declarative
//!   threshold-rule table
//! - Paging state for presenting the sensor values as fixed-size pages with
//!   a scroll-driven position indicator
//!
//! The presentation layer reads derived state only; it influences the core
//! exclusively through two signals, "refresh requested" and "scroll moved".
//!
//! # Design
//!
//! One immutable [`model::TelemetrySnapshot`] is owned by the
//! [`controller::RefreshController`] and replaced atomically per fetch cycle.
//! The rule engine and pager are pure views recomputed from that value on
//! demand — there are no independently mutated caches to drift out of sync.
//!
//! # Modules
//!
//! - [`model`]: Sensor keys, readings, snapshots, severities, and alerts
//! - [`normalize`]: Total conversion of arbitrary JSON payloads into snapshots
//! - [`rules`]: The declarative alert rule table and its evaluator
//! - [`pager`]: Pagination and scroll-offset projection
//! - [`source`]: The HTTP fetch collaborator behind a mockable trait
//! - [`controller`]: Fetch lifecycle and snapshot ownership
//! - [`error`]: The two-variant error taxonomy (fetch failure, bad config)

pub mod controller;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pager;
pub mod rules;
pub mod source;
