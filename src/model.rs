//! Data models for Fieldsense.
//!
//! # Snapshot Discipline
//!
//! All types in this module are **rebuilt fully on every fetch** and never
//! mutated in place:
//!
//! - A [`TelemetrySnapshot`] is replaced wholesale by the next successful fetch
//! - An [`Alert`] is derived fresh on each evaluation and has no identity
//!   across fetches
//! - A missing or malformed sensor value is an explicit [`SensorValue::Unknown`],
//!   never a zero
//!
//! Downstream consumers (rule engine, pager, presentation layer) treat these
//! as immutable views of one capture instant.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The fixed set of sensors reported by the field station.
///
/// The enumeration order is the canonical display order: a normalized
/// snapshot always contains exactly one reading per key, in this order,
/// regardless of which fields the remote payload contains or omits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKey {
    /// Air quality index near the field station.
    AirQuality,
    /// Soil moisture probe 1 (percent).
    SoilMoisture1,
    /// Soil moisture probe 2 (percent).
    SoilMoisture2,
    /// Temperature probe 1 (degrees Celsius).
    Temperature1,
    /// Temperature probe 2 (degrees Celsius).
    Temperature2,
    /// UV index.
    UvIndex,
    /// Wind speed (km/h).
    WindSpeed,
    /// Wind direction (degrees from north).
    WindDirection,
    /// Rain gauge tip count for the current period.
    RainTicks,
}

impl SensorKey {
    /// All sensor keys in canonical display order.
    pub const ALL: [SensorKey; 9] = [
        SensorKey::AirQuality,
        SensorKey::SoilMoisture1,
        SensorKey::SoilMoisture2,
        SensorKey::Temperature1,
        SensorKey::Temperature2,
        SensorKey::UvIndex,
        SensorKey::WindSpeed,
        SensorKey::WindDirection,
        SensorKey::RainTicks,
    ];

    /// The field name used for this sensor in the remote JSON payload.
    pub fn field_name(&self) -> &'static str {
        match self {
            SensorKey::AirQuality => "air_quality",
            SensorKey::SoilMoisture1 => "soil_moisture_1",
            SensorKey::SoilMoisture2 => "soil_moisture_2",
            SensorKey::Temperature1 => "temperature_1",
            SensorKey::Temperature2 => "temperature_2",
            SensorKey::UvIndex => "uv_index",
            SensorKey::WindSpeed => "wind_speed",
            SensorKey::WindDirection => "wind_direction",
            SensorKey::RainTicks => "rain_ticks",
        }
    }

    /// Human-readable name shown on the sensor card.
    pub fn display_name(&self) -> &'static str {
        match self {
            SensorKey::AirQuality => "Air Quality",
            SensorKey::SoilMoisture1 => "Soil Moisture 1",
            SensorKey::SoilMoisture2 => "Soil Moisture 2",
            SensorKey::Temperature1 => "Temperature 1",
            SensorKey::Temperature2 => "Temperature 2",
            SensorKey::UvIndex => "UV Index",
            SensorKey::WindSpeed => "Wind Speed",
            SensorKey::WindDirection => "Wind Direction",
            SensorKey::RainTicks => "Rainfall",
        }
    }

    /// Unit string displayed next to the value. Empty for unitless indices.
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKey::AirQuality => "AQI",
            SensorKey::SoilMoisture1 | SensorKey::SoilMoisture2 => "%",
            SensorKey::Temperature1 | SensorKey::Temperature2 => "°C",
            SensorKey::UvIndex => "",
            SensorKey::WindSpeed => "km/h",
            SensorKey::WindDirection => "°",
            SensorKey::RainTicks => "ticks",
        }
    }
}

/// A sensor value, or the explicit absence of one.
///
/// `Unknown` is produced whenever the remote payload omits a field or carries
/// something that is not a number. It is deliberately distinct from zero:
/// a dry rain gauge reads `Known(0.0)`, a disconnected one reads `Unknown`.
///
/// Serializes untagged, so a known value renders as a bare number and an
/// unknown one as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    /// A numeric reading reported by the station.
    Known(f64),
    /// The station did not report a usable value for this sensor.
    Unknown,
}

impl SensorValue {
    /// Returns the numeric value, if one was reported.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SensorValue::Known(v) => Some(*v),
            SensorValue::Unknown => None,
        }
    }

    /// True when the station reported a usable value.
    pub fn is_known(&self) -> bool {
        matches!(self, SensorValue::Known(_))
    }
}

/// One sensor's value plus its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    /// Which sensor this reading belongs to.
    pub key: SensorKey,

    /// Human-readable sensor name.
    pub display_name: &'static str,

    /// The reported value, or `Unknown`.
    pub value: SensorValue,

    /// Display unit for the value.
    pub unit: &'static str,
}

impl SensorReading {
    /// Build a reading for `key`, filling in the display metadata.
    pub fn new(key: SensorKey, value: SensorValue) -> Self {
        Self {
            key,
            display_name: key.display_name(),
            value,
            unit: key.unit(),
        }
    }
}

/// One fetched, normalized set of sensor readings captured at one instant.
///
/// Invariant: `readings` holds exactly one entry per [`SensorKey`], in
/// [`SensorKey::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    /// When this snapshot was captured.
    pub captured_at: DateTime<Utc>,

    /// One reading per sensor key, in canonical order.
    pub readings: Vec<SensorReading>,
}

impl TelemetrySnapshot {
    /// Look up the reading for a specific sensor.
    pub fn reading(&self, key: SensorKey) -> Option<&SensorReading> {
        self.readings.iter().find(|r| r.key == key)
    }

    /// Number of readings in the snapshot.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the snapshot carries no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Alert severity levels, declared most-urgent-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Serious condition requiring immediate action.
    Critical,
    /// Developing condition worth attention soon.
    Warning,
    /// Advisory with no urgency.
    Info,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }
}

/// An actionable alert derived from one snapshot.
///
/// Alerts are never stored: each evaluation of the rule table yields a fully
/// new list, and a semantically persistent condition produces a fresh alert
/// per fetch. `generated_at` is the snapshot's capture timestamp, so two
/// evaluations of the same snapshot are structurally identical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Identifier of the rule that produced this alert.
    pub rule_id: &'static str,

    /// How urgent the condition is.
    pub severity: Severity,

    /// Short headline for the alert card.
    pub title: &'static str,

    /// Capture timestamp of the snapshot this alert was derived from.
    pub generated_at: DateTime<Utc>,

    /// Human-readable description with the offending value substituted in.
    pub message: String,

    /// Verbatim label for the alert card's action button.
    pub action_label: &'static str,
}
