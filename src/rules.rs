//! Threshold rule table and alert evaluation.
//!
//! Alert generation is a declarative, ordered table of
//! `{sensor, trigger, severity, message}` tuples evaluated uniformly against
//! a snapshot, rather than inline conditional chains. Adding a rule means
//! adding a row to [`RULES`]; the engine itself never changes.
//!
//! Ordering: the table is declared most-urgent-first (Critical before
//! Warning before Info) and [`evaluate`] preserves declaration order, so the
//! resulting alert list reads top-down on the Smart Info screen without any
//! re-sorting.

use crate::model::{Alert, SensorKey, Severity, TelemetrySnapshot};

/// Threshold condition for a single sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fires when the reading is strictly below the threshold.
    Below(f64),
    /// Fires when the reading is strictly above the threshold.
    Above(f64),
}

impl Trigger {
    /// Whether a known reading satisfies this condition.
    pub fn fires(&self, value: f64) -> bool {
        match self {
            Trigger::Below(threshold) => value < *threshold,
            Trigger::Above(threshold) => value > *threshold,
        }
    }
}

/// A static predicate-to-alert mapping evaluated per snapshot.
///
/// Rules are pure data: no hidden state, no side effects. The message
/// template carries a `{value}` placeholder replaced with the formatted
/// reading when the rule fires.
#[derive(Debug, Clone, Copy)]
pub struct AlertRule {
    /// Stable identifier, unique within the table.
    pub id: &'static str,

    /// The sensor this rule watches.
    pub key: SensorKey,

    /// When the rule fires.
    pub trigger: Trigger,

    /// Severity of the resulting alert.
    pub severity: Severity,

    /// Alert headline.
    pub title: &'static str,

    /// Message body with a `{value}` placeholder.
    pub message_template: &'static str,

    /// Verbatim action-button label for the alert card.
    pub action_label: &'static str,
}

/// The alert rule table, declared most-urgent-first.
pub const RULES: &[AlertRule] = &[
    AlertRule {
        id: "low-soil-moisture-1",
        key: SensorKey::SoilMoisture1,
        trigger: Trigger::Below(30.0),
        severity: Severity::Critical,
        title: "Low Soil Moisture",
        message_template: "Soil moisture has dropped to {value}%. \
             Your crops need immediate watering to prevent stress.",
        action_label: "Start irrigation system",
    },
    AlertRule {
        id: "low-soil-moisture-2",
        key: SensorKey::SoilMoisture2,
        trigger: Trigger::Below(30.0),
        severity: Severity::Critical,
        title: "Low Soil Moisture",
        message_template: "Soil moisture has dropped to {value}%. \
             Your crops need immediate watering to prevent stress.",
        action_label: "Start irrigation system",
    },
    AlertRule {
        id: "high-uv-index",
        key: SensorKey::UvIndex,
        trigger: Trigger::Above(7.0),
        severity: Severity::Warning,
        title: "High UV Index",
        message_template: "UV index has reached {value}. \
             Prolonged exposure may stress sensitive crops.",
        action_label: "Shade sensitive crops",
    },
    AlertRule {
        id: "heavy-rainfall",
        key: SensorKey::RainTicks,
        trigger: Trigger::Above(15.0),
        severity: Severity::Warning,
        title: "Heavy Rainfall Detected",
        message_template: "Rain gauge recorded {value} ticks this period. \
             Check field drainage and cover sensitive crops.",
        action_label: "Prepare crop protection",
    },
    AlertRule {
        id: "poor-air-quality",
        key: SensorKey::AirQuality,
        trigger: Trigger::Below(40.0),
        severity: Severity::Warning,
        title: "Poor Air Quality",
        message_template: "Air quality index has fallen to {value}. \
             Consider postponing outdoor field work.",
        action_label: "Reschedule outdoor spraying",
    },
];

/// Evaluate the rule table against one snapshot.
///
/// Iterates [`RULES`] in declared order. A rule whose reading is `Unknown`
/// never fires: missing data must not produce false alarms from sensor
/// dropout. Pure and deterministic; evaluating the same snapshot twice
/// yields structurally identical output.
pub fn evaluate(snapshot: &TelemetrySnapshot) -> Vec<Alert> {
    RULES
        .iter()
        .filter_map(|rule| {
            let value = snapshot.reading(rule.key)?.value.as_f64()?;

            if !rule.trigger.fires(value) {
                return None;
            }

            Some(Alert {
                rule_id: rule.id,
                severity: rule.severity,
                title: rule.title,
                generated_at: snapshot.captured_at,
                message: rule
                    .message_template
                    .replace("{value}", &format_value(value)),
                action_label: rule.action_label,
            })
        })
        .collect()
}

/// Format a reading for message substitution.
///
/// Integral values render without decimals ("25"), fractional values with
/// one decimal ("25.4").
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
