//! Telemetry snapshot normalization.
//!
//! The remote endpoint returns a JSON object whose fields may be absent,
//! `null`, or the wrong type entirely, depending on which probes were
//! reachable when the station sampled. [`normalize`] converts that arbitrary
//! payload into a fixed-shape [`TelemetrySnapshot`]: one reading per
//! [`SensorKey`], always in canonical order.
//!
//! Normalization is **total**: no payload shape can make it fail. A field
//! that cannot be read as a number degrades that single reading to
//! [`SensorValue::Unknown`] and the remaining fields are processed normally.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::{SensorKey, SensorReading, SensorValue, TelemetrySnapshot};

/// Convert a raw payload into a fixed-shape snapshot captured at `captured_at`.
///
/// For each [`SensorKey`] the corresponding field is looked up by name in
/// `raw`. Missing fields, `null`, and non-numeric values (including numeric
/// strings) all become [`SensorValue::Unknown`]. Extra fields in the payload
/// are ignored. A non-object payload yields a snapshot of all-`Unknown`
/// readings.
pub fn normalize(raw: &Value, captured_at: DateTime<Utc>) -> TelemetrySnapshot {
    let readings = SensorKey::ALL
        .iter()
        .map(|&key| SensorReading::new(key, field_value(raw, key)))
        .collect();

    TelemetrySnapshot {
        captured_at,
        readings,
    }
}

/// Extract one sensor's value from the raw payload.
fn field_value(raw: &Value, key: SensorKey) -> SensorValue {
    match raw.get(key.field_name()).and_then(Value::as_f64) {
        Some(v) => SensorValue::Known(v),
        None => SensorValue::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_normalize_full_payload() {
        let raw = json!({
            "air_quality": 85,
            "soil_moisture_1": 44.5,
            "soil_moisture_2": 41,
            "temperature_1": 22.3,
            "temperature_2": 21.9,
            "uv_index": 5,
            "wind_speed": 12,
            "wind_direction": 180,
            "rain_ticks": 3,
        });

        let snapshot = normalize(&raw, now());

        assert_eq!(snapshot.len(), 9);
        assert!(snapshot.readings.iter().all(|r| r.value.is_known()));
        assert_eq!(
            snapshot.reading(SensorKey::SoilMoisture1).unwrap().value,
            SensorValue::Known(44.5)
        );
    }

    #[test]
    fn test_normalize_empty_object_all_unknown() {
        // Scenario: the station reported nothing at all
        let snapshot = normalize(&json!({}), now());

        assert_eq!(snapshot.len(), 9);
        assert!(snapshot.readings.iter().all(|r| !r.value.is_known()));
    }

    #[test]
    fn test_normalize_order_is_canonical_regardless_of_payload_order() {
        let raw = json!({
            "rain_ticks": 1,
            "air_quality": 50,
            "uv_index": 2,
        });

        let snapshot = normalize(&raw, now());

        let keys: Vec<SensorKey> = snapshot.readings.iter().map(|r| r.key).collect();
        assert_eq!(keys, SensorKey::ALL.to_vec());
    }

    #[test]
    fn test_normalize_null_field_is_unknown() {
        let raw = json!({ "uv_index": null, "air_quality": 55 });

        let snapshot = normalize(&raw, now());

        assert_eq!(
            snapshot.reading(SensorKey::UvIndex).unwrap().value,
            SensorValue::Unknown
        );
        assert_eq!(
            snapshot.reading(SensorKey::AirQuality).unwrap().value,
            SensorValue::Known(55.0)
        );
    }

    #[test]
    fn test_normalize_wrong_typed_field_degrades_only_that_key() {
        let raw = json!({
            "soil_moisture_1": "25",
            "soil_moisture_2": true,
            "temperature_1": [22.0],
            "temperature_2": { "c": 21.0 },
            "uv_index": 6,
        });

        let snapshot = normalize(&raw, now());

        for key in [
            SensorKey::SoilMoisture1,
            SensorKey::SoilMoisture2,
            SensorKey::Temperature1,
            SensorKey::Temperature2,
        ] {
            assert_eq!(snapshot.reading(key).unwrap().value, SensorValue::Unknown);
        }
        assert_eq!(
            snapshot.reading(SensorKey::UvIndex).unwrap().value,
            SensorValue::Known(6.0)
        );
    }

    #[test]
    fn test_normalize_extra_fields_ignored() {
        let raw = json!({
            "uv_index": 4,
            "battery_voltage": 3.7,
            "firmware": "1.0.3",
        });

        let snapshot = normalize(&raw, now());

        assert_eq!(snapshot.len(), 9);
        assert_eq!(
            snapshot.reading(SensorKey::UvIndex).unwrap().value,
            SensorValue::Known(4.0)
        );
    }

    #[test]
    fn test_normalize_non_object_payload_all_unknown() {
        for raw in [json!([1, 2, 3]), json!("telemetry"), json!(42), json!(null)] {
            let snapshot = normalize(&raw, now());
            assert_eq!(snapshot.len(), 9);
            assert!(snapshot.readings.iter().all(|r| !r.value.is_known()));
        }
    }

    #[test]
    fn test_normalize_zero_is_known_not_unknown() {
        let raw = json!({ "rain_ticks": 0 });

        let snapshot = normalize(&raw, now());

        assert_eq!(
            snapshot.reading(SensorKey::RainTicks).unwrap().value,
            SensorValue::Known(0.0)
        );
    }

    #[test]
    fn test_normalize_preserves_capture_timestamp() {
        let at = now();
        let snapshot = normalize(&json!({}), at);
        assert_eq!(snapshot.captured_at, at);
    }
}
