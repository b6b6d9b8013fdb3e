//! Snapshot data model
//!
//! The payload served by `/latest-data` and the two validated snapshots derived from it.

use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a decoded body cannot become a [`LatestData`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` is not an object")]
    FieldNotAnObject(&'static str),

    #[error("nutrient `{name}` is not numeric: {value}")]
    NonNumericNutrient { name: String, value: String },
}

/// Latest raw sensor readings, keyed by sensor name, in payload order.
#[derive(Debug, Clone, Default)]
pub struct SensorSnapshot {
    readings: Map<String, Value>,
}

// Order is part of what gets displayed, so equality is order-sensitive.
impl PartialEq for SensorSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.readings.len() == other.readings.len()
            && self.readings.iter().eq(other.readings.iter())
    }
}

impl SensorSnapshot {
    pub fn new(readings: Map<String, Value>) -> Self {
        Self { readings }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.readings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Numeric reading for `name`, accepting JSON numbers and numeric strings.
    pub fn numeric(&self, name: &str) -> Option<f64> {
        match self.readings.get(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

/// Latest predicted nutrient levels, keyed by nutrient name, in payload order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientSnapshot {
    levels: Vec<(String, f64)>,
}

impl NutrientSnapshot {
    pub fn new(levels: Vec<(String, f64)>) -> Self {
        Self { levels }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.levels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// One validated `/latest-data` response. Both halves always come from the same body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestData {
    pub sensor: SensorSnapshot,
    pub nutrients: NutrientSnapshot,
}

impl LatestData {
    /// Validate a decoded body: both fields present, both objects, every nutrient a number.
    pub fn from_value(body: Value) -> Result<Self, ShapeError> {
        let Value::Object(mut body) = body else {
            return Err(ShapeError::NotAnObject);
        };

        let sensor = match body.remove("sensor") {
            Some(Value::Object(readings)) => SensorSnapshot::new(readings),
            Some(_) => return Err(ShapeError::FieldNotAnObject("sensor")),
            None => return Err(ShapeError::MissingField("sensor")),
        };

        let nutrients = match body.remove("nutrients") {
            Some(Value::Object(levels)) => {
                let mut parsed = Vec::with_capacity(levels.len());
                for (name, value) in levels {
                    match value.as_f64() {
                        Some(level) => parsed.push((name, level)),
                        None => {
                            return Err(ShapeError::NonNumericNutrient {
                                name,
                                value: value.to_string(),
                            });
                        }
                    }
                }
                NutrientSnapshot::new(parsed)
            }
            Some(_) => return Err(ShapeError::FieldNotAnObject("nutrients")),
            None => return Err(ShapeError::MissingField("nutrients")),
        };

        Ok(Self { sensor, nutrients })
    }
}

/// Default string form of a reading: strings without quotes, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_payload_order() {
        let body: Value = serde_json::from_str(
            r#"{"sensor":{"pH":6.1,"TDS":900,"Temperature":"22C"},
                "nutrients":{"Sulfur":12.0,"Nitrogen":300.5}}"#,
        )
        .unwrap();

        let data = LatestData::from_value(body).unwrap();
        let sensor_keys: Vec<&str> = data.sensor.iter().map(|(k, _)| k).collect();
        assert_eq!(sensor_keys, vec!["pH", "TDS", "Temperature"]);
        let nutrient_keys: Vec<&str> = data.nutrients.iter().map(|(k, _)| k).collect();
        assert_eq!(nutrient_keys, vec!["Sulfur", "Nitrogen"]);
    }

    #[test]
    fn test_from_value_rejects_missing_nutrients() {
        let result = LatestData::from_value(json!({"sensor": {"pH": 6.0}}));
        assert_eq!(result, Err(ShapeError::MissingField("nutrients")));
    }

    #[test]
    fn test_from_value_rejects_missing_sensor() {
        let result = LatestData::from_value(json!({"nutrients": {"N": 1.0}}));
        assert_eq!(result, Err(ShapeError::MissingField("sensor")));
    }

    #[test]
    fn test_from_value_rejects_non_object_fields() {
        assert_eq!(
            LatestData::from_value(json!({"sensor": [], "nutrients": {}})),
            Err(ShapeError::FieldNotAnObject("sensor"))
        );
        assert_eq!(
            LatestData::from_value(json!({"sensor": {}, "nutrients": 4})),
            Err(ShapeError::FieldNotAnObject("nutrients"))
        );
        assert_eq!(
            LatestData::from_value(json!("hello")),
            Err(ShapeError::NotAnObject)
        );
    }

    #[test]
    fn test_from_value_rejects_non_numeric_nutrient() {
        let result = LatestData::from_value(json!({
            "sensor": {},
            "nutrients": {"Nitrogen": "high"}
        }));
        assert_eq!(
            result,
            Err(ShapeError::NonNumericNutrient {
                name: "Nitrogen".to_string(),
                value: "\"high\"".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_server_payload_is_rejected() {
        // The service answers `{}` until its first sensor post arrives.
        assert_eq!(
            LatestData::from_value(json!({})),
            Err(ShapeError::MissingField("sensor"))
        );
    }

    #[test]
    fn test_numeric_reading_accepts_numbers_and_numeric_strings() {
        let data = LatestData::from_value(json!({
            "sensor": {"pH": 6.2, "TDS": "850", "Temperature": "22C", "Pump": true},
            "nutrients": {}
        }))
        .unwrap();

        assert_eq!(data.sensor.numeric("pH"), Some(6.2));
        assert_eq!(data.sensor.numeric("TDS"), Some(850.0));
        assert_eq!(data.sensor.numeric("Temperature"), None);
        assert_eq!(data.sensor.numeric("Pump"), None);
        assert_eq!(data.sensor.numeric("Humidity"), None);
    }

    #[test]
    fn test_sensor_equality_is_order_sensitive() {
        let a: Map<String, Value> = serde_json::from_str(r#"{"pH":6,"TDS":900}"#).unwrap();
        let b: Map<String, Value> = serde_json::from_str(r#"{"TDS":900,"pH":6}"#).unwrap();
        assert_ne!(SensorSnapshot::new(a.clone()), SensorSnapshot::new(b));
        assert_eq!(SensorSnapshot::new(a.clone()), SensorSnapshot::new(a));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("22C")), "22C");
        assert_eq!(display_value(&json!(6.5)), "6.5");
        assert_eq!(display_value(&json!(900)), "900");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&Value::Null), "null");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }
}
