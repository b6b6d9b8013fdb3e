//! Safe operating ranges and alert evaluation for the held snapshots.

use crate::snapshot::{NutrientSnapshot, SensorSnapshot};
use std::fmt::Display;

/// Inclusive safe range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

/// Sensor readings that carry a safe range.
pub const SENSOR_THRESHOLDS: &[(&str, Range)] = &[
    ("Temperature", Range { low: 20.0, high: 30.0 }),
    ("pH", Range { low: 5.5, high: 6.5 }),
    ("TDS", Range { low: 500.0, high: 1800.0 }),
    ("Humidity", Range { low: 50.0, high: 75.0 }),
];

/// Predicted nutrient levels that carry a safe range.
pub const NUTRIENT_THRESHOLDS: &[(&str, Range)] = &[
    ("Nitrogen", Range { low: 200.0, high: 1500.0 }),
    ("Phosphorus", Range { low: 10.0, high: 100.0 }),
    ("Potassium", Range { low: 40.0, high: 200.0 }),
    ("Calcium", Range { low: 20.0, high: 150.0 }),
    ("Magnesium", Range { low: 10.0, high: 80.0 }),
    ("Sulfur", Range { low: 5.0, high: 50.0 }),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Direction {
    #[strum(serialize = "LOW")]
    Low,
    #[strum(serialize = "HIGH")]
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sensor,
    Nutrient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub parameter: String,
    pub value: f64,
    pub direction: Direction,
    pub category: Category,
}

impl Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.category {
            Category::Sensor => write!(
                f,
                "{} is too {}: {}",
                self.parameter, self.direction, self.value
            ),
            Category::Nutrient => write!(
                f,
                "{} is too {}: {:.2}",
                self.parameter, self.direction, self.value
            ),
        }
    }
}

fn check(parameter: &str, value: f64, range: Range, category: Category) -> Option<Alert> {
    let direction = if value < range.low {
        Direction::Low
    } else if value > range.high {
        Direction::High
    } else {
        return None;
    };
    Some(Alert {
        parameter: parameter.to_string(),
        value,
        direction,
        category,
    })
}

/// Alerts for the ranged sensor readings, in threshold-table order.
/// Readings that are absent or not numeric are skipped.
pub fn evaluate_sensor(snapshot: &SensorSnapshot) -> Vec<Alert> {
    SENSOR_THRESHOLDS
        .iter()
        .filter_map(|(name, range)| {
            let value = snapshot.numeric(name)?;
            check(name, value, *range, Category::Sensor)
        })
        .collect()
}

/// Alerts for nutrients with a known range, in snapshot order.
pub fn evaluate_nutrients(snapshot: &NutrientSnapshot) -> Vec<Alert> {
    snapshot
        .iter()
        .filter_map(|(name, value)| {
            let (_, range) = NUTRIENT_THRESHOLDS.iter().find(|(n, _)| *n == name)?;
            check(name, value, *range, Category::Nutrient)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::LatestData;
    use serde_json::json;

    fn data(body: serde_json::Value) -> LatestData {
        LatestData::from_value(body).unwrap()
    }

    #[test]
    fn test_sensor_alerts_low_and_high() {
        let d = data(json!({
            "sensor": {"Temperature": 18.5, "pH": "7.2", "TDS": 900, "Humidity": 60},
            "nutrients": {}
        }));
        let alerts = evaluate_sensor(&d.sensor);
        let rendered: Vec<String> = alerts.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["Temperature is too LOW: 18.5", "pH is too HIGH: 7.2"]
        );
    }

    #[test]
    fn test_sensor_alerts_skip_non_numeric_and_missing() {
        let d = data(json!({
            "sensor": {"Temperature": "22C", "Turbidity": 3000},
            "nutrients": {}
        }));
        assert!(evaluate_sensor(&d.sensor).is_empty());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let d = data(json!({
            "sensor": {"Temperature": 20, "Humidity": 75},
            "nutrients": {"Sulfur": 5.0, "Magnesium": 80.0}
        }));
        assert!(evaluate_sensor(&d.sensor).is_empty());
        assert!(evaluate_nutrients(&d.nutrients).is_empty());
    }

    #[test]
    fn test_nutrient_alerts_use_two_decimals_and_ignore_unknown() {
        let d = data(json!({
            "sensor": {},
            "nutrients": {"Nitrogen": 2000.4, "Boron": 9999, "Calcium": 3}
        }));
        let rendered: Vec<String> = evaluate_nutrients(&d.nutrients)
            .iter()
            .map(|a| a.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["Nitrogen is too HIGH: 2000.40", "Calcium is too LOW: 3.00"]
        );
    }
}
