//! Hard-coded storage thresholds for estimating spoilage without a model.

use crate::domain::foundation::{Confidence, RiskLevel};

use super::{SensorHistory, SensorReading, SpoilageAssessment};

/// Confidence reported for threshold-based estimates.
pub const THRESHOLD_CONFIDENCE: f64 = 0.85;

const WARM_TEMPERATURE_C: f64 = 17.0;
const HOT_TEMPERATURE_C: f64 = 20.0;
const HUMID_PCT: f64 = 70.0;
const TOMATO_SENSITIVE_TEMPERATURE_C: f64 = 15.0;
const TOMATO_HOT_TEMPERATURE_C: f64 = 18.0;

/// Estimates risk and shelf life from fixed temperature/humidity thresholds.
///
/// Rules are applied in order, later rules overriding earlier ones:
/// - baseline: Low risk, 15 days
/// - warmer than 17 °C or more humid than 70 %: Medium, 7 days
/// - warmer than 20 °C: High, 2 days
/// - tomatoes warmer than 15 °C: High, 3 days
pub fn assess_by_thresholds(reading: &SensorReading) -> SpoilageAssessment {
    let mut risk = RiskLevel::Low;
    let mut days = 15.0;

    if reading.temperature() > WARM_TEMPERATURE_C || reading.humidity() > HUMID_PCT {
        risk = RiskLevel::Medium;
        days = 7.0;
    }

    if reading.temperature() > HOT_TEMPERATURE_C {
        risk = RiskLevel::High;
        days = 2.0;
    }

    if reading.is_produce("tomato") && reading.temperature() > TOMATO_SENSITIVE_TEMPERATURE_C {
        risk = RiskLevel::High;
        days = 3.0;
    }

    threshold_assessment(risk, days)
}

/// Estimates spoilage from the average temperature of a history.
///
/// Only tomatoes are temperature sensitive here: above 18 °C they are High
/// with 2 days left, above 15 °C Medium with 5. Everything else, including
/// an unnamed produce, is Low with 15 days. Humidity is not consulted.
pub fn assess_history(history: &SensorHistory) -> SpoilageAssessment {
    let temperature = history.average_temperature();
    let is_tomato = history.produce_type.trim().eq_ignore_ascii_case("tomato");

    let (risk, days) = if is_tomato && temperature > TOMATO_HOT_TEMPERATURE_C {
        (RiskLevel::High, 2.0)
    } else if is_tomato && temperature > TOMATO_SENSITIVE_TEMPERATURE_C {
        (RiskLevel::Medium, 5.0)
    } else {
        (RiskLevel::Low, 15.0)
    };

    threshold_assessment(risk, days)
}

fn threshold_assessment(risk: RiskLevel, remaining_days: f64) -> SpoilageAssessment {
    SpoilageAssessment {
        risk,
        remaining_days,
        confidence: Confidence::new(THRESHOLD_CONFIDENCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(produce: &str, temperature: f64, humidity: f64) -> SensorReading {
        SensorReading::new(produce, temperature, humidity, 3).unwrap()
    }

    #[test]
    fn cool_dry_storage_is_low_risk() {
        let assessment = assess_by_thresholds(&reading("Potato", 10.0, 50.0));
        assert_eq!(assessment.risk, RiskLevel::Low);
        assert_eq!(assessment.remaining_days, 15.0);
    }

    #[test]
    fn humid_storage_is_medium_risk() {
        let assessment = assess_by_thresholds(&reading("Potato", 10.0, 75.0));
        assert_eq!(assessment.risk, RiskLevel::Medium);
        assert_eq!(assessment.remaining_days, 7.0);
    }

    #[test]
    fn warm_storage_is_medium_risk() {
        let assessment = assess_by_thresholds(&reading("Onion", 18.0, 40.0));
        assert_eq!(assessment.risk, RiskLevel::Medium);
    }

    #[test]
    fn hot_storage_is_high_risk() {
        let assessment = assess_by_thresholds(&reading("Onion", 25.0, 40.0));
        assert_eq!(assessment.risk, RiskLevel::High);
        assert_eq!(assessment.remaining_days, 2.0);
    }

    #[test]
    fn tomatoes_are_sensitive_above_fifteen_degrees() {
        let assessment = assess_by_thresholds(&reading("tomato", 16.0, 40.0));
        assert_eq!(assessment.risk, RiskLevel::High);
        assert_eq!(assessment.remaining_days, 3.0);

        // The tomato rule overrides the hot-storage estimate too.
        let assessment = assess_by_thresholds(&reading("Tomato", 32.0, 82.0));
        assert_eq!(assessment.remaining_days, 3.0);
    }

    #[test]
    fn thresholds_are_strict() {
        let assessment = assess_by_thresholds(&reading("Onion", 17.0, 70.0));
        assert_eq!(assessment.risk, RiskLevel::Low);
    }

    fn history(produce: &str, temperatures: &[f64]) -> SensorHistory {
        SensorHistory {
            temperature_history: temperatures.to_vec(),
            produce_type: produce.to_string(),
            ..SensorHistory::default()
        }
    }

    #[test]
    fn warm_tomato_history_is_medium_risk() {
        let assessment = assess_history(&history("Tomato", &[16.0, 16.0]));
        assert_eq!(assessment.risk, RiskLevel::Medium);
        assert_eq!(assessment.remaining_days, 5.0);
    }

    #[test]
    fn hot_tomato_history_is_high_risk() {
        let assessment = assess_history(&history(" TOMATO ", &[17.0, 21.0]));
        assert_eq!(assessment.risk, RiskLevel::High);
        assert_eq!(assessment.remaining_days, 2.0);
    }

    #[test]
    fn tomato_history_bounds_are_strict() {
        assert_eq!(assess_history(&history("tomato", &[18.0])).risk, RiskLevel::Medium);
        assert_eq!(assess_history(&history("tomato", &[15.0])).risk, RiskLevel::Low);
    }

    #[test]
    fn other_produce_history_is_low_risk_even_when_hot() {
        let mut hot = history("Banana", &[25.0]);
        hot.humidity_history = vec![95.0];

        let assessment = assess_history(&hot);

        assert_eq!(assessment.risk, RiskLevel::Low);
        assert_eq!(assessment.remaining_days, 15.0);
    }

    #[test]
    fn empty_history_is_low_risk() {
        let assessment = assess_history(&SensorHistory::default());
        assert_eq!(assessment.risk, RiskLevel::Low);
        assert_eq!(assessment.remaining_days, 15.0);
        assert_eq!(assessment.confidence.value(), THRESHOLD_CONFIDENCE);
    }

    #[test]
    fn threshold_confidence_is_fixed() {
        let assessment = assess_by_thresholds(&reading("Onion", 30.0, 90.0));
        assert_eq!(assessment.confidence.value(), THRESHOLD_CONFIDENCE);
    }
}
