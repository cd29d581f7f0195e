//! Scorer backed by an externally trained model exported to JSON.
//!
//! The model file carries everything inference needs:
//!
//! ```json
//! {
//!   "produce_classes": ["Banana", "Mango", "Tomato"],
//!   "risk_classes": ["High", "Low", "Medium"],
//!   "classifier": {
//!     "coefficients": [[...5 weights...], [...], [...]],
//!     "intercepts": [0.1, -0.2, 0.0]
//!   },
//!   "regressor": { "coefficients": [...5 weights...], "intercept": 14.0 }
//! }
//! ```
//!
//! Features are `[temperature, humidity, storage_days, produce_index,
//! temperature * humidity]`, where `produce_index` is the position of the
//! produce in `produce_classes`. The classifier is a multinomial linear model
//! scored with softmax; the regressor predicts remaining days directly.

use serde::Deserialize;
use std::path::Path;

use crate::domain::foundation::{Confidence, RiskLevel};
use crate::domain::spoilage::{SensorReading, SpoilageAssessment};
use crate::ports::{ScoringError, SpoilageScorer};

/// Number of input features the model expects.
pub const FEATURE_COUNT: usize = 5;

/// A trained spoilage model.
#[derive(Debug, Clone, Deserialize)]
pub struct SpoilageModel {
    produce_classes: Vec<String>,
    risk_classes: Vec<String>,
    classifier: LinearClassifier,
    regressor: LinearRegressor,
}

#[derive(Debug, Clone, Deserialize)]
struct LinearClassifier {
    coefficients: Vec<[f64; FEATURE_COUNT]>,
    intercepts: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct LinearRegressor {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl SpoilageModel {
    /// Decodes and validates a model from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let model: SpoilageModel =
            serde_json::from_str(json).map_err(|e| ScoringError::InvalidModel(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ScoringError> {
        if self.produce_classes.is_empty() {
            return Err(ScoringError::InvalidModel("no produce classes".to_string()));
        }
        if self.risk_classes.is_empty() {
            return Err(ScoringError::InvalidModel("no risk classes".to_string()));
        }
        if self.classifier.coefficients.len() != self.risk_classes.len()
            || self.classifier.intercepts.len() != self.risk_classes.len()
        {
            return Err(ScoringError::InvalidModel(format!(
                "classifier has {} weight rows and {} intercepts for {} risk classes",
                self.classifier.coefficients.len(),
                self.classifier.intercepts.len(),
                self.risk_classes.len()
            )));
        }
        Ok(())
    }

    /// Position of a produce type in the label encoder, ignoring case.
    fn encode_produce(&self, produce: &str) -> Option<usize> {
        self.produce_classes
            .iter()
            .position(|class| class.eq_ignore_ascii_case(produce))
    }

    fn features(&self, reading: &SensorReading) -> Result<[f64; FEATURE_COUNT], ScoringError> {
        let produce_index = self
            .encode_produce(reading.produce())
            .ok_or_else(|| ScoringError::UnknownProduce(reading.produce().to_string()))?;

        Ok([
            reading.temperature(),
            reading.humidity(),
            f64::from(reading.storage_days()),
            produce_index as f64,
            reading.temperature() * reading.humidity(),
        ])
    }

    /// Predicts the risk class and its softmax probability.
    fn classify(&self, features: &[f64; FEATURE_COUNT]) -> (RiskLevel, f64) {
        let logits: Vec<f64> = self
            .classifier
            .coefficients
            .iter()
            .zip(&self.classifier.intercepts)
            .map(|(weights, intercept)| dot(weights, features) + intercept)
            .collect();

        let (best, best_logit) = logits
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, logit)| {
                if logit > acc.1 {
                    (i, logit)
                } else {
                    acc
                }
            });

        // Shift by the max logit so exp() cannot overflow.
        let denominator: f64 = logits.iter().map(|l| (l - best_logit).exp()).sum();
        let probability = if denominator.is_finite() && denominator > 0.0 {
            1.0 / denominator
        } else {
            0.0
        };

        (RiskLevel::from(self.risk_classes[best].as_str()), probability)
    }

    fn remaining_days(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let predicted = dot(&self.regressor.coefficients, features) + self.regressor.intercept;
        if predicted.is_finite() {
            predicted.max(0.0)
        } else {
            0.0
        }
    }

    pub fn produce_classes(&self) -> &[String] {
        &self.produce_classes
    }
}

fn dot(weights: &[f64; FEATURE_COUNT], features: &[f64; FEATURE_COUNT]) -> f64 {
    weights.iter().zip(features).map(|(w, x)| w * x).sum()
}

/// Scores readings with a model loaded once at startup.
#[derive(Debug, Clone)]
pub struct ModelFileScorer {
    model: SpoilageModel,
}

impl ModelFileScorer {
    /// Wraps an already decoded model.
    pub fn new(model: SpoilageModel) -> Self {
        Self { model }
    }

    /// Reads and validates the model file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let json = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::model_load(&shown, e.to_string()))?;
        let model = SpoilageModel::from_json(&json).map_err(|e| match e {
            ScoringError::InvalidModel(reason) => ScoringError::model_load(&shown, reason),
            other => other,
        })?;

        tracing::info!(
            path = %shown,
            produce_classes = model.produce_classes.len(),
            risk_classes = model.risk_classes.len(),
            "Loaded spoilage model"
        );

        Ok(Self::new(model))
    }
}

impl SpoilageScorer for ModelFileScorer {
    fn score(&self, reading: &SensorReading) -> Result<SpoilageAssessment, ScoringError> {
        let features = self.model.features(reading)?;
        let (risk, probability) = self.model.classify(&features);
        let remaining_days = self.model.remaining_days(&features);

        Ok(SpoilageAssessment::new(
            risk,
            remaining_days,
            Confidence::new(probability),
        )?)
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
