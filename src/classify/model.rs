use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// PredictionResponse – the wire format of the backend
// ---------------------------------------------------------------------------

/// JSON body returned by the inference endpoint.
///
/// Only these three fields are extracted; anything else the server sends is
/// discarded. `class` and `confidence` are required, `probabilities` is not.
#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub class: String,
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: Option<BTreeMap<String, f64>>,
}

impl PredictionResponse {
    /// Check the numeric contract before the result reaches the UI.
    /// Confidence must be a finite number within `0..=1`.
    pub fn validate(self) -> Result<ClassificationResult, AppError> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(AppError::NetworkOrParse {
                reason: format!("confidence out of range: {}", self.confidence),
            });
        }

        Ok(ClassificationResult {
            predicted_class: self.class,
            confidence: self.confidence,
            probabilities: self.probabilities,
        })
    }
}

// ---------------------------------------------------------------------------
// ClassificationResult – the one live result of the session
// ---------------------------------------------------------------------------

/// A validated classification answer. Fully replaced by each new analysis,
/// cleared on reset; never merged with a previous one.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    pub predicted_class: String,
    pub confidence: f64,
    pub probabilities: Option<BTreeMap<String, f64>>,
}

impl ClassificationResult {
    /// Confidence formatted for display with one decimal, e.g. `"87.0%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ClassificationResult, AppError> {
        let raw: PredictionResponse =
            serde_json::from_str(json).map_err(|e| AppError::NetworkOrParse {
                reason: e.to_string(),
            })?;
        raw.validate()
    }

    #[test]
    fn extracts_the_three_fields_and_drops_the_rest() {
        let result = parse(
            r#"{
                "class": "freshapples",
                "confidence": 0.93,
                "probabilities": {"freshapples": 0.93, "rottenapples": 0.07},
                "model_version": "v4",
                "inference_ms": 41
            }"#,
        )
        .unwrap();

        assert_eq!(result.predicted_class, "freshapples");
        assert_eq!(result.confidence, 0.93);
        let probs = result.probabilities.unwrap();
        assert_eq!(probs.len(), 2);
        assert_eq!(probs["rottenapples"], 0.07);
    }

    #[test]
    fn probabilities_are_optional() {
        let result = parse(r#"{"class": "rottenbanana", "confidence": 0.87}"#).unwrap();
        assert!(result.probabilities.is_none());
    }

    #[test]
    fn missing_class_is_rejected() {
        assert!(parse(r#"{"confidence": 0.5}"#).is_err());
    }

    #[test]
    fn missing_confidence_is_rejected() {
        assert!(parse(r#"{"class": "freshbanana"}"#).is_err());
    }

    #[test]
    fn confidence_above_one_is_rejected() {
        let err = parse(r#"{"class": "freshbanana", "confidence": 1.3}"#).unwrap_err();
        assert!(matches!(err, AppError::NetworkOrParse { .. }));
    }

    #[test]
    fn negative_confidence_is_rejected() {
        assert!(parse(r#"{"class": "freshbanana", "confidence": -0.1}"#).is_err());
    }

    #[test]
    fn non_numeric_confidence_is_rejected() {
        assert!(parse(r#"{"class": "freshbanana", "confidence": "alta"}"#).is_err());
    }

    #[test]
    fn confidence_renders_with_one_decimal() {
        let result = parse(r#"{"class": "rottenbanana", "confidence": 0.87}"#).unwrap();
        assert_eq!(result.confidence_percent(), "87.0%");

        let result = parse(r#"{"class": "freshapples", "confidence": 1.0}"#).unwrap();
        assert_eq!(result.confidence_percent(), "100.0%");
    }
}
