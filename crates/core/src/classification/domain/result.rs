use serde::{Deserialize, Serialize};

/// One ranked candidate from the classifier.
///
/// `label` is usually one of the known dialect codes (`us`, `england`, ...)
/// but the model is free to emit anything; unknown codes still render through
/// the presentation fallbacks. `score` is a confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub score: f64,
}

/// Ranked candidates, highest confidence first. The backend sorts; the
/// client trusts and preserves the order, and index 0 is the primary
/// classification.
pub type ResultSet = Vec<ClassificationResult>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{"label": "us", "score": 0.92}"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.label, "us");
        assert_eq!(result.score, 0.92);
    }

    #[test]
    fn test_result_set_preserves_order() {
        let json = r#"[
            {"label": "us", "score": 0.92},
            {"label": "scotland", "score": 0.41},
            {"label": "ireland", "score": 0.12}
        ]"#;
        let results: ResultSet = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["us", "scotland", "ireland"]);
    }
}
