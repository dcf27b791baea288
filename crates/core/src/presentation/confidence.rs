use std::fmt;

/// Coarse confidence bucket for quick visual triage. Lower bounds are
/// inclusive, so the three bands partition [0, 1] exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub const HIGH_THRESHOLD: f64 = 0.8;
    pub const MEDIUM_THRESHOLD: f64 = 0.6;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ConfidenceBand::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }

    /// Suitability note for accent-sensitive hiring decisions, keyed off the
    /// primary result's band.
    pub fn hiring_note(self) -> &'static str {
        match self {
            ConfidenceBand::High => {
                "High confidence classification - suitable for role-specific accent requirements"
            }
            ConfidenceBand::Medium => "Moderate confidence - may require additional evaluation",
            ConfidenceBand::Low => {
                "Low confidence - recommend manual review or additional audio samples"
            }
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score as a display percentage with one decimal place: `0.92` → `92.0%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, ConfidenceBand::High)]
    #[case(0.92, ConfidenceBand::High)]
    #[case(0.8, ConfidenceBand::High)]
    #[case(0.7999, ConfidenceBand::Medium)]
    #[case(0.6, ConfidenceBand::Medium)]
    #[case(0.5999, ConfidenceBand::Low)]
    #[case(0.41, ConfidenceBand::Low)]
    #[case(0.0, ConfidenceBand::Low)]
    fn test_band_boundaries(#[case] score: f64, #[case] expected: ConfidenceBand) {
        assert_eq!(ConfidenceBand::from_score(score), expected);
    }

    #[test]
    fn test_band_names() {
        assert_eq!(ConfidenceBand::High.to_string(), "high");
        assert_eq!(ConfidenceBand::Medium.to_string(), "medium");
        assert_eq!(ConfidenceBand::Low.to_string(), "low");
    }

    #[test]
    fn test_each_band_has_a_distinct_note() {
        let notes = [
            ConfidenceBand::High.hiring_note(),
            ConfidenceBand::Medium.hiring_note(),
            ConfidenceBand::Low.hiring_note(),
        ];
        assert!(notes[0].contains("High confidence"));
        assert!(notes[1].contains("additional evaluation"));
        assert!(notes[2].contains("manual review"));
    }

    #[rstest]
    #[case(0.92, "92.0%")]
    #[case(0.41, "41.0%")]
    #[case(1.0, "100.0%")]
    #[case(0.0, "0.0%")]
    #[case(0.855, "85.5%")]
    fn test_percent_formatting(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(format_percent(score), expected);
    }
}
