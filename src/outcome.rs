//! Tagged outcome of a calculator invocation.
//!
//! The command layer builds one `CalculationResult` per invocation and
//! hands it to the output layer; nothing is retried or persisted. The type
//! serializes for the Json output mode.

use serde::Serialize;

/// Result of a single validate-compute-format pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CalculationResult {
    /// The inputs validated and the derived quantity was computed.
    Success {
        /// Human-readable name of the derived quantity, e.g. "Normality (N)"
        label: String,
        /// The unrounded computed value
        value: f64,
        /// Unit suffix for display, e.g. "N", "g", "%"
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// Quality grade rendered from its fixed thresholds, when the
        /// calculator defines one
        #[serde(skip_serializing_if = "Option::is_none")]
        quality: Option<String>,
    },
    /// A field failed validation before any arithmetic ran.
    Failure { message: String },
}

impl CalculationResult {
    pub fn success(label: impl Into<String>, value: f64) -> Self {
        CalculationResult::Success {
            label: label.into(),
            value,
            unit: None,
            quality: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        CalculationResult::Failure {
            message: message.into(),
        }
    }

    /// Attach a display unit. No effect on a failure.
    pub fn with_unit(mut self, new_unit: impl Into<String>) -> Self {
        if let CalculationResult::Success { ref mut unit, .. } = self {
            *unit = Some(new_unit.into());
        }
        self
    }

    /// Attach a quality grade. No effect on a failure.
    pub fn with_quality(mut self, grade: impl Into<String>) -> Self {
        if let CalculationResult::Success {
            ref mut quality, ..
        } = self
        {
            *quality = Some(grade.into());
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResult::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_builders() {
        let result = CalculationResult::success("Normality (N)", 2.0)
            .with_unit("N")
            .with_quality("excellent");

        match result {
            CalculationResult::Success {
                label,
                value,
                unit,
                quality,
            } => {
                assert_eq!(label, "Normality (N)");
                assert_eq!(value, 2.0);
                assert_eq!(unit.as_deref(), Some("N"));
                assert_eq!(quality.as_deref(), Some("excellent"));
            }
            CalculationResult::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_builders_leave_failure_untouched() {
        let result = CalculationResult::failure("Please enter a valid Weight").with_unit("N");
        assert!(!result.is_success());
        assert_eq!(
            result,
            CalculationResult::failure("Please enter a valid Weight")
        );
    }

    #[test]
    fn test_success_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&CalculationResult::success("Strength", 20.0)).unwrap();
        assert!(json.contains(r#""status":"success""#));
        assert!(json.contains(r#""value":20.0"#));
        assert!(!json.contains("unit"));
        assert!(!json.contains("quality"));
    }

    #[test]
    fn test_failure_serialization() {
        let json =
            serde_json::to_string(&CalculationResult::failure("Volume must be greater than 0"))
                .unwrap();
        assert!(json.contains(r#""status":"failure""#));
        assert!(json.contains("Volume must be greater than 0"));
    }
}
