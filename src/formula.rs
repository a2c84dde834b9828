//! The seven calculator formulas.
//!
//! Pure arithmetic over already-validated inputs: callers are responsible
//! for running every operand through [`crate::input`] first, and nothing is
//! re-checked here. If that gate is bypassed, ordinary floating-point
//! semantics apply (division by zero yields infinity, NaN propagates).
//!
//! Weights are in grams, volumes in millilitres, strength in grams per
//! litre.

use serde::Serialize;

use crate::quality::{FactorStatus, PrecisionGrade, PurityGrade};

/// Normality from the dissolved weight: N = (W × 1000) / (Eq × V)
pub fn normality(weight: f64, eq_weight: f64, volume: f64) -> f64 {
    (weight * 1000.0) / (eq_weight * volume)
}

/// Weight needed for a target normality: W = (N × Eq × V) / 1000
pub fn required_weight(normality: f64, eq_weight: f64, volume: f64) -> f64 {
    (normality * eq_weight * volume) / 1000.0
}

/// Solution strength in g/L: S = N × Eq
pub fn strength(normality: f64, eq_weight: f64) -> f64 {
    normality * eq_weight
}

/// Assay purity: P = (actual / taken) × 100, graded against the 99/95
/// cutoffs.
pub fn purity(actual_weight: f64, taken_weight: f64) -> (f64, PurityGrade) {
    let percent = (actual_weight / taken_weight) * 100.0;
    (percent, PurityGrade::from_percent(percent))
}

/// Correction factor: f = actual / theoretical, flagged against the
/// 0.98-1.02 window.
pub fn correction_factor(actual: f64, theoretical: f64) -> (f64, FactorStatus) {
    let factor = actual / theoretical;
    (factor, FactorStatus::from_factor(factor))
}

/// Standardization against a volumetric standard: N₂ = (N₁ × V₁) / V₂
pub fn standardize(std_normality: f64, std_volume: f64, volume: f64) -> f64 {
    (std_normality * std_volume) / volume
}

/// Statistics and derived normality for a three-trial titration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitrationSummary {
    /// Mean endpoint volume across the trials, in mL
    pub mean_volume: f64,
    /// Population standard deviation of the trial volumes, in mL
    pub std_dev: f64,
    /// Relative standard deviation, as a percentage of the mean
    pub rsd: f64,
    /// Normality of the unknown via N₁V₁ = N₂V₂ against the mean volume
    pub normality: f64,
    /// Precision grade derived from the unrounded RSD
    pub precision: PrecisionGrade,
}

/// Titration standardization from three endpoint volumes.
///
/// The mean volume feeds both the precision statistics and the N₁V₁ = N₂V₂
/// step, so a wide trial spread degrades the grade without changing how the
/// normality is derived.
pub fn titration(trials: [f64; 3], std_normality: f64, std_volume: f64) -> TitrationSummary {
    let mean_volume = trials.iter().sum::<f64>() / 3.0;
    let variance = trials
        .iter()
        .map(|trial| (trial - mean_volume).powi(2))
        .sum::<f64>()
        / 3.0;
    let std_dev = variance.sqrt();
    let rsd = (std_dev / mean_volume) * 100.0;

    TitrationSummary {
        mean_volume,
        std_dev,
        rsd,
        normality: (std_normality * std_volume) / mean_volume,
        precision: PrecisionGrade::from_rsd(rsd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_normality() {
        assert_close(normality(1.0, 50.0, 10.0), 2.0);
    }

    #[test]
    fn test_required_weight() {
        assert_close(required_weight(0.1, 50.0, 1000.0), 5.0);
    }

    #[test]
    fn test_strength() {
        assert_close(strength(0.5, 40.0), 20.0);
    }

    #[test]
    fn test_purity_grades_unrounded_value() {
        let (percent, grade) = purity(98.0, 100.0);
        assert_close(percent, 98.0);
        assert_eq!(grade, PurityGrade::Good);

        // 98.999% rounds to "99.00" at two decimals but still grades good
        let (percent, grade) = purity(98.999, 100.0);
        assert!(percent < 99.0);
        assert_eq!(grade, PurityGrade::Good);
    }

    #[test]
    fn test_correction_factor() {
        let (factor, status) = correction_factor(1.0, 1.0);
        assert_close(factor, 1.0);
        assert_eq!(status, FactorStatus::Acceptable);

        let (factor, status) = correction_factor(1.1, 1.0);
        assert_close(factor, 1.1);
        assert_eq!(status, FactorStatus::OutsideRange);
    }

    #[test]
    fn test_standardize() {
        assert_close(standardize(0.1, 25.0, 24.0), 0.1 * 25.0 / 24.0);
    }

    #[test]
    fn test_titration_summary() {
        let summary = titration([24.9, 25.0, 25.1], 0.1, 25.0);
        assert_close(summary.mean_volume, 25.0);
        assert_close(summary.std_dev, (0.02_f64 / 3.0).sqrt());
        assert!((summary.rsd - 0.3266).abs() < 1e-3);
        assert_close(summary.normality, 0.1);
        assert_eq!(summary.precision, PrecisionGrade::Excellent);
    }

    #[test]
    fn test_titration_identical_trials_has_zero_spread() {
        let summary = titration([25.0, 25.0, 25.0], 0.1, 25.0);
        assert_close(summary.std_dev, 0.0);
        assert_close(summary.rsd, 0.0);
        assert_eq!(summary.precision, PrecisionGrade::Excellent);
    }

    #[test]
    fn test_titration_wide_spread_grades_poor() {
        let summary = titration([24.0, 25.0, 26.0], 0.1, 25.0);
        assert!(summary.rsd >= 2.0);
        assert_eq!(summary.precision, PrecisionGrade::Poor);
    }

    #[test]
    fn test_bypassed_validation_follows_float_semantics() {
        // The gate lives in crate::input; raw division semantics apply here
        assert!(normality(1.0, 0.0, 10.0).is_infinite());
        assert!(strength(f64::NAN, 40.0).is_nan());
    }
}
