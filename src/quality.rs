//! Quality grades derived from fixed analytical thresholds.
//!
//! The cutoffs are standard bench conventions (99/95% for assay purity,
//! the 0.98-1.02 window for correction factors, 1%/2% RSD for titration
//! precision) and are preserved exactly. Grading always runs on the
//! unrounded computed value, never on its display rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Purity grade for an assay result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurityGrade {
    /// 99% and above
    Excellent,
    /// 95% up to 99%
    Good,
    /// Below 95%
    BelowStandard,
}

impl PurityGrade {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 99.0 {
            PurityGrade::Excellent
        } else if percent >= 95.0 {
            PurityGrade::Good
        } else {
            PurityGrade::BelowStandard
        }
    }
}

impl fmt::Display for PurityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurityGrade::Excellent => write!(f, "excellent"),
            PurityGrade::Good => write!(f, "good"),
            PurityGrade::BelowStandard => write!(f, "below standard"),
        }
    }
}

/// Acceptability of a correction factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorStatus {
    /// Within [0.98, 1.02], inclusive on both ends
    Acceptable,
    /// Outside the window; the solution needs re-preparation
    OutsideRange,
}

impl FactorStatus {
    pub fn from_factor(factor: f64) -> Self {
        if (0.98..=1.02).contains(&factor) {
            FactorStatus::Acceptable
        } else {
            FactorStatus::OutsideRange
        }
    }
}

impl fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorStatus::Acceptable => write!(f, "acceptable"),
            FactorStatus::OutsideRange => write!(f, "outside range"),
        }
    }
}

/// Precision grade for a set of titration trials, from the relative
/// standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionGrade {
    /// RSD below 1%
    Excellent,
    /// RSD below 2%
    Acceptable,
    /// RSD of 2% or more; the trials should be repeated
    Poor,
}

impl PrecisionGrade {
    pub fn from_rsd(rsd: f64) -> Self {
        if rsd < 1.0 {
            PrecisionGrade::Excellent
        } else if rsd < 2.0 {
            PrecisionGrade::Acceptable
        } else {
            PrecisionGrade::Poor
        }
    }
}

impl fmt::Display for PrecisionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionGrade::Excellent => write!(f, "excellent"),
            PrecisionGrade::Acceptable => write!(f, "acceptable"),
            PrecisionGrade::Poor => write!(f, "poor"),
        }
    }
}
