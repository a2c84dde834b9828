//! # Titra - Volumetric Analysis Calculator
//!
//! Bench arithmetic for titration work: normality, required weight,
//! solution strength, assay purity, correction factors, and
//! standardization against a primary standard.
//!
//! ## Overview
//!
//! Each calculator is a single closed-form formula behind a shared
//! pipeline: every field validates to a finite positive number, the
//! formula runs over the validated values, and the result renders with a
//! fixed decimal convention. An invocation either succeeds or reports the
//! first invalid field; there is no state between invocations.
//!
//! ## Core Concepts
//!
//! - **Validation**: a field is usable only if it parses to a finite
//!   number strictly greater than zero
//! - **Formulas**: seven pure functions over validated inputs
//! - **Grades**: purity, correction-factor, and titration-precision
//!   classifications from fixed analytical thresholds
//!
//! ## Modules
//!
//! - [`input`] - field validation
//! - [`formula`] - the seven calculator formulas
//! - [`quality`] - threshold-derived quality grades
//! - [`format`] - fixed-point result rendering
//! - [`outcome`] - tagged calculation outcomes
//! - [`reagent`] - equivalent-weight presets
//! - [`config`] - optional user configuration
//!
//! ## Example
//!
//! ```
//! use titra::formula;
//! use titra::input::{parse_field, ValidationResult};
//!
//! let weight = match parse_field("1.0", "Weight") {
//!     ValidationResult::Valid(value) => value,
//!     ValidationResult::Invalid(message) => panic!("{message}"),
//! };
//! let n = formula::normality(weight, 50.0, 10.0);
//! assert_eq!(n, 2.0);
//! ```

// Re-export all public modules
pub mod config;
pub mod format;
pub mod formula;
pub mod input;
pub mod outcome;
pub mod quality;
pub mod reagent;
