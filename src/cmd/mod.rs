//! Command module structure for the titra CLI

use anyhow::Result;
use colored::Colorize;

use titra::input::{parse_field, validate_value, ValidationResult};
use titra::outcome::CalculationResult;
use titra::reagent::{self, Reagent};

pub mod factor;
pub mod normality;
pub mod purity;
pub mod reagents;
pub mod standardize;
pub mod strength;
pub mod titration;
pub mod ui;
pub mod weight;

use self::ui::Output;

/// Resolve one numeric field of a calculator.
///
/// A flag value is validated as-is. A missing flag is prompted for on an
/// interactive terminal, mirroring the original form field; off-TTY it is
/// the missing-field validation failure.
pub fn resolve_field(out: &Output, value: Option<f64>, field: &str) -> Result<f64> {
    match value {
        Some(value) => match validate_value(value, field) {
            ValidationResult::Valid(value) => Ok(value),
            ValidationResult::Invalid(message) => fail(out, &message),
        },
        None if atty::is(atty::Stream::Stdin) => prompt_field(field),
        None => fail(out, &format!("Please enter a valid {}", field)),
    }
}

/// Resolve the equivalent-weight field from an explicit value or a preset
/// lookup. `--eq` and `--reagent` are mutually exclusive at the clap level.
pub fn resolve_eq_weight(
    out: &Output,
    eq: Option<f64>,
    reagent_query: Option<&str>,
    table: &[Reagent],
) -> Result<f64> {
    if let Some(query) = reagent_query {
        return match reagent::find(table, query) {
            Some(preset) => Ok(preset.equivalent_weight),
            None => {
                out.error(&format!(
                    "Unknown reagent '{}'. See `titra reagents` for available presets.",
                    query
                ));
                std::process::exit(1);
            }
        };
    }
    resolve_field(out, eq, "Equivalent Weight")
}

/// Report a validation failure and stop the invocation.
fn fail(out: &Output, message: &str) -> ! {
    out.result(
        &CalculationResult::failure(message),
        titra::format::VALUE_DECIMALS,
    );
    std::process::exit(1);
}

/// Prompt until the field validates. Invalid entries re-prompt with the
/// validation message, like the inline highlighting of a form field.
fn prompt_field(field: &str) -> Result<f64> {
    loop {
        let raw: String = dialoguer::Input::new()
            .with_prompt(field)
            .allow_empty(true)
            .interact_text()?;

        match parse_field(&raw, field) {
            ValidationResult::Valid(value) => return Ok(value),
            ValidationResult::Invalid(message) => {
                eprintln!("{} {}", "✗".red(), message);
            }
        }
    }
}
