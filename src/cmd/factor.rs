//! Correction factor from actual vs theoretical normality.

use anyhow::Result;

use titra::format::{format_value, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;
use titra::quality::FactorStatus;

use crate::cmd::resolve_field;
use crate::cmd::ui::Output;

pub fn cmd_factor(out: &Output, actual: Option<f64>, theoretical: Option<f64>) -> Result<()> {
    let actual = resolve_field(out, actual, "Actual Normality")?;
    let theoretical = resolve_field(out, theoretical, "Theoretical Normality")?;

    let (factor, status) = formula::correction_factor(actual, theoretical);

    let result = CalculationResult::success("Factor (f)", factor).with_quality(status.to_string());
    out.result(&result, VALUE_DECIMALS);
    out.detail(&format!(
        "Formula: {} / {}",
        format_value(actual, VALUE_DECIMALS),
        format_value(theoretical, VALUE_DECIMALS)
    ));
    match status {
        FactorStatus::Acceptable => out.detail("Within the accepted 0.98 - 1.02 window"),
        FactorStatus::OutsideRange => {
            out.warn("Factor is outside the accepted 0.98 - 1.02 window")
        }
    }

    Ok(())
}
