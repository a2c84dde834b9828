//! Assay purity from actual vs taken weight: P = (actual / taken) × 100.

use anyhow::Result;

use titra::format::{format_value, PERCENT_DECIMALS, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;
use titra::quality::PurityGrade;

use crate::cmd::resolve_field;
use crate::cmd::ui::Output;

pub fn cmd_purity(out: &Output, actual: Option<f64>, taken: Option<f64>) -> Result<()> {
    let actual = resolve_field(out, actual, "Actual Weight")?;
    let taken = resolve_field(out, taken, "Taken Weight")?;

    let (percent, grade) = formula::purity(actual, taken);

    let result = CalculationResult::success("Purity", percent)
        .with_unit("%")
        .with_quality(grade.to_string());
    out.result(&result, PERCENT_DECIMALS);
    out.detail(&format!(
        "Formula: ({} / {}) × 100",
        format_value(actual, VALUE_DECIMALS),
        format_value(taken, VALUE_DECIMALS)
    ));
    if grade == PurityGrade::BelowStandard {
        out.warn("Assay is below the 95% standard");
    }

    Ok(())
}
