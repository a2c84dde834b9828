//! Titration standardization: mean of three trials, precision statistics,
//! then N₁V₁ = N₂V₂ against the mean endpoint volume.

use anyhow::Result;

use titra::format::{format_value, PERCENT_DECIMALS, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;
use titra::quality::PrecisionGrade;

use crate::cmd::resolve_field;
use crate::cmd::ui::Output;

pub fn cmd_titration(
    out: &Output,
    trials: &[f64],
    std_normality: Option<f64>,
    std_volume: Option<f64>,
) -> Result<()> {
    if trials.len() > 3 {
        out.error("Expected exactly three trial volumes");
        std::process::exit(1);
    }

    // Trials validate in order; missing ones are prompted for on a TTY
    let mut volumes = [0.0; 3];
    for (index, volume) in volumes.iter_mut().enumerate() {
        let field = format!("Trial {} Volume", index + 1);
        *volume = resolve_field(out, trials.get(index).copied(), &field)?;
    }
    let std_normality = resolve_field(out, std_normality, "Normality of Standard")?;
    let std_volume = resolve_field(out, std_volume, "Volume of Standard")?;

    let summary = formula::titration(volumes, std_normality, std_volume);

    let result = CalculationResult::success("Unknown Normality (N2)", summary.normality)
        .with_unit("N")
        .with_quality(summary.precision.to_string());
    out.result(&result, VALUE_DECIMALS);
    out.detail(&format!(
        "Mean Volume: {} mL",
        format_value(summary.mean_volume, VALUE_DECIMALS)
    ));
    out.detail(&format!(
        "Std Dev: {} mL",
        format_value(summary.std_dev, VALUE_DECIMALS)
    ));
    out.detail(&format!(
        "RSD: {}%",
        format_value(summary.rsd, PERCENT_DECIMALS)
    ));
    if summary.precision == PrecisionGrade::Poor {
        out.warn("Trial spread is poor; repeat the titration");
    }

    Ok(())
}
