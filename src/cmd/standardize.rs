//! Standardization against a volumetric standard: N₂ = (N₁ × V₁) / V₂.

use anyhow::Result;

use titra::format::{format_value, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;

use crate::cmd::resolve_field;
use crate::cmd::ui::Output;

pub fn cmd_standardize(
    out: &Output,
    std_normality: Option<f64>,
    std_volume: Option<f64>,
    volume: Option<f64>,
) -> Result<()> {
    let std_normality = resolve_field(out, std_normality, "Normality of Standard (N1)")?;
    let std_volume = resolve_field(out, std_volume, "Volume of Standard (V1)")?;
    let volume = resolve_field(out, volume, "Volume of Unknown (V2)")?;

    let unknown = formula::standardize(std_normality, std_volume, volume);

    let result = CalculationResult::success("Unknown Normality (N2)", unknown).with_unit("N");
    out.result(&result, VALUE_DECIMALS);
    out.detail(&format!(
        "Formula: ({} × {}) / {}",
        format_value(std_normality, VALUE_DECIMALS),
        format_value(std_volume, VALUE_DECIMALS),
        format_value(volume, VALUE_DECIMALS)
    ));

    Ok(())
}
