//! Weight required for a target normality: W = (N × Eq × V) / 1000.

use anyhow::Result;

use titra::format::{format_value, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;
use titra::reagent::Reagent;

use crate::cmd::ui::Output;
use crate::cmd::{resolve_eq_weight, resolve_field};

pub fn cmd_weight(
    out: &Output,
    normality: Option<f64>,
    eq: Option<f64>,
    reagent: Option<&str>,
    volume: Option<f64>,
    table: &[Reagent],
) -> Result<()> {
    let normality = resolve_field(out, normality, "Required Normality")?;
    let eq_weight = resolve_eq_weight(out, eq, reagent, table)?;
    let volume = resolve_field(out, volume, "Volume")?;

    let weight = formula::required_weight(normality, eq_weight, volume);

    let result = CalculationResult::success("Required Weight", weight).with_unit("g");
    out.result(&result, VALUE_DECIMALS);
    out.detail(&format!(
        "Formula: ({} × {} × {}) / 1000",
        format_value(normality, VALUE_DECIMALS),
        format_value(eq_weight, VALUE_DECIMALS),
        format_value(volume, VALUE_DECIMALS)
    ));

    Ok(())
}
