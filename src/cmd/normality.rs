//! Normality from the dissolved weight: N = (W × 1000) / (Eq × V).

use anyhow::Result;

use titra::format::{format_value, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;
use titra::reagent::Reagent;

use crate::cmd::ui::Output;
use crate::cmd::{resolve_eq_weight, resolve_field};

pub fn cmd_normality(
    out: &Output,
    weight: Option<f64>,
    eq: Option<f64>,
    reagent: Option<&str>,
    volume: Option<f64>,
    table: &[Reagent],
) -> Result<()> {
    let weight = resolve_field(out, weight, "Weight")?;
    let eq_weight = resolve_eq_weight(out, eq, reagent, table)?;
    let volume = resolve_field(out, volume, "Volume")?;

    let normality = formula::normality(weight, eq_weight, volume);

    let result = CalculationResult::success("Normality (N)", normality).with_unit("N");
    out.result(&result, VALUE_DECIMALS);
    out.detail(&format!(
        "Formula: ({} × 1000) / ({} × {})",
        format_value(weight, VALUE_DECIMALS),
        format_value(eq_weight, VALUE_DECIMALS),
        format_value(volume, VALUE_DECIMALS)
    ));

    Ok(())
}
