//! Solution strength in g/L: S = N × Eq.

use anyhow::Result;

use titra::format::{format_value, VALUE_DECIMALS};
use titra::formula;
use titra::outcome::CalculationResult;
use titra::reagent::Reagent;

use crate::cmd::ui::Output;
use crate::cmd::{resolve_eq_weight, resolve_field};

pub fn cmd_strength(
    out: &Output,
    normality: Option<f64>,
    eq: Option<f64>,
    reagent: Option<&str>,
    table: &[Reagent],
) -> Result<()> {
    let normality = resolve_field(out, normality, "Normality")?;
    let eq_weight = resolve_eq_weight(out, eq, reagent, table)?;

    let strength = formula::strength(normality, eq_weight);

    let result = CalculationResult::success("Strength", strength).with_unit("g/L");
    out.result(&result, VALUE_DECIMALS);
    out.detail(&format!(
        "Formula: {} × {}",
        format_value(normality, VALUE_DECIMALS),
        format_value(eq_weight, VALUE_DECIMALS)
    ));

    Ok(())
}
