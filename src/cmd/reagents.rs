//! Listing of the reagent presets usable with `--reagent`.

use anyhow::Result;
use colored::Colorize;

use titra::format::format_value;
use titra::reagent::Reagent;

use crate::cmd::ui::{Output, OutputMode};

pub fn cmd_reagents(out: &Output, table: &[Reagent]) -> Result<()> {
    if out.mode() == OutputMode::Json {
        out.json(&serde_json::json!({ "reagents": table }));
        return Ok(());
    }

    out.info(&"Reagent presets (equivalent weights)".bold().cyan().to_string());
    out.info("");
    for reagent in table {
        out.info(&format!(
            "  {:<34} {:<14} {}",
            reagent.name,
            reagent.formula,
            format_value(reagent.equivalent_weight, 2).yellow()
        ));
    }
    out.info("");
    out.info("Use with --reagent <NAME or FORMULA> in place of --eq.");

    Ok(())
}
