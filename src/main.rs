//! CLI entry point and command dispatch for titra.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use titra::config::{Config, OutputChoice};

use cmd::ui::{Output, OutputMode};

#[derive(Parser)]
#[command(name = "titra")]
#[command(version)]
#[command(about = "Volumetric analysis calculator for the chemistry bench", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    titra normality --weight 1.0 --eq 50 --volume 10\n    titra standardize --std-normality 0.1 --std-volume 25 --volume 24\n    titra titration --trial 24.9 --trial 25.0 --trial 25.1 --std-normality 0.1 --std-volume 25\n\n    Omit a flag on an interactive terminal to be prompted for it."
)]
struct Cli {
    /// Emit structured JSON events instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "json")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normality of a solution from the dissolved weight
    Normality {
        /// Weight of solute in grams
        #[arg(long)]
        weight: Option<f64>,
        /// Equivalent weight of the solute
        #[arg(long, conflicts_with = "reagent")]
        eq: Option<f64>,
        /// Take the equivalent weight from a reagent preset
        #[arg(long, value_name = "NAME")]
        reagent: Option<String>,
        /// Solution volume in millilitres
        #[arg(long)]
        volume: Option<f64>,
    },
    /// Weight of solute required for a target normality
    Weight {
        /// Normality the solution should reach
        #[arg(long)]
        normality: Option<f64>,
        /// Equivalent weight of the solute
        #[arg(long, conflicts_with = "reagent")]
        eq: Option<f64>,
        /// Take the equivalent weight from a reagent preset
        #[arg(long, value_name = "NAME")]
        reagent: Option<String>,
        /// Solution volume in millilitres
        #[arg(long)]
        volume: Option<f64>,
    },
    /// Strength of a solution in grams per litre
    Strength {
        /// Normality of the solution
        #[arg(long)]
        normality: Option<f64>,
        /// Equivalent weight of the solute
        #[arg(long, conflicts_with = "reagent")]
        eq: Option<f64>,
        /// Take the equivalent weight from a reagent preset
        #[arg(long, value_name = "NAME")]
        reagent: Option<String>,
    },
    /// Assay purity from actual vs taken weight
    Purity {
        /// Weight recovered by the assay, in grams
        #[arg(long)]
        actual: Option<f64>,
        /// Weight of sample taken, in grams
        #[arg(long)]
        taken: Option<f64>,
    },
    /// Correction factor from actual vs theoretical normality
    Factor {
        /// Normality found by standardization
        #[arg(long)]
        actual: Option<f64>,
        /// Nominal normality the solution was prepared at
        #[arg(long)]
        theoretical: Option<f64>,
    },
    /// Standardize an unknown against a volumetric standard (N1V1 = N2V2)
    Standardize {
        /// Normality of the standard solution (N1)
        #[arg(long)]
        std_normality: Option<f64>,
        /// Volume of the standard consumed, in millilitres (V1)
        #[arg(long)]
        std_volume: Option<f64>,
        /// Volume of the unknown titrated, in millilitres (V2)
        #[arg(long)]
        volume: Option<f64>,
    },
    /// Standardize from three titration trials with precision statistics
    Titration {
        /// Endpoint volume of one trial, in millilitres (give three)
        #[arg(long = "trial", value_name = "ML")]
        trials: Vec<f64>,
        /// Normality of the standard solution
        #[arg(long)]
        std_normality: Option<f64>,
        /// Volume of the standard, in millilitres
        #[arg(long)]
        std_volume: Option<f64>,
    },
    /// List reagent presets usable with --reagent
    Reagents,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        match config.defaults.output {
            OutputChoice::Human => OutputMode::Human,
            OutputChoice::Json => OutputMode::Json,
            OutputChoice::Quiet => OutputMode::Quiet,
        }
    };
    let out = Output::new(mode);
    let table = config.reagent_table();

    match cli.command {
        Commands::Normality {
            weight,
            eq,
            reagent,
            volume,
        } => cmd::normality::cmd_normality(&out, weight, eq, reagent.as_deref(), volume, &table),
        Commands::Weight {
            normality,
            eq,
            reagent,
            volume,
        } => cmd::weight::cmd_weight(&out, normality, eq, reagent.as_deref(), volume, &table),
        Commands::Strength {
            normality,
            eq,
            reagent,
        } => cmd::strength::cmd_strength(&out, normality, eq, reagent.as_deref(), &table),
        Commands::Purity { actual, taken } => cmd::purity::cmd_purity(&out, actual, taken),
        Commands::Factor {
            actual,
            theoretical,
        } => cmd::factor::cmd_factor(&out, actual, theoretical),
        Commands::Standardize {
            std_normality,
            std_volume,
            volume,
        } => cmd::standardize::cmd_standardize(&out, std_normality, std_volume, volume),
        Commands::Titration {
            trials,
            std_normality,
            std_volume,
        } => cmd::titration::cmd_titration(&out, &trials, std_normality, std_volume),
        Commands::Reagents => cmd::reagents::cmd_reagents(&out, &table),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "titra", &mut io::stdout());
    Ok(())
}
