use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solar-analyzer")]
#[command(about = "Cross-country solar irradiance analyzer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dataset overview: record counts and headline averages
    Overview,

    /// Per-country summary statistics for GHI, DNI and DHI
    Compare {
        #[arg(long, help = "Emit the summary table as JSON")]
        json: bool,
    },

    /// Key insights for one country
    Country {
        #[arg(short, long, help = "Country name (Benin, Sierra Leone or Togo)")]
        name: String,
    },

    /// Ranked cross-country observations
    Observations {
        #[arg(long, help = "Emit the observations as JSON")]
        json: bool,
    },

    /// All views in sequence
    Report,
}
