pub mod catalog;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "trip-planner")]
#[command(about = "Build a day-by-day travel itinerary from a catalog of items")]
pub struct CliConfig {
    /// Path to a TOML trip plan; the built-in Paris sample is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include the per-day budget breakdown
    #[arg(long)]
    pub budget: bool,

    /// Override the traveler count from the plan
    #[arg(long)]
    pub travelers: Option<u32>,

    /// Validate the plan and list its actions without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
