use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "slider-sim")]
#[command(about = "Replay a scripted interaction against a headless testimonial slider")]
pub struct CliConfig {
    /// Path to the scenario TOML file
    #[arg(short, long)]
    pub scenario: String,

    /// Optional slider tuning TOML file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
