pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_existing_file, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pii-redactor")]
#[command(about = "Detects and redacts PII in CSV rows carrying JSON payloads")]
pub struct CliConfig {
    /// Path to the input CSV (must contain record_id and data_json columns)
    pub input: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory stats per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_existing_file("input", &self.input)
    }
}
