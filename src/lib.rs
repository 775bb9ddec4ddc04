pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use crate::core::{engine::RedactionEngine, pipeline::CsvPipeline, processor::RecordProcessor};
pub use utils::error::{RedactError, Result};
