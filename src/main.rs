use clap::error::ErrorKind;
use clap::Parser;
use pii_redactor::utils::{logger, validation::Validate};
use pii_redactor::{CliConfig, CsvPipeline, LocalStorage, RedactionEngine};

#[tokio::main]
async fn main() {
    // Usage errors (missing or extra arguments) exit with code 1
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pii-redactor");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CsvPipeline::new(storage, config.input.clone());
    let engine = RedactionEngine::new_with_monitoring(pipeline, config.monitor);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Redaction completed successfully!");
            println!("✅ Redaction completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Redaction failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
