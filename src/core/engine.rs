use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RedactionEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RedactionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting rows...");
        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} rows", rows.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Scanning for PII...");
        let result = self.pipeline.transform(rows).await?;
        tracing::info!(
            "Processed {} rows, flagged {} as PII",
            result.rows.len(),
            result.pii_count
        );
        self.monitor.log_stats("Transform");

        tracing::info!("Writing redacted output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
