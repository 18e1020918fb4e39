use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load; returns the rendered domain list.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Extracting table cells...");
        let cells = self.pipeline.extract().await?;
        tracing::info!("Extracted {} cells", cells.len());
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(cells).await?;
        tracing::info!(
            "Matched {} candidates, {} unique music domains",
            result.report.candidates_matched,
            result.report.domains_emitted
        );
        if result.result_set.is_empty() {
            tracing::warn!("No cell matched the amazon.<tld> pattern");
        }
        self.monitor.log_stats("Transform");

        let rendered = self.pipeline.load(result).await?;
        self.monitor.log_final_stats();

        Ok(rendered)
    }
}
