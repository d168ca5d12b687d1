use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the pipeline once and returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Fetching observatory page...");
        let records = self.pipeline.extract().await?;
        tracing::debug!("Parsed {} earthquake records", records.len());

        let important = self.pipeline.transform(records)?;
        tracing::debug!("Kept {} earthquake records", important.len());

        self.pipeline.load(&important)
    }
}
