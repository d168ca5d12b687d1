use crate::config::Settings;
use crate::core::parser::RecordParser;
use crate::core::printer;
use crate::domain::model::EarthquakeRecord;
use crate::domain::ports::{PageSource, Pipeline};
use crate::utils::error::Result;

/// Bulletin page → parsed records → important records → rendered report.
pub struct QuakePipeline<S: PageSource> {
    source: S,
    settings: Settings,
    parser: RecordParser,
}

impl<S: PageSource> QuakePipeline<S> {
    /// Fails when one of the configured time zones is unknown.
    pub fn new(source: S, settings: Settings) -> Result<Self> {
        let parser = RecordParser::from_zone_names(
            &settings.source_timezone,
            settings.display_timezone.as_deref(),
        )?;
        Ok(Self {
            source,
            settings,
            parser,
        })
    }

    /// Parses every candidate line of `page`. Lines that fail to parse are
    /// reported and skipped.
    pub fn parse_page(&self, page: &str) -> Vec<EarthquakeRecord> {
        let mut records = Vec::new();
        for candidate in self.parser.extractor().candidates(page) {
            match self.parser.parse_candidate(&candidate) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "error while parsing earthquake line line={}: {}",
                        candidate.line.trim_end(),
                        e
                    );
                }
            }
        }
        records
    }
}

#[async_trait::async_trait]
impl<S: PageSource> Pipeline for QuakePipeline<S> {
    async fn extract(&self) -> Result<Vec<EarthquakeRecord>> {
        let page = self.source.fetch(&self.settings.endpoint).await?;
        Ok(self.parse_page(&page))
    }

    fn transform(&self, records: Vec<EarthquakeRecord>) -> Result<Vec<EarthquakeRecord>> {
        if self.settings.filter.include_all {
            tracing::debug!("Importance filter bypassed");
        }
        Ok(self.settings.filter.apply(records))
    }

    fn load(&self, records: &[EarthquakeRecord]) -> Result<String> {
        printer::render(records, self.settings.format)
    }
}
