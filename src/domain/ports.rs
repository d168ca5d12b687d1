use crate::domain::model::EarthquakeRecord;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;

/// Where the bulletin text comes from.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<EarthquakeRecord>>;
    fn transform(&self, records: Vec<EarthquakeRecord>) -> Result<Vec<EarthquakeRecord>>;
    fn load(&self, records: &[EarthquakeRecord]) -> Result<String>;
}
