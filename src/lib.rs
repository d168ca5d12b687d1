pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpPageSource;
pub use config::{CliConfig, Settings};
pub use self::core::{pipeline::QuakePipeline, report::ReportEngine};
pub use domain::model::EarthquakeRecord;
pub use utils::error::{FetchError, ParseError, QuakeError, Result};
