pub mod extractor;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod printer;
pub mod report;

pub use crate::domain::model::EarthquakeRecord;
pub use crate::domain::ports::{PageSource, Pipeline};
pub use crate::utils::error::Result;
