use crate::core::extractor::{CandidateLine, LineExtractor};
use crate::domain::model::EarthquakeRecord;
use crate::utils::error::ParseError;
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;

/// Zone the observatory publishes its wall-clock times in.
pub const SOURCE_TIMEZONE: &str = "Europe/Istanbul";

const SOURCE_DATETIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Zone records are converted into before they are stored and printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayZone {
    /// The process's local zone.
    Local,
    Named(Tz),
}

impl DisplayZone {
    /// `None` selects the local zone.
    pub fn resolve(name: Option<&str>) -> Result<Self, ParseError> {
        match name {
            None => Ok(DisplayZone::Local),
            Some(name) => resolve_zone(name).map(DisplayZone::Named),
        }
    }

    fn convert(&self, instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
        match self {
            DisplayZone::Local => instant.with_timezone(&Local).fixed_offset(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }
}

pub fn resolve_zone(name: &str) -> Result<Tz, ParseError> {
    Tz::from_str(name).map_err(|e| ParseError::Timezone {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Turns matched bulletin lines into [`EarthquakeRecord`]s.
///
/// Holds no mutable state: parsing the same line twice gives equal records.
#[derive(Debug, Clone)]
pub struct RecordParser {
    extractor: LineExtractor,
    source: Tz,
    display: DisplayZone,
}

impl RecordParser {
    pub fn new(source: Tz, display: DisplayZone) -> Self {
        Self {
            extractor: LineExtractor::new(),
            source,
            display,
        }
    }

    /// Resolves both zones by name; a `None` display zone means local time.
    pub fn from_zone_names(source: &str, display: Option<&str>) -> Result<Self, ParseError> {
        Ok(Self::new(resolve_zone(source)?, DisplayZone::resolve(display)?))
    }

    pub fn extractor(&self) -> &LineExtractor {
        &self.extractor
    }

    pub fn parse(&self, line: &str) -> Result<EarthquakeRecord, ParseError> {
        let candidate = self.extractor.match_line(line).ok_or(ParseError::NoMatch)?;
        self.parse_candidate(&candidate)
    }

    pub fn parse_candidate(&self, candidate: &CandidateLine<'_>) -> Result<EarthquakeRecord, ParseError> {
        let datetime = format!("{} {}", candidate.field("date"), candidate.field("time"));
        let occurred = self.parse_source_time(&datetime)?;

        let latitude = parse_number::<f64>("latitude", candidate.field("latitude"))?;
        let longitude = parse_number::<f64>("longitude", candidate.field("longitude"))?;
        let depth = parse_number::<f32>("depth", candidate.field("depth"))?;
        let magnitude = parse_number::<f32>("magnitude", candidate.field("magnitude"))?;

        Ok(EarthquakeRecord {
            location: compose_location(
                candidate.field("province"),
                candidate.optional_field("epicenter"),
            ),
            latitude,
            longitude,
            occurred_at: self.display.convert(&occurred),
            magnitude,
            depth,
        })
    }

    fn parse_source_time(&self, datetime: &str) -> Result<DateTime<Tz>, ParseError> {
        let naive = NaiveDateTime::parse_from_str(datetime, SOURCE_DATETIME_FORMAT).map_err(|e| {
            ParseError::DateTime {
                value: datetime.to_string(),
                reason: e.to_string(),
            }
        })?;

        match self.source.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt),
            // clocks turned back: the earlier reading is the first occurrence
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(ParseError::DateTime {
                value: datetime.to_string(),
                reason: format!("time does not exist in {}", self.source.name()),
            }),
        }
    }
}

fn parse_number<T>(field: &'static str, raw: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ParseError::Number {
        field,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn compose_location(province: &str, epicenter: Option<&str>) -> String {
    match epicenter {
        Some(epicenter) => format!("{} {}", province, epicenter),
        None => province.to_string(),
    }
}
