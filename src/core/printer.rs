use crate::domain::model::EarthquakeRecord;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const NO_RESULTS_MESSAGE: &str = "No important earthquakes recently";

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Renders records as tab-separated rows with the location column padded
/// to the longest location. Every row ends with a newline.
pub fn render_table(records: &[EarthquakeRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let width = records
        .iter()
        .map(|r| r.location.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{:<width$}\t{:1.1}M\t{:02.1}km\t{}\n",
            record.location,
            record.magnitude,
            record.depth,
            record.occurred_at.format(DISPLAY_TIME_FORMAT),
            width = width,
        ));
    }
    out
}

pub fn render_json(records: &[EarthquakeRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

pub fn render(records: &[EarthquakeRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Json => render_json(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn record(location: &str, magnitude: f32, depth: f32) -> EarthquakeRecord {
        EarthquakeRecord {
            location: location.to_string(),
            latitude: 38.1234,
            longitude: 27.5678,
            occurred_at: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2023, 5, 1, 9, 30, 0)
                .unwrap(),
            magnitude,
            depth,
        }
    }

    #[test]
    fn test_empty_list_renders_fixed_message() {
        assert_eq!(render_table(&[]), "No important earthquakes recently\n");
    }

    #[test]
    fn test_row_format() {
        let out = render_table(&[record("Izmir Bornova", 4.8, 8.5)]);
        assert_eq!(out, "Izmir Bornova\t4.8M\t8.5km\t2023-05-01 09:30:00\n");
    }

    #[test]
    fn test_location_column_padded_to_longest() {
        let out = render_table(&[
            record("Izmir Bornova", 4.8, 8.5),
            record("Van", 5.1, 12.3),
        ]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').next().unwrap(), "Izmir Bornova");
        assert_eq!(lines[1].split('\t').next().unwrap(), "Van          ");
        assert_eq!(lines[1], "Van          \t5.1M\t12.3km\t2023-05-01 09:30:00");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let out = render_table(&[record("Muğla Köyceğiz", 4.6, 10.0), record("Van", 5.0, 3.0)]);
        let second = out.lines().nth(1).unwrap();

        assert_eq!(second.split('\t').next().unwrap().chars().count(), 14);
    }

    #[test]
    fn test_render_json() {
        let out = render(&[record("Van", 5.0, 3.0)], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["location"], "Van");
        assert_eq!(value[0]["occurred_at"], "2023-05-01T09:30:00+00:00");

        let empty = render(&[], OutputFormat::Json).unwrap();
        assert_eq!(empty.trim(), "[]");
    }
}
