use crate::domain::model::EarthquakeRecord;

pub const DEFAULT_MAX_DEPTH: f32 = 70.0;
pub const DEFAULT_MIN_MAGNITUDE: f32 = 4.5;

/// A record is important when it is stronger than `min_magnitude` and
/// shallower than `max_depth`. Both bounds are exclusive.
pub fn is_important(record: &EarthquakeRecord, min_magnitude: f32, max_depth: f32) -> bool {
    record.magnitude > min_magnitude && record.depth < max_depth
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportanceFilter {
    pub include_all: bool,
    pub max_depth: f32,
    pub min_magnitude: f32,
}

impl ImportanceFilter {
    pub fn keeps(&self, record: &EarthquakeRecord) -> bool {
        self.include_all || is_important(record, self.min_magnitude, self.max_depth)
    }

    /// Keeps page order.
    pub fn apply(&self, records: Vec<EarthquakeRecord>) -> Vec<EarthquakeRecord> {
        records.into_iter().filter(|r| self.keeps(r)).collect()
    }
}

impl Default for ImportanceFilter {
    fn default() -> Self {
        Self {
            include_all: false,
            max_depth: DEFAULT_MAX_DEPTH,
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn record(location: &str, magnitude: f32, depth: f32) -> EarthquakeRecord {
        EarthquakeRecord {
            location: location.to_string(),
            latitude: 38.0,
            longitude: 27.0,
            occurred_at: FixedOffset::east_opt(3 * 3600)
                .unwrap()
                .with_ymd_and_hms(2023, 5, 1, 12, 30, 0)
                .unwrap(),
            magnitude,
            depth,
        }
    }

    #[test]
    fn test_magnitude_threshold_is_exclusive() {
        assert!(!is_important(&record("A", 4.5, 10.0), 4.5, 70.0));
        assert!(is_important(&record("A", 4.6, 10.0), 4.5, 70.0));
    }

    #[test]
    fn test_depth_threshold_is_exclusive() {
        assert!(!is_important(&record("A", 4.6, 70.0), 4.5, 70.0));
        assert!(is_important(&record("A", 4.6, 69.9), 4.5, 70.0));
    }

    #[test]
    fn test_both_conditions_required() {
        assert!(!is_important(&record("A", 3.0, 5.0), 4.5, 70.0));
        assert!(!is_important(&record("A", 6.0, 120.0), 4.5, 70.0));
    }

    #[test]
    fn test_apply_keeps_order() {
        let filter = ImportanceFilter::default();
        let kept = filter.apply(vec![
            record("first", 5.0, 10.0),
            record("weak", 2.1, 7.0),
            record("deep", 5.5, 150.0),
            record("second", 4.9, 12.3),
        ]);

        let names: Vec<&str> = kept.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_include_all_bypasses_thresholds() {
        let filter = ImportanceFilter {
            include_all: true,
            ..ImportanceFilter::default()
        };
        let kept = filter.apply(vec![
            record("weak", 1.0, 5.0),
            record("deep", 5.0, 300.0),
            record("edge", 4.5, 70.0),
        ]);

        assert_eq!(kept.len(), 3);
    }
}
