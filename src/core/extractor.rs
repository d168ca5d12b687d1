use regex::{Captures, Regex};

/// Shape of one record row of the observatory listing:
/// date, time, latitude, longitude, depth, one ignored column, magnitude,
/// one ignored column, `PROVINCE-EPICENTER` (epicenter optional) and a
/// parenthesised qualifier.
pub const EARTHQUAKE_LINE_PATTERN: &str = concat!(
    r"(?P<date>\d{4}\.\d{2}\.\d{2})\s(?P<time>\d{2}:\d{2}:\d{2})",
    r"\s+(?P<latitude>\d+\.\d+)\s+(?P<longitude>\d+\.\d+)\s+(?P<depth>\d+\.\d+)",
    r"\s+\S+\s+(?P<magnitude>\d+\.\d+)\s+\S+",
    r"\s+(?P<province>\w+)-(?P<epicenter>\w+)? ?\(\w+\)",
);

/// One line that matched [`EARTHQUAKE_LINE_PATTERN`].
#[derive(Debug)]
pub struct CandidateLine<'t> {
    pub line: &'t str,
    pub captures: Captures<'t>,
}

impl<'t> CandidateLine<'t> {
    /// Text of a named group, empty when the group did not participate.
    pub fn field(&self, name: &str) -> &'t str {
        self.captures.name(name).map(|m| m.as_str()).unwrap_or("")
    }

    pub fn optional_field(&self, name: &str) -> Option<&'t str> {
        self.captures.name(name).map(|m| m.as_str())
    }
}

/// Compiled line pattern. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    pattern: Regex,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant covered by tests.
            pattern: Regex::new(EARTHQUAKE_LINE_PATTERN).expect("earthquake line pattern is valid"),
        }
    }

    pub fn is_candidate(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    pub fn match_line<'t>(&self, line: &'t str) -> Option<CandidateLine<'t>> {
        self.pattern
            .captures(line)
            .map(|captures| CandidateLine { line, captures })
    }

    /// Lazily yields the matching lines of `page` in page order. Lines that
    /// do not match are headers, footers or markup and are dropped silently.
    pub fn candidates<'a, 't>(
        &'a self,
        page: &'t str,
    ) -> impl Iterator<Item = CandidateLine<'t>> + 'a
    where
        't: 'a,
    {
        page.lines().filter_map(move |line| self.match_line(line))
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
