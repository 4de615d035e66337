//! Pipeline configuration with the historical defaults of the printed calendar.

/// District printed when nothing else is configured.
pub const DEFAULT_DISTRICT: &str = "Arrondissement du Mont-Bellevue";
/// Format of the dates found in the source records.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of the month headers, e.g. `January 2014`.
pub const DEFAULT_MONTH_FORMAT: &str = "%B %Y";
/// Format of the dates printed on period lines, e.g. `01-06`.
pub const DEFAULT_SHORT_DATE_FORMAT: &str = "%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Values every stage of the pipeline reads instead of embedding constants.
pub struct CalendarConfig {
    /// District whose records are kept.
    pub district: String,
    /// `chrono` format used to parse record dates.
    pub date_format: String,
    /// `chrono` format used for month headers.
    pub month_format: String,
    /// `chrono` format used for the dates of period lines.
    pub short_date_format: String,
}

impl CalendarConfig {
    /// Replace the district, keeping every format.
    #[must_use]
    pub fn with_district<S: Into<String>>(mut self, district: S) -> Self {
        self.district = district.into();
        self
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            district: DEFAULT_DISTRICT.to_owned(),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            month_format: DEFAULT_MONTH_FORMAT.to_owned(),
            short_date_format: DEFAULT_SHORT_DATE_FORMAT.to_owned(),
        }
    }
}
