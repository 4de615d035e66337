//! High-level service facade chaining source, filter, aggregation and formatting.

use tracing::debug;

use crate::aggregate::aggregate;
use crate::config::CalendarConfig;
use crate::filter::filter_by_district;
use crate::format::{CalendarLine, format_calendar};
use crate::model::Calendar;
use crate::source::{ScheduleSource, SourceError};

/// Public entry point for building the printable calendar of one district.
pub struct CalendarService<S> {
    source: S,
    config: CalendarConfig,
}

impl<S: ScheduleSource> CalendarService<S> {
    /// Create a new service reading from `source`.
    #[must_use]
    pub fn new(source: S, config: CalendarConfig) -> Self {
        Self { source, config }
    }

    /// Configuration the service runs with.
    #[must_use]
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Load the records and aggregate the configured district into periods.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the source cannot be read or decoded, or if
    /// a record of the district carries an invalid date.
    pub fn calendar(&self) -> Result<Calendar, SourceError> {
        let records = self.source.records()?;
        debug!(source = self.source.name(), records = records.len(), "records loaded");

        let district = self.config.district.as_str();
        let selected: Vec<_> = filter_by_district(&records, district).collect();
        debug!(district, records = selected.len(), "district selected");

        let periods = aggregate(selected, &self.config.date_format)?;
        debug!(periods = periods.len(), "periods aggregated");

        Ok(Calendar {
            district: self.config.district.clone(),
            periods,
        })
    }

    /// Run the whole pipeline and return the printable lines.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] under the same conditions as [`Self::calendar`].
    pub fn lines(&self) -> Result<Vec<CalendarLine>, SourceError> {
        let calendar = self.calendar()?;
        Ok(format_calendar(&calendar.periods, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CollectionRecord;

    struct MemorySource(Vec<CollectionRecord>);

    impl ScheduleSource for MemorySource {
        fn name(&self) -> &str {
            "memory"
        }

        fn records(&self) -> Result<Vec<CollectionRecord>, SourceError> {
            Ok(self.0.clone())
        }
    }

    fn record(
        district: &str,
        week_number: &str,
        kind: &str,
        date: &str,
        information: &str,
    ) -> CollectionRecord {
        CollectionRecord {
            district: district.to_owned(),
            week_number: week_number.to_owned(),
            kind: kind.to_owned(),
            date_begin: date.to_owned(),
            date_end: date.to_owned(),
            information: information.to_owned(),
            ..CollectionRecord::default()
        }
    }

    fn render(service: &CalendarService<MemorySource>) -> String {
        service
            .lines()
            .unwrap()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    fn service(records: Vec<CollectionRecord>) -> CalendarService<MemorySource> {
        CalendarService::new(
            MemorySource(records),
            CalendarConfig::default().with_district("Mont-Bellevue"),
        )
    }

    #[test]
    fn test_lines_for_district() {
        let service = service(vec![
            record("Mont-Bellevue", "01", "D", "2014-01-06", ""),
            record("Fleurimont", "01", "C", "2014-01-07", "Ignored"),
            record("Mont-Bellevue", "01", "R", "2014-01-06", ""),
            record("Mont-Bellevue", "02", "C", "2014-01-13", "Holiday"),
        ]);
        let output = render(&service);
        assert!(output.starts_with(
            "\n\nJanuary 2014\n01\tDR\t01-06\t01-06\n02\tC\t01-13\t01-13\n `-> Holiday\n\nLegende\n"
        ));
        assert_eq!(output.matches("January 2014").count(), 1);
    }

    #[test]
    fn test_calendar_without_matching_records() {
        let service = service(vec![record("Fleurimont", "01", "D", "2014-01-06", "")]);
        let calendar = service.calendar().unwrap();
        assert_eq!(calendar.district, service.config().district);
        assert_eq!(calendar.district, "Mont-Bellevue");
        assert_eq!(calendar.periods.len(), 1);
        assert!(calendar.periods[0].week_number.is_empty());
        assert!(render(&service).starts_with("\n\nJanuary 0001\n\t\t01-01\t01-01\n"));
    }

    #[test]
    fn test_bad_date_outside_district_is_ignored() {
        let service = service(vec![
            record("Fleurimont", "01", "D", "not a date", ""),
            record("Mont-Bellevue", "01", "D", "2014-01-06", ""),
        ]);
        assert_eq!(service.calendar().unwrap().periods.len(), 1);
    }

    #[test]
    fn test_bad_date_in_district_fails() {
        let service = service(vec![record("Mont-Bellevue", "01", "D", "06/01/2014", "")]);
        assert!(matches!(service.lines(), Err(SourceError::Date { .. })));
    }

    #[test]
    fn test_lines_are_deterministic() {
        let records = vec![
            record("Mont-Bellevue", "52", "S", "2014-12-29", "Sapins"),
            record("Mont-Bellevue", "01", "D", "2015-01-05", ""),
            record("Mont-Bellevue", "52", "R", "2014-12-29", ""),
        ];
        let first = render(&service(records.clone()));
        let second = render(&service(records));
        assert_eq!(first, second);
    }
}
