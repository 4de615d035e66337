//! Folding of collection records into week periods.
//!
//! Records are grouped by *contiguous run* of equal week numbers, not by
//! distinct week number: weeks `12`, `13`, `12` give three periods.

use chrono::NaiveDate;
use tracing::trace;

use crate::model::{CollectionRecord, Period};
use crate::source::SourceError;

#[derive(Debug, Default)]
/// Accumulator of the period fold.
///
/// Starts without an open period. Each [`PeriodFold::push`] either extends the
/// open period or flushes it and opens a new one; [`PeriodFold::finish`]
/// flushes whatever is still open.
pub struct PeriodFold {
    periods: Vec<Period>,
    open: Option<Period>,
}

impl PeriodFold {
    /// Empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one record, parsing its dates with `date_format`.
    ///
    /// The open period takes the record's week number and dates, so the
    /// date range of a period is the one of its last record.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Date`] when a date of the record cannot be parsed.
    pub fn push(
        mut self,
        record: &CollectionRecord,
        date_format: &str,
    ) -> Result<Self, SourceError> {
        let mut period = match self.open.take() {
            Some(period) if period.week_number == record.week_number => period,
            Some(period) => {
                self.flush(period);
                Period::default()
            }
            None => Period::default(),
        };

        period.week_number.clone_from(&record.week_number);
        period.date_begin = parse_date(&record.date_begin, date_format)?;
        period.date_end = parse_date(&record.date_end, date_format)?;
        period.types.push_str(&record.kind);
        period.information.push_str(&record.information);

        self.open = Some(period);
        Ok(self)
    }

    /// Flush the open period and return every period in order.
    ///
    /// An accumulator that never saw a record still yields one empty period.
    #[must_use]
    pub fn finish(mut self) -> Vec<Period> {
        let last = self.open.take().unwrap_or_default();
        self.flush(last);
        self.periods
    }

    fn flush(&mut self, period: Period) {
        trace!(week = %period.week_number, types = %period.types, "period closed");
        self.periods.push(period);
    }
}

/// Fold `records` into periods, one per run of equal week numbers.
///
/// # Errors
///
/// Returns [`SourceError::Date`] on the first record date that does not match
/// `date_format`; no partial result is kept.
pub fn aggregate<'a, I>(records: I, date_format: &str) -> Result<Vec<Period>, SourceError>
where
    I: IntoIterator<Item = &'a CollectionRecord>,
{
    records
        .into_iter()
        .try_fold(PeriodFold::new(), |fold, record| fold.push(record, date_format))
        .map(PeriodFold::finish)
}

fn parse_date(value: &str, date_format: &str) -> Result<NaiveDate, SourceError> {
    NaiveDate::parse_from_str(value, date_format).map_err(|source| SourceError::Date {
        value: value.to_owned(),
        source,
    })
}
