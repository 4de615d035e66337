//! Domain data structures for collection records, week periods and calendars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Single dated collection as published by the municipality.
///
/// Dates are kept as the raw strings of the source document; they are only
/// parsed when the record is folded into a [`Period`].
pub struct CollectionRecord {
    /// Municipality identifier.
    pub municipality_id: String,
    /// Collection code identifier.
    pub code_id: String,
    /// Opaque week token, only ever compared for equality.
    pub week_number: String,
    /// First day of the collection, `YYYY-MM-DD` by default.
    pub date_begin: String,
    /// Last day of the collection, `YYYY-MM-DD` by default.
    pub date_end: String,
    /// Administrative district the collection belongs to.
    pub district: String,
    /// Collection type code, usually a single letter such as `D` or `R`.
    pub kind: String,
    /// Free-text description.
    pub description: String,
    /// Free-text information note, often empty.
    pub information: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// All consecutive records of one week merged into a single display unit.
pub struct Period {
    /// Week token shared by every merged record.
    pub week_number: String,
    /// Type codes of the merged records, concatenated in encounter order.
    pub types: String,
    /// Start date of the last merged record.
    pub date_begin: NaiveDate,
    /// End date of the last merged record.
    pub date_end: NaiveDate,
    /// Information notes of the merged records, concatenated in encounter order.
    pub information: String,
}

impl Period {
    /// Zero calendar date used by a period no record was ever merged into.
    #[must_use]
    pub fn zero_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default()
    }
}

impl Default for Period {
    fn default() -> Self {
        Self {
            week_number: String::new(),
            types: String::new(),
            date_begin: Self::zero_date(),
            date_end: Self::zero_date(),
            information: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Periods of a single district, in schedule order.
pub struct Calendar {
    /// District the periods were selected for.
    pub district: String,
    /// Aggregated periods.
    pub periods: Vec<Period>,
}
