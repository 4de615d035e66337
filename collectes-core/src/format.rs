//! Rendering of periods as printable calendar lines.

use std::fmt;

use crate::config::CalendarConfig;
use crate::model::Period;

/// Type codes printed at the bottom of every calendar.
pub const LEGEND: [(&str, &str); 7] = [
    ("D", "Déchets"),
    ("R", "Récupération"),
    ("C", "Compost"),
    ("S", "Sapin"),
    ("E", "Encombrant et bois"),
    ("B", "Carton"),
    ("F", "Feuilles mortes"),
];

const LEGEND_TITLE: &str = "Legende";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One printable unit of the calendar.
///
/// The [`fmt::Display`] output of a line is meant to be written followed by a
/// single newline; headers and the legend carry their own leading blank lines.
pub enum CalendarLine {
    /// Start of a new month, e.g. `January 2014`.
    MonthHeader(String),
    /// Summary of one period.
    Period {
        /// Week token.
        week_number: String,
        /// Merged type codes.
        types: String,
        /// Formatted start date.
        date_begin: String,
        /// Formatted end date.
        date_end: String,
    },
    /// Merged information note of the preceding period.
    Information(String),
    /// Static explanation of the type codes.
    Legend,
}

impl fmt::Display for CalendarLine {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarLine::MonthHeader(label) => write!(formatter, "\n\n{label}"),
            CalendarLine::Period {
                week_number,
                types,
                date_begin,
                date_end,
            } => write!(formatter, "{week_number}\t{types}\t{date_begin}\t{date_end}"),
            CalendarLine::Information(information) => write!(formatter, " `-> {information}"),
            CalendarLine::Legend => {
                write!(formatter, "\n{LEGEND_TITLE}")?;
                for (code, meaning) in LEGEND {
                    write!(formatter, "\n{code} - {meaning}")?;
                }
                Ok(())
            }
        }
    }
}

/// Turn periods into calendar lines, inserting a header at every month change.
///
/// The month of a period is taken from its start date. The legend always
/// closes the sequence.
#[must_use]
pub fn format_calendar(periods: &[Period], config: &CalendarConfig) -> Vec<CalendarLine> {
    let mut lines = Vec::with_capacity(periods.len() * 2 + 1);
    let mut previous_month = String::new();

    for period in periods {
        let month = period.date_begin.format(&config.month_format).to_string();
        if month != previous_month {
            lines.push(CalendarLine::MonthHeader(month.clone()));
            previous_month = month;
        }

        lines.push(CalendarLine::Period {
            week_number: period.week_number.clone(),
            types: period.types.clone(),
            date_begin: period.date_begin.format(&config.short_date_format).to_string(),
            date_end: period.date_end.format(&config.short_date_format).to_string(),
        });

        if !period.information.is_empty() {
            lines.push(CalendarLine::Information(period.information.clone()));
        }
    }

    lines.push(CalendarLine::Legend);
    lines
}
