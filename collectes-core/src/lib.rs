//! Core types and pipeline for turning collection records into a printable calendar.

/// Aggregation of consecutive same-week records into periods.
pub mod aggregate;
/// Configuration values shared by every stage of the pipeline.
pub mod config;
/// Selection of the records belonging to a single district.
pub mod filter;
/// Rendering of periods into calendar lines.
pub mod format;
/// Domain models for records, periods and calendars.
pub mod model;
/// High-level service facade used by clients.
pub mod service;
/// Traits describing where records come from, and their errors.
pub mod source;

pub use aggregate::*;
pub use config::*;
pub use filter::*;
pub use format::*;
pub use model::*;
pub use service::*;
pub use source::*;
