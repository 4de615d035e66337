//! Provider implementation for Sherbrooke using the city's open-data JSON calendar.
//!
//! The document is published at
//! <http://donnees.ville.sherbrooke.qc.ca/dataset/calendrier-des-collectes> and
//! holds a single list of collections under
//! `CALENDRIER_COLLECTES.COLLECTE_MATIERES_RESIDUELLES`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use collectes_core::{
    model::CollectionRecord,
    source::{ScheduleSource, SourceError},
};
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Root object of the published document.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "CALENDRIER_COLLECTES")]
    calendar: CalendarSection,
}

#[derive(Debug, Deserialize)]
struct CalendarSection {
    #[serde(rename = "COLLECTE_MATIERES_RESIDUELLES")]
    collections: Vec<CollectionEntry>,
}

/// Single collection of the document. Absent keys and `null` values read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollectionEntry {
    #[serde(rename = "MUNID", deserialize_with = "null_as_empty")]
    municipality_id: String,
    #[serde(rename = "CODEID", deserialize_with = "null_as_empty")]
    code_id: String,
    #[serde(rename = "NO_SEM", deserialize_with = "null_as_empty")]
    week_number: String,
    #[serde(rename = "DT01", deserialize_with = "null_as_empty")]
    date_begin: String,
    #[serde(rename = "DT02", deserialize_with = "null_as_empty")]
    date_end: String,
    #[serde(rename = "ARROND", deserialize_with = "null_as_empty")]
    district: String,
    #[serde(rename = "TYPE", deserialize_with = "null_as_empty")]
    kind: String,
    #[serde(rename = "DESC", deserialize_with = "null_as_empty")]
    description: String,
    #[serde(rename = "INFO", deserialize_with = "null_as_empty")]
    information: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<CollectionEntry> for CollectionRecord {
    fn from(entry: CollectionEntry) -> Self {
        CollectionRecord {
            municipality_id: entry.municipality_id,
            code_id: entry.code_id,
            week_number: entry.week_number,
            date_begin: entry.date_begin,
            date_end: entry.date_end,
            district: entry.district,
            kind: entry.kind,
            description: entry.description,
            information: entry.information,
        }
    }
}

/// Schedule source backed by a local copy of the Sherbrooke JSON file.
#[derive(Debug, Clone)]
pub struct SherbrookeFile {
    path: PathBuf,
    name: String,
}

impl SherbrookeFile {
    /// Create a source reading `path` on every [`ScheduleSource::records`] call.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = format!("Sherbrooke ({})", path.display());
        Self { path, name }
    }

    /// File the records are read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for SherbrookeFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> Result<Vec<CollectionRecord>, SourceError> {
        let raw = fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = raw.len(), "document read");
        parse_document(raw)
    }
}

/// Decode a Sherbrooke calendar document into records, in document order.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when `raw` is not valid UTF-8 JSON or lacks
/// the calendar section or its collection list.
pub fn parse_document<R: AsRef<[u8]>>(raw: R) -> Result<Vec<CollectionRecord>, SourceError> {
    let document: Document = serde_json::from_slice(raw.as_ref())?;
    Ok(document
        .calendar
        .collections
        .into_iter()
        .map(CollectionRecord::from)
        .collect())
}
