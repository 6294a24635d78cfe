//! The read-only Record Store and its loader.
//!
//! Records are admitted one by one: a record that fails validation is
//! skipped and reported, never fatal to the load. Only an unreadable or
//! unparseable document fails as a whole.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::entry::{LocationEntry, LocationId, RawLocationRecord};
use crate::error::{ConfigError, RecordError};

/// Immutable, ordered collection of validated listings.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    entries: Vec<LocationEntry>,
}

/// A record excluded from the store, with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub error: RecordError,
}

/// Outcome of building a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl RecordStore {
    /// Builds a store from raw source records, skipping invalid ones.
    #[must_use]
    pub fn from_records<I>(records: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = Result<RawLocationRecord, RecordError>>,
    {
        let mut entries: Vec<LocationEntry> = Vec::new();
        let mut seen: HashSet<LocationId> = HashSet::new();
        let mut report = LoadReport::default();

        for (index, record) in records.into_iter().enumerate() {
            let admitted = record
                .and_then(LocationEntry::try_from)
                .and_then(|entry| {
                    if seen.insert(entry.id.clone()) {
                        Ok(entry)
                    } else {
                        Err(RecordError::DuplicateId(entry.id))
                    }
                });

            match admitted {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    tracing::warn!(record = index, reason = %error, "skipping malformed location record");
                    report.skipped.push(SkippedRecord { index, error });
                }
            }
        }

        report.loaded = entries.len();
        (Self { entries }, report)
    }

    /// Builds a store from already-validated entries. Duplicate ids after the
    /// first occurrence are skipped.
    #[must_use]
    pub fn from_entries(entries: Vec<LocationEntry>) -> (Self, LoadReport) {
        Self::from_records(entries.into_iter().map(|entry| {
            Ok(RawLocationRecord {
                id: Some(entry.id),
                name: Some(entry.name),
                cover: entry.cover,
                address: entry.address,
                website: entry.website,
                phone: entry.phone,
                file: entry.file,
                delivery_hours: entry.delivery_hours,
                safety_tips: entry.safety_tips,
                category: entry.category,
                tags: entry.tags,
            })
        }))
    }

    /// All entries in source order.
    #[must_use]
    pub fn all(&self) -> &[LocationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &LocationId) -> Option<&LocationEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Either a bare list of records or a `locations:` wrapper around one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LocationsFile<V> {
    Wrapped { locations: Vec<V> },
    Bare(Vec<V>),
}

impl<V> LocationsFile<V> {
    fn into_records(self) -> Vec<V> {
        match self {
            LocationsFile::Wrapped { locations } => locations,
            LocationsFile::Bare(records) => records,
        }
    }
}

/// Load the directory from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, has an unknown
/// extension, or is not a list of records. Individual bad records are
/// reported in the [`LoadReport`] instead.
pub fn load_locations(path: &Path) -> Result<(RecordStore, LoadReport), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LocationsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("yaml" | "yml") => parse_yaml(&content)?,
        Some("json") => parse_json(&content)?,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    };

    let (store, report) = RecordStore::from_records(records);
    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped.len(),
        "location directory loaded"
    );
    Ok((store, report))
}

fn parse_yaml(content: &str) -> Result<Vec<Result<RawLocationRecord, RecordError>>, ConfigError> {
    let file: LocationsFile<serde_yaml::Value> = serde_yaml::from_str(content)?;
    Ok(file
        .into_records()
        .into_iter()
        .map(|value| {
            serde_yaml::from_value(value).map_err(|e| RecordError::Unreadable(e.to_string()))
        })
        .collect())
}

fn parse_json(content: &str) -> Result<Vec<Result<RawLocationRecord, RecordError>>, ConfigError> {
    let file: LocationsFile<serde_json::Value> = serde_json::from_str(content)?;
    Ok(file
        .into_records()
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).map_err(|e| RecordError::Unreadable(e.to_string()))
        })
        .collect())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
