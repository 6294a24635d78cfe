use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Stable identifier for a directory listing.
///
/// Source documents may give ids as integers or strings; both normalize to
/// the same textual form so `1` and `"1"` collide as duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct LocationId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(u64),
    Text(String),
}

impl From<RawId> for LocationId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => LocationId(n.to_string()),
            RawId::Text(s) => LocationId(s.trim().to_string()),
        }
    }
}

impl From<LocationId> for String {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

impl LocationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for LocationId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One directory listing as it appears in the source document, before
/// validation. Every field is optional here; [`LocationEntry::try_from`]
/// enforces the required ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocationRecord {
    pub id: Option<LocationId>,
    pub name: Option<String>,
    pub cover: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub file: Option<String>,
    #[serde(default)]
    pub delivery_hours: Vec<String>,
    pub safety_tips: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A validated, immutable directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub id: LocationId,
    pub name: String,
    pub cover: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    /// Downloadable document, relative to the uploads base.
    pub file: Option<String>,
    /// Interval strings in source order, e.g. `"Mon 09:00-17:00"`.
    pub delivery_hours: Vec<String>,
    pub safety_tips: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl LocationEntry {
    /// Builds an entry with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cover: None,
            address: None,
            website: None,
            phone: None,
            file: None,
            delivery_hours: Vec::new(),
            safety_tips: None,
            category: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_delivery_hours(&self) -> bool {
        !self.delivery_hours.is_empty()
    }
}

impl TryFrom<RawLocationRecord> for LocationEntry {
    type Error = RecordError;

    fn try_from(raw: RawLocationRecord) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .filter(|id| !id.as_str().is_empty())
            .ok_or(RecordError::MissingId)?;
        let name = non_blank(raw.name).ok_or_else(|| RecordError::MissingName(id.clone()))?;

        Ok(Self {
            id,
            name,
            cover: non_blank(raw.cover),
            address: non_blank(raw.address),
            website: non_blank(raw.website),
            phone: non_blank(raw.phone),
            file: non_blank(raw.file),
            delivery_hours: raw
                .delivery_hours
                .into_iter()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
            safety_tips: non_blank(raw.safety_tips),
            category: non_blank(raw.category),
            tags: raw
                .tags
                .into_iter()
                .filter_map(|t| non_blank(Some(t)))
                .collect(),
        })
    }
}

/// Treat whitespace-only strings the same as a missing field.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
