//! Text search over the directory.
//!
//! A query is trimmed, lowercased and split on whitespace. An entry matches
//! when every term is a substring of at least one searchable field. Results
//! keep store order; there is no ranking.

use crate::entry::LocationEntry;

/// Fields consulted by [`filter`], in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Category,
    Tags,
    Address,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Category,
        SearchField::Tags,
        SearchField::Address,
    ];

    fn values(self, entry: &LocationEntry) -> Vec<&str> {
        match self {
            SearchField::Name => vec![entry.name.as_str()],
            SearchField::Category => entry.category.as_deref().into_iter().collect(),
            SearchField::Tags => entry.tags.iter().map(String::as_str).collect(),
            SearchField::Address => entry.address.as_deref().into_iter().collect(),
        }
    }
}

/// A normalized search string. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
    terms: Vec<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        let terms = normalized.split_whitespace().map(str::to_string).collect();
        Self { normalized, terms }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns `true` if every term appears in some searchable field.
    #[must_use]
    pub fn matches(&self, entry: &LocationEntry) -> bool {
        if self.is_empty() {
            return true;
        }

        let haystacks: Vec<String> = SearchField::ALL
            .iter()
            .flat_map(|field| field.values(entry))
            .map(str::to_lowercase)
            .collect();

        self.terms
            .iter()
            .all(|term| haystacks.iter().any(|field| field.contains(term.as_str())))
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for SearchQuery {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

/// Returns the entries matching `query`, preserving their input order.
///
/// Pure and cheap enough to run on every keystroke; an empty query returns
/// every entry.
#[must_use]
pub fn filter<'a, I>(entries: I, query: &SearchQuery) -> Vec<&'a LocationEntry>
where
    I: IntoIterator<Item = &'a LocationEntry>,
{
    entries
        .into_iter()
        .filter(|entry| query.matches(entry))
        .collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
