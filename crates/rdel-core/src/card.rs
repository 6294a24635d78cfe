//! Presentation model for the directory: one card per visible listing, each
//! with its own hours accordion, plus the view that ties the search box, the
//! card list and the shared modal together.

use std::collections::HashMap;

use crate::app_config::AppConfig;
use crate::context::{CoordinationContext, ModalContent};
use crate::entry::{LocationEntry, LocationId};
use crate::hours::{summarize_with_fallback, HOURS_VARY};
use crate::search::{filter, SearchQuery};
use crate::store::RecordStore;

/// Open/closed state of a card's delivery-hours section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionState {
    #[default]
    Closed,
    Open,
}

impl AccordionState {
    #[must_use]
    pub fn open(self) -> Self {
        AccordionState::Open
    }

    #[must_use]
    pub fn close(self) -> Self {
        AccordionState::Closed
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            AccordionState::Open => AccordionState::Closed,
            AccordionState::Closed => AccordionState::Open,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == AccordionState::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLinkKind {
    Website,
    Phone,
    Document,
}

/// A contact affordance shown at the foot of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub kind: CardLinkKind,
    pub label: String,
    pub href: String,
}

/// Rendering knobs taken from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSettings {
    pub uploads_base: String,
    pub cover_base_url: Option<String>,
    pub hours_fallback: String,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            uploads_base: "/uploads".to_string(),
            cover_base_url: None,
            hours_fallback: HOURS_VARY.to_string(),
        }
    }
}

impl From<&AppConfig> for CardSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            uploads_base: config.uploads_base.clone(),
            cover_base_url: config.cover_base_url.clone(),
            hours_fallback: config.hours_fallback.clone(),
        }
    }
}

/// A listing as rendered: the entry plus its accordion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationCard<'a> {
    pub entry: &'a LocationEntry,
    pub accordion: AccordionState,
}

impl<'a> LocationCard<'a> {
    #[must_use]
    pub fn new(entry: &'a LocationEntry) -> Self {
        Self {
            entry,
            accordion: AccordionState::Closed,
        }
    }

    #[must_use]
    pub fn cover_alt(&self) -> &'a str {
        &self.entry.name
    }

    /// Cover image location, resolved against the configured base when the
    /// source gives a relative path.
    #[must_use]
    pub fn cover_url(&self, settings: &CardSettings) -> Option<String> {
        let cover = self.entry.cover.as_deref()?;
        if has_scheme(cover) {
            return Some(cover.to_string());
        }
        Some(match settings.cover_base_url.as_deref() {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                cover.trim_start_matches('/')
            ),
            None => cover.to_string(),
        })
    }

    /// Accordion title, or `None` when the listing has no delivery hours and
    /// no accordion is offered.
    #[must_use]
    pub fn hours_title(&self, settings: &CardSettings) -> Option<String> {
        self.entry
            .has_delivery_hours()
            .then(|| summarize_with_fallback(&self.entry.delivery_hours, &settings.hours_fallback))
    }

    /// Raw intervals shown in the accordion body; empty while collapsed.
    #[must_use]
    pub fn visible_hours(&self) -> &'a [String] {
        if self.accordion.is_open() {
            &self.entry.delivery_hours
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn has_safety_tips(&self) -> bool {
        self.entry.safety_tips.is_some()
    }

    /// Puts this listing's safety tips in the shared modal. Returns `false`
    /// when the listing has none.
    pub fn show_safety_tips(&self, context: &CoordinationContext) -> bool {
        let Some(tips) = self.entry.safety_tips.as_ref() else {
            return false;
        };
        context.open_modal(ModalContent::SafetyTips {
            location: self.entry.name.clone(),
            tips: tips.clone(),
        });
        true
    }

    #[must_use]
    pub fn links(&self, settings: &CardSettings) -> Vec<CardLink> {
        let mut links = Vec::new();

        if let Some(website) = self.entry.website.as_deref() {
            let href = if has_scheme(website) {
                website.to_string()
            } else {
                format!("http://{website}")
            };
            links.push(CardLink {
                kind: CardLinkKind::Website,
                label: "Go to website".to_string(),
                href,
            });
        }

        if let Some(phone) = self.entry.phone.as_deref() {
            links.push(CardLink {
                kind: CardLinkKind::Phone,
                label: format!("Call {phone}"),
                href: format!("tel://{}", phone.replace(' ', "")),
            });
        }

        if let Some(file) = self.entry.file.as_deref() {
            links.push(CardLink {
                kind: CardLinkKind::Document,
                label: "Download PDF".to_string(),
                href: format!(
                    "{}/{}",
                    settings.uploads_base.trim_end_matches('/'),
                    file.trim_start_matches('/')
                ),
            });
        }

        links
    }
}

fn has_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// The searchable card list.
///
/// Holds the current query, the visible subset (always recomputed from the
/// store) and the accordion state of every mounted card. A card that drops
/// out of the results is unmounted and comes back collapsed.
#[derive(Debug)]
pub struct DirectoryView<'a> {
    store: &'a RecordStore,
    context: &'a CoordinationContext,
    settings: CardSettings,
    query: SearchQuery,
    visible: Vec<&'a LocationEntry>,
    accordions: HashMap<LocationId, AccordionState>,
}

impl<'a> DirectoryView<'a> {
    #[must_use]
    pub fn new(
        store: &'a RecordStore,
        context: &'a CoordinationContext,
        settings: CardSettings,
    ) -> Self {
        let mut view = Self {
            store,
            context,
            settings,
            query: SearchQuery::default(),
            visible: Vec::new(),
            accordions: HashMap::new(),
        };
        view.refresh();
        view
    }

    /// Re-runs the search for `raw`. The last call wins.
    pub fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
        self.refresh();
    }

    fn refresh(&mut self) {
        let store = self.store;
        self.visible = filter(store.all(), &self.query);
        let mounted: HashMap<LocationId, AccordionState> = self
            .visible
            .iter()
            .map(|entry| {
                let state = self
                    .accordions
                    .get(&entry.id)
                    .copied()
                    .unwrap_or_default();
                (entry.id.clone(), state)
            })
            .collect();
        self.accordions = mounted;
        tracing::debug!(
            query = self.query.as_str(),
            visible = self.visible.len(),
            "directory filtered"
        );
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[must_use]
    pub fn settings(&self) -> &CardSettings {
        &self.settings
    }

    #[must_use]
    pub fn context(&self) -> &'a CoordinationContext {
        self.context
    }

    #[must_use]
    pub fn visible(&self) -> &[&'a LocationEntry] {
        &self.visible
    }

    /// Cards for the visible entries, in store order.
    #[must_use]
    pub fn cards(&self) -> Vec<LocationCard<'a>> {
        self.visible
            .iter()
            .map(|entry| self.card_for(*entry))
            .collect()
    }

    /// The mounted card for `id`, if it is currently visible.
    #[must_use]
    pub fn card(&self, id: &LocationId) -> Option<LocationCard<'a>> {
        self.visible
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| self.card_for(*entry))
    }

    fn card_for(&self, entry: &'a LocationEntry) -> LocationCard<'a> {
        LocationCard {
            entry,
            accordion: self.accordions.get(&entry.id).copied().unwrap_or_default(),
        }
    }

    /// Flips one card's accordion. Returns the new state, or `None` if the
    /// card is not mounted or has no hours to show.
    pub fn toggle_hours(&mut self, id: &LocationId) -> Option<AccordionState> {
        let card = self.card(id)?;
        if !card.entry.has_delivery_hours() {
            return None;
        }
        let state = self.accordions.entry(id.clone()).or_default();
        *state = state.toggle();
        Some(*state)
    }

    /// Opens the shared modal with the card's safety tips.
    pub fn show_safety_tips(&self, id: &LocationId) -> bool {
        self.card(id)
            .is_some_and(|card| card.show_safety_tips(self.context))
    }

    /// Dismisses the shared modal.
    pub fn close_modal(&self) {
        self.context.close_modal();
    }
}

#[cfg(test)]
#[path = "card_test.rs"]
mod tests;
