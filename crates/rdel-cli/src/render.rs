//! Plain-text rendering of cards and the shared modal.

use std::io::{self, Write};

use rdel_core::{
    summarize_with_fallback, CardSettings, DirectoryView, LocationCard, LocationEntry,
    ModalContent, ModalState,
};

pub(crate) fn write_directory<W: Write>(out: &mut W, view: &DirectoryView<'_>) -> io::Result<()> {
    let cards = view.cards();
    if cards.is_empty() {
        writeln!(out, "No listings match \"{}\".", view.query().as_str())?;
        return Ok(());
    }
    for card in &cards {
        write_card(out, card, view.settings())?;
        writeln!(out)?;
    }
    writeln!(out, "{} listing(s) shown.", cards.len())?;
    Ok(())
}

pub(crate) fn write_card<W: Write>(
    out: &mut W,
    card: &LocationCard<'_>,
    settings: &CardSettings,
) -> io::Result<()> {
    let entry = card.entry;
    writeln!(out, "[{}] {}", entry.id, entry.name)?;

    let mut labels: Vec<&str> = entry.category.as_deref().into_iter().collect();
    labels.extend(entry.tags.iter().map(String::as_str));
    if !labels.is_empty() {
        writeln!(out, "    {}", labels.join(" · "))?;
    }
    if let Some(cover) = card.cover_url(settings) {
        writeln!(out, "    image: {cover} ({})", card.cover_alt())?;
    }
    if let Some(address) = entry.address.as_deref() {
        writeln!(out, "    address: {address}")?;
    }
    if let Some(title) = card.hours_title(settings) {
        let marker = if card.accordion.is_open() { "-" } else { "+" };
        writeln!(out, "    hours: {title} [{marker}]")?;
        for interval in card.visible_hours() {
            writeln!(out, "        {interval}")?;
        }
    }
    if card.has_safety_tips() {
        writeln!(out, "    safety tips available")?;
    }
    for link in card.links(settings) {
        writeln!(out, "    {}: {}", link.label, link.href)?;
    }
    Ok(())
}

pub(crate) fn write_hours<W: Write>(
    out: &mut W,
    entry: &LocationEntry,
    settings: &CardSettings,
) -> io::Result<()> {
    writeln!(
        out,
        "{}: {}",
        entry.name,
        summarize_with_fallback(&entry.delivery_hours, &settings.hours_fallback)
    )?;
    for interval in &entry.delivery_hours {
        writeln!(out, "    {interval}")?;
    }
    Ok(())
}

/// Renders the modal slot. A closed modal renders nothing.
pub(crate) fn write_modal<W: Write>(out: &mut W, modal: &ModalState) -> io::Result<()> {
    let Some(content) = modal.content() else {
        return Ok(());
    };
    let heading = match content {
        ModalContent::SafetyTips { .. } => format!("Safety tips: {}", content.title()),
        ModalContent::Notice { .. } => content.title().to_string(),
    };
    writeln!(out, "+{}+", "-".repeat(heading.chars().count() + 2))?;
    writeln!(out, "| {heading} |")?;
    writeln!(out, "+{}+", "-".repeat(heading.chars().count() + 2))?;
    writeln!(out, "{}", content.body())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rdel_core::{CoordinationContext, LocationId, RecordStore};

    use super::*;

    fn store() -> RecordStore {
        let mut bakery = LocationEntry::new("1", "Bread & Butter Bakery");
        bakery.category = Some("Bakery".to_string());
        bakery.delivery_hours = vec!["Mon 09:00-17:00".to_string(), "Tue 09:00-17:00".to_string()];
        bakery.safety_tips = Some("Leave at door".to_string());
        bakery.phone = Some("01737 000 000".to_string());
        let veg = LocationEntry::new("2", "Veg Box Co");
        RecordStore::from_entries(vec![bakery, veg]).0
    }

    fn rendered<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn card_shows_summary_and_links() {
        let store = store();
        let ctx = CoordinationContext::new();
        let view = DirectoryView::new(&store, &ctx, CardSettings::default());
        let card = view.card(&LocationId::new("1")).unwrap();
        let text = rendered(|out| write_card(out, &card, view.settings()));
        assert!(text.contains("[1] Bread & Butter Bakery"));
        assert!(text.contains("hours: Mon–Tue, 9am–5pm [+]"));
        assert!(!text.contains("Mon 09:00-17:00"));
        assert!(text.contains("safety tips available"));
        assert!(text.contains("Call 01737 000 000: tel://01737000000"));
    }

    #[test]
    fn expanded_card_lists_intervals() {
        let store = store();
        let ctx = CoordinationContext::new();
        let mut view = DirectoryView::new(&store, &ctx, CardSettings::default());
        view.toggle_hours(&LocationId::new("1"));
        let card = view.card(&LocationId::new("1")).unwrap();
        let text = rendered(|out| write_card(out, &card, view.settings()));
        assert!(text.contains("[-]"));
        assert!(text.contains("        Tue 09:00-17:00"));
    }

    #[test]
    fn card_without_hours_has_no_accordion() {
        let store = store();
        let ctx = CoordinationContext::new();
        let view = DirectoryView::new(&store, &ctx, CardSettings::default());
        let card = view.card(&LocationId::new("2")).unwrap();
        let text = rendered(|out| write_card(out, &card, view.settings()));
        assert!(!text.contains("hours:"));
    }

    #[test]
    fn empty_results_message() {
        let store = store();
        let ctx = CoordinationContext::new();
        let mut view = DirectoryView::new(&store, &ctx, CardSettings::default());
        view.set_query("plumber");
        let text = rendered(|out| write_directory(out, &view));
        assert_eq!(text, "No listings match \"plumber\".\n");
    }

    #[test]
    fn hours_for_listing_without_hours() {
        let entry = LocationEntry::new("2", "Veg Box Co");
        let text = rendered(|out| write_hours(out, &entry, &CardSettings::default()));
        assert_eq!(text, "Veg Box Co: Hours vary\n");
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let text = rendered(|out| write_modal(out, &ModalState::Closed));
        assert!(text.is_empty());
    }

    #[test]
    fn open_modal_renders_title_and_body() {
        let modal = ModalState::Open(ModalContent::SafetyTips {
            location: "Veg Box Co".to_string(),
            tips: "Wash all produce".to_string(),
        });
        let text = rendered(|out| write_modal(out, &modal));
        assert!(text.contains("| Safety tips: Veg Box Co |"));
        assert!(text.ends_with("Wash all produce\n"));
    }
}
