//! Interactive browsing loop.
//!
//! Every line of input is either a card action prefixed with `:` or a new
//! search query. The directory is re-rendered after each query change.

use std::io::{BufRead, Write};

use rdel_core::{DirectoryView, LocationId};

use crate::render;

const SEARCH_HINT: &str =
    "Try searching what you're looking for e.g. bread, coffee, gifts, veg (:help for commands)";

const HELP: &str = "\
:hours <id>   expand or collapse a card's delivery hours
:tips <id>    show a listing's safety tips
:close        dismiss the safety tips window
:quit         leave
anything else searches the directory";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Search(String),
    ToggleHours(LocationId),
    ShowTips(LocationId),
    CloseModal,
    Help,
    Quit,
    Unknown(String),
}

impl BrowseCommand {
    pub(crate) fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(action) = line.strip_prefix(':') else {
            return BrowseCommand::Search(line.to_string());
        };

        let (verb, arg) = match action.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (action, ""),
        };

        match (verb, arg) {
            ("hours" | "h", id) if !id.is_empty() => {
                BrowseCommand::ToggleHours(LocationId::new(id))
            }
            ("tips" | "t", id) if !id.is_empty() => BrowseCommand::ShowTips(LocationId::new(id)),
            ("close" | "c", _) => BrowseCommand::CloseModal,
            ("help" | "?", _) => BrowseCommand::Help,
            ("quit" | "q", _) => BrowseCommand::Quit,
            _ => BrowseCommand::Unknown(line.to_string()),
        }
    }
}

/// Runs the loop until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub(crate) fn run<R, W>(view: &mut DirectoryView<'_>, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{SEARCH_HINT}")?;
    render::write_directory(out, view)?;

    for line in input.lines() {
        let line = line?;
        match BrowseCommand::parse(&line) {
            BrowseCommand::Search(query) => {
                view.set_query(&query);
                render::write_directory(out, view)?;
            }
            BrowseCommand::ToggleHours(id) => match view.toggle_hours(&id) {
                Some(_) => {
                    if let Some(card) = view.card(&id) {
                        render::write_card(out, &card, view.settings())?;
                    }
                }
                None => writeln!(out, "No delivery hours to show for listing {id}.")?,
            },
            BrowseCommand::ShowTips(id) => {
                if view.show_safety_tips(&id) {
                    render::write_modal(out, &view.context().current_modal())?;
                } else {
                    writeln!(out, "No safety tips for listing {id}.")?;
                }
            }
            BrowseCommand::CloseModal => view.close_modal(),
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Quit => break,
            BrowseCommand::Unknown(raw) => {
                writeln!(out, "Unknown command {raw:?}; type :help")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
