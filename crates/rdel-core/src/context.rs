//! Session-wide coordination state shared by cards and the modal.
//!
//! A [`CoordinationContext`] is built once when the directory is mounted and
//! handed to every consumer by reference. It is not `Clone`; two instances
//! hold two independent modal slots.

use std::cell::RefCell;

/// Content the shared modal can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    /// Safety guidance published by a listing.
    SafetyTips { location: String, tips: String },
    /// Free-form message for callers other than location cards.
    Notice { title: String, body: String },
}

impl ModalContent {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            ModalContent::SafetyTips { location, .. } => location,
            ModalContent::Notice { title, .. } => title,
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            ModalContent::SafetyTips { tips, .. } => tips,
            ModalContent::Notice { body, .. } => body,
        }
    }
}

/// The single modal slot: either closed or showing one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState<C = ModalContent> {
    Closed,
    Open(C),
}

impl<C> Default for ModalState<C> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<C> ModalState<C> {
    /// Replaces whatever is showing with `content`.
    #[must_use]
    pub fn open(self, content: C) -> Self {
        ModalState::Open(content)
    }

    #[must_use]
    pub fn close(self) -> Self {
        ModalState::Closed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Content to render, or `None` when there is nothing to show.
    #[must_use]
    pub fn content(&self) -> Option<&C> {
        match self {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }
}

#[derive(Debug)]
pub struct CoordinationContext<C = ModalContent> {
    modal: RefCell<ModalState<C>>,
}

impl<C> Default for CoordinationContext<C> {
    fn default() -> Self {
        Self {
            modal: RefCell::new(ModalState::Closed),
        }
    }
}

impl<C: Clone + PartialEq + std::fmt::Debug> CoordinationContext<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `content`, replacing anything already open. Opening the content
    /// that is already showing is a no-op.
    pub fn open_modal(&self, content: C) {
        let mut modal = self.modal.borrow_mut();
        if modal.content() == Some(&content) {
            return;
        }
        tracing::debug!(?content, "opening modal");
        let previous = std::mem::take(&mut *modal);
        *modal = previous.open(content);
    }

    pub fn close_modal(&self) {
        let mut modal = self.modal.borrow_mut();
        if modal.is_open() {
            tracing::debug!("closing modal");
        }
        let previous = std::mem::take(&mut *modal);
        *modal = previous.close();
    }

    /// Snapshot of the modal slot for renderers.
    #[must_use]
    pub fn current_modal(&self) -> ModalState<C> {
        self.modal.borrow().clone()
    }
}
