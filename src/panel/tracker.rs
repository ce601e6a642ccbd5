use crate::host::{DocumentStore, FocusManager, HostEvent};
use crate::model::{DocRef, Leaf, MetadataSnapshot};
use crate::ops::extract_tags;

use super::selection::Selection;

/// Which document the panel is following
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    NoActiveDocument,
    ActiveDocument { doc: DocRef, tags: Vec<String> },
}

impl TrackerState {
    pub fn document(&self) -> Option<&DocRef> {
        match self {
            TrackerState::NoActiveDocument => None,
            TrackerState::ActiveDocument { doc, .. } => Some(doc),
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            TrackerState::NoActiveDocument => &[],
            TrackerState::ActiveDocument { tags, .. } => tags,
        }
    }
}

/// Whether a handler changed anything the panel displays
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Unchanged,
    Rerender,
}

impl Signal {
    pub fn is_rerender(self) -> bool {
        self == Signal::Rerender
    }

    /// Combine the signals of two handlers run in sequence
    pub fn or(self, other: Signal) -> Signal {
        if self.is_rerender() || other.is_rerender() {
            Signal::Rerender
        } else {
            Signal::Unchanged
        }
    }
}

/// The panel's complete state: the tracked document, its tag set, and the
/// selected tag.
///
/// Only the handlers below mutate it. Each handler recomputes the tag set
/// (when needed), reconciles the selection in the same call, and only then
/// reports whether a re-render is due, so no render can observe a selection
/// outside the tag set.
///
/// Tag sets are compared as ordered sequences. Both sides are always sorted by
/// the extractor, so this only differs from set comparison for inputs the
/// extractor never produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    tracker: TrackerState,
    selection: Selection,
}

impl PanelState {
    /// Initial state when the panel is mounted: follow whatever the host has focused.
    pub fn open<H: DocumentStore + FocusManager + ?Sized>(host: &H) -> Self {
        let mut state = PanelState {
            tracker: TrackerState::NoActiveDocument,
            selection: Selection::default(),
        };
        let _ = state.enter(host.active_document(), host);
        state
    }

    pub fn tracker(&self) -> &TrackerState {
        &self.tracker
    }

    pub fn active_document(&self) -> Option<&DocRef> {
        self.tracker.document()
    }

    pub fn tags(&self) -> &[String] {
        self.tracker.tags()
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selection.get()
    }

    /// Dispatch one host event to its handler.
    pub fn handle<H: DocumentStore + FocusManager + ?Sized>(
        &mut self,
        event: &HostEvent,
        host: &H,
    ) -> Signal {
        match event {
            HostEvent::FocusChanged(leaf) => self.on_focus_changed(leaf, host),
            HostEvent::MetadataChanged { doc, snapshot } => self.on_metadata_changed(doc, snapshot),
            HostEvent::Created(_) => self.on_created(host),
            HostEvent::Deleted(doc) => self.on_deleted(doc),
        }
    }

    /// Focus moved. Only editor leaves can change the tracked document.
    pub fn on_focus_changed<H: DocumentStore + FocusManager + ?Sized>(
        &mut self,
        leaf: &Leaf,
        host: &H,
    ) -> Signal {
        if !leaf.is_editor() {
            tracing::trace!(kind = ?leaf.kind, "ignoring focus change to non-editor leaf");
            return Signal::Unchanged;
        }
        let target = leaf.document.clone().or_else(|| host.active_document());
        if target.as_ref() == self.active_document() {
            return Signal::Unchanged;
        }
        self.enter(target, host)
    }

    /// A document was re-indexed. Only the tracked document matters, and only
    /// if its tag list actually changed.
    pub fn on_metadata_changed(&mut self, doc: &DocRef, snapshot: &MetadataSnapshot) -> Signal {
        let TrackerState::ActiveDocument { doc: current, tags } = &mut self.tracker else {
            return Signal::Unchanged;
        };
        if *current != *doc {
            return Signal::Unchanged;
        }

        let new_tags = extract_tags(Some(snapshot));
        if *tags == new_tags {
            return Signal::Unchanged;
        }
        tracing::debug!(path = %doc.path, tags = ?new_tags, "tag set changed");
        *tags = new_tags;
        self.selection.reconcile(tags);
        Signal::Rerender
    }

    /// A document was created. Creation can move focus without a focus
    /// event, so ask the host again.
    pub fn on_created<H: DocumentStore + FocusManager + ?Sized>(&mut self, host: &H) -> Signal {
        let focus = host.active_document();
        if focus.as_ref() == self.active_document() {
            return Signal::Unchanged;
        }
        self.enter(focus, host)
    }

    /// A document was deleted. Deleting the tracked document always resets the panel.
    pub fn on_deleted(&mut self, doc: &DocRef) -> Signal {
        if self.active_document() != Some(doc) {
            return Signal::Unchanged;
        }
        tracing::debug!(path = %doc.path, "tracked document deleted");
        self.tracker = TrackerState::NoActiveDocument;
        self.selection.clear();
        Signal::Rerender
    }

    /// Plain activation of a tag chip: pivot into the tag. Re-activating the
    /// selected tag keeps it selected. Tags outside the current set are ignored.
    pub fn activate_tag(&mut self, tag: &str) -> Signal {
        if !self.tags().iter().any(|t| t == tag) || self.selection.is_selected(tag) {
            return Signal::Unchanged;
        }
        self.selection.select(tag);
        Signal::Rerender
    }

    pub fn clear_selection(&mut self) -> Signal {
        if self.selection.get().is_none() {
            return Signal::Unchanged;
        }
        self.selection.clear();
        Signal::Rerender
    }

    fn enter<S: DocumentStore + ?Sized>(&mut self, doc: Option<DocRef>, store: &S) -> Signal {
        self.tracker = match doc {
            Some(doc) => {
                let tags = extract_tags(store.metadata(&doc));
                tracing::debug!(path = %doc.path, tags = ?tags, "tracking document");
                TrackerState::ActiveDocument { doc, tags }
            }
            None => {
                tracing::debug!("no active document");
                TrackerState::NoActiveDocument
            }
        };
        self.selection.reconcile(self.tracker.tags());
        Signal::Rerender
    }
}
