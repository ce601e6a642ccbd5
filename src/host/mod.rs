//! Collaborator interfaces the tag panel is written against, plus the
//! in-memory vault that implements them.
//!
//! The panel never touches files: it reads documents and metadata through
//! [`DocumentStore`], learns about focus through [`FocusManager`], and
//! receives change notifications through subscriptions whose handles it owns.

pub mod bus;
pub mod vault;

pub use bus::{EventBus, EventSink, HostEvent, Subscription, Topic};
pub use vault::Vault;

use crate::model::{DocRef, MetadataSnapshot};

/// The set of documents and their indexed metadata
pub trait DocumentStore {
    /// Every markdown document currently in the store
    fn markdown_documents(&self) -> Vec<DocRef>;

    /// The latest metadata snapshot for a document, if one exists
    fn metadata(&self, doc: &DocRef) -> Option<&MetadataSnapshot>;

    /// Open a document in the primary editor surface, optionally focusing it
    fn open_document(&mut self, doc: &DocRef, focus: bool);

    fn subscribe_created(&self, sink: EventSink) -> Subscription;

    fn subscribe_deleted(&self, sink: EventSink) -> Subscription;
}

/// Publishes "metadata changed" notifications after a document is re-indexed
pub trait MetadataIndex {
    fn subscribe_changed(&self, sink: EventSink) -> Subscription;
}

/// Knows which leaf of the workspace has focus
pub trait FocusManager {
    /// The document in the focused editor, if any
    fn active_document(&self) -> Option<DocRef>;

    fn subscribe_focus(&self, sink: EventSink) -> Subscription;
}

/// Performs a host-level search for a tag
pub trait SearchCollaborator {
    fn search_tag(&mut self, tag: &str);
}

/// Everything the tag panel needs from its host
pub trait Host: DocumentStore + MetadataIndex + FocusManager {}

impl<T: DocumentStore + MetadataIndex + FocusManager> Host for T {}
