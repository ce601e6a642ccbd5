use std::collections::BTreeMap;

use crate::model::{DocId, DocRef, Leaf, MetadataSnapshot, ViewKind};
use crate::parse::parse_metadata;

use super::bus::{EventBus, EventSink, HostEvent, Subscription, Topic};
use super::{DocumentStore, FocusManager, MetadataIndex};

#[derive(Debug)]
struct Entry {
    id: DocId,
    snapshot: MetadataSnapshot,
}

/// In-memory markdown vault: document store, metadata index and focus
/// manager in one.
///
/// The vault does no I/O itself; callers feed it file contents (see
/// `io::vault_io`). Every mutation is published on the vault's event bus.
pub struct Vault {
    documents: BTreeMap<String, Entry>,
    next_id: u64,
    focus: Option<DocRef>,
    focus_new_documents: bool,
    bus: EventBus,
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}

impl Vault {
    pub fn new() -> Self {
        Vault {
            documents: BTreeMap::new(),
            next_id: 0,
            focus: None,
            focus_new_documents: true,
            bus: EventBus::new(),
        }
    }

    /// Whether a newly created document silently takes focus
    pub fn with_focus_new_documents(mut self, on: bool) -> Self {
        self.focus_new_documents = on;
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by vault-relative path
    pub fn get(&self, path: &str) -> Option<DocRef> {
        self.documents
            .get(path)
            .map(|entry| DocRef::new(entry.id, path))
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Parse `text` and add or replace the document at `path`.
    pub fn upsert(&mut self, path: &str, text: &str) -> DocRef {
        self.upsert_snapshot(path, parse_metadata(text))
    }

    /// Add or replace a document's metadata.
    ///
    /// A new path emits `Created` followed by `MetadataChanged`; when
    /// new-document focus is on, focus moves to it before either event is
    /// published and no focus event is sent. An existing path only emits
    /// `MetadataChanged`.
    pub fn upsert_snapshot(&mut self, path: &str, snapshot: MetadataSnapshot) -> DocRef {
        if let Some(entry) = self.documents.get_mut(path) {
            entry.snapshot = snapshot.clone();
            let doc = DocRef::new(entry.id, path);
            tracing::debug!(path, "metadata changed");
            self.bus.emit(HostEvent::MetadataChanged {
                doc: doc.clone(),
                snapshot,
            });
            return doc;
        }

        self.next_id += 1;
        let doc = DocRef::new(DocId(self.next_id), path);
        self.documents.insert(
            path.to_string(),
            Entry {
                id: doc.id,
                snapshot: snapshot.clone(),
            },
        );
        if self.focus_new_documents {
            self.focus = Some(doc.clone());
        }
        tracing::debug!(path, id = doc.id.0, "document created");
        self.bus.emit(HostEvent::Created(doc.clone()));
        self.bus.emit(HostEvent::MetadataChanged {
            doc: doc.clone(),
            snapshot,
        });
        doc
    }

    /// Remove the document at `path`.
    ///
    /// Emits `Deleted`; if the document was focused, focus moves to an empty
    /// leaf and `FocusChanged` follows.
    pub fn remove(&mut self, path: &str) -> Option<DocRef> {
        let entry = self.documents.remove(path)?;
        let doc = DocRef::new(entry.id, path);
        tracing::debug!(path, id = doc.id.0, "document deleted");
        self.bus.emit(HostEvent::Deleted(doc.clone()));
        if self.focus.as_ref() == Some(&doc) {
            self.focus_leaf(Leaf::of_kind(ViewKind::Empty));
        }
        Some(doc)
    }

    /// Move workspace focus to `leaf` and publish the change.
    ///
    /// Focusing a non-editor leaf such as the explorer keeps the last
    /// active document; an empty leaf clears it.
    pub fn focus_leaf(&mut self, leaf: Leaf) {
        match leaf.kind {
            ViewKind::Markdown => {
                if let Some(doc) = &leaf.document {
                    self.focus = Some(doc.clone());
                }
            }
            ViewKind::Empty => self.focus = None,
            ViewKind::TagPanel | ViewKind::Explorer => {}
        }
        self.bus.emit(HostEvent::FocusChanged(leaf));
    }
}

impl DocumentStore for Vault {
    fn markdown_documents(&self) -> Vec<DocRef> {
        self.documents
            .iter()
            .map(|(path, entry)| DocRef::new(entry.id, path.clone()))
            .collect()
    }

    fn metadata(&self, doc: &DocRef) -> Option<&MetadataSnapshot> {
        self.documents
            .get(&doc.path)
            .filter(|entry| entry.id == doc.id)
            .map(|entry| &entry.snapshot)
    }

    fn open_document(&mut self, doc: &DocRef, focus: bool) {
        if focus && self.metadata(doc).is_some() {
            self.focus_leaf(Leaf::markdown(doc.clone()));
        }
    }

    fn subscribe_created(&self, sink: EventSink) -> Subscription {
        self.bus.subscribe(Topic::Created, sink)
    }

    fn subscribe_deleted(&self, sink: EventSink) -> Subscription {
        self.bus.subscribe(Topic::Deleted, sink)
    }
}

impl MetadataIndex for Vault {
    fn subscribe_changed(&self, sink: EventSink) -> Subscription {
        self.bus.subscribe(Topic::Metadata, sink)
    }
}

impl FocusManager for Vault {
    fn active_document(&self) -> Option<DocRef> {
        self.focus.clone()
    }

    fn subscribe_focus(&self, sink: EventSink) -> Subscription {
        self.bus.subscribe(Topic::Focus, sink)
    }
}
