use crate::host::DocumentStore;
use crate::model::{DocRef, MetadataSnapshot, strip_marker};

use super::tag_extract::extract_tags;

/// Whether a document's merged tag set contains `tag`. The marker is ignored
/// on both sides, so `#a` and `a` match the same documents.
pub fn has_tag(snapshot: &MetadataSnapshot, tag: &str) -> bool {
    let wanted = strip_marker(tag);
    extract_tags(Some(snapshot))
        .iter()
        .any(|t| strip_marker(t) == wanted)
}

/// All markdown documents carrying `tag`, sorted by path descending.
///
/// Documents the store has no metadata for are skipped.
pub fn files_with_tag<S: DocumentStore + ?Sized>(store: &S, tag: &str) -> Vec<DocRef> {
    let mut files: Vec<DocRef> = store
        .markdown_documents()
        .into_iter()
        .filter(|doc| store.metadata(doc).is_some_and(|m| has_tag(m, tag)))
        .collect();
    files.sort_by(|a, b| b.path.cmp(&a.path));
    files.dedup_by(|a, b| a.path == b.path);
    tracing::trace!(tag, count = files.len(), "files_with_tag");
    files
}
