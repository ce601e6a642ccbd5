use crate::host::DocumentStore;
use crate::model::{DocRef, strip_marker};
use crate::ops::files_with_tag;

use super::tracker::PanelState;

/// One clickable tag. `tag` is the stable key; `label` is what is shown after the `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub tag: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub doc: DocRef,
    /// Path shortened to the panel's width
    pub label: String,
}

/// The documents carrying the selected tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    pub tag: String,
    pub files: Vec<FileEntry>,
}

impl FileList {
    /// Heading line, e.g. `#project is in 3 file(s).`
    pub fn summary(&self) -> String {
        format!("{} is in {} file(s).", self.tag, self.files.len())
    }
}

/// Everything the panel displays, derived from [`PanelState`] alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Path of the tracked document
    pub document: Option<String>,
    pub chips: Vec<TagChip>,
    /// Present only while a tag is selected
    pub files: Option<FileList>,
}

/// How a chip was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Pivot into the tag inside the panel
    Plain,
    /// Hand the tag to the host's search instead
    Modified,
}

/// A user action on the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Tag { tag: String, activation: Activation },
    OpenFile(DocRef),
    ClearSelection,
}

/// Shorten `path` to its last `max_len` characters behind `...`.
pub fn shorten_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len > max_len {
        let tail: String = path.chars().skip(len - max_len).collect();
        format!("...{}", tail)
    } else {
        path.to_string()
    }
}

/// Derive the panel's display from its state. The file list is only computed
/// while a tag is selected.
pub fn build_view<S: DocumentStore + ?Sized>(
    state: &PanelState,
    store: &S,
    path_width: usize,
) -> PanelView {
    let selected = state.selected_tag();
    let chips = state
        .tags()
        .iter()
        .map(|tag| TagChip {
            tag: tag.clone(),
            label: strip_marker(tag).to_string(),
            selected: selected == Some(tag.as_str()),
        })
        .collect();

    let files = selected.map(|tag| FileList {
        tag: tag.to_string(),
        files: files_with_tag(store, tag)
            .into_iter()
            .map(|doc| FileEntry {
                label: shorten_path(&doc.path, path_width),
                doc,
            })
            .collect(),
    });

    PanelView {
        document: state.active_document().map(|d| d.path.clone()),
        chips,
        files,
    }
}
