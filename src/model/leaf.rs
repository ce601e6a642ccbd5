use super::document::DocRef;

/// Kind of view a workspace leaf is showing.
///
/// Only `Markdown` leaves hold an editable document; focus moving to any other
/// kind is not a document change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// A markdown document editor
    Markdown,
    /// The current-file-tags panel itself
    TagPanel,
    /// The note explorer
    Explorer,
    /// A leaf with nothing open in it
    Empty,
}

/// A focus target in the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub kind: ViewKind,
    pub document: Option<DocRef>,
}

impl Leaf {
    pub fn markdown(doc: DocRef) -> Self {
        Leaf {
            kind: ViewKind::Markdown,
            document: Some(doc),
        }
    }

    pub fn of_kind(kind: ViewKind) -> Self {
        Leaf {
            kind,
            document: None,
        }
    }

    pub fn is_editor(&self) -> bool {
        self.kind == ViewKind::Markdown
    }
}
