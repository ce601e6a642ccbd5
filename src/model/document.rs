use serde::Serialize;

/// Opaque document identifier assigned by the vault.
///
/// A file that is deleted and created again at the same path gets a new id,
/// so it is a different document as far as the tag panel is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DocId(pub u64);

/// A reference to one markdown document in the vault
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DocRef {
    pub id: DocId,
    /// Vault-relative path using `/` separators (e.g. `projects/alpha.md`)
    pub path: String,
}

impl DocRef {
    pub fn new(id: DocId, path: impl Into<String>) -> Self {
        DocRef {
            id,
            path: path.into(),
        }
    }

    /// File name without directories or extension
    pub fn name(&self) -> &str {
        let file = self.path.rsplit('/').next().unwrap_or(&self.path);
        match file.rfind('.') {
            Some(dot) if dot > 0 => &file[..dot],
            _ => file,
        }
    }
}
