use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::host::Vault;
use crate::model::{DocRef, VaultConfig};

/// Name of the optional per-vault config file
pub const CONFIG_FILE: &str = ".ftags.toml";

/// Error type for vault I/O operations
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no such note in vault: {0}")]
    DocumentNotFound(String),
    #[error("could not watch vault: {0}")]
    WatchError(#[from] notify::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Find the vault root by walking up from `start`, looking for a
/// `.ftags.toml` file or an `.obsidian/` directory. Falls back to `start`.
pub fn discover_vault(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).is_file() || current.join(".obsidian").is_dir() {
            return current;
        }
        if !current.pop() {
            return start.to_path_buf();
        }
    }
}

/// Whether a vault-relative path names a markdown document that is not
/// inside an ignored directory.
pub fn is_document(rel: &Path, config: &VaultConfig) -> bool {
    let has_extension = rel
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|e| e == ext));
    has_extension && !in_ignored_dir(rel, config)
}

fn in_ignored_dir(rel: &Path, config: &VaultConfig) -> bool {
    rel.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|n| config.ignore.iter().any(|i| i == n)),
        _ => false,
    })
}

/// Vault-relative path with `/` separators, or `None` if `path` is outside `root`.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Scan `root` and index every markdown document in it.
///
/// Files that cannot be read as UTF-8 text are skipped with a warning.
pub fn load_vault(root: &Path, config: &VaultConfig) -> Result<Vault, VaultError> {
    if !root.is_dir() {
        return Err(VaultError::NotADirectory(root.to_path_buf()));
    }

    // Bulk loading must not move focus around
    let mut vault = Vault::new().with_focus_new_documents(false);
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !config
                    .ignore
                    .iter()
                    .any(|i| entry.file_name().to_str() == Some(i.as_str()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable vault entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(rel) = relative_path(root, entry.path()) else {
            continue;
        };
        if !is_document(Path::new(&rel), config) {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(text) => {
                vault.upsert(&rel, &text);
            }
            Err(e) => tracing::warn!(path = %entry.path().display(), error = %e, "skipping note"),
        }
    }

    tracing::debug!(root = %root.display(), documents = vault.len(), "vault loaded");
    Ok(vault.with_focus_new_documents(config.focus_new_documents))
}

/// Apply file-system changes to the vault: re-read files that exist, drop
/// those that are gone. Returns how many documents were touched.
pub fn apply_changes(
    vault: &mut Vault,
    root: &Path,
    config: &VaultConfig,
    paths: &[PathBuf],
) -> usize {
    let unique: BTreeSet<&PathBuf> = paths.iter().collect();
    let mut touched = 0;
    for path in unique {
        let Some(rel) = relative_path(root, path) else {
            continue;
        };
        if !is_document(Path::new(&rel), config) {
            continue;
        }
        if path.is_file() {
            match fs::read_to_string(path) {
                Ok(text) => {
                    vault.upsert(&rel, &text);
                    touched += 1;
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping changed note"),
            }
        } else if vault.remove(&rel).is_some() {
            touched += 1;
        }
    }
    touched
}

/// Resolve a note argument: a vault-relative path, or a path (absolute or
/// relative to `cwd`) that lies inside the vault.
pub fn resolve_document(
    vault: &Vault,
    root: &Path,
    cwd: &Path,
    arg: &str,
) -> Result<DocRef, VaultError> {
    if let Some(doc) = vault.get(arg.trim_start_matches("./")) {
        return Ok(doc);
    }
    let candidate = cwd.join(arg);
    let absolute = fs::canonicalize(&candidate).unwrap_or(candidate);
    let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    relative_path(&root, &absolute)
        .and_then(|rel| vault.get(&rel))
        .ok_or_else(|| VaultError::DocumentNotFound(arg.to_string()))
}
