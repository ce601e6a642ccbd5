use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::io::vault_io::{VaultError, is_document, relative_path};
use crate::model::VaultConfig;

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// One or more documents were created, modified, or removed on disk.
    Changed(Vec<PathBuf>),
}

/// A file system watcher for a vault directory.
pub struct VaultWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl VaultWatcher {
    /// Start watching the vault rooted at `root`.
    /// Returns a `VaultWatcher` whose `poll()` method should be called each tick.
    pub fn start(root: &Path, config: &VaultConfig) -> Result<Self, VaultError> {
        let (tx, rx) = mpsc::channel();
        let root_owned = root.to_path_buf();
        let config = config.clone();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::warn!(error = %e, "watch error");
                        return;
                    }
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| {
                        relative_path(&root_owned, p)
                            .is_some_and(|rel| is_document(Path::new(&rel), &config))
                    })
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        watcher.watch(root, RecursiveMode::Recursive)?;
        Ok(VaultWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    /// Returns every changed path queued since the last poll (may be empty).
    pub fn poll(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        while let Ok(FileEvent::Changed(changed)) = self.rx.try_recv() {
            paths.extend(changed);
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_on_missing_dir_is_watch_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let result = VaultWatcher::start(&missing, &VaultConfig::default());
        assert!(matches!(result, Err(VaultError::WatchError(_))));
    }

    #[test]
    fn test_poll_empty_when_nothing_changed() {
        let dir = tempfile::tempdir().unwrap();
        let watcher = VaultWatcher::start(dir.path(), &VaultConfig::default()).unwrap();
        assert!(watcher.poll().is_empty());
    }
}
