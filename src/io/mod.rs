pub mod config_io;
pub mod launcher;
pub mod vault_io;
pub mod watcher;
