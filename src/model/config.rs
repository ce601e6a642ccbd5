use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `.ftags.toml` at the vault root. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// File extensions treated as markdown documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names skipped when scanning and watching
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
    /// Move focus to newly created notes (without a focus event)
    #[serde(default = "default_true")]
    pub focus_new_documents: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        VaultConfig {
            extensions: default_extensions(),
            ignore: default_ignore(),
            focus_new_documents: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Paths longer than this many characters are shown as `...` + their tail
    #[serde(default = "default_path_width")]
    pub path_width: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            path_width: default_path_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// URI scheme of the application that performs tag searches
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Vault name passed along with the search, if the target app needs one
    #[serde(default)]
    pub vault: Option<String>,
    /// Launch the URI (true) or only report it in the status row (false)
    #[serde(default = "default_true")]
    pub open: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            scheme: default_scheme(),
            vault: None,
            open: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-tag chip colors, keyed by tag without `#`
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_ignore() -> Vec<String> {
    vec![".git".to_string(), ".obsidian".to_string(), ".trash".to_string()]
}

fn default_path_width() -> usize {
    24
}

fn default_scheme() -> String {
    "obsidian".to_string()
}
