use crate::host::SearchCollaborator;
use crate::model::SearchConfig;
use crate::ops::search_uri;

/// Search collaborator that hands a `scheme://search?query=tag:...` URI to
/// the system URI handler.
#[derive(Debug, Clone)]
pub struct UriSearch {
    scheme: String,
    vault: Option<String>,
    open: bool,
    last_uri: Option<String>,
    last_error: Option<String>,
}

impl UriSearch {
    pub fn from_config(config: &SearchConfig) -> Self {
        UriSearch {
            scheme: config.scheme.clone(),
            vault: config.vault.clone(),
            open: config.open,
            last_uri: None,
            last_error: None,
        }
    }

    /// The URI of the most recent search
    pub fn last_uri(&self) -> Option<&str> {
        self.last_uri.as_deref()
    }

    /// Why the most recent launch failed, if it did
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn uri_for(&self, tag: &str) -> String {
        search_uri(&self.scheme, tag, self.vault.as_deref())
    }
}

impl SearchCollaborator for UriSearch {
    fn search_tag(&mut self, tag: &str) {
        let uri = self.uri_for(tag);
        self.last_error = None;
        if self.open {
            tracing::debug!(%uri, "launching tag search");
            if let Err(e) = webbrowser::open(&uri) {
                tracing::warn!(%uri, error = %e, "could not launch search");
                self.last_error = Some(e.to_string());
            }
        }
        self.last_uri = Some(uri);
    }
}
