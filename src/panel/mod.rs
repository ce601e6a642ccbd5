//! The "current file tags" panel.
//!
//! [`TagPanel`] owns the panel's subscriptions and its [`PanelState`]. Host
//! events are queued on one channel and applied in order by [`TagPanel::pump`];
//! user actions go through [`TagPanel::interact`]. Both report whether the
//! panel needs to be redrawn.

pub mod selection;
pub mod tracker;
pub mod view;

pub use selection::Selection;
pub use tracker::{PanelState, Signal, TrackerState};
pub use view::{
    Activation, FileEntry, FileList, Interaction, PanelView, TagChip, build_view, shorten_path,
};

use std::sync::mpsc;

use crate::host::{DocumentStore, Host, HostEvent, SearchCollaborator, Subscription};

/// View type identifier the panel registers under
pub const VIEW_TYPE: &str = "current-file-tags-view";
/// Display name shown in the panel header and tab
pub const DISPLAY_NAME: &str = "Current file tags";
/// Icon identifier for the panel and its activation action
pub const ICON: &str = "tag";

/// A mounted tag panel
pub struct TagPanel {
    state: PanelState,
    events: mpsc::Receiver<HostEvent>,
    subscriptions: Vec<Subscription>,
}

impl TagPanel {
    /// Subscribe to every host event the panel reacts to, then read the
    /// initial state. Subscribing first means no change can slip between the
    /// read and the subscriptions.
    pub fn mount<H: Host + ?Sized>(host: &H) -> Self {
        let (tx, rx) = mpsc::channel();
        let subscriptions = vec![
            host.subscribe_focus(tx.clone()),
            host.subscribe_changed(tx.clone()),
            host.subscribe_created(tx.clone()),
            host.subscribe_deleted(tx),
        ];
        let state = PanelState::open(host);
        tracing::debug!(view = VIEW_TYPE, "panel mounted");
        TagPanel {
            state,
            events: rx,
            subscriptions,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Apply every queued host event in delivery order.
    pub fn pump<H: Host + ?Sized>(&mut self, host: &H) -> Signal {
        let mut signal = Signal::Unchanged;
        while let Ok(event) = self.events.try_recv() {
            signal = signal.or(self.state.handle(&event, host));
        }
        signal
    }

    /// Handle a user action.
    ///
    /// Plain tag activation pivots the panel; modified activation hands the
    /// tag to `search` and leaves the selection alone. Opening a file focuses
    /// it in the host, and the resulting focus change is applied right away.
    pub fn interact<H, Q>(&mut self, interaction: Interaction, host: &mut H, search: &mut Q) -> Signal
    where
        H: Host + ?Sized,
        Q: SearchCollaborator + ?Sized,
    {
        match interaction {
            Interaction::Tag {
                tag,
                activation: Activation::Plain,
            } => self.state.activate_tag(&tag),
            Interaction::Tag {
                tag,
                activation: Activation::Modified,
            } => {
                search.search_tag(&tag);
                Signal::Unchanged
            }
            Interaction::OpenFile(doc) => {
                host.open_document(&doc, true);
                self.pump(&*host)
            }
            Interaction::ClearSelection => self.state.clear_selection(),
        }
    }

    pub fn view<S: DocumentStore + ?Sized>(&self, store: &S, path_width: usize) -> PanelView {
        build_view(&self.state, store, path_width)
    }

    /// Tear the panel down. Subscriptions are released before the queue is
    /// dropped, and the panel is consumed so no handler can run afterwards.
    pub fn close(self) {
        let TagPanel {
            state: _,
            events,
            subscriptions,
        } = self;
        drop(subscriptions);
        drop(events);
        tracing::debug!(view = VIEW_TYPE, "panel closed");
    }
}

/// Reveal the panel in `slot`, mounting a new one if there is none.
pub fn activate<'a, H: Host + ?Sized>(slot: &'a mut Option<TagPanel>, host: &H) -> &'a mut TagPanel {
    slot.get_or_insert_with(|| TagPanel::mount(host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Vault;
    use crate::model::{Leaf, ViewKind};

    #[derive(Default)]
    struct RecordingSearch {
        queries: Vec<String>,
    }

    impl SearchCollaborator for RecordingSearch {
        fn search_tag(&mut self, tag: &str) {
            self.queries.push(tag.to_string());
        }
    }

    #[test]
    fn test_mount_subscribes_to_all_topics() {
        let vault = Vault::new();
        let panel = TagPanel::mount(&vault);
        assert_eq!(panel.subscription_count(), 4);
        assert_eq!(vault.bus().subscriber_count(), 4);
    }

    #[test]
    fn test_close_releases_subscriptions() {
        let mut vault = Vault::new();
        let panel = TagPanel::mount(&vault);
        panel.close();
        assert_eq!(vault.bus().subscriber_count(), 0);
        // Host keeps working with nobody listening
        vault.upsert("a.md", "#a");
    }

    #[test]
    fn test_drop_releases_subscriptions() {
        let vault = Vault::new();
        {
            let _panel = TagPanel::mount(&vault);
            assert_eq!(vault.bus().subscriber_count(), 4);
        }
        assert_eq!(vault.bus().subscriber_count(), 0);
    }

    #[test]
    fn test_pump_applies_events_in_order() {
        let mut vault = Vault::new();
        let mut panel = TagPanel::mount(&vault);

        let a = vault.upsert("a.md", "#a");
        vault.upsert("a.md", "#a #b");
        assert_eq!(panel.pump(&vault), Signal::Rerender);
        assert_eq!(panel.state().active_document(), Some(&a));
        assert_eq!(panel.state().tags(), &["#a", "#b"]);

        assert_eq!(panel.pump(&vault), Signal::Unchanged);
    }

    #[test]
    fn test_pump_ignores_panel_focus() {
        let mut vault = Vault::new();
        vault.upsert("a.md", "#a");
        let mut panel = TagPanel::mount(&vault);
        vault.focus_leaf(Leaf::of_kind(ViewKind::TagPanel));
        assert_eq!(panel.pump(&vault), Signal::Unchanged);
    }

    #[test]
    fn test_plain_activation_selects() {
        let mut vault = Vault::new();
        vault.upsert("a.md", "#a");
        let mut panel = TagPanel::mount(&vault);
        let mut search = RecordingSearch::default();

        let signal = panel.interact(
            Interaction::Tag {
                tag: "#a".into(),
                activation: Activation::Plain,
            },
            &mut vault,
            &mut search,
        );
        assert_eq!(signal, Signal::Rerender);
        assert_eq!(panel.state().selected_tag(), Some("#a"));
        assert!(search.queries.is_empty());
    }

    #[test]
    fn test_modified_activation_searches_without_selecting() {
        let mut vault = Vault::new();
        vault.upsert("a.md", "#a");
        let mut panel = TagPanel::mount(&vault);
        let mut search = RecordingSearch::default();

        let signal = panel.interact(
            Interaction::Tag {
                tag: "#a".into(),
                activation: Activation::Modified,
            },
            &mut vault,
            &mut search,
        );
        assert_eq!(signal, Signal::Unchanged);
        assert_eq!(panel.state().selected_tag(), None);
        assert_eq!(search.queries, vec!["#a"]);
    }

    #[test]
    fn test_open_file_moves_focus() {
        let mut vault = Vault::new();
        vault.upsert("a.md", "#shared #a");
        let b = vault.upsert("b.md", "#shared");
        let a = vault.get("a.md").unwrap();
        vault.open_document(&a, true);
        let mut panel = TagPanel::mount(&vault);
        let mut search = RecordingSearch::default();
        let _ = panel.interact(
            Interaction::Tag {
                tag: "#shared".into(),
                activation: Activation::Plain,
            },
            &mut vault,
            &mut search,
        );

        let signal = panel.interact(Interaction::OpenFile(b.clone()), &mut vault, &mut search);
        assert_eq!(signal, Signal::Rerender);
        assert_eq!(panel.state().active_document(), Some(&b));
        // The pivot tag is shared, so it stays selected
        assert_eq!(panel.state().selected_tag(), Some("#shared"));
    }

    #[test]
    fn test_activate_reuses_existing_panel() {
        let vault = Vault::new();
        let mut slot = None;
        activate(&mut slot, &vault);
        assert_eq!(vault.bus().subscriber_count(), 4);
        activate(&mut slot, &vault);
        assert_eq!(vault.bus().subscriber_count(), 4);
        assert!(slot.is_some());
    }
}
