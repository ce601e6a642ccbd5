use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::host::{DocumentStore, Vault};
use crate::io::config_io::load_config;
use crate::io::launcher::UriSearch;
use crate::io::vault_io::{apply_changes, discover_vault, load_vault};
use crate::io::watcher::VaultWatcher;
use crate::model::{Config, DocRef, Leaf, ViewKind};
use crate::panel::{self, Activation, Interaction, PanelView, Signal, TagPanel};

use super::input;
use super::render;
use super::theme::Theme;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Note list on the left
    Explorer,
    /// The tag panel on the right
    Tags,
}

/// Which part of the tag panel the cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagsRegion {
    Chips,
    Files,
}

/// Something a mouse click can land on, recorded while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Row of the explorer list (index into `App::notes()`)
    Note(usize),
    /// A tag chip, keyed by its tag
    Chip(String),
    File(DocRef),
}

/// Main application state
pub struct App {
    pub vault: Vault,
    pub root: PathBuf,
    pub config: Config,
    pub theme: Theme,
    /// The mounted tag panel, if it is open
    pub panel: Option<TagPanel>,
    pub search: UriSearch,
    pub pane: Pane,
    pub region: TagsRegion,
    /// Cursor into the explorer list
    pub explorer_cursor: usize,
    /// First visible explorer row
    pub explorer_scroll: usize,
    /// Cursor into the chip row
    pub chip_cursor: usize,
    /// Cursor into the selected tag's file list
    pub file_cursor: usize,
    /// Clickable regions from the last frame
    pub hits: Vec<(Rect, HitTarget)>,
    /// One-line message for the status row
    pub status: Option<String>,
    /// Help overlay visible
    pub show_help: bool,
    pub should_quit: bool,
    /// Set whenever something on screen may have changed
    pub needs_redraw: bool,
}

impl App {
    pub fn new(vault: Vault, root: PathBuf, config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        let search = UriSearch::from_config(&config.search);
        let panel = Some(TagPanel::mount(&vault));
        App {
            vault,
            root,
            config,
            theme,
            panel,
            search,
            pane: Pane::Explorer,
            region: TagsRegion::Chips,
            explorer_cursor: 0,
            explorer_scroll: 0,
            chip_cursor: 0,
            file_cursor: 0,
            hits: Vec::new(),
            status: None,
            show_help: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Every note in the vault, in path order
    pub fn notes(&self) -> Vec<DocRef> {
        let mut notes = self.vault.markdown_documents();
        notes.sort_by(|a, b| a.path.cmp(&b.path));
        notes
    }

    /// The panel's current display, or `None` while it is closed
    pub fn panel_view(&self) -> Option<PanelView> {
        self.panel
            .as_ref()
            .map(|p| p.view(&self.vault, self.config.panel.path_width))
    }

    /// Open the note under the explorer cursor in the editor, with focus.
    pub fn open_note_at_cursor(&mut self) {
        let notes = self.notes();
        if let Some(doc) = notes.get(self.explorer_cursor) {
            self.vault.open_document(doc, true);
            self.status = Some(format!("opened {}", doc.path));
            self.needs_redraw = true;
            self.pump();
        }
    }

    /// Move keyboard focus to a pane. The host sees this as focusing the
    /// explorer or the panel leaf.
    pub fn set_pane(&mut self, pane: Pane) {
        if self.pane == pane {
            return;
        }
        self.pane = pane;
        let kind = match pane {
            Pane::Explorer => ViewKind::Explorer,
            Pane::Tags => ViewKind::TagPanel,
        };
        self.vault.focus_leaf(Leaf::of_kind(kind));
        self.needs_redraw = true;
        self.pump();
    }

    /// Reveal the tag panel, mounting a fresh one if it was closed.
    pub fn reveal_panel(&mut self) {
        if self.panel.is_none() {
            self.chip_cursor = 0;
            self.file_cursor = 0;
            self.region = TagsRegion::Chips;
        }
        panel::activate(&mut self.panel, &self.vault);
        self.set_pane(Pane::Tags);
        self.needs_redraw = true;
    }

    /// Close the tag panel and release its subscriptions.
    pub fn close_panel(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.close();
            self.status = Some("tag panel closed (t to reopen)".into());
            self.set_pane(Pane::Explorer);
            self.needs_redraw = true;
        }
    }

    /// Deliver queued host events to the panel.
    pub fn pump(&mut self) {
        let signal = match self.panel.as_mut() {
            Some(panel) => panel.pump(&self.vault),
            None => Signal::Unchanged,
        };
        self.after(signal);
    }

    /// Send a user action to the panel.
    pub fn interact(&mut self, interaction: Interaction) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let searching = matches!(
            interaction,
            Interaction::Tag {
                activation: Activation::Modified,
                ..
            }
        );
        let signal = panel.interact(interaction, &mut self.vault, &mut self.search);
        if searching {
            self.status = match (self.search.last_error(), self.search.last_uri()) {
                (Some(err), _) => Some(format!("search failed: {}", err)),
                (None, Some(uri)) => Some(format!("search: {}", uri)),
                (None, None) => None,
            };
            self.needs_redraw = true;
        }
        self.after(signal);
    }

    /// Re-read files the watcher reported and apply the resulting events.
    pub fn apply_file_changes(&mut self, paths: &[PathBuf]) {
        let touched = apply_changes(&mut self.vault, &self.root, &self.config.vault, paths);
        if touched > 0 {
            tracing::debug!(touched, "vault updated from disk");
            self.needs_redraw = true;
            self.clamp_explorer();
        }
        self.pump();
    }

    fn after(&mut self, signal: Signal) {
        if signal.is_rerender() {
            self.needs_redraw = true;
            self.clamp_panel_cursors();
        }
    }

    fn clamp_explorer(&mut self) {
        let len = self.vault.len();
        if self.explorer_cursor >= len {
            self.explorer_cursor = len.saturating_sub(1);
        }
    }

    fn clamp_panel_cursors(&mut self) {
        let Some(view) = self.panel_view() else {
            return;
        };
        if self.chip_cursor >= view.chips.len() {
            self.chip_cursor = view.chips.len().saturating_sub(1);
        }
        match &view.files {
            Some(list) => {
                if self.file_cursor >= list.files.len() {
                    self.file_cursor = list.files.len().saturating_sub(1);
                }
            }
            None => {
                self.file_cursor = 0;
                self.region = TagsRegion::Chips;
            }
        }
    }

    /// What a click at (`column`, `row`) landed on in the last frame
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, target)| target)
    }
}

/// Run the TUI application
pub fn run(
    vault_dir: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Discover and load the vault
    let root = match vault_dir {
        Some(dir) => std::fs::canonicalize(dir)?,
        None => discover_vault(&std::env::current_dir()?),
    };
    let config = load_config(&root, config_path)?;
    let vault = load_vault(&root, &config.vault)?;

    let watcher = match VaultWatcher::start(&root, &config.vault) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "file watching disabled");
            None
        }
    };

    let mut app = App::new(vault, root, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    if let Some(panel) = app.panel.take() {
        panel.close();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&VaultWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.needs_redraw {
            terminal.draw(|frame| render::render(frame, app))?;
            app.needs_redraw = false;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    input::handle_mouse(app, mouse)
                }
                Event::Resize(..) => app.needs_redraw = true,
                _ => {}
            }
        }

        if let Some(watcher) = watcher {
            let changed = watcher.poll();
            if !changed.is_empty() {
                app.apply_file_changes(&changed);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
