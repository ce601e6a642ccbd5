use serde::Serialize;

use crate::model::DocRef;
use crate::panel::PanelView;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TagsJson {
    pub file: String,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct FilesJson {
    pub tag: String,
    pub files: Vec<String>,
}

#[derive(Serialize)]
pub struct SearchJson {
    pub tag: String,
    pub uri: String,
    pub opened: bool,
}

#[derive(Serialize)]
pub struct ChipJson {
    pub tag: String,
    pub selected: bool,
}

#[derive(Serialize)]
pub struct FileEntryJson {
    pub path: String,
    pub label: String,
}

#[derive(Serialize)]
pub struct PanelJson {
    pub document: Option<String>,
    pub tags: Vec<ChipJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileEntryJson>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub fn files_to_json(tag: &str, files: &[DocRef]) -> FilesJson {
    FilesJson {
        tag: tag.to_string(),
        files: files.iter().map(|d| d.path.clone()).collect(),
    }
}

pub fn panel_to_json(view: &PanelView) -> PanelJson {
    PanelJson {
        document: view.document.clone(),
        tags: view
            .chips
            .iter()
            .map(|c| ChipJson {
                tag: c.tag.clone(),
                selected: c.selected,
            })
            .collect(),
        selected: view.files.as_ref().map(|f| f.tag.clone()),
        summary: view.files.as_ref().map(|f| f.summary()),
        files: view
            .files
            .iter()
            .flat_map(|f| &f.files)
            .map(|e| FileEntryJson {
                path: e.doc.path.clone(),
                label: e.label.clone(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Render the panel as plain text: header, chip row, then the file list.
/// The selected chip is wrapped in brackets.
pub fn format_panel(view: &PanelView) -> String {
    let mut out = String::new();
    match &view.document {
        Some(path) => out.push_str(path),
        None => out.push_str("(no active note)"),
    }
    out.push('\n');

    if view.chips.is_empty() {
        if view.document.is_some() {
            out.push_str("(no tags)\n");
        }
    } else {
        let chips: Vec<String> = view
            .chips
            .iter()
            .map(|c| {
                if c.selected {
                    format!("[#{}]", c.label)
                } else {
                    format!("#{}", c.label)
                }
            })
            .collect();
        out.push_str(&chips.join("  "));
        out.push('\n');
    }

    if let Some(files) = &view.files {
        out.push('\n');
        out.push_str(&files.summary());
        out.push('\n');
        for entry in &files.files {
            out.push_str("  ");
            out.push_str(&entry.label);
            out.push('\n');
        }
    }
    out
}
