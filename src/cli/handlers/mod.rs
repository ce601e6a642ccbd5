use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::host::{DocumentStore, SearchCollaborator, Vault};
use crate::io::config_io;
use crate::io::launcher::UriSearch;
use crate::io::vault_io::{self, VaultError};
use crate::model::{Config, with_marker};
use crate::ops::{extract_tags, files_with_tag};
use crate::panel::{Activation, Interaction, TagPanel};

/// A loaded vault plus everything needed to resolve arguments against it
pub struct VaultContext {
    pub root: PathBuf,
    pub cwd: PathBuf,
    pub config: Config,
    pub vault: Vault,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let ctx = load_context(cli.vault_dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        None => {
            eprintln!("no subcommand given (try `ftags --help`)");
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::Tags(args) => cmd_tags(&ctx, args, json),
            Commands::Files(args) => cmd_files(&ctx, args, json),
            Commands::Search(args) => cmd_search(&ctx, args, json),
            Commands::Panel(args) => cmd_panel(ctx, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Discover the vault from `-C` (or the working directory), read its config
/// and index every note in it.
pub fn load_context(
    vault_dir: Option<&str>,
    config_path: Option<&Path>,
) -> Result<VaultContext, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir().map_err(VaultError::IoError)?;
    let root = match vault_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => vault_io::discover_vault(&cwd),
    };
    let config = config_io::load_config(&root, config_path)?;
    let vault = vault_io::load_vault(&root, &config.vault)?;
    tracing::debug!(root = %root.display(), notes = vault.len(), "vault ready");
    Ok(VaultContext {
        root,
        cwd,
        config,
        vault,
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_tags(ctx: &VaultContext, args: TagsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = vault_io::resolve_document(&ctx.vault, &ctx.root, &ctx.cwd, &args.file)?;
    let tags = extract_tags(ctx.vault.metadata(&doc));

    if json {
        return print_json(&TagsJson {
            file: doc.path,
            tags,
        });
    }
    for tag in tags {
        println!("{}", tag);
    }
    Ok(())
}

fn cmd_files(ctx: &VaultContext, args: FilesArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tag = with_marker(&args.tag);
    let files = files_with_tag(&ctx.vault, &tag);

    if json {
        return print_json(&files_to_json(&tag, &files));
    }
    for doc in files {
        println!("{}", doc.path);
    }
    Ok(())
}

fn cmd_search(ctx: &VaultContext, args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tag = with_marker(&args.tag);
    let mut search_config = ctx.config.search.clone();
    search_config.open = args.open;
    let mut search = UriSearch::from_config(&search_config);
    search.search_tag(&tag);

    if let Some(err) = search.last_error() {
        return Err(format!("cannot open search: {}", err).into());
    }
    let uri = search.last_uri().unwrap_or_default().to_string();

    if json {
        return print_json(&SearchJson {
            tag,
            uri,
            opened: args.open,
        });
    }
    println!("{}", uri);
    Ok(())
}

/// Mount a panel on the loaded vault, drive it with the same interactions the
/// TUI would send, and print what it shows.
fn cmd_panel(ctx: VaultContext, args: PanelArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let VaultContext {
        root,
        cwd,
        config,
        mut vault,
    } = ctx;
    let mut search_config = config.search.clone();
    search_config.open = false;
    let mut search = UriSearch::from_config(&search_config);

    let mut panel = TagPanel::mount(&vault);
    if let Some(file) = &args.file {
        let doc = vault_io::resolve_document(&vault, &root, &cwd, file)?;
        let _ = panel.interact(Interaction::OpenFile(doc), &mut vault, &mut search);
    }

    if let Some(select) = &args.select {
        let tag = with_marker(select);
        if !panel.state().tags().contains(&tag) {
            panel.close();
            return Err(format!("the active note has no tag {}", tag).into());
        }
        let _ = panel.interact(
            Interaction::Tag {
                tag,
                activation: Activation::Plain,
            },
            &mut vault,
            &mut search,
        );
    }

    let width = args.width.unwrap_or(config.panel.path_width);
    let view = panel.view(&vault, width);
    panel.close();

    if json {
        return print_json(&panel_to_json(&view));
    }
    print!("{}", format_panel(&view));
    Ok(())
}
