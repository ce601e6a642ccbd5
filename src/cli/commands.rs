use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ftags", about = concat!("# filetags v", env!("CARGO_PKG_VERSION"), " - the tags of the note you are looking at"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different vault directory
    #[arg(short = 'C', long = "vault-dir", global = true)]
    pub vault_dir: Option<String>,

    /// Read configuration from this file instead of <vault>/.ftags.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append logs to a file (the only way to get logs from the TUI)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tags of a note
    Tags(TagsArgs),
    /// List the notes carrying a tag
    Files(FilesArgs),
    /// Build (and optionally open) the host search URI for a tag
    Search(SearchArgs),
    /// Print the tag panel as it would look with a note focused
    Panel(PanelArgs),
}

#[derive(Args)]
pub struct TagsArgs {
    /// Note path, relative to the vault or the working directory
    pub file: String,
}

#[derive(Args)]
pub struct FilesArgs {
    /// Tag to look for, with or without the leading #
    pub tag: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Tag to search for, with or without the leading #
    pub tag: String,
    /// Hand the URI to the system handler instead of printing it
    #[arg(long)]
    pub open: bool,
}

#[derive(Args)]
pub struct PanelArgs {
    /// Note to focus before rendering (default: no active note)
    pub file: Option<String>,
    /// Select a tag, as a click on its chip would
    #[arg(long)]
    pub select: Option<String>,
    /// Path width for the file list (default: panel.path_width from config)
    #[arg(long)]
    pub width: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["ftags"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ftags", "files", "#project", "--json", "-C", "/tmp/v"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.vault_dir.as_deref(), Some("/tmp/v"));
        match cli.command {
            Some(Commands::Files(args)) => assert_eq!(args.tag, "#project"),
            _ => panic!("expected files"),
        }
    }

    #[test]
    fn test_panel_args() {
        let cli =
            Cli::try_parse_from(["ftags", "panel", "a.md", "--select", "beta", "--width", "10"]).unwrap();
        match cli.command {
            Some(Commands::Panel(args)) => {
                assert_eq!(args.file.as_deref(), Some("a.md"));
                assert_eq!(args.select.as_deref(), Some("beta"));
                assert_eq!(args.width, Some(10));
            }
            _ => panic!("expected panel"),
        }
    }
}
