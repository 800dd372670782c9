//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gkfetch - asset bundle fetcher
///
/// Download remote game asset bundles into a local directory and extract
/// them with AssetStudioModCLI, skipping whatever is already present.
#[derive(Parser, Debug)]
#[command(
    name = "gkfetch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fetch and extract remote game asset bundles",
    long_about = "gkfetch downloads a configured list of named asset bundles from a remote \
                  manifest into a local asset directory, then unpacks each one with an \
                  external AssetStudioModCLI executable. Bundles already on disk are skipped.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  gkfetch sync\n    \
                  gkfetch sync --dry-run\n    \
                  gkfetch search 'mdl_chr_ttmr*'\n    \
                  gkfetch list --detailed\n    \
                  gkfetch status"
)]
pub struct Cli {
    /// Configuration file (defaults to gkfetch.yaml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and extract all configured bundles
    Sync(SyncArgs),

    /// List every bundle in the manifest
    List(ListArgs),

    /// Search the manifest for bundles matching a glob pattern
    Search(SearchArgs),

    /// Show the local state of each configured bundle
    Status,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Sync all configured bundles:\n    gkfetch sync\n\n\
                  Report what would be done without touching disk:\n    gkfetch sync --dry-run\n\n\
                  Sync with a different configuration:\n    gkfetch -c other.yaml sync")]
pub struct SyncArgs {
    /// Report pending downloads and extractions without performing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List manifest bundles:\n    gkfetch list\n\n\
                  Include size, digest and source details:\n    gkfetch list --detailed")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  All body models for one character:\n    gkfetch search 'mdl_chr_ttmr*body'\n\n\
                  Everything for one character:\n    gkfetch search '*ttmr*'")]
pub struct SearchArgs {
    /// Glob pattern matched against bundle names
    pub pattern: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gkfetch completions --shell bash > ~/.bash_completion.d/gkfetch\n\n\
                  Generate zsh completions:\n    gkfetch completions --shell zsh > ~/.zfunc/_gkfetch\n\n\
                  Generate fish completions:\n    gkfetch completions --shell fish > ~/.config/fish/completions/gkfetch.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_sync() {
        let cli = Cli::try_parse_from(["gkfetch", "sync"]).unwrap();
        match cli.command {
            Commands::Sync(args) => assert!(!args.dry_run),
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn test_cli_parsing_sync_dry_run() {
        let cli = Cli::try_parse_from(["gkfetch", "sync", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Sync(args) => assert!(args.dry_run),
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn test_cli_parsing_search() {
        let cli = Cli::try_parse_from(["gkfetch", "search", "mdl_chr_ttmr*"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert_eq!(args.pattern, "mdl_chr_ttmr*"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["gkfetch", "list", "--detailed"]).unwrap();
        match cli.command {
            Commands::List(args) => assert!(args.detailed),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_status() {
        let cli = Cli::try_parse_from(["gkfetch", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["gkfetch", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["gkfetch", "-v", "-c", "/tmp/gkfetch.yaml", "sync"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/gkfetch.yaml")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["gkfetch", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_search_requires_pattern() {
        assert!(Cli::try_parse_from(["gkfetch", "search"]).is_err());
    }
}
