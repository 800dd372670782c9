//! gkfetch - asset bundle fetcher
//!
//! A command line tool that downloads named game-asset bundles from a remote
//! manifest into a local asset directory and extracts them with an external
//! AssetStudioModCLI executable, skipping bundles already present on disk.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod extract;
mod manifest;
mod progress;
mod sync;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(cli.config, args),
        Commands::List(args) => commands::list::run(cli.config, args),
        Commands::Search(args) => commands::search::run(cli.config, args),
        Commands::Status => commands::status::run(cli.config),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
