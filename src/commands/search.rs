//! Search command implementation
//!
//! Fetches the manifest and prints the bundles whose names match a glob
//! pattern.

use std::path::PathBuf;

use console::Style;

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::manifest::{ManifestClient, RemoteManifestClient};

/// Run search command
pub fn run(config_path: Option<PathBuf>, args: SearchArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let client = RemoteManifestClient::from_config(&config);
    let manifest = client.fetch()?;

    let matches = manifest.matching(&args.pattern)?;
    if matches.is_empty() {
        println!("No bundles match '{}'", args.pattern);
        return Ok(());
    }

    println!(
        "{} of {} bundle(s) match '{}':",
        matches.len(),
        manifest.len(),
        args.pattern
    );
    for entry in matches {
        println!("  {}", Style::new().bold().yellow().apply_to(&entry.name));
    }

    Ok(())
}
