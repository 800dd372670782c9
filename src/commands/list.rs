//! List command implementation
//!
//! Fetches the manifest and prints its catalog, optionally with per-bundle
//! size, digest and source details.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::format_size;
use crate::config::Config;
use crate::error::Result;
use crate::manifest::{BundleEntry, ManifestClient, RemoteManifestClient};

/// Run list command
pub fn run(config_path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let client = RemoteManifestClient::from_config(&config);
    let manifest = client.fetch()?;

    match manifest.revision() {
        Some(revision) => println!(
            "Manifest revision {revision}: {} bundle(s)",
            manifest.len()
        ),
        None => println!("Manifest: {} bundle(s)", manifest.len()),
    }

    for entry in manifest.entries() {
        print_entry(entry, args.detailed);
    }

    Ok(())
}

fn print_entry(entry: &BundleEntry, detailed: bool) {
    println!("  {}", Style::new().bold().yellow().apply_to(&entry.name));

    if !detailed {
        return;
    }

    if let Some(size) = entry.size {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Size:"),
            format_size(size)
        );
    }
    if let Some(ref md5) = entry.md5 {
        println!("    {} {}", Style::new().bold().apply_to("MD5:"), md5);
    }
    if let Some(ref category) = entry.category {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Category:"),
            category
        );
    }
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Source:"),
        entry.location
    );
}
