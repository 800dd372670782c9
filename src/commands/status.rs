//! Status command implementation
//!
//! Reports the local state of each configured bundle: whether the
//! downloaded archive and the extracted directory are present. Purely
//! local; the manifest is never fetched.

use std::path::PathBuf;

use console::Style;
use walkdir::WalkDir;

use crate::commands::helpers::format_size;
use crate::config::Config;
use crate::error::Result;

/// Run status command
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::resolve(config_path)?;

    let asset_dir =
        dunce::canonicalize(&config.asset_dir).unwrap_or_else(|_| config.asset_dir.clone());
    println!(
        "{} {}",
        Style::new().bold().apply_to("Asset directory:"),
        asset_dir.display()
    );

    for name in &config.bundles {
        println!("  {}", Style::new().bold().yellow().apply_to(name));
        print_download_state(&config, name);
        print_extract_state(&config, name);
    }

    Ok(())
}

fn print_download_state(config: &Config, name: &str) {
    let label = Style::new().bold().apply_to("Downloaded:");
    match std::fs::metadata(config.bundle_file(name)) {
        Ok(meta) if meta.is_file() => {
            println!(
                "    {} {} ({})",
                label,
                Style::new().green().apply_to("yes"),
                format_size(meta.len())
            );
        }
        _ => println!("    {} {}", label, Style::new().dim().apply_to("no")),
    }
}

fn print_extract_state(config: &Config, name: &str) {
    let label = Style::new().bold().apply_to("Extracted:");
    let dir = config.bundle_dir(name);
    if dir.is_dir() {
        let files = WalkDir::new(&dir)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .count();
        println!(
            "    {} {} ({} file(s))",
            label,
            Style::new().green().apply_to("yes"),
            files
        );
    } else {
        println!("    {} {}", label, Style::new().dim().apply_to("no"));
    }
}
