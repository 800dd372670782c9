//! Sync command CLI wrapper
//!
//! Thin wrapper that resolves the configuration, wires the real manifest
//! client and extractor into the pipeline, and prints the resulting report.

use std::path::PathBuf;

use console::Style;

use crate::cli::SyncArgs;
use crate::config::Config;
use crate::error::Result;
use crate::extract::AssetStudioExtractor;
use crate::manifest::RemoteManifestClient;
use crate::progress::{InteractiveProgress, ProgressReporter, SilentProgress};
use crate::sync::{self, SyncOptions, SyncReport};

/// Run sync command
pub fn run(config_path: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let client = RemoteManifestClient::from_config(&config);
    let extractor = AssetStudioExtractor::from_config(&config);
    let options = SyncOptions {
        dry_run: args.dry_run,
    };

    let mut progress: Box<dyn ProgressReporter> = if args.dry_run {
        Box::new(SilentProgress)
    } else {
        Box::new(InteractiveProgress::new(config.bundles.len() as u64))
    };

    let report = match sync::run(&config, &client, &extractor, options, Some(progress.as_mut()))
    {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    print_report(&config, &report, args.dry_run);
    Ok(())
}

fn print_report(config: &Config, report: &SyncReport, dry_run: bool) {
    if report.is_noop() {
        println!(
            "All {} bundles up to date in {}",
            config.bundles.len(),
            config.asset_dir.display()
        );
        return;
    }

    let marker = Style::new().green().bold();
    if !report.downloaded.is_empty() {
        let label = if dry_run { "Would download:" } else { "Downloaded:" };
        println!("{}", Style::new().bold().apply_to(label));
        for name in &report.downloaded {
            println!("  {} {}", marker.apply_to("+"), name);
        }
    }
    if !report.extracted.is_empty() {
        let label = if dry_run { "Would extract:" } else { "Extracted:" };
        println!("{}", Style::new().bold().apply_to(label));
        for name in &report.extracted {
            println!("  {} {}", marker.apply_to("+"), name);
        }
    }

    let already = report.skipped_downloads + report.skipped_extractions;
    if dry_run {
        println!(
            "Dry run: {} download(s) and {} extraction(s) pending",
            report.downloaded.len(),
            report.extracted.len()
        );
    } else {
        println!(
            "Done: {} downloaded, {} extracted, {} step(s) already done",
            report.downloaded.len(),
            report.extracted.len(),
            already
        );
    }
}
