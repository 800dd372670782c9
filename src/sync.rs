//! The sync pipeline
//!
//! Drives, for the configured bundle list, a two-stage download/extract
//! pass with filesystem-presence idempotence: an existing
//! `<asset_dir>/<name>.unity3d` skips the download, an existing
//! `<asset_dir>/<name>` directory skips the extraction. Presence is the
//! only signal; partial artifacts from an interrupted run are treated as
//! complete on the next one.
//!
//! Execution is sequential and fail-fast: each bundle is processed to
//! completion before the next, and the first error aborts the run, leaving
//! already-completed bundles' artifacts on disk and later bundles
//! unprocessed.

use crate::config::Config;
use crate::error::Result;
use crate::extract::Extractor;
use crate::manifest::ManifestClient;
use crate::progress::ProgressReporter;

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Perform all checks and the manifest fetch, but no downloads or
    /// extractions
    pub dry_run: bool,
}

/// What a sync run did (or, under `--dry-run`, would have done)
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Bundles downloaded, in processing order
    pub downloaded: Vec<String>,
    /// Bundles extracted, in processing order
    pub extracted: Vec<String>,
    /// Bundles whose archive was already on disk
    pub skipped_downloads: usize,
    /// Bundles whose extracted directory was already on disk
    pub skipped_extractions: usize,
}

impl SyncReport {
    /// True when the run had nothing to do
    pub fn is_noop(&self) -> bool {
        self.downloaded.is_empty() && self.extracted.is_empty()
    }
}

/// Run the pipeline over every configured bundle, in configuration order
pub fn run(
    config: &Config,
    client: &dyn ManifestClient,
    extractor: &dyn Extractor,
    options: SyncOptions,
    mut progress: Option<&mut dyn ProgressReporter>,
) -> Result<SyncReport> {
    if !options.dry_run {
        std::fs::create_dir_all(&config.asset_dir)?;
    }

    // Fetched once per run, even when every bundle is already present.
    let manifest = client.fetch()?;

    let mut report = SyncReport::default();
    let total = config.bundles.len();

    for (idx, name) in config.bundles.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.update_bundle(name, idx + 1, total);
        }

        let bundle_file = config.bundle_file(name);
        if bundle_file.exists() {
            report.skipped_downloads += 1;
        } else {
            let entry = manifest.resolve(name)?;
            if !options.dry_run {
                entry.download(&config.asset_dir, false)?;
            }
            report.downloaded.push(name.clone());
        }

        let bundle_dir = config.bundle_dir(name);
        if bundle_dir.exists() {
            report.skipped_extractions += 1;
        } else {
            if !options.dry_run {
                extractor.extract(&bundle_file, &bundle_dir)?;
            }
            report.extracted.push(name.clone());
        }

        if let Some(p) = progress.as_deref_mut() {
            p.inc_bundle();
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(report)
}
