//! Progress reporting for the sync pipeline
//!
//! All progress goes through the [`ProgressReporter`] trait so the pipeline
//! can run with an interactive bar, or silently (dry-run, tests).

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the bundle pipeline
pub trait ProgressReporter {
    /// Update to show the bundle currently being processed
    fn update_bundle(&mut self, bundle_name: &str, current: usize, total: usize);

    /// Mark one bundle as fully processed
    fn inc_bundle(&mut self);

    /// Finish the display after a successful run
    fn finish(&mut self);

    /// Abandon the display on error
    fn abandon(&mut self);
}

/// Interactive progress bar over the configured bundle list
pub struct InteractiveProgress {
    bundle_pb: ProgressBar,
}

impl InteractiveProgress {
    pub fn new(total_bundles: u64) -> Self {
        let bundle_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let bundle_pb = ProgressBar::new(total_bundles);
        bundle_pb.set_style(bundle_style);

        Self { bundle_pb }
    }
}

impl ProgressReporter for InteractiveProgress {
    fn update_bundle(&mut self, bundle_name: &str, current: usize, total: usize) {
        self.bundle_pb
            .set_message(format!("({current}/{total}) {bundle_name}"));
    }

    fn inc_bundle(&mut self) {
        self.bundle_pb.inc(1);
    }

    fn finish(&mut self) {
        self.bundle_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.bundle_pb.abandon();
    }
}

/// No-op reporter for quiet runs
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn update_bundle(&mut self, _bundle_name: &str, _current: usize, _total: usize) {}
    fn inc_bundle(&mut self) {}
    fn finish(&mut self) {}
    fn abandon(&mut self) {}
}
