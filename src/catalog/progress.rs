//! Run observers.
//!
//! The pipeline reports its life cycle through the [`CatalogProgress`] trait:
//! `start` with the pre-scan row total, one `row_processed` per transformed row,
//! then exactly one of `success` or `failure`. Observers are passive and never
//! influence control flow.
//!
//! [`NoProgress`] ignores everything; [`ConsoleProgress`] (feature `progress`)
//! renders a live `indicatif` bar.

use crate::skycat_errors::SkycatError;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// Observer of one pipeline run.
pub trait CatalogProgress {
    /// The counting pass finished; `total_estimate` data rows are about to stream.
    fn start(&mut self, total_estimate: u64);

    /// Row `index` (1-based) of `total` was transformed and appended.
    fn row_processed(&mut self, index: u64, total: u64);

    /// The run completed; `count` records were produced.
    fn success(&mut self, count: u64);

    /// The run aborted; no partial output is valid.
    fn failure(&mut self, error: &SkycatError);
}

/// The null observer.
pub struct NoProgress;

impl CatalogProgress for NoProgress {
    fn start(&mut self, _total_estimate: u64) {}
    fn row_processed(&mut self, _index: u64, _total: u64) {}
    fn success(&mut self, _count: u64) {}
    fn failure(&mut self, _error: &SkycatError) {}
}

/// Console progress bar observer.
#[cfg(feature = "progress")]
pub struct ConsoleProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

#[cfg(feature = "progress")]
impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl CatalogProgress for ConsoleProgress {
    fn start(&mut self, total_estimate: u64) {
        let pb = ProgressBar::new(total_estimate.max(1));
        pb.set_style(
            ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos}/{len} ({percent:>3}%) | {per_sec} | ETA {eta_precise} | {msg}",
            )
            .expect("indicatif template"),
        );
        pb.enable_steady_tick(Duration::from_millis(200));
        pb.set_message("parsing catalog rows");
        self.bar = pb;
    }

    fn row_processed(&mut self, index: u64, _total: u64) {
        self.bar.set_position(index);
    }

    fn success(&mut self, count: u64) {
        self.bar.disable_steady_tick();
        self.bar
            .finish_with_message(format!("parsed {count} entries"));
    }

    fn failure(&mut self, error: &SkycatError) {
        self.bar.disable_steady_tick();
        self.bar.abandon_with_message(format!("failed: {error}"));
    }
}
