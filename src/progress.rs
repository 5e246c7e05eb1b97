//! Progress notices emitted by the evaluators.
//!
//! Notices are observability only and carry no control-flow meaning.
//! The trait keeps the evaluators usable in tests and non-interactive
//! contexts without polluting output streams.

use std::sync::Mutex;

use tracing::info;

/// Observer for evaluator completion notices.
pub trait ProgressReporter {
    /// A single-split run finished for `subject` with `model`.
    fn single_split_finished(&self, subject: &str, model: &str);

    /// Cross-validation fold `fold` (1-based) finished for `subject`
    /// with `model`.
    fn cross_valid_finished(&self, subject: &str, model: &str, fold: usize);
}

/// Emits notices through `tracing`.
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn single_split_finished(&self, subject: &str, model: &str) {
        info!("{} {} One-Split Finished", subject, model);
    }

    fn cross_valid_finished(&self, subject: &str, model: &str, fold: usize) {
        info!("{} {} Cross Valid {} Finished", subject, model, fold);
    }
}

/// Prints the classic line format straight to stdout.
pub struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn single_split_finished(&self, subject: &str, model: &str) {
        println!("{} {} One-Split Finished", subject, model);
    }

    fn cross_valid_finished(&self, subject: &str, model: &str, fold: usize) {
        println!("{} {} Cross Valid {} Finished", subject, model, fold);
    }
}

/// Discards all notices.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn single_split_finished(&self, _subject: &str, _model: &str) {}

    fn cross_valid_finished(&self, _subject: &str, _model: &str, _fold: usize) {}
}

/// Records notices in arrival order. Mainly for tests that assert on
/// notice content or ordering.
#[derive(Default)]
pub struct MemoryReporter {
    notices: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl ProgressReporter for MemoryReporter {
    fn single_split_finished(&self, subject: &str, model: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(format!("{} {} One-Split Finished", subject, model));
    }

    fn cross_valid_finished(&self, subject: &str, model: &str, fold: usize) {
        self.notices
            .lock()
            .unwrap()
            .push(format!("{} {} Cross Valid {} Finished", subject, model, fold));
    }
}
