//! # signal-eval
//!
//! Evaluates the directional accuracy ("hit-rate") of trained
//! predictive models against a time-ordered series:
//!
//! - Single train/test split: fit once, predict once, score once.
//! - Expanding-window cross-validation: growing training prefix,
//!   fixed-size test block, one result vector per fold.
//!
//! Models are opaque fit/predict capabilities; splitting is handled by
//! a locally constructed [`TimeSeriesSplit`]; progress notices go
//! through a [`ProgressReporter`] so nothing writes to stdout unless
//! asked to.

pub mod eval;
pub mod model;
pub mod progress;
pub mod score;
pub mod split;

pub use eval::{evaluate_cross_validation, evaluate_single_split};
pub use model::{Model, NaiveSignModel};
pub use progress::{
    MemoryReporter, NullReporter, ProgressReporter, StdoutReporter, TracingReporter,
};
pub use score::{directional_score, score_matrix};
pub use split::{FoldIndices, SplitError, TimeSeriesSplit};
