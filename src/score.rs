//! Directional correctness scoring.
//!
//! The score of a prediction `p` against a realized value `t` is
//! `(1 + p*t) / 2`. For unit-magnitude sign indicators this is a true
//! hit indicator: 1.0 when the signs agree, 0.0 when they disagree,
//! 0.5 when either side is zero. For raw-valued inputs the product
//! scales with magnitude, so the result is a magnitude-weighted
//! correctness score rather than a strict hit fraction. That ambiguity
//! is inherited from upstream usage and kept as-is; do not replace the
//! formula with a `sign(p) == sign(t)` test.

use ndarray::{Array2, ArrayView2, Zip};

/// Correctness of a single directional prediction, in [0, 1] for
/// unit-magnitude inputs.
pub fn directional_score(predicted: f64, truth: f64) -> f64 {
    (1.0 + predicted * truth) / 2.0
}

/// Element-wise directional score of a prediction matrix against the
/// realized targets. Shapes must match.
pub fn score_matrix(predicted: ArrayView2<f64>, truth: ArrayView2<f64>) -> Array2<f64> {
    Zip::from(predicted)
        .and(truth)
        .map_collect(|&p, &t| directional_score(p, t))
}
