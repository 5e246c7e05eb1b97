//! Expanding-window splits for time-ordered data.
//!
//! Chronological order is preserved: every fold trains on a prefix of
//! the data and tests on the contiguous block that follows it, so no
//! future observation leaks into a training set. Construct the splitter
//! locally and pass it to the evaluator; there is no global splitter
//! configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("number of splits must be at least 1")]
    NoSplits,
    #[error("cannot split {n_samples} samples into {n_splits} expanding folds with test size {test_size}")]
    TooFewSamples {
        n_samples: usize,
        n_splits: usize,
        test_size: usize,
    },
}

/// Row indices of one chronological train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Expanding-window time-series splitter.
///
/// Fold `i` of `k` tests a fixed-size block and trains on everything
/// before it; each successive fold's training set absorbs the previous
/// fold's test block. The test blocks tile the tail of the series, so
/// with the default test size the first training window covers roughly
/// the leading `1/(k+1)` of the data.
#[derive(Debug, Clone)]
pub struct TimeSeriesSplit {
    n_splits: usize,
    test_size: Option<usize>,
}

impl Default for TimeSeriesSplit {
    fn default() -> Self {
        Self::new(3)
    }
}

impl TimeSeriesSplit {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            test_size: None,
        }
    }

    /// Fixes the test block size instead of deriving it from the
    /// sample count.
    pub fn with_test_size(mut self, test_size: usize) -> Self {
        self.test_size = Some(test_size);
        self
    }

    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Produces the train/test index pairs for `n_samples` ordered
    /// observations, in fold order.
    pub fn split(&self, n_samples: usize) -> Result<Vec<FoldIndices>, SplitError> {
        if self.n_splits == 0 {
            return Err(SplitError::NoSplits);
        }

        let test_size = self
            .test_size
            .unwrap_or(n_samples / (self.n_splits + 1));

        // Every fold needs a non-empty test block and fold 0 needs a
        // non-empty training prefix.
        if test_size == 0 || self.n_splits * test_size >= n_samples {
            return Err(SplitError::TooFewSamples {
                n_samples,
                n_splits: self.n_splits,
                test_size,
            });
        }

        let first_test = n_samples - self.n_splits * test_size;
        let mut folds = Vec::with_capacity(self.n_splits);

        for i in 0..self.n_splits {
            let test_start = first_test + i * test_size;
            folds.push(FoldIndices {
                train: (0..test_start).collect(),
                test: (test_start..test_start + test_size).collect(),
            });
        }

        Ok(folds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_folds_over_six_samples() {
        let folds = TimeSeriesSplit::new(3).split(6).unwrap();

        assert_eq!(folds.len(), 3);
        assert_eq!(folds[0].train, vec![0, 1, 2]);
        assert_eq!(folds[0].test, vec![3]);
        assert_eq!(folds[1].train, vec![0, 1, 2, 3]);
        assert_eq!(folds[1].test, vec![4]);
        assert_eq!(folds[2].train, vec![0, 1, 2, 3, 4]);
        assert_eq!(folds[2].test, vec![5]);
    }

    #[test]
    fn test_training_window_expands() {
        let folds = TimeSeriesSplit::new(5).split(100).unwrap();

        for pair in folds.windows(2) {
            assert!(pair[1].train.len() > pair[0].train.len());
        }
    }

    #[test]
    fn test_no_future_leakage() {
        let folds = TimeSeriesSplit::new(4).split(50).unwrap();

        for fold in &folds {
            let first_test = fold.test[0];
            assert!(fold.train.iter().all(|&idx| idx < first_test));
        }
    }

    #[test]
    fn test_fixed_test_size() {
        let folds = TimeSeriesSplit::new(2).with_test_size(3).split(10).unwrap();

        assert_eq!(folds[0].train.len(), 4);
        assert_eq!(folds[0].test, vec![4, 5, 6]);
        assert_eq!(folds[1].test, vec![7, 8, 9]);
    }

    #[test]
    fn test_zero_splits_rejected() {
        assert_eq!(TimeSeriesSplit::new(0).split(10), Err(SplitError::NoSplits));
    }

    #[test]
    fn test_too_few_samples_rejected() {
        // Derived test size collapses to zero.
        let err = TimeSeriesSplit::new(3).split(3).unwrap_err();
        assert!(matches!(err, SplitError::TooFewSamples { .. }));

        // Test blocks would consume the whole series, leaving fold 0
        // with no training data.
        let err = TimeSeriesSplit::new(2).with_test_size(5).split(10).unwrap_err();
        assert!(matches!(err, SplitError::TooFewSamples { .. }));
    }

    #[test]
    fn test_default_is_three_folds() {
        assert_eq!(TimeSeriesSplit::default().n_splits(), 3);
    }
}
