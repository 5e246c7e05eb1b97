//! Model capability consumed by the evaluators.

use anyhow::{anyhow, Result};
use ndarray::Array2;

/// A trainable directional predictor.
///
/// The evaluators treat the model as an opaque capability with exactly
/// two operations. `fit` replaces whatever the model learned before;
/// `predict` returns one signed value per test row and target column.
/// Failures are the implementor's own errors and propagate unchanged
/// through the evaluators.
#[cfg_attr(test, mockall::automock)]
pub trait Model {
    fn fit(&mut self, x: &Array2<f64>, y: &Array2<f64>) -> Result<()>;

    fn predict(&self, x: &Array2<f64>) -> Result<Array2<f64>>;
}

/// Reference predictor: the sign of one feature column, broadcast to
/// every target horizon seen during fit.
///
/// Deterministic and stateless apart from the horizon count, which
/// makes it useful for wiring checks and the demo binary. Not a
/// serious model.
pub struct NaiveSignModel {
    feature: usize,
    horizons: usize,
}

impl NaiveSignModel {
    pub fn new(feature: usize) -> Self {
        Self {
            feature,
            horizons: 1,
        }
    }
}

impl Model for NaiveSignModel {
    fn fit(&mut self, x: &Array2<f64>, y: &Array2<f64>) -> Result<()> {
        if self.feature >= x.ncols() {
            return Err(anyhow!(
                "feature column {} out of range for {} features",
                self.feature,
                x.ncols()
            ));
        }
        if x.nrows() != y.nrows() {
            return Err(anyhow!(
                "feature rows ({}) and target rows ({}) differ",
                x.nrows(),
                y.nrows()
            ));
        }
        self.horizons = y.ncols();
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if self.feature >= x.ncols() {
            return Err(anyhow!(
                "feature column {} out of range for {} features",
                self.feature,
                x.ncols()
            ));
        }

        let mut out = Array2::zeros((x.nrows(), self.horizons));
        for (i, &value) in x.column(self.feature).iter().enumerate() {
            let sign = if value > 0.0 {
                1.0
            } else if value < 0.0 {
                -1.0
            } else {
                0.0
            };
            out.row_mut(i).fill(sign);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_naive_sign_model_predicts_feature_sign() {
        let mut model = NaiveSignModel::new(0);
        let x_train = array![[0.5, 9.0], [-0.2, 9.0]];
        let y_train = array![[1.0, -1.0], [-1.0, 1.0]];
        model.fit(&x_train, &y_train).unwrap();

        let x_test = array![[2.0, 9.0], [-3.0, 9.0], [0.0, 9.0]];
        let predicted = model.predict(&x_test).unwrap();

        // Two horizons carried over from fit, sign broadcast per row.
        assert_eq!(predicted, array![[1.0, 1.0], [-1.0, -1.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_naive_sign_model_bad_feature_column() {
        let mut model = NaiveSignModel::new(5);
        let x = array![[1.0], [2.0]];
        let y = array![[1.0], [-1.0]];
        assert!(model.fit(&x, &y).is_err());
        assert!(model.predict(&x).is_err());
    }

    #[test]
    fn test_naive_sign_model_row_mismatch() {
        let mut model = NaiveSignModel::new(0);
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![[1.0], [-1.0]];
        assert!(model.fit(&x, &y).is_err());
    }
}
