//! Hit-rate evaluation of trained predictors on ordered data.
//!
//! Two entry points: a one-shot train/test split and an
//! expanding-window cross-validation. Both fit the supplied model,
//! score predictions with the directional formula from [`crate::score`]
//! and drop the first scored position, which by convention carries no
//! genuine prediction ("from day one onward").

use anyhow::{bail, Result};
use ndarray::{s, Array1, Array2, Axis};

use crate::model::Model;
use crate::progress::ProgressReporter;
use crate::score::score_matrix;
use crate::split::TimeSeriesSplit;

/// Fits `model` on the training pair, predicts the test matrix and
/// returns one hit-rate value per test row, averaged across target
/// columns, with row 0 dropped. With a single target column the values
/// are the raw per-position scores.
///
/// Model failures surface unchanged. Emits one completion notice.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_single_split(
    subject: &str,
    model_name: &str,
    model: &mut dyn Model,
    x_train: &Array2<f64>,
    y_train: &Array2<f64>,
    x_test: &Array2<f64>,
    y_test: &Array2<f64>,
    progress: &dyn ProgressReporter,
) -> Result<Array1<f64>> {
    model.fit(x_train, y_train)?;
    let predicted = model.predict(x_test)?;

    if predicted.dim() != y_test.dim() {
        bail!(
            "prediction shape {:?} does not match test targets {:?}",
            predicted.dim(),
            y_test.dim()
        );
    }

    let scores = score_matrix(predicted.view(), y_test.view());
    let per_position = match scores.mean_axis(Axis(1)) {
        Some(mean) => mean,
        None => bail!("test targets have no columns"),
    };
    if per_position.is_empty() {
        bail!("test set is empty");
    }

    // Position 0 is a warm-up artifact with no genuine prediction.
    let hit_rate = per_position.slice(s![1..]).to_owned();

    progress.single_split_finished(subject, model_name);

    Ok(hit_rate)
}

/// Expanding-window cross-validation over the full data.
///
/// For each fold produced by `splitter`, fits `model` on the training
/// prefix, predicts the test block, scores element-wise and averages
/// along axis 0: one value per target column (forecast horizon),
/// averaged across the fold's test rows. Index 0 of each averaged
/// vector is dropped before it is pushed.
///
/// Folds run strictly in order; one notice per completed fold, with a
/// 1-based counter. A failing fold fails the whole call with no
/// partial results. No cross-fold averaging happens here; that belongs
/// to the caller.
pub fn evaluate_cross_validation(
    subject: &str,
    model_name: &str,
    model: &mut dyn Model,
    x: &Array2<f64>,
    y: &Array2<f64>,
    splitter: &TimeSeriesSplit,
    progress: &dyn ProgressReporter,
) -> Result<Vec<Array1<f64>>> {
    if x.nrows() != y.nrows() {
        bail!(
            "feature rows ({}) and target rows ({}) differ",
            x.nrows(),
            y.nrows()
        );
    }
    if y.ncols() == 0 {
        bail!("target matrix has no columns");
    }

    let folds = splitter.split(x.nrows())?;
    let mut hit_rates = Vec::with_capacity(folds.len());

    for (i, fold) in folds.iter().enumerate() {
        let x_train = x.select(Axis(0), &fold.train);
        let y_train = y.select(Axis(0), &fold.train);
        let x_test = x.select(Axis(0), &fold.test);
        let y_test = y.select(Axis(0), &fold.test);

        // fit replaces any state learned on earlier folds.
        model.fit(&x_train, &y_train)?;
        let predicted = model.predict(&x_test)?;

        if predicted.dim() != y_test.dim() {
            bail!(
                "fold {}: prediction shape {:?} does not match test targets {:?}",
                i + 1,
                predicted.dim(),
                y_test.dim()
            );
        }

        let scores = score_matrix(predicted.view(), y_test.view());
        let per_horizon = match scores.mean_axis(Axis(0)) {
            Some(mean) => mean,
            None => bail!("fold {}: test block is empty", i + 1),
        };

        hit_rates.push(per_horizon.slice(s![1..]).to_owned());

        progress.cross_valid_finished(subject, model_name, i + 1);
    }

    Ok(hit_rates)
}
