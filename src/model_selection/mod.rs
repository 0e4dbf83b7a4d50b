//! Seeded shuffling and train/evaluation splitting.
//!
//! Randomness is always driven by an explicit seed so the same seed gives
//! the same permutation, the same split and the same downstream metrics.

use crate::error::{Result, StudyPerfError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Fraction of observations used for training when none is given.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Returns a uniformly random permutation of `data` driven by `seed`.
///
/// The input is left untouched.
///
/// # Example
///
/// ```rust
/// use studyperf::model_selection::shuffle;
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(shuffle(&data, 7), shuffle(&data, 7));
/// ```
#[must_use]
pub fn shuffle<T: Clone>(data: &[T], seed: u64) -> Vec<T> {
    let mut shuffled = data.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);
    debug!(len = shuffled.len(), seed, "shuffled observations");
    shuffled
}

/// Number of training rows for `n` observations: `round(train_ratio * n)`.
///
/// # Errors
///
/// Returns `InvalidInput` if `train_ratio` is not strictly between 0 and 1.
pub fn train_size(n: usize, train_ratio: f64) -> Result<usize> {
    if !(train_ratio > 0.0 && train_ratio < 1.0) {
        return Err(StudyPerfError::invalid(
            "split",
            format!("train_ratio must be in (0, 1), got {train_ratio}"),
        ));
    }
    Ok((train_ratio * n as f64).round() as usize)
}

/// Cuts `data` into a training prefix and an evaluation suffix.
///
/// No stratification: shuffle first if the input order is meaningful.
///
/// # Errors
///
/// Returns `InvalidInput` if `data` is empty or `train_ratio` is not
/// strictly between 0 and 1.
///
/// # Example
///
/// ```rust
/// use studyperf::model_selection::split;
///
/// let (train, eval) = split(&[1, 2, 3, 4, 5], 0.8).expect("valid ratio");
/// assert_eq!(train, vec![1, 2, 3, 4]);
/// assert_eq!(eval, vec![5]);
/// ```
#[allow(clippy::type_complexity)]
pub fn split<T: Clone>(data: &[T], train_ratio: f64) -> Result<(Vec<T>, Vec<T>)> {
    if data.is_empty() {
        return Err(StudyPerfError::empty_input("split"));
    }
    let n_train = train_size(data.len(), train_ratio)?;
    let (train, eval) = data.split_at(n_train);
    debug!(
        n_train = train.len(),
        n_eval = eval.len(),
        train_ratio,
        "split observations"
    );
    Ok((train.to_vec(), eval.to_vec()))
}

/// Shuffles with `seed`, then splits by `train_ratio`.
///
/// # Errors
///
/// See [`split`].
#[allow(clippy::type_complexity)]
pub fn train_test_split<T: Clone>(
    data: &[T],
    train_ratio: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>)> {
    split(&shuffle(data, seed), train_ratio)
}
