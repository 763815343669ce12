//! Data structures and helpers for labeled tabular datasets.
//!
//! This module defines `Sample` and contains the shared shape validation
//! used by every training routine, plus the shuffle/partition helper the
//! evaluation driver uses to create train/test splits.
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::{ClassifierError, Result};

/// A single labeled observation. Immutable once constructed.
///
/// `label` holds a dense class id for multi-class use, or the +1/-1
/// convention when fed directly to a binary model.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub factors: Vec<f32>,
    pub label: i32,
}

impl Sample {
    pub fn new(factors: Vec<f32>, label: i32) -> Self {
        Sample { factors, label }
    }

    /// Model input at index `k`. Index 0 is the constant bias input; index
    /// `k >= 1` maps to `factors[k - 1]`, so weight vectors carry one more
    /// entry than the sample has factors.
    pub fn input(&self, k: usize) -> f32 {
        if k == 0 {
            1.0
        } else {
            self.factors[k - 1]
        }
    }

    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }
}

/// Up-front shape check shared by all training routines.
///
/// Returns the common factor count so callers can size their weight
/// vectors before touching any state.
pub fn validate_training_set(training_set: &[Sample]) -> Result<usize> {
    let first = training_set.first().ok_or(ClassifierError::EmptyTrainingSet)?;
    let expected = first.num_factors();
    for sample in training_set {
        if sample.num_factors() != expected {
            return Err(ClassifierError::FactorLengthMismatch {
                expected,
                found: sample.num_factors(),
            });
        }
    }
    Ok(expected)
}

/// Shuffle and partition a dataset into train/test splits.
///
/// The first `⌊n * train_fraction⌋` samples after shuffling become the
/// training set. This is the only place in the crate that draws
/// randomness; training and inference are deterministic.
pub fn split_train_test(mut samples: Vec<Sample>, train_fraction: f32) -> (Vec<Sample>, Vec<Sample>) {
    let mut rng = thread_rng();
    samples.shuffle(&mut rng);

    let n_train = (samples.len() as f32 * train_fraction) as usize;
    let test = samples.split_off(n_train.min(samples.len()));
    (samples, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_input_is_prepended() {
        let sample = Sample::new(vec![3.0, 4.0], 1);
        assert_eq!(sample.input(0), 1.0);
        assert_eq!(sample.input(1), 3.0);
        assert_eq!(sample.input(2), 4.0);
        assert_eq!(sample.num_factors(), 2);
    }

    #[test]
    fn validate_rejects_empty_and_ragged_sets() {
        assert_eq!(validate_training_set(&[]), Err(ClassifierError::EmptyTrainingSet));

        let ragged = vec![
            Sample::new(vec![1.0, 2.0], 1),
            Sample::new(vec![1.0], -1),
        ];
        assert_eq!(
            validate_training_set(&ragged),
            Err(ClassifierError::FactorLengthMismatch { expected: 2, found: 1 })
        );

        let ok = vec![
            Sample::new(vec![1.0, 2.0], 1),
            Sample::new(vec![3.0, 4.0], -1),
        ];
        assert_eq!(validate_training_set(&ok), Ok(2));
    }

    #[test]
    fn split_sizes_add_up() {
        let samples: Vec<Sample> = (0..9).map(|i| Sample::new(vec![i as f32], 0)).collect();
        let (train, test) = split_train_test(samples, 1.0 / 3.0);
        assert_eq!(train.len(), 3);
        assert_eq!(test.len(), 6);
    }
}
