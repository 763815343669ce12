use crate::config::ModelConfig;
use crate::data_handling::Sample;
use crate::error::{ClassifierError, Result};

/// Shared contract for single-output linear models.
///
/// Both variants compute the same raw activation and thresholded
/// decisions; the only behavioral difference between them is the
/// per-sample weight update inside `fit`, so the decision methods are
/// provided here as defaults over `score`.
pub trait LinearModel {
    /// Fresh untrained model carrying its hyper-parameters.
    fn new(config: &ModelConfig) -> Self
    where
        Self: Sized;

    /// Fit the model in place. Labels use the crate convention (+1
    /// positive, -1 negative). The weight vector is zero-filled up front
    /// and the configured epoch count always runs; there is no
    /// convergence check.
    fn fit(&mut self, training_set: &[Sample]) -> Result<()>;

    /// Read-only view of the weight vector, bias at index 0. Empty until
    /// `fit` has run.
    fn weights(&self) -> &[f32];

    /// Raw activation `z = Σ weights[k] * input(k)`.
    fn score(&self, sample: &Sample) -> Result<f32> {
        let weights = self.weights();
        if weights.is_empty() {
            return Err(ClassifierError::UntrainedModel);
        }
        if weights.len() != sample.num_factors() + 1 {
            return Err(ClassifierError::FactorLengthMismatch {
                expected: weights.len() - 1,
                found: sample.num_factors(),
            });
        }

        let mut z = 0.0;
        for (k, weight) in weights.iter().enumerate() {
            z += weight * sample.input(k);
        }
        Ok(z)
    }

    /// Binary decision: true on the non-negative side of the hyperplane.
    fn predict_binary(&self, sample: &Sample) -> Result<bool> {
        Ok(self.score(sample)? >= 0.0)
    }

    /// Class decision in {-1, +1}.
    fn predict_class(&self, sample: &Sample) -> Result<i32> {
        Ok(if self.score(sample)? >= 0.0 { 1 } else { -1 })
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "linear"
    }
}
