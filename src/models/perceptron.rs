use crate::config::ModelConfig;
use crate::data_handling::{validate_training_set, Sample};
use crate::error::Result;
use crate::models::classifier_trait::LinearModel;

/// Rosenblatt perceptron.
///
/// The per-sample update is driven by the thresholded class decision, so
/// the error term is always one of {-2, 0, 2} and only misclassified
/// samples move the weights.
pub struct Perceptron {
    weights: Vec<f32>,
    config: ModelConfig,
}

impl LinearModel for Perceptron {
    fn new(config: &ModelConfig) -> Self {
        Perceptron {
            weights: Vec::new(),
            config: config.clone(),
        }
    }

    fn fit(&mut self, training_set: &[Sample]) -> Result<()> {
        let num_factors = validate_training_set(training_set)?;
        self.weights.clear();
        self.weights.resize(num_factors + 1, 0.0);

        let epochs = self.config.epochs();
        for epoch in 0..epochs {
            let rate = self.config.rate_at(epoch);
            for sample in training_set {
                let classification = self.predict_class(sample)?;
                let error = (sample.label - classification) as f32;
                for k in 0..self.weights.len() {
                    self.weights[k] += rate * error * sample.input(k);
                }
            }
        }

        log::trace!(
            "{}: fitted {} weights over {} epochs",
            self.name(),
            self.weights.len(),
            epochs
        );
        Ok(())
    }

    fn weights(&self) -> &[f32] {
        &self.weights
    }

    fn name(&self) -> &str {
        "perceptron"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelType;
    use crate::error::ClassifierError;

    fn and_gate() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.0, 0.0], -1),
            Sample::new(vec![0.0, 1.0], -1),
            Sample::new(vec![1.0, 0.0], -1),
            Sample::new(vec![1.0, 1.0], 1),
        ]
    }

    #[test]
    fn converges_on_and_gate() {
        let config = ModelConfig::new(0.1, ModelType::Perceptron { epochs: 50 });
        let mut model = Perceptron::new(&config);
        model.fit(&and_gate()).unwrap();

        for sample in &and_gate() {
            assert_eq!(model.predict_class(sample).unwrap(), sample.label);
        }
    }

    #[test]
    fn weight_vector_has_bias_slot() {
        let config = ModelConfig::default();
        let mut model = Perceptron::new(&config);
        model.fit(&and_gate()).unwrap();
        assert_eq!(model.weights().len(), 3);
    }

    #[test]
    fn training_is_deterministic() {
        let config = ModelConfig::new(0.1, ModelType::Perceptron { epochs: 50 });
        let mut first = Perceptron::new(&config);
        let mut second = Perceptron::new(&config);
        first.fit(&and_gate()).unwrap();
        second.fit(&and_gate()).unwrap();
        assert_eq!(first.weights(), second.weights());
    }

    #[test]
    fn rejects_empty_training_set() {
        let config = ModelConfig::default();
        let mut model = Perceptron::new(&config);
        assert_eq!(model.fit(&[]), Err(ClassifierError::EmptyTrainingSet));
        assert!(model.weights().is_empty());
    }

    #[test]
    fn untrained_model_cannot_score() {
        let config = ModelConfig::default();
        let model = Perceptron::new(&config);
        let sample = Sample::new(vec![1.0], 1);
        assert_eq!(model.score(&sample), Err(ClassifierError::UntrainedModel));
    }

    #[test]
    fn score_checks_factor_count() {
        let config = ModelConfig::new(0.1, ModelType::Perceptron { epochs: 1 });
        let mut model = Perceptron::new(&config);
        model.fit(&and_gate()).unwrap();

        let short = Sample::new(vec![1.0], 1);
        assert_eq!(
            model.score(&short),
            Err(ClassifierError::FactorLengthMismatch { expected: 2, found: 1 })
        );
    }
}
