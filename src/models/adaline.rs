use crate::config::ModelConfig;
use crate::data_handling::{validate_training_set, Sample};
use crate::error::Result;
use crate::models::classifier_trait::LinearModel;

/// Adaptive linear neuron (Adaline).
///
/// Identical to the perceptron except that the update is driven by the raw
/// activation instead of the thresholded decision, so the error term is
/// continuous and every sample moves the weights. This is the gradient of
/// the squared error with respect to a linear activation.
pub struct Adaline {
    weights: Vec<f32>,
    config: ModelConfig,
}

impl LinearModel for Adaline {
    fn new(config: &ModelConfig) -> Self {
        Adaline {
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
                let z = self.score(sample)?;
                let error = sample.label as f32 - z;
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
        "adaline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelType;
    use crate::models::perceptron::Perceptron;

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
        let config = ModelConfig::new(0.05, ModelType::Adaline { epochs: 500 });
        let mut model = Adaline::new(&config);
        model.fit(&and_gate()).unwrap();

        for sample in &and_gate() {
            assert_eq!(model.predict_class(sample).unwrap(), sample.label);
        }
    }

    #[test]
    fn weight_vector_has_bias_slot() {
        let config = ModelConfig::new(0.05, ModelType::Adaline { epochs: 10 });
        let mut model = Adaline::new(&config);
        model.fit(&and_gate()).unwrap();
        assert_eq!(model.weights().len(), 3);
    }

    #[test]
    fn update_uses_raw_activation() {
        // One sample, one epoch, zero initial weights: z = 0, so the
        // Adaline increment is rate * label * input while the perceptron
        // sees a correct classification (0 >= 0 -> +1) and stays put.
        let training_set = vec![Sample::new(vec![2.0], 1)];

        let config = ModelConfig::new(0.5, ModelType::Adaline { epochs: 1 });
        let mut adaline = Adaline::new(&config);
        adaline.fit(&training_set).unwrap();
        assert_eq!(adaline.weights(), &[0.5, 1.0]);

        let config = ModelConfig::new(0.5, ModelType::Perceptron { epochs: 1 });
        let mut perceptron = Perceptron::new(&config);
        perceptron.fit(&training_set).unwrap();
        assert_eq!(perceptron.weights(), &[0.0, 0.0]);
    }

    #[test]
    fn training_is_deterministic() {
        let config = ModelConfig::new(0.05, ModelType::Adaline { epochs: 100 });
        let mut first = Adaline::new(&config);
        let mut second = Adaline::new(&config);
        first.fit(&and_gate()).unwrap();
        second.fit(&and_gate()).unwrap();
        assert_eq!(first.weights(), second.weights());
    }
}
