use crate::config::{ModelConfig, ModelType};
use crate::models::adaline::Adaline;
use crate::models::classifier_trait::LinearModel;
use crate::models::perceptron::Perceptron;

/// Build a boxed linear model from a `ModelConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_model(config: ModelConfig) -> Box<dyn LinearModel> {
    match config.model_type {
        ModelType::Perceptron { .. } => Box::new(Perceptron::new(&config)),
        ModelType::Adaline { .. } => Box::new(Adaline::new(&config)),
    }
}
