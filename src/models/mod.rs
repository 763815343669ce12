pub mod adaline;
pub mod perceptron;

pub mod classifier_trait;
pub mod factory;
