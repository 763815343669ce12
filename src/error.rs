use std::error::Error;
use std::fmt;

/// Custom error type for training and inference failures.
///
/// Shape problems are detected by up-front validation, so a failed call
/// never leaves a model with partially applied weight updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Training was requested on a set with no samples.
    EmptyTrainingSet,
    /// A sample's factor count disagrees with the rest of the dataset, or
    /// with the weight vector of an already-trained model.
    FactorLengthMismatch { expected: usize, found: usize },
    /// A sample label falls outside the registered 0..num_classes range.
    LabelOutOfRange { label: i32, num_classes: usize },
    /// Score or predict was called on a model that was never fitted.
    UntrainedModel,
    /// One-vs-all training or prediction with no registered class ids.
    NoRegisteredClasses,
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::EmptyTrainingSet => write!(f, "Training set is empty"),
            ClassifierError::FactorLengthMismatch { expected, found } => {
                write!(f, "Expected {} factors per sample, found {}", expected, found)
            }
            ClassifierError::LabelOutOfRange { label, num_classes } => {
                write!(
                    f,
                    "Label {} is outside the registered class range 0..{}",
                    label, num_classes
                )
            }
            ClassifierError::UntrainedModel => write!(f, "Model has not been trained"),
            ClassifierError::NoRegisteredClasses => {
                write!(f, "No class ids have been registered")
            }
        }
    }
}

impl Error for ClassifierError {}

pub type Result<T> = std::result::Result<T, ClassifierError>;
