use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    /// Base per-update learning rate.
    pub learning_rate: f32,

    #[serde(default)]
    pub schedule: LearningSchedule,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ModelType {
    Perceptron { epochs: usize },
    Adaline { epochs: usize },
}

/// Per-epoch learning-rate schedule.
///
/// `Constant` reproduces the fixed-rate baseline. `InverseDecay` divides
/// the base rate by `1 + decay * epoch`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LearningSchedule {
    Constant,
    InverseDecay { decay: f32 },
}

impl Default for LearningSchedule {
    fn default() -> Self {
        LearningSchedule::Constant
    }
}

impl LearningSchedule {
    pub fn rate_at(&self, base: f32, epoch: usize) -> f32 {
        match self {
            LearningSchedule::Constant => base,
            LearningSchedule::InverseDecay { decay } => base / (1.0 + decay * epoch as f32),
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::Perceptron { epochs: 1000 }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "perceptron" => Ok(ModelType::Perceptron { epochs: 1000 }),
            "adaline" => Ok(ModelType::Adaline { epochs: 50 }),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: perceptron, adaline",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(learning_rate: f32, model_type: ModelType) -> Self {
        Self {
            learning_rate,
            schedule: LearningSchedule::Constant,
            model_type,
        }
    }

    /// Epoch count of the configured variant.
    pub fn epochs(&self) -> usize {
        match self.model_type {
            ModelType::Perceptron { epochs } | ModelType::Adaline { epochs } => epochs,
        }
    }

    /// Effective learning rate for `epoch` under the configured schedule.
    pub fn rate_at(&self, epoch: usize) -> f32 {
        self.schedule.rate_at(self.learning_rate, epoch)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            schedule: LearningSchedule::Constant,
            model_type: ModelType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_type_from_str() {
        assert!(matches!(
            "perceptron".parse::<ModelType>(),
            Ok(ModelType::Perceptron { epochs: 1000 })
        ));
        assert!(matches!(
            "Adaline".parse::<ModelType>(),
            Ok(ModelType::Adaline { epochs: 50 })
        ));
        assert!("svm".parse::<ModelType>().is_err());
    }

    #[test]
    fn schedule_rates() {
        assert_eq!(LearningSchedule::Constant.rate_at(0.01, 999), 0.01);
        let decay = LearningSchedule::InverseDecay { decay: 1.0 };
        assert_eq!(decay.rate_at(0.1, 0), 0.1);
        assert_eq!(decay.rate_at(0.1, 1), 0.05);
    }
}
