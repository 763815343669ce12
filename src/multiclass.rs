//! One-vs-all composition of binary linear models.
//!
//! A K-class problem is decomposed into K independent binary sub-problems:
//! sub-model i is trained on a relabeled copy of the training set where
//! label i becomes +1 and everything else -1. Prediction takes the arg-max
//! of the per-class raw scores.
use std::collections::HashMap;

use rayon::prelude::*;

use crate::config::ModelConfig;
use crate::data_handling::{validate_training_set, Sample};
use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::LinearModel;

/// Generic multi-class wrapper owning one binary model per registered
/// class id.
///
/// Class ids are assigned lazily through `get_id` in first-seen order and
/// stay stable for the lifetime of the classifier. The model list is built
/// exactly once, during `fit`.
pub struct OneVsAllClassifier<M> {
    config: ModelConfig,
    class_ids: HashMap<String, usize>,
    num_ids: usize,
    models: Vec<M>,
}

impl<M> OneVsAllClassifier<M>
where
    M: LinearModel + Send,
{
    pub fn new(config: ModelConfig) -> Self {
        OneVsAllClassifier {
            config,
            class_ids: HashMap::new(),
            num_ids: 0,
            models: Vec::new(),
        }
    }

    /// Dense id for `token`, assigning the next unused id on first sight.
    pub fn get_id(&mut self, token: &str) -> usize {
        if let Some(&id) = self.class_ids.get(token) {
            return id;
        }
        let id = self.num_ids;
        self.class_ids.insert(token.to_string(), id);
        self.num_ids += 1;
        id
    }

    /// Number of distinct class ids registered via `get_id`.
    pub fn num_classes(&self) -> usize {
        self.num_ids
    }

    pub fn is_trained(&self) -> bool {
        !self.models.is_empty()
    }

    /// Train one binary sub-model per registered class id.
    ///
    /// Sample labels must already be dense ids in `0..num_classes()`; the
    /// caller maps raw label tokens through `get_id` beforehand. Any
    /// sub-training failure aborts the whole call without storing any
    /// sub-model.
    pub fn fit(&mut self, training_set: &[Sample]) -> Result<()> {
        let num_classes = self.num_ids;
        if num_classes == 0 {
            return Err(ClassifierError::NoRegisteredClasses);
        }
        validate_training_set(training_set)?;
        for sample in training_set {
            if sample.label < 0 || sample.label as usize >= num_classes {
                return Err(ClassifierError::LabelOutOfRange {
                    label: sample.label,
                    num_classes,
                });
            }
        }

        log::info!(
            "Training {} one-vs-all sub-problems on {} samples",
            num_classes,
            training_set.len()
        );

        // Sub-problems share nothing: each gets its own relabeled copy of
        // the training set and its own fresh model, so they can run on the
        // rayon pool and still collect in class-id order.
        let config = &self.config;
        let models = (0..num_classes)
            .into_par_iter()
            .map(|class_id| {
                let one_v_all: Vec<Sample> = training_set
                    .iter()
                    .map(|sample| {
                        let label = if sample.label as usize == class_id { 1 } else { -1 };
                        Sample::new(sample.factors.clone(), label)
                    })
                    .collect();

                let mut model = M::new(config);
                model.fit(&one_v_all)?;
                log::debug!("Fitted {} sub-model for class id {}", model.name(), class_id);
                Ok(model)
            })
            .collect::<Result<Vec<M>>>()?;

        self.models = models;
        Ok(())
    }

    /// Arg-max of the per-class raw scores.
    ///
    /// The comparison against the best score so far is strict, so equal
    /// scores resolve to the lowest class id.
    pub fn predict_class(&self, sample: &Sample) -> Result<usize> {
        if self.num_ids == 0 {
            return Err(ClassifierError::NoRegisteredClasses);
        }
        if self.models.is_empty() {
            return Err(ClassifierError::UntrainedModel);
        }

        let mut best_class = 0;
        let mut best_score = f32::NEG_INFINITY;
        for (class_id, model) in self.models.iter().enumerate() {
            let z = model.score(sample)?;
            if z > best_score {
                best_score = z;
                best_class = class_id;
            }
        }
        Ok(best_class)
    }
}
