//! Evaluation statistics over test partitions.

/// Fraction of positions where the predicted class id differs from the
/// true label.
///
/// Returns `None` when the inputs are empty or their lengths disagree.
pub fn misclassification_rate(predictions: &[usize], labels: &[i32]) -> Option<f32> {
    if predictions.is_empty() || predictions.len() != labels.len() {
        return None;
    }

    let misclassified = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(&predicted, &label)| predicted as i64 != label as i64)
        .count();

    Some(misclassified as f32 / predictions.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions_score_zero() {
        assert_eq!(misclassification_rate(&[0, 1, 2], &[0, 1, 2]), Some(0.0));
    }

    #[test]
    fn disjoint_predictions_score_one() {
        assert_eq!(misclassification_rate(&[1, 2, 0], &[0, 1, 2]), Some(1.0));
    }

    #[test]
    fn partial_misses_are_fractional() {
        assert_eq!(misclassification_rate(&[0, 1, 1, 1], &[0, 1, 2, 2]), Some(0.5));
    }

    #[test]
    fn empty_or_mismatched_input_is_none() {
        assert_eq!(misclassification_rate(&[], &[]), None);
        assert_eq!(misclassification_rate(&[0], &[0, 1]), None);
    }
}
