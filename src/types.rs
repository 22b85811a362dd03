//! Core input types for the bootstrap comparison engine.

use crate::error::Error;

/// A validated, index-aligned pair of ground-truth labels and predicted
/// scores for one model on one holdout set.
///
/// `labels[i]` is the ground truth for the sample whose predicted
/// probability is `scores[i]`; `true` marks the positive class. Construction
/// enforces the alignment precondition (equal, nonzero lengths) once, so the
/// sampler and metrics can assume it.
///
/// The data is borrowed, not copied: both models under comparison share the
/// same label slice.
#[derive(Debug, Clone, Copy)]
pub struct EvalData<'a> {
    labels: &'a [bool],
    scores: &'a [f64],
}

impl<'a> EvalData<'a> {
    /// Validate and wrap a label/score pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either slice is empty or the
    /// lengths differ.
    pub fn new(labels: &'a [bool], scores: &'a [f64]) -> Result<Self, Error> {
        if labels.is_empty() || scores.is_empty() {
            return Err(Error::invalid("labels and scores must be non-empty"));
        }
        if labels.len() != scores.len() {
            return Err(Error::invalid(format!(
                "labels ({}) and scores ({}) must have the same length",
                labels.len(),
                scores.len()
            )));
        }
        Ok(Self { labels, scores })
    }

    /// Ground-truth labels, `true` = positive class.
    pub fn labels(&self) -> &'a [bool] {
        self.labels
    }

    /// Predicted probabilities, index-aligned with the labels.
    pub fn scores(&self) -> &'a [f64] {
        self.scores
    }

    /// Number of samples N.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`: construction rejects empty inputs.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Policy for bootstrap rounds whose resample contains only one class.
///
/// Rank-based discrimination metrics (ROC AUC, average precision) are
/// undefined without both classes present, and an N-out-of-N resample of a
/// heavily imbalanced holdout can drop the minority class entirely. The
/// policy is applied uniformly to every round and is part of the sampler
/// configuration, since it affects the shape of the output distribution and
/// the comparator's effective sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Redraw the round with fresh indices until a valid resample is
    /// obtained, up to `max_attempts` draws total. Exhausting the cap fails
    /// the run with [`Error::DegenerateResample`], guaranteeing termination.
    ///
    /// This is the default (cap 100) and preserves the exact-length output
    /// invariant: every round contributes exactly one finite value.
    Redraw {
        /// Maximum draws per round, including the first. Must be positive.
        max_attempts: usize,
    },

    /// Record `f64::NAN` for the round. The sentinel stays in the output
    /// sequence (so its length still equals the iteration count) but is
    /// excluded from every aggregation path: mean, variance, deciles, and
    /// the comparator's input.
    Sentinel,

    /// Abort the whole run with [`Error::DegenerateResample`] on the first
    /// degenerate draw. The caller decides whether that is fatal.
    Propagate,
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        DegeneratePolicy::Redraw { max_attempts: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_aligned_pair() {
        let labels = [true, false, true];
        let scores = [0.9, 0.2, 0.7];
        let data = EvalData::new(&labels, &scores).unwrap();
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
    }

    #[test]
    fn new_rejects_empty() {
        let err = EvalData::new(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let labels = [true, false];
        let scores = [0.9, 0.2, 0.7];
        let err = EvalData::new(&labels, &scores).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn default_policy_is_capped_redraw() {
        assert_eq!(
            DegeneratePolicy::default(),
            DegeneratePolicy::Redraw { max_attempts: 100 }
        );
    }
}
