//! Binary discrimination metrics.
//!
//! Plain functions with the signature the sampler expects, so any of them
//! (or a caller-supplied closure) can be injected as the bootstrap metric.
//! Semantics match the sklearn reference implementations, including tie
//! handling; the unit tests pin values computed with sklearn 1.4.
//!
//! Both metrics require both classes to be present and report
//! [`Error::SingleClass`] otherwise. That is the signal the sampler's
//! degenerate-resample policy intercepts.

use crate::error::Error;

/// Debug assertion that all scores are finite.
///
/// NaN scores would silently distort the ranking; their presence indicates
/// invalid upstream data, not a condition to recover from.
#[inline]
fn debug_assert_finite(scores: &[f64]) {
    debug_assert!(
        scores.iter().all(|s| s.is_finite()),
        "scores must be finite (no NaN or infinity)"
    );
}

#[inline]
fn check_aligned(labels: &[bool], scores: &[f64]) -> Result<(), Error> {
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
    Ok(())
}

/// Area under the ROC curve via the Mann–Whitney U statistic.
///
/// Equivalent to the probability that a uniformly chosen positive sample is
/// scored higher than a uniformly chosen negative one, with ties counting
/// one half. Tied scores are handled with midranks, which makes the result
/// identical to `sklearn.metrics.roc_auc_score` (trapezoidal rule over the
/// ROC curve).
///
/// Runs in O(n log n) for the rank sort.
///
/// # Errors
///
/// - [`Error::InvalidInput`] on empty or mismatched-length inputs.
/// - [`Error::SingleClass`] when all labels are positive or all negative.
pub fn roc_auc(labels: &[bool], scores: &[f64]) -> Result<f64, Error> {
    check_aligned(labels, scores)?;
    debug_assert_finite(scores);

    let n = labels.len();
    let n_pos = labels.iter().filter(|&&l| l).count();
    let n_neg = n - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(Error::SingleClass);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    // Sum of midranks over the positive class. Each tie group [i, j) of
    // equal scores shares the average of its 1-based ranks, (i + j + 1) / 2.
    let mut rank_sum = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && scores[order[j]] == scores[order[i]] {
            j += 1;
        }
        let midrank = (i + j + 1) as f64 / 2.0;
        for &idx in &order[i..j] {
            if labels[idx] {
                rank_sum += midrank;
            }
        }
        i = j;
    }

    let u = rank_sum - (n_pos * (n_pos + 1)) as f64 / 2.0;
    Ok(u / (n_pos as f64 * n_neg as f64))
}

/// Average precision: the mean of precisions at each recall step.
///
/// Computes `AP = Σ (Rᵢ - Rᵢ₋₁) · Pᵢ` over the distinct score thresholds in
/// descending order, matching `sklearn.metrics.average_precision_score`
/// (a step-function summary of the precision-recall curve, without
/// interpolation).
///
/// # Errors
///
/// - [`Error::InvalidInput`] on empty or mismatched-length inputs.
/// - [`Error::SingleClass`] when all labels are positive or all negative,
///   keeping the degenerate-resample contract consistent with [`roc_auc`].
pub fn average_precision(labels: &[bool], scores: &[f64]) -> Result<f64, Error> {
    check_aligned(labels, scores)?;
    debug_assert_finite(scores);

    let n = labels.len();
    let n_pos = labels.iter().filter(|&&l| l).count();
    if n_pos == 0 || n_pos == n {
        return Err(Error::SingleClass);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut prev_recall = 0.0;
    let mut ap = 0.0;
    let mut i = 0;
    while i < n {
        // Advance over one threshold: all samples sharing this score.
        let mut j = i + 1;
        while j < n && scores[order[j]] == scores[order[i]] {
            j += 1;
        }
        for &idx in &order[i..j] {
            if labels[idx] {
                tp += 1;
            } else {
                fp += 1;
            }
        }
        let precision = tp as f64 / (tp + fp) as f64;
        let recall = tp as f64 / n_pos as f64;
        ap += (recall - prev_recall) * precision;
        prev_recall = recall;
        i = j;
    }

    Ok(ap)
}
