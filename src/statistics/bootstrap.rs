//! Bootstrap metric sampler.
//!
//! Draws N-out-of-N resamples with replacement from a label/score pair,
//! applies an injectable discrimination metric to each resample, and
//! collects the empirical distribution of metric values.
//!
//! Rounds are fully independent: each derives its own RNG stream from the
//! base seed and its round index, so the output is bit-identical for a given
//! seed whether the loop runs serially or (with the `parallel` feature) on a
//! rayon thread pool.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::BootstrapConfig;
use crate::error::Error;
use crate::statistics::summary::MetricDistribution;
use crate::types::{DegeneratePolicy, EvalData};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mix a base seed with a round counter into a well-distributed stream seed.
///
/// SplitMix64 finalizer over `base ^ (round · golden_gamma)`. Adjacent round
/// indices produce statistically independent Xoshiro256++ seeds, which is
/// what makes per-round streams safe.
#[inline]
fn round_seed(base: u64, round: u64) -> u64 {
    let mut z = base ^ round.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Fill the scratch buffers with one resample drawn with replacement.
#[inline]
fn resample_into(
    data: EvalData<'_>,
    rng: &mut Xoshiro256PlusPlus,
    labels: &mut [bool],
    scores: &mut [f64],
) {
    let src_labels = data.labels();
    let src_scores = data.scores();
    let n = src_labels.len();
    for (label, score) in labels.iter_mut().zip(scores.iter_mut()) {
        let j = rng.random_range(0..n);
        *label = src_labels[j];
        *score = src_scores[j];
    }
}

/// Run one bootstrap round: resample, evaluate the metric, apply the
/// degenerate policy. Returns the round's scalar (possibly a NaN sentinel).
fn run_round<F>(
    data: EvalData<'_>,
    metric: &F,
    policy: DegeneratePolicy,
    base_seed: u64,
    round: usize,
    labels: &mut [bool],
    scores: &mut [f64],
) -> Result<f64, Error>
where
    F: Fn(&[bool], &[f64]) -> Result<f64, Error>,
{
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(round_seed(base_seed, round as u64));
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        resample_into(data, &mut rng, labels, scores);
        match metric(labels, scores) {
            Ok(value) => return Ok(value),
            Err(Error::SingleClass) => match policy {
                DegeneratePolicy::Sentinel => return Ok(f64::NAN),
                DegeneratePolicy::Propagate => {
                    return Err(Error::DegenerateResample { round, attempts })
                }
                DegeneratePolicy::Redraw { max_attempts } => {
                    if attempts >= max_attempts {
                        return Err(Error::DegenerateResample { round, attempts });
                    }
                    // Continue on the same round stream; the retry draws
                    // are part of this round's RNG consumption, so the run
                    // stays reproducible.
                }
            },
            // Any other metric failure propagates unmodified. Masking it
            // would silently corrupt the statistical result.
            Err(e) => return Err(e),
        }
    }
}

/// Build the empirical bootstrap distribution of a metric.
///
/// For each of `config.iterations` rounds, draws `data.len()` indices
/// uniformly with replacement, forms the resampled label and score
/// subsequences (duplicates preserved), and applies `metric` to them. The
/// returned distribution has exactly `config.iterations` entries; under
/// [`DegeneratePolicy::Sentinel`] some of them may be NaN sentinels.
///
/// Pure function of the inputs and the seed: with `config.seed` set, the
/// output is bit-identical across runs, thread counts, and the
/// serial/parallel loop variants.
///
/// # Errors
///
/// - [`Error::InvalidInput`] from [`BootstrapConfig::validate`].
/// - [`Error::DegenerateResample`] per the configured policy.
/// - Any other error the metric returns, unmodified.
///
/// # Example
///
/// ```
/// use aucboot::{bootstrap_metric, BootstrapConfig, EvalData};
///
/// let labels = [true, true, false, false, true, false];
/// let scores = [0.9, 0.8, 0.3, 0.2, 0.7, 0.4];
/// let data = EvalData::new(&labels, &scores)?;
///
/// let config = BootstrapConfig::new().iterations(200).seed(7);
/// let dist = bootstrap_metric(data, aucboot::roc_auc, &config)?;
/// assert_eq!(dist.len(), 200);
/// # Ok::<(), aucboot::Error>(())
/// ```
pub fn bootstrap_metric<F>(
    data: EvalData<'_>,
    metric: F,
    config: &BootstrapConfig,
) -> Result<MetricDistribution, Error>
where
    F: Fn(&[bool], &[f64]) -> Result<f64, Error> + Sync,
{
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let n = data.len();
    let policy = config.degenerate_policy;

    #[cfg(feature = "parallel")]
    let values: Result<Vec<f64>, Error> = (0..config.iterations)
        .into_par_iter()
        .map_init(
            // Per-thread scratch buffers, reused across rounds.
            || (vec![false; n], vec![0.0f64; n]),
            |(labels, scores), round| {
                run_round(data, &metric, policy, base_seed, round, labels, scores)
            },
        )
        .collect();

    #[cfg(not(feature = "parallel"))]
    let values: Result<Vec<f64>, Error> = {
        let mut labels = vec![false; n];
        let mut scores = vec![0.0f64; n];
        let mut out = Vec::with_capacity(config.iterations);
        for round in 0..config.iterations {
            out.push(run_round(
                data,
                &metric,
                policy,
                base_seed,
                round,
                &mut labels,
                &mut scores,
            )?);
        }
        Ok(out)
    };

    Ok(MetricDistribution::from_values(values?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_seeds_are_distinct() {
        let base = 42;
        let seeds: Vec<u64> = (0..1000).map(|r| round_seed(base, r)).collect();
        let mut sorted = seeds.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), seeds.len());
    }

    #[test]
    fn round_seed_depends_on_base() {
        assert_ne!(round_seed(1, 0), round_seed(2, 0));
    }

    #[test]
    fn resample_preserves_length_and_membership() {
        let labels = [true, false, true, false, false];
        let scores = [0.9, 0.1, 0.8, 0.2, 0.3];
        let data = EvalData::new(&labels, &scores).unwrap();

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut label_buf = vec![false; 5];
        let mut score_buf = vec![0.0; 5];
        resample_into(data, &mut rng, &mut label_buf, &mut score_buf);

        assert_eq!(label_buf.len(), 5);
        for (&l, &s) in label_buf.iter().zip(score_buf.iter()) {
            // Every resampled pair must be one of the source pairs.
            assert!(labels
                .iter()
                .zip(scores.iter())
                .any(|(&sl, &ss)| sl == l && ss == s));
        }
    }

    #[test]
    fn metric_errors_other_than_single_class_propagate() {
        let labels = [true, false, true, false];
        let scores = [0.9, 0.1, 0.8, 0.2];
        let data = EvalData::new(&labels, &scores).unwrap();
        let config = BootstrapConfig::new().iterations(10).seed(1);

        let failing =
            |_: &[bool], _: &[f64]| Err::<f64, _>(Error::invalid("metric exploded"));
        let err = bootstrap_metric(data, failing, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
