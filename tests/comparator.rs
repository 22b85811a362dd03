//! Integration tests for the distribution comparator:
//! symmetry, sensitivity, null behavior, unequal sample sizes, and
//! precondition enforcement.

use aucboot::{compare, compare_with, Error, MetricDistribution, TestKind};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Draw `n` values from N(mean, sd) with a fixed seed.
fn normal_sample(mean: f64, sd: f64, n: usize, seed: u64) -> MetricDistribution {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let normal = Normal::new(mean, sd).unwrap();
    MetricDistribution::from_values((0..n).map(|_| normal.sample(&mut rng)).collect())
}

// ============================================================================
// Sensitivity and null behavior
// ============================================================================

#[test]
fn clearly_separated_means_are_significant() {
    let a = normal_sample(0.6, 0.02, 1000, 1);
    let b = normal_sample(0.9, 0.02, 1000, 2);
    let result = compare(&a, &b).unwrap();

    assert!(result.p_value < 0.001, "p = {}", result.p_value);
    assert!(result.statistic < 0.0, "A has the smaller mean");
    assert!(result.significant_at(0.001));
}

#[test]
fn identical_sample_reordered_is_not_significant() {
    // Same multiset of values on both sides: t is exactly zero.
    let a = normal_sample(0.75, 0.05, 1000, 42);
    let mut reversed = a.values().to_vec();
    reversed.reverse();
    let b = MetricDistribution::from_values(reversed);

    let result = compare(&a, &b).unwrap();
    assert!(result.statistic.abs() < 1e-12);
    assert!((result.p_value - 1.0).abs() < 1e-9);
}

#[test]
fn same_generator_is_rarely_significant() {
    // Independent draws from one distribution: at alpha = 0.05 roughly one
    // trial in twenty is a false positive, so the large majority must pass.
    let mut non_significant = 0;
    for trial in 0..20u64 {
        let a = normal_sample(0.75, 0.05, 1000, trial);
        let b = normal_sample(0.75, 0.05, 1000, 1000 + trial);
        if compare(&a, &b).unwrap().p_value > 0.05 {
            non_significant += 1;
        }
    }
    assert!(
        non_significant >= 15,
        "only {}/20 null trials were non-significant",
        non_significant
    );
}

// ============================================================================
// Symmetry and reference values
// ============================================================================

#[test]
fn swapping_sides_flips_statistic_and_keeps_p() {
    let a = normal_sample(0.6, 0.03, 800, 5);
    let b = normal_sample(0.65, 0.04, 600, 6);

    let ab = compare(&a, &b).unwrap();
    let ba = compare(&b, &a).unwrap();

    assert!((ab.statistic + ba.statistic).abs() < 1e-9);
    assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    assert!((ab.mean_a - ba.mean_b).abs() < 1e-12);
    assert!((ab.df - ba.df).abs() < 1e-9);
}

#[test]
fn welch_handles_unequal_sizes_and_spreads() {
    let a = normal_sample(0.70, 0.02, 1000, 10);
    let b = normal_sample(0.70, 0.08, 400, 11);

    let result = compare(&a, &b).unwrap();
    assert_eq!(result.n_a, 1000);
    assert_eq!(result.n_b, 400);
    // Welch df is dominated by the noisier, smaller side.
    assert!(result.df < 1398.0);
    assert!(result.df > 1.0);
}

#[test]
fn student_variant_is_explicit_opt_in() {
    let a = normal_sample(0.7, 0.05, 500, 20);
    let b = normal_sample(0.7, 0.05, 500, 21);

    let welch = compare(&a, &b).unwrap();
    let student = compare_with(&a, &b, TestKind::Student).unwrap();

    assert_eq!(welch.test, TestKind::Welch);
    assert_eq!(student.test, TestKind::Student);
    assert!((student.df - 998.0).abs() < 1e-12);
    // Near-equal variances: the two variants agree closely.
    assert!((welch.statistic - student.statistic).abs() < 1e-6);
}

// ============================================================================
// Precondition enforcement
// ============================================================================

#[test]
fn empty_distribution_rejected() {
    let a = MetricDistribution::from_values(vec![]);
    let b = normal_sample(0.75, 0.05, 100, 1);
    assert!(matches!(
        compare(&a, &b).unwrap_err(),
        Error::InvalidInput { .. }
    ));
    assert!(matches!(
        compare(&b, &a).unwrap_err(),
        Error::InvalidInput { .. }
    ));
}

#[test]
fn all_sentinel_distribution_rejected() {
    let a = MetricDistribution::from_values(vec![f64::NAN; 50]);
    let b = normal_sample(0.75, 0.05, 100, 1);
    assert!(compare(&a, &b).is_err());
}
