//! Two-sample t-test over bootstrap metric distributions.

use std::fmt;

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::Error;
use crate::statistics::MetricDistribution;

/// Which two-sample t-test variant to run.
///
/// Bootstrap distributions from two different models need not have equal
/// spread, so Welch is the default; Student's pooled-variance test is
/// available only by explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    /// Welch's unequal-variance t-test (default).
    Welch,
    /// Student's pooled-variance t-test.
    Student,
}

/// Outcome of comparing two metric distributions.
///
/// The comparator only reports; the caller decides significance against
/// their own threshold, e.g. `result.p_value < 0.05` or
/// [`significant_at`](Self::significant_at).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// t statistic. Positive when distribution A has the larger mean.
    pub statistic: f64,
    /// Two-sided p-value under the null hypothesis of equal means.
    pub p_value: f64,
    /// Degrees of freedom (Welch–Satterthwaite or pooled).
    pub df: f64,
    /// Mean of distribution A (finite values only).
    pub mean_a: f64,
    /// Mean of distribution B (finite values only).
    pub mean_b: f64,
    /// Unbiased variance of distribution A.
    pub var_a: f64,
    /// Unbiased variance of distribution B.
    pub var_b: f64,
    /// Effective (finite-value) sample count of distribution A.
    pub n_a: usize,
    /// Effective (finite-value) sample count of distribution B.
    pub n_b: usize,
    /// Which test variant produced the result.
    pub test: TestKind,
}

impl ComparisonResult {
    /// Whether the means differ at significance level `alpha`.
    pub fn significant_at(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.test {
            TestKind::Welch => "Welch",
            TestKind::Student => "Student",
        };
        write!(
            f,
            "{} t-test: t = {:.4}, p = {:.3e}, df = {:.1}; mean A = {:.4} (n = {}), mean B = {:.4} (n = {})",
            name, self.statistic, self.p_value, self.df, self.mean_a, self.n_a, self.mean_b, self.n_b
        )
    }
}

/// Mean, variance, and count of one side's finite values.
fn summarize(dist: &MetricDistribution, side: &str) -> Result<(f64, f64, f64), Error> {
    let stats = dist.stats();
    if stats.count() < 2 {
        return Err(Error::invalid(format!(
            "distribution {} needs at least 2 finite values, got {}",
            side,
            stats.count()
        )));
    }
    // count >= 2 guarantees both are Some.
    let mean = stats.mean().unwrap_or(0.0);
    let var = stats.variance().unwrap_or(0.0);
    Ok((mean, var, stats.count() as f64))
}

/// Compare two metric distributions with Welch's t-test.
///
/// Equivalent to [`compare_with`] with [`TestKind::Welch`]. Symmetric up to
/// the sign of the statistic: swapping `a` and `b` flips `statistic` and
/// leaves `p_value` unchanged. Sample sizes may differ.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either distribution holds fewer than
/// two finite values (an empty distribution included).
pub fn compare(
    a: &MetricDistribution,
    b: &MetricDistribution,
) -> Result<ComparisonResult, Error> {
    compare_with(a, b, TestKind::Welch)
}

/// Compare two metric distributions with an explicit test variant.
///
/// See [`compare`] for the contract; [`TestKind::Student`] pools the two
/// variances and should only be chosen when equal spread is a justified
/// assumption.
pub fn compare_with(
    a: &MetricDistribution,
    b: &MetricDistribution,
    test: TestKind,
) -> Result<ComparisonResult, Error> {
    let (mean_a, var_a, n_a) = summarize(a, "A")?;
    let (mean_b, var_b, n_b) = summarize(b, "B")?;

    let (se2, df) = match test {
        TestKind::Welch => {
            let se2 = var_a / n_a + var_b / n_b;
            // Welch–Satterthwaite degrees of freedom.
            let df = if se2 > 0.0 {
                se2 * se2
                    / ((var_a / n_a).powi(2) / (n_a - 1.0)
                        + (var_b / n_b).powi(2) / (n_b - 1.0))
            } else {
                n_a + n_b - 2.0
            };
            (se2, df)
        }
        TestKind::Student => {
            let df = n_a + n_b - 2.0;
            let pooled = ((n_a - 1.0) * var_a + (n_b - 1.0) * var_b) / df;
            (pooled * (1.0 / n_a + 1.0 / n_b), df)
        }
    };

    let diff = mean_a - mean_b;
    let (statistic, p_value) = if se2 > 0.0 {
        let t = diff / se2.sqrt();
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| Error::invalid(format!("t distribution with df {}: {}", df, e)))?;
        (t, 2.0 * dist.cdf(-t.abs()))
    } else if diff == 0.0 {
        // Both sides constant and equal: no evidence of a difference.
        (0.0, 1.0)
    } else {
        // Both sides constant but different: the difference is exact.
        (f64::INFINITY.copysign(diff), 0.0)
    };

    Ok(ComparisonResult {
        statistic,
        p_value,
        df,
        mean_a,
        mean_b,
        var_a,
        var_b,
        n_a: n_a as usize,
        n_b: n_b as usize,
        test,
    })
}
