//! Configuration for the bootstrap metric sampler.

use crate::error::Error;
use crate::types::DegeneratePolicy;

/// Configuration options for [`bootstrap_metric`](crate::bootstrap_metric).
///
/// All configuration is passed explicitly at call time; the sampler reads no
/// globals and no environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapConfig {
    /// Number of bootstrap rounds. Each round contributes exactly one value
    /// to the output distribution. Must be positive. Default: 1000.
    pub iterations: usize,

    /// Base seed for the resampling RNG.
    ///
    /// When set, the output distribution is bit-identical across runs on the
    /// same inputs, serial or parallel: every round derives its own RNG
    /// stream from `(seed, round)`, so thread scheduling cannot affect the
    /// result. When `None`, one base seed is drawn from OS entropy and the
    /// same per-round scheme is applied. Default: `None`.
    pub seed: Option<u64>,

    /// Handling of single-class resamples. Default: redraw with a cap of
    /// 100 attempts per round. See [`DegeneratePolicy`].
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl BootstrapConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap rounds.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the base RNG seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the degenerate-resample policy.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Check that all settings are in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a zero iteration count or a zero
    /// redraw cap.
    pub fn validate(&self) -> Result<(), Error> {
        if self.iterations == 0 {
            return Err(Error::invalid("iterations must be positive"));
        }
        if let DegeneratePolicy::Redraw { max_attempts: 0 } = self.degenerate_policy {
            return Err(Error::invalid("redraw cap must be positive"));
        }
        Ok(())
    }
}
