//! Statistical core: bootstrap resampling and distribution summaries.
//!
//! - N-out-of-N bootstrap of an injectable metric with per-round seeded
//!   RNG streams (deterministic under a fixed seed, serial or parallel)
//! - Online mean/variance via Welford's algorithm
//! - Type 2 quantiles for reporting

mod bootstrap;
mod summary;

pub use bootstrap::bootstrap_metric;
pub use summary::{MetricDistribution, OnlineStats};
