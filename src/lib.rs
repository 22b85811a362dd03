//! # aucboot
//!
//! Bootstrap significance testing for binary classifier metrics.
//!
//! Given ground-truth labels and the predicted scores of two pre-trained
//! models on the same holdout set, this crate answers one question: does one
//! model discriminate significantly better than the other? It does so with
//! two composable pieces:
//!
//! - **Sampler** ([`bootstrap_metric`]): repeatedly resamples the holdout
//!   with replacement, computes a discrimination metric (ROC AUC by
//!   convention, but any `Fn(&[bool], &[f64]) -> Result<f64, Error>` works)
//!   on each resample, and returns the empirical [`MetricDistribution`].
//! - **Comparator** ([`compare`]): Welch's two-sample t-test over two such
//!   distributions, reporting the statistic and two-sided p-value. The
//!   caller applies their own significance threshold.
//!
//! Model inference, feature I/O, label encoding, and plotting are external
//! collaborators: the crate consumes aligned `&[bool]` / `&[f64]` slices and
//! produces plain result records.
//!
//! ## Reproducibility
//!
//! Every bootstrap round derives its own RNG stream from the configured base
//! seed and the round index, so a seeded run is bit-identical across
//! processes and thread counts. The `parallel` feature distributes rounds
//! over a rayon pool without changing the output.
//!
//! ## Quick Start
//!
//! ```
//! use aucboot::{bootstrap_metric, compare, roc_auc, BootstrapConfig, EvalData};
//!
//! // Shared holdout labels, one score vector per model.
//! let labels = [true, true, true, false, false, false];
//! let scores_a = [0.9, 0.8, 0.6, 0.3, 0.2, 0.4];
//! let scores_b = [0.7, 0.3, 0.9, 0.6, 0.1, 0.8];
//!
//! let config = BootstrapConfig::new().iterations(1000).seed(42);
//! let dist_a = bootstrap_metric(EvalData::new(&labels, &scores_a)?, roc_auc, &config)?;
//! let dist_b = bootstrap_metric(EvalData::new(&labels, &scores_b)?, roc_auc, &config)?;
//!
//! let result = compare(&dist_a, &dist_b)?;
//! println!("{}", result);
//! if result.significant_at(0.05) {
//!     println!("model A and model B differ significantly");
//! }
//! # Ok::<(), aucboot::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod types;

pub mod analysis;
pub mod metrics;
pub mod statistics;

pub use analysis::{compare, compare_with, ComparisonResult, TestKind};
pub use config::BootstrapConfig;
pub use error::Error;
pub use metrics::{average_precision, roc_auc};
pub use statistics::{bootstrap_metric, MetricDistribution, OnlineStats};
pub use types::{DegeneratePolicy, EvalData};
