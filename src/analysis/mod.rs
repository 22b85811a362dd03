//! Hypothesis testing over metric distributions.

mod ttest;

pub use ttest::{compare, compare_with, ComparisonResult, TestKind};
