//! Descriptive statistics for training reports.

pub mod descriptive;

pub use descriptive::DescriptiveStats;
