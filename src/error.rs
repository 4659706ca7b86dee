//! Error types for dataset loading and integral store construction

use thiserror::Error;

/// Unified error type for the energy engine
///
/// All variants are fatal: they indicate that the input data cannot be
/// trusted, and the calculation aborts before any energy is produced.
/// Per-term skips inside the evaluators (degenerate MP2 denominators,
/// missing exchange partners) are not errors and never surface here.
#[derive(Error, Debug)]
pub enum EnergyError {
    /// The data provider failed to deliver a field or file.
    #[error("Failed to read dataset '{path}': {reason}")]
    DataSource { path: String, reason: String },

    /// An array length or index is inconsistent with the declared counts.
    #[error("Inconsistent data shape for {field}: expected {expected}, got {actual}")]
    DataShape {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Two stored integrals collapse onto one canonical key with
    /// materially different values.
    #[error("Conflicting values for symmetry-equivalent integral {key:?}: {first} vs {second}")]
    DataInconsistency {
        key: [usize; 4],
        first: f64,
        second: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EnergyError>;
