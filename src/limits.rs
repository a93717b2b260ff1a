//! Generation limits
//!
//! Caps on how large a sweep the engine will materialise. A mistyped step
//! (0.0001 instead of 0.1) would otherwise produce a script with millions of
//! lines.

/// Default cap on values produced for a single variable
pub const MAX_VALUES_PER_VARIABLE: usize = 10_000;

/// Default cap on the total number of combinations
pub const MAX_COMBINATIONS: usize = 100_000;

/// Limits applied while expanding a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepLimits {
    /// Maximum values a single variable may expand to
    pub max_values_per_variable: usize,

    /// Maximum size of the Cartesian product
    pub max_combinations: usize,
}

impl Default for SweepLimits {
    fn default() -> Self {
        Self {
            max_values_per_variable: MAX_VALUES_PER_VARIABLE,
            max_combinations: MAX_COMBINATIONS,
        }
    }
}

impl SweepLimits {
    /// Tight limits for tests
    pub fn testing() -> Self {
        Self {
            max_values_per_variable: 50,
            max_combinations: 100,
        }
    }
}
