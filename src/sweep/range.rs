//! Range enumeration for a single variable

use crate::config::SweepVariable;
use crate::error::RangeError;
use crate::limits::MAX_VALUES_PER_VARIABLE;

/// Absorbs rounding so an exact endpoint (20 from 10 by 2) is always included
const EPSILON: f64 = 1e-9;

/// Expands `start..=stop` by `step` into concrete values
#[derive(Debug, Clone, Copy)]
pub struct RangeEnumerator {
    max_values: usize,
}

impl Default for RangeEnumerator {
    fn default() -> Self {
        Self::new(MAX_VALUES_PER_VARIABLE)
    }
}

impl RangeEnumerator {
    pub fn new(max_values: usize) -> Self {
        Self { max_values }
    }

    /// Values from start to stop inclusive.
    ///
    /// `start == stop` always yields `[start]`, whatever the step. Values are
    /// computed as `start + i * step` so error does not accumulate.
    pub fn enumerate(&self, variable: &SweepVariable) -> Result<Vec<f64>, RangeError> {
        let SweepVariable {
            name, start, stop, step, ..
        } = variable;
        let (start, stop, step) = (*start, *stop, *step);

        let non_finite = |field| RangeError::NonFinite {
            name: name.clone(),
            field,
        };
        if !start.is_finite() {
            return Err(non_finite("start"));
        }
        if !stop.is_finite() {
            return Err(non_finite("stop"));
        }
        if start == stop {
            return Ok(vec![start]);
        }
        if !step.is_finite() {
            return Err(non_finite("step"));
        }
        if step == 0.0 {
            return Err(RangeError::ZeroStep {
                name: name.clone(),
                start,
                stop,
            });
        }

        let span = stop - start;
        if span.signum() != step.signum() {
            return Err(RangeError::Divergent {
                name: name.clone(),
                start,
                stop,
                step,
            });
        }

        let steps = (span / step + EPSILON).floor();
        if steps >= self.max_values as f64 {
            return Err(RangeError::TooManyValues {
                name: name.clone(),
                count: if steps >= usize::MAX as f64 {
                    usize::MAX
                } else {
                    steps as usize + 1
                },
                limit: self.max_values,
            });
        }

        let count = steps as usize + 1;
        Ok((0..count).map(|i| start + i as f64 * step).collect())
    }
}

/// Enumerate with the default value limit
pub fn enumerate(variable: &SweepVariable) -> Result<Vec<f64>, RangeError> {
    RangeEnumerator::default().enumerate(variable)
}
