//! Sweep expansion
//!
//! Turns the declared variables into the full, ordered list of combinations.

mod combination;
mod range;

pub use combination::{combination_count, expand, Assignment, Combination, SweepAxis};
pub use range::{enumerate, RangeEnumerator};

use crate::config::SweepVariable;
use crate::error::{ConfigError, SweepgenError};
use crate::limits::SweepLimits;
use tracing::debug;

/// Every combination of a set of variables
#[derive(Debug, Clone)]
pub struct Sweep<'a> {
    axes: Vec<SweepAxis<'a>>,
    combinations: Vec<Combination<'a>>,
}

impl<'a> Sweep<'a> {
    /// Enumerate each variable and expand the product, enforcing `limits`
    pub fn build(variables: &'a [SweepVariable], limits: &SweepLimits) -> Result<Self, SweepgenError> {
        let enumerator = RangeEnumerator::new(limits.max_values_per_variable);

        let axes = variables
            .iter()
            .map(|variable| -> Result<SweepAxis<'a>, SweepgenError> {
                let values = enumerator.enumerate(variable)?;
                debug!(variable = %variable.name, values = values.len(), "enumerated range");
                Ok(SweepAxis::new(variable, values))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = combination_count(&axes).unwrap_or(usize::MAX);
        if count > limits.max_combinations {
            return Err(ConfigError::TooManyCombinations {
                count,
                limit: limits.max_combinations,
            }
            .into());
        }

        let combinations = expand(&axes);
        debug!(combinations = combinations.len(), "expanded sweep");

        Ok(Self { axes, combinations })
    }

    pub fn axes(&self) -> &[SweepAxis<'a>] {
        &self.axes
    }

    pub fn combinations(&self) -> &[Combination<'a>] {
        &self.combinations
    }

    /// Number of combinations, the product of every axis length
    pub fn total(&self) -> usize {
        self.combinations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;

    #[test]
    fn build_default_sweep() {
        let variables = vec![
            SweepVariable::new("L_ant", 10.0, 20.0, 2.0, "mm"),
            SweepVariable::new("W_sub", 1.0, 3.0, 1.0, "mm"),
        ];
        let sweep = Sweep::build(&variables, &SweepLimits::default()).unwrap();

        assert_eq!(sweep.axes().len(), 2);
        assert_eq!(sweep.total(), 18);
        let product: usize = sweep.axes().iter().map(|a| a.values.len()).product();
        assert_eq!(sweep.total(), product);
    }

    #[test]
    fn range_errors_propagate() {
        let variables = vec![SweepVariable::new("L", 1.0, 5.0, -1.0, "mm")];
        let err = Sweep::build(&variables, &SweepLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            SweepgenError::Range(RangeError::Divergent { .. })
        ));
    }

    #[test]
    fn combination_limit_is_enforced() {
        let variables = vec![
            SweepVariable::new("A", 1.0, 20.0, 1.0, ""),
            SweepVariable::new("B", 1.0, 20.0, 1.0, ""),
        ];
        let err = Sweep::build(&variables, &SweepLimits::testing()).unwrap_err();
        assert!(matches!(
            err,
            SweepgenError::Config(ConfigError::TooManyCombinations { count: 400, limit: 100 })
        ));
    }
}
