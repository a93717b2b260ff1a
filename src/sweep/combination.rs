//! Cartesian product of enumerated variables

use crate::config::SweepVariable;
use crate::format::value_literal;

/// A variable together with its enumerated values
#[derive(Debug, Clone, PartialEq)]
pub struct SweepAxis<'a> {
    pub variable: &'a SweepVariable,
    pub values: Vec<f64>,
}

impl<'a> SweepAxis<'a> {
    pub fn new(variable: &'a SweepVariable, values: Vec<f64>) -> Self {
        Self { variable, values }
    }
}

/// One variable set to one value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'a> {
    pub variable: &'a SweepVariable,
    pub value: f64,
}

impl Assignment<'_> {
    pub fn name(&self) -> &str {
        &self.variable.name
    }

    pub fn units(&self) -> &str {
        &self.variable.units
    }

    /// Value as HFSS expects it, e.g. `10mm`
    pub fn literal(&self) -> String {
        value_literal(self.value, self.variable.precision(), self.units())
    }
}

/// One point of the sweep, assignments in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<'a> {
    assignments: Vec<Assignment<'a>>,
}

impl<'a> Combination<'a> {
    pub fn new(assignments: Vec<Assignment<'a>>) -> Self {
        Self { assignments }
    }

    pub fn assignments(&self) -> &[Assignment<'a>] {
        &self.assignments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment<'a>> {
        self.assignments.iter()
    }

    /// Value assigned to `name`, if the variable is part of this combination
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.assignments
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.value)
    }
}

/// Product of the axis lengths, `None` on overflow
pub fn combination_count(axes: &[SweepAxis<'_>]) -> Option<usize> {
    axes.iter()
        .try_fold(1usize, |acc, axis| acc.checked_mul(axis.values.len()))
}

/// Expand axes into every combination.
///
/// The last axis varies fastest, like the innermost of nested loops. No axes,
/// or any axis without values, yields no combinations.
pub fn expand<'a>(axes: &[SweepAxis<'a>]) -> Vec<Combination<'a>> {
    if axes.is_empty() || axes.iter().any(|axis| axis.values.is_empty()) {
        return Vec::new();
    }

    let total = combination_count(axes).unwrap_or(0);
    let mut combinations = Vec::with_capacity(total);
    let mut indices = vec![0usize; axes.len()];

    loop {
        let assignments = axes
            .iter()
            .zip(&indices)
            .map(|(axis, &i)| Assignment {
                variable: axis.variable,
                value: axis.values[i],
            })
            .collect();
        combinations.push(Combination::new(assignments));

        // Odometer increment, rightmost digit first
        let mut position = axes.len();
        loop {
            if position == 0 {
                return combinations;
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < axes[position].values.len() {
                break;
            }
            indices[position] = 0;
        }
    }
}
