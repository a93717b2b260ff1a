//! HFSS variation strings

use crate::sweep::Combination;

/// `Name1='value1unit1' Name2='value2unit2'`, in combination order.
///
/// HFSS compares this text against the variations it has solved, so values
/// go through the shared formatter.
pub fn variation_string(combination: &Combination<'_>) -> String {
    combination
        .iter()
        .map(|assignment| format!("{}='{}'", assignment.name(), assignment.literal()))
        .collect::<Vec<_>>()
        .join(" ")
}
