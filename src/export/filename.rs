//! Export filenames

use crate::format::{filename_numeral, sanitize_component};
use crate::sweep::Combination;

/// `{prefix}_{name}_{value}{units}...{extension}`.
///
/// Decimal points in values become `d` (`2.4` → `2d4`). With an empty prefix
/// the leading underscore is dropped.
pub fn compose_filename(
    combination: &Combination<'_>,
    prefix: &str,
    include_var_in_name: bool,
    extension: &str,
) -> String {
    let mut name = sanitize_component(prefix.trim());

    if include_var_in_name {
        for assignment in combination.iter() {
            if !name.is_empty() {
                name.push('_');
            }
            name.push_str(&sanitize_component(assignment.name()));
            name.push('_');
            name.push_str(&filename_numeral(assignment.value, assignment.variable.precision()));
            name.push_str(&sanitize_component(assignment.units()));
        }
    }

    name.push_str(extension);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SweepVariable;
    use crate::sweep::Assignment;

    #[test]
    fn decimal_point_becomes_d() {
        let l = SweepVariable::new("L", 2.4, 2.4, 1.0, "mm");
        let combination = Combination::new(vec![Assignment { variable: &l, value: 2.4 }]);
        assert_eq!(
            compose_filename(&combination, "Prefix", true, ".s2p"),
            "Prefix_L_2d4mm.s2p"
        );
    }

    #[test]
    fn multiple_variables_in_order() {
        let l = SweepVariable::new("L_ant", 10.0, 10.0, 1.0, "mm");
        let w = SweepVariable::new("W_sub", 1.5, 1.5, 1.0, "mm");
        let combination = Combination::new(vec![
            Assignment { variable: &l, value: 10.0 },
            Assignment { variable: &w, value: 1.5 },
        ]);
        assert_eq!(
            compose_filename(&combination, "Dipole", true, ".s4p"),
            "Dipole_L_ant_10mm_W_sub_1d5mm.s4p"
        );
    }

    #[test]
    fn values_omitted_when_disabled() {
        let l = SweepVariable::new("L", 2.4, 2.4, 1.0, "mm");
        let combination = Combination::new(vec![Assignment { variable: &l, value: 2.4 }]);
        assert_eq!(compose_filename(&combination, "Run", false, ".s2p"), "Run.s2p");
    }

    #[test]
    fn empty_prefix_has_no_leading_underscore() {
        let l = SweepVariable::new("L", 2.4, 2.4, 1.0, "mm");
        let combination = Combination::new(vec![Assignment { variable: &l, value: 2.4 }]);
        assert_eq!(compose_filename(&combination, "", true, ".s2p"), "L_2d4mm.s2p");
    }

    #[test]
    fn unsafe_characters_are_replaced() {
        let l = SweepVariable::new("L", 1.0, 1.0, 1.0, "mm");
        let combination = Combination::new(vec![Assignment { variable: &l, value: 1.0 }]);
        assert_eq!(
            compose_filename(&combination, "my run/v2", true, ".s2p"),
            "my_run_v2_L_1mm.s2p"
        );
    }
}
