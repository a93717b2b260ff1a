//! Shared number and token formatting
//!
//! The variation string HFSS matches against and the exported filename are
//! both built from [`format_number`], so a value can never be spelled one
//! way in the solver request and another way on disk.

/// Fractional digits in the shortest exact spelling of `value` (`2.25` → 2)
pub fn decimals(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    value
        .abs()
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Render a value with at most `decimals` fractional digits.
///
/// `decimals` comes from the inputs a value was computed from, so
/// `0.1 + 0.2` with one decimal prints as `0.3` while `1e12 + 0.25` with two
/// keeps its fraction. Trailing zeros are trimmed and `-0` prints as `0`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{:.*}", decimals, value);
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// `10mm`, `0.5GHz`, or a bare `3` when `units` is empty
pub fn value_literal(value: f64, decimals: usize, units: &str) -> String {
    format!("{}{}", format_number(value, decimals), units)
}

/// Filename spelling of a value: every `.` becomes `d` (`2.4` → `2d4`)
pub fn filename_numeral(value: f64, decimals: usize) -> String {
    format_number(value, decimals).replace('.', "d")
}

/// Replace characters that are unsafe in file names with `_`
pub fn sanitize_component(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Quote `text` as a Python string literal
pub fn py_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_of_inputs() {
        assert_eq!(decimals(10.0), 0);
        assert_eq!(decimals(2.4), 1);
        assert_eq!(decimals(-0.25), 2);
        assert_eq!(decimals(1e-9), 9);
        assert_eq!(decimals(1e12 + 0.25), 2);
    }

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(format_number(10.0, 0), "10");
        assert_eq!(format_number(-3.0, 2), "-3");
        assert_eq!(format_number(0.0, 3), "0");
        assert_eq!(format_number(-0.0, 0), "0");
        assert_eq!(format_number(1500.0, 1), "1500");
    }

    #[test]
    fn float_noise_is_removed() {
        assert_eq!(format_number(0.1 + 0.2, 1), "0.3");
        assert_eq!(format_number(2.4, 1), "2.4");
        assert_eq!(format_number(1.0 + 7.0 * 0.1, 1), "1.7");
        assert_eq!(format_number(-0.25, 2), "-0.25");
    }

    #[test]
    fn large_values_keep_their_fraction() {
        assert_eq!(format_number(1e12, 2), "1000000000000");
        assert_eq!(format_number(1e12 + 0.25, 2), "1000000000000.25");
        assert_eq!(format_number(1e12 + 0.5, 2), "1000000000000.5");
    }

    #[test]
    fn small_values_keep_precision() {
        assert_eq!(format_number(0.000125, 6), "0.000125");
        assert_eq!(format_number(1e-9, 9), "0.000000001");
    }

    #[test]
    fn literals_and_numerals() {
        assert_eq!(value_literal(2.4, 1, "mm"), "2.4mm");
        assert_eq!(value_literal(3.0, 0, ""), "3");
        assert_eq!(filename_numeral(2.4, 1), "2d4");
        assert_eq!(filename_numeral(10.0, 1), "10");
        assert_eq!(filename_numeral(0.125, 3), "0d125");
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_component("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_component("my run"), "my_run");
        assert_eq!(sanitize_component("Dipole-v2"), "Dipole-v2");
    }

    #[test]
    fn python_literals_are_escaped() {
        assert_eq!(py_str("C:\\Temp"), "\"C:\\\\Temp\"");
        assert_eq!(py_str("L='1mm'"), "\"L='1mm'\"");
        assert_eq!(py_str("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
