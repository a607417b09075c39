//! Fixed-point fallback formatting for values below the scaling threshold.

/// Formats `value` with exactly two fractional digits and `,` thousands
/// separators, e.g. `1234567.895` becomes `"1,234,567.90"`.
pub(crate) fn two_decimal_grouped(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (integer, fraction) = rendered.split_once('.').unwrap_or((&rendered, "00"));
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    let mut out = String::with_capacity(rendered.len() + digits.len() / 3);
    out.push_str(sign);
    let mut remaining = digits.len();
    for digit in digits.chars() {
        out.push(digit);
        remaining -= 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out.push('.');
    out.push_str(fraction);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_keep_their_three_digits() {
        assert_eq!(two_decimal_grouped(0.0), "0.00");
        assert_eq!(two_decimal_grouped(7.5), "7.50");
        assert_eq!(two_decimal_grouped(999.0), "999.00");
    }

    #[test]
    fn test_groups_of_three_from_the_right() {
        assert_eq!(two_decimal_grouped(1000.0), "1,000.00");
        assert_eq!(two_decimal_grouped(54321.0), "54,321.00");
        assert_eq!(two_decimal_grouped(999999.99), "999,999.99");
    }

    #[test]
    fn test_rounds_to_two_fractional_digits() {
        assert_eq!(two_decimal_grouped(1234567.891), "1,234,567.89");
        assert_eq!(two_decimal_grouped(7.456), "7.46");
    }

    #[test]
    fn test_negative_sign_precedes_the_first_group() {
        assert_eq!(two_decimal_grouped(-1234.5), "-1,234.50");
        assert_eq!(two_decimal_grouped(-0.25), "-0.25");
    }
}
