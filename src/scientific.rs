//! Scientific-notation expansion and normalization.

use crate::{SCALING_THRESHOLD, StringifyError, fixed, split_sign};
use tracing::debug;

/// Mantissas whose exponent marker sits left of this column are zero-padded
/// until the marker reaches it.
const MARKER_PAD_COLUMN: usize = 5;

/// Expands mantissa-and-exponent text into a literal digit string, shifting
/// the decimal point into the exponent instead of rounding.
///
/// A leading `-` is consumed and **not** reattached: the result is always an
/// unsigned digit string. Callers that depend on the sign must capture it
/// before expanding.
///
/// # Examples
///
/// ```
/// use numscale::expand_scientific;
///
/// let expanded = expand_scientific("1.6E+28").unwrap();
/// assert_eq!(expanded, "16000000000000000000000000000");
///
/// assert!(expand_scientific("123456").is_err());
/// ```
pub fn expand_scientific(text: &str) -> Result<String, StringifyError> {
    let (mut digits, zeros) = expansion_parts(text)?;
    digits.push_str(&"0".repeat(zeros));
    Ok(digits)
}

/// Computes how many digit characters [`expand_scientific`] would return
/// for `text`, without materializing the zeros.
pub(crate) fn expanded_digit_count(text: &str) -> Result<usize, StringifyError> {
    let (digits, zeros) = expansion_parts(text)?;
    Ok(digits.chars().filter(|c| c.is_ascii_digit()).count() + zeros)
}

/// Splits exponential text into its concatenated mantissa digits and the
/// number of zeros its expansion appends.
fn expansion_parts(text: &str) -> Result<(String, usize), StringifyError> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);

    let Some((mantissa, exponent)) = unsigned.split_once(['E', 'e']) else {
        return Err(StringifyError::InvalidFormat {
            text: text.into(),
            reason: "no exponent marker",
        });
    };

    let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
    let mut exponent: i32 = exponent.parse().map_err(|_| StringifyError::InvalidFormat {
        text: text.into(),
        reason: "the exponent is not a valid integer",
    })?;

    let mut digits = String::with_capacity(mantissa.len());
    if let Some((integer, fraction)) = mantissa.split_once('.') {
        exponent -= fraction.len() as i32;
        digits.push_str(integer);
        digits.push_str(fraction);
    } else {
        digits.push_str(mantissa);
    }

    let Ok(zeros) = usize::try_from(exponent) else {
        return Err(StringifyError::InvalidFormat {
            text: text.into(),
            reason: "the expansion is not a whole number",
        });
    };

    Ok((digits, zeros))
}

/// Rewrites numeric text into the canonical `d.ddd e<exp>` form.
///
/// Text that does not parse as a number is returned unchanged, even when
/// it happens to contain an `e`.
pub(crate) fn normalize(text: &str) -> String {
    let Ok(value) = text.replace(',', "").parse::<f64>() else {
        debug!(%text, "not numeric, returning unchanged");
        return text.to_string();
    };

    if text.contains(['E', 'e']) {
        return canonicalize_exponential(text);
    }
    if value.abs() < SCALING_THRESHOLD {
        return fixed::two_decimal_grouped(value);
    }

    // An overflowing parse saturates to infinity rather than failing, so
    // text past `f64` range still reaches this digit path, which only
    // counts characters.
    let (sign, unsigned) = split_sign(text);
    let integer = unsigned.split_once('.').map_or(unsigned, |(integer, _)| integer);
    let digits: String = integer.chars().filter(|c| c.is_ascii_digit()).collect();

    // Parseable yet digitless text, like `NaN`.
    if digits.is_empty() {
        debug!(%text, "no digits to scale, returning unchanged");
        return text.to_string();
    }

    let exponent = digits.len() - 1;
    let (first, rest) = digits.split_at(1);
    let rest = &rest[..rest.len().min(3)];
    format!("{sign}{first}.{rest}e{exponent}")
}

/// Canonicalizes text that already carries an exponent marker: drops every
/// `+`, lowercases the marker, and pads the mantissa towards three
/// fractional digits.
///
/// The padding rule is positional: digits are inserted until the marker
/// reaches [`MARKER_PAD_COLUMN`], so mantissas with more than one integer
/// digit or a leading sign come out with fewer than three fractional
/// digits.
fn canonicalize_exponential(text: &str) -> String {
    let mut out = text.replace('+', "").replace('E', "e");

    // The caller only passes text containing a marker.
    let Some(mut marker) = out.find('e') else {
        return out;
    };

    if out.contains('.') {
        while marker < MARKER_PAD_COLUMN {
            out.insert(marker, '0');
            marker += 1;
        }
    } else {
        out.insert_str(marker, ".000");
    }
    out
}
