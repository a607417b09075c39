//! Digit grouping and scale-name formatting.

use crate::{SCALING_THRESHOLD, StringifyError, fixed, scientific, split_sign};
use numscale_names::{LONG_NAMES, MAX_NAMED_DIGITS, SHORT_SUFFIXES, index_for_digit_count};
use tracing::debug;

/// Which of the two parallel name tables a scaled value is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scale {
    Long,
    Short,
}

/// Scales numeric text into its power-of-1000 bracket and appends the
/// bracket's name, e.g. `"1328000000"` becomes `"1.328 Billion"` (long) or
/// `"1.328B"` (short).
///
/// Values below [`SCALING_THRESHOLD`] keep a fixed two-decimal form, and
/// text that does not parse as a number is returned unchanged.
pub(crate) fn to_scale_name(text: &str, scale: Scale) -> Result<String, StringifyError> {
    let Ok(value) = text.replace(',', "").parse::<f64>() else {
        debug!(%text, "not numeric, returning unchanged");
        return Ok(text.to_string());
    };
    if value.abs() < SCALING_THRESHOLD {
        return Ok(fixed::two_decimal_grouped(value));
    }

    let (sign, unsigned) = split_sign(text);
    let mut digits_text = if unsigned.contains(['E', 'e']) {
        // An oversized exponent fails here, before its zeros are built.
        if scientific::expanded_digit_count(unsigned)? > MAX_NAMED_DIGITS {
            return Err(StringifyError::OutOfRange {
                text: text.into(),
                reason: "the value exceeds the scale name table",
            });
        }
        scientific::expand_scientific(unsigned)?
    } else {
        unsigned.to_string()
    };

    // Past one million the fractional part no longer matters.
    if digits_text.len() > 5 && let Some(point) = digits_text.find('.') {
        digits_text.truncate(point);
    }

    let digit_count = digits_text.chars().filter(|c| c.is_ascii_digit()).count();
    if digit_count < 7 {
        return Ok(format!("{sign}{digits_text}"));
    }

    let Some(index) = index_for_digit_count(digit_count) else {
        return Err(StringifyError::OutOfRange {
            text: text.into(),
            reason: "the value exceeds the scale name table",
        });
    };

    let buffer = leading_digits_with_point(&digits_text, digit_count);
    Ok(match scale {
        Scale::Long => format!("{sign}{buffer} {}", LONG_NAMES[index]),
        Scale::Short => format!("{sign}{buffer}{}", SHORT_SUFFIXES[index]),
    })
}

/// Collects the 4 most significant digits and places a decimal point
/// `digit_count % 3` digits in, or 3 digits in when the remainder is 0.
/// The point position mirrors where the value sits inside its bracket.
fn leading_digits_with_point(text: &str, digit_count: usize) -> String {
    let point_at = match digit_count % 3 {
        0 => 3,
        remainder => remainder,
    };

    let mut buffer = String::with_capacity(5);
    let mut taken = 0;
    for c in text.chars() {
        if !c.is_ascii_digit() {
            continue;
        }
        if taken == point_at {
            buffer.push('.');
        }
        buffer.push(c);
        taken += 1;
        if taken == 4 {
            break;
        }
    }
    buffer
}
