#![doc = include_str!("../README.md")]

mod fixed;
mod grouping;
mod scientific;
mod time;

pub use crate::scientific::expand_scientific;
pub use numscale_names::{
    LONG_NAMES, MAX_NAMED_DIGITS, SCALE_COUNT, SHORT_SUFFIXES, index_for_digit_count, long_name,
    short_suffix,
};

use crate::grouping::Scale;
use tracing::instrument;

/// Values whose magnitude stays below this threshold keep their fixed
/// two-decimal form instead of a scale name.
pub(crate) const SCALING_THRESHOLD: f64 = 1_000_000.0;

/// Selects the textual form produced by [`stringify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatMode {
    /// Scale the value and append the long-form name: `"1.328 Billion"`.
    #[default]
    LongText,
    /// Scale the value and append the abbreviated token: `"1.328B"`.
    ShortText,
    /// Normalize to canonical scientific notation: `"1.328e9"`.
    ScientificNotation,
    /// Decompose a seconds value into `"MM:SS.s"`.
    SecondsToMinSec,
    /// Decompose a seconds value into `"HH:MM:SS.s"`.
    SecondsToHourMinSec,
}

/// Error returned by [`stringify`] and [`expand_scientific`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StringifyError {
    /// The value has no named bracket: infinite input, or a magnitude past
    /// the end of the scale name tables (beyond roughly `10^309`).
    #[error("`{text}` is out of range: {reason}")]
    OutOfRange { text: String, reason: &'static str },
    /// The text cannot be expanded as scientific notation.
    #[error("cannot expand `{text}`: {reason}")]
    InvalidFormat { text: String, reason: &'static str },
}

/// Converts numeric text into the human-facing form selected by `mode`.
///
/// The input may carry a leading `-`, `,` thousands separators, a
/// fractional part, and an `E`/`e` exponent suffix. Digit grouping and
/// exponent arithmetic run on the text itself, so magnitudes far beyond
/// exact `f64` range keep all the digits they arrived with.
///
/// Empty input produces an empty string and non-numeric text is passed
/// through unchanged, so arbitrary display strings can be piped through
/// without pre-validation. Infinite input is rejected before any mode
/// runs. `FormatMode` is a closed set, so every call routes to one of the
/// five formatters below.
///
/// # Examples
///
/// ```
/// use numscale::{FormatMode, stringify};
///
/// let long = stringify("1328000000", FormatMode::LongText).unwrap();
/// assert_eq!(long, "1.328 Billion");
///
/// let short = stringify("1328000000", FormatMode::ShortText).unwrap();
/// assert_eq!(short, "1.328B");
///
/// let elapsed = stringify("13528.6", FormatMode::SecondsToHourMinSec).unwrap();
/// assert_eq!(elapsed, "03:45:28.6");
/// ```
#[instrument(level = "debug")]
pub fn stringify(text: &str, mode: FormatMode) -> Result<String, StringifyError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    if is_infinity_literal(text) {
        return Err(StringifyError::OutOfRange {
            text: text.into(),
            reason: "infinite values cannot be formatted",
        });
    }

    match mode {
        FormatMode::LongText => grouping::to_scale_name(text, Scale::Long),
        FormatMode::ShortText => grouping::to_scale_name(text, Scale::Short),
        FormatMode::ScientificNotation => Ok(scientific::normalize(text)),
        FormatMode::SecondsToMinSec => Ok(time::to_min_sec(text)),
        FormatMode::SecondsToHourMinSec => Ok(time::to_hour_min_sec(text)),
    }
}

/// Matches the canonical infinity spellings, with an optional sign: `inf`
/// and `infinity` in any ASCII case.
fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Splits an optional leading `-` off `text`, so digit-level passes can
/// run on unsigned text and reattach the sign at the end.
pub(crate) fn split_sign(text: &str) -> (&'static str, &str) {
    match text.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", text),
    }
}
