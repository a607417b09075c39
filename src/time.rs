//! Elapsed-time decomposition of seconds values.

use tracing::debug;

/// Formats a seconds value as `"HH:MM:SS.s"`, e.g. `"13528.6"` becomes
/// `"03:45:28.6"`. Text that does not parse as a finite number is returned
/// unchanged.
pub(crate) fn to_hour_min_sec(text: &str) -> String {
    let Some(total) = parse_seconds(text) else {
        return text.to_string();
    };

    let (hours, rest) = subtract_whole(total, 3600.0);
    let (minutes, seconds) = subtract_whole(rest, 60.0);
    format!("{hours:02}:{minutes:02}:{seconds:04.1}")
}

/// Formats a seconds value as `"MM:SS.s"`, e.g. `"754.3"` becomes
/// `"12:34.3"`. Text that does not parse as a finite number is returned
/// unchanged.
pub(crate) fn to_min_sec(text: &str) -> String {
    let Some(total) = parse_seconds(text) else {
        return text.to_string();
    };

    let (minutes, seconds) = subtract_whole(total, 60.0);
    format!("{minutes:02}:{seconds:04.1}")
}

fn parse_seconds(text: &str) -> Option<f64> {
    let Ok(value) = text.replace(',', "").parse::<f64>() else {
        debug!(%text, "not numeric, returning unchanged");
        return None;
    };
    if !value.is_finite() {
        debug!(%text, "not finite, returning unchanged");
        return None;
    }
    Some(value)
}

/// Counts how often `step` fits into `value` by repeated subtraction and
/// returns the count with the remainder.
///
/// Stops once subtraction no longer changes `value`, which happens when
/// the float spacing at `value` grows past `step`.
fn subtract_whole(mut value: f64, step: f64) -> (u64, f64) {
    let mut count = 0;
    while value >= step {
        let next = value - step;
        if next == value {
            break;
        }
        value = next;
        count += 1;
    }
    (count, value)
}
