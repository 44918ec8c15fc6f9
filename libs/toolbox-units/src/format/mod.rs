//! Fixed-precision float formatting for panel display.


/// Formats `value` with `precision` fractional digits, then trims trailing
/// zeros while keeping at least one fractional digit.
///
/// The value is rounded at `precision` before trimming and scientific
/// notation is never produced. A decimal point is forced even when
/// `precision` is 0. Non-finite values are rendered as-is (`NaN`, `inf`).
///
/// # Examples
/// ```
/// use toolbox_units::clean_float;
///
/// assert_eq!(clean_float(0.0, 0), "0.0");
/// assert_eq!(clean_float(1.2, 4), "1.2");
/// assert_eq!(clean_float(0.0001, 2), "0.0");
/// assert_eq!(clean_float(1e-7, 8), "0.0000001");
/// ```
#[must_use]
pub fn clean_float(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut text = format!("{value:.precision$}");
    match text.find('.') {
        Some(dot) => {
            // first fractional digit is always kept
            let keep = dot + 2;
            let tail = text[keep..].trim_end_matches('0').len();
            text.truncate(keep + tail);
        }
        None => text.push_str(".0"),
    }
    text
}
