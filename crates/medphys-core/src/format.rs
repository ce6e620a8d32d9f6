//! Number rendering shared by every write-up.
//!
//! Quantities are printed with trailing zeros stripped and are never
//! rounded here; derived values are rounded with [`round_to`] before they
//! reach the formatter.

/// Render a quantity with trailing zeros removed: `40.0` → `"40"`,
/// `40.50` → `"40.5"`, `40.55` → `"40.55"`.
pub fn format_number(value: f64) -> String {
    // `Display` for f64 prints the shortest representation that round-trips,
    // so it never carries trailing zeros and never drops significant digits.
    let rendered = value.to_string();
    strip_trailing_zeros(&rendered).to_string()
}

/// Strip trailing zeros (and a dangling decimal point) from a decimal string.
/// Integers without a decimal point are returned unchanged.
pub fn strip_trailing_zeros(rendered: &str) -> &str {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered.trim_end_matches('0').trim_end_matches('.')
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
