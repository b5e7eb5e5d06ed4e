/// Render a result for display.
///
/// Integral values print without a fractional part, very large or very
/// small magnitudes switch to exponent form, and non-finite values print as
/// `NaN`, `Infinity` or `-Infinity`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-7..1e21).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        // f64's Display already drops a trailing ".0"
        format!("{}", value)
    }
}
