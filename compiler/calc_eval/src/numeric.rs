/// Number of significant decimal digits kept by [`fix_up`]
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Round a final result to [`SIGNIFICANT_DIGITS`] significant digits.
///
/// Hides binary representation noise such as `0.1 + 0.2 = 0.30000000000000004`.
/// Negative zero becomes zero; NaN and infinities are returned unchanged.
pub fn fix_up(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if !value.is_finite() {
        return value;
    }
    // Scientific notation keeps the digit count independent of magnitude
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Round the result of an addition or subtraction to [`SIGNIFICANT_DIGITS`]
/// digits of its larger operand, `scale`.
///
/// Cancellation leaves the representation error of the operands in the low
/// digits: `0.30000000000000004 - 0.3` is `5.55e-17`, not `0`. Rounding at
/// the operands' precision removes it while `*`, `/` and `^` keep full
/// precision.
pub fn round_at_scale(result: f64, scale: f64) -> f64 {
    let scale = scale.abs();
    if !result.is_finite() || !scale.is_finite() || scale == 0.0 {
        return result;
    }
    let exponent = scale.log10().floor() as i32;
    let decimals = SIGNIFICANT_DIGITS as i32 - 1 - exponent;
    let rounded = if decimals >= 0 {
        format!("{:.*}", decimals as usize, result)
            .parse()
            .unwrap_or(result)
    } else {
        let step = 10f64.powi(-decimals);
        (result / step).round() * step
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
