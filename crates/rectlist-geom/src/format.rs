/// Significant digits used when rendering numbers for display.
const PRECISION: usize = 6;

/// Format a number like C's `%g` with six significant digits.
///
/// Trailing zeros are stripped, and scientific notation (`1.5e+07`) is used
/// when the decimal exponent is below -4 or at least the precision. This is
/// what a terminal user expects to see for values like `72` or `0.3`, where
/// `{}` would print `72` but also `0.30000000000000004`.
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent can shift (9.999995 -> 1e+01)
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_g(72.0), "72");
        assert_eq!(format_g(-2.0), "-2");
        assert_eq!(format_g(123456.0), "123456");
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(-0.0), "-0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_g(5.5), "5.5");
        assert_eq!(format_g(0.1 + 0.2), "0.3");
        assert_eq!(format_g(-1.25), "-1.25");
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(3.14159265), "3.14159");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_g(1e7), "1e+07");
        assert_eq!(format_g(1234567.0), "1.23457e+06");
        assert_eq!(format_g(0.00001), "1e-05");
        assert_eq!(format_g(-2.5e-10), "-2.5e-10");
        assert_eq!(format_g(1e100), "1e+100");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_g(999999.5), "1e+06");
        assert_eq!(format_g(9.9999999), "10");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_g(f64::NAN), "nan");
        assert_eq!(format_g(f64::INFINITY), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY), "-inf");
    }
}
