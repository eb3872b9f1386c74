/// Renders an amount the way the order report prints it: whole values keep
/// one decimal place (`20.0`), everything else uses the shortest form that
/// round-trips (`12.5`).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_keep_one_decimal() {
        assert_eq!(format_amount(20.0), "20.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(-3.0), "-3.0");
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_non_finite_amounts() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }
}
