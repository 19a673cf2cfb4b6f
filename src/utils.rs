// Format a USD price rounded to 8 decimals, always with a fractional part
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let rounded = (price * 1e8).round() / 1e8;
    let text = rounded.to_string();

    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

// Truncate to a whole number and group thousands with commas: 1234567.9 -> "1,234,567"
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let whole = value.trunc();
    let digits = format!("{:.0}", whole.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_rounded_to_eight_decimals() {
        assert_eq!(format_price(0.123456789), "0.12345679");
        assert_eq!(format_price(0.00002314), "0.00002314");
        assert_eq!(format_price(1.5), "1.5");
    }

    #[test]
    fn whole_prices_keep_a_decimal_point() {
        assert_eq!(format_price(0.0), "0.0");
        assert_eq!(format_price(42.0), "42.0");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.99), "999");
        assert_eq!(format_thousands(1_000.0), "1,000");
        assert_eq!(format_thousands(1_234_567.89), "1,234,567");
        assert_eq!(format_thousands(2_000_000_000.0), "2,000,000,000");
    }

    #[test]
    fn negative_values_truncate_towards_zero() {
        assert_eq!(format_thousands(-1_500.7), "-1,500");
        assert_eq!(format_thousands(-0.5), "0");
    }

    #[test]
    fn values_beyond_i64_are_printed_exactly() {
        assert_eq!(format_thousands(1e20), "100,000,000,000,000,000,000");
        assert_eq!(
            format_thousands(12_345_678_901_234_567_890_123.0),
            "12,345,678,901,234,567,741,440"
        );
    }
}
