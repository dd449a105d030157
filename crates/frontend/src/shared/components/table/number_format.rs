//! Number formatting for tables, cards and chart axes (vi-VN conventions).

/// Inserts `sep` every three digits of an integer string, keeping a leading minus.
fn group_thousands(integer: &str, sep: char) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Integer with `.` as thousands separator: 1234567 -> "1.234.567"
pub fn format_number_int(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    // "-0" after rounding small negatives
    if rounded == "-0" {
        return "0".to_string();
    }
    group_thousands(&rounded, '.')
}

/// Amount in đồng: 1234567.4 -> "1.234.567 ₫"
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", format_number_int(value))
}

/// Signed change with one decimal: 12.345 -> "+12.3%"
pub fn format_percent_change(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Compact label for chart axes: 1500000 -> "1.5M", 25000 -> "25K"
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(1000.0), "1.000");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-0.2), "0");
        assert_eq!(format_number_int(-1234.0), "-1.234");
        assert_eq!(format_number_int(-123456.0), "-123.456");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(250000.0), "250.000 ₫");
        assert_eq!(format_vnd(1234567.4), "1.234.567 ₫");
    }

    #[test]
    fn test_format_percent_change() {
        assert_eq!(format_percent_change(12.345), "+12.3%");
        assert_eq!(format_percent_change(-3.0), "-3.0%");
        assert_eq!(format_percent_change(0.0), "0.0%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(25_000.0), "25K");
        assert_eq!(format_compact(2_000_000_000.0), "2.0B");
        assert_eq!(format_compact(800.0), "800");
    }
}
