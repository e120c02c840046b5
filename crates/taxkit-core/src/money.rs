//! Monetary rounding and formatting helpers.

/// Round to two decimal places. Applied only at the orchestrator boundary,
/// never inside the per-bracket accumulation.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a non-negative dollar amount with thousands separators, e.g.
/// `format_usd(1234567.5, 2)` -> `"$1,234,567.50"`.
pub fn format_usd(amount: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}${grouped}.{frac}"),
        None => format!("{sign}${grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(4016.004), 4016.0);
        assert_eq!(round2(2.346), 2.35);
        assert_eq!(round2(8.032), 8.03);
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_usd(0.0, 0), "$0");
        assert_eq!(format_usd(999.0, 0), "$999");
        assert_eq!(format_usd(11_600.0, 0), "$11,600");
        assert_eq!(format_usd(609_350.0, 0), "$609,350");
        assert_eq!(format_usd(1_234_567.0, 0), "$1,234,567");
    }

    #[test]
    fn test_format_usd_decimals() {
        assert_eq!(format_usd(29_200.0, 2), "$29,200.00");
        assert_eq!(format_usd(285_321.5, 2), "$285,321.50");
        assert_eq!(format_usd(0.5, 2), "$0.50");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1_500.25, 2), "-$1,500.25");
    }
}
