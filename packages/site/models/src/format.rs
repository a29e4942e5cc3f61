//! Number formatting shared by the presentational projections.

/// Formats a number with `,` thousands separators and at most three
/// fractional digits (`2800.0` -> `"2,800"`, `1234.5` -> `"1,234.5"`).
#[must_use]
pub fn thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a number with exactly one decimal place.
///
/// Exact binary ties (`x.25`, `x.75`) round away from zero rather than to
/// even, so `95.25` prints as `"95.3"`.
#[must_use]
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let nudged = if value < 0.0 { value - 0.05 } else { value + 0.05 };
        return format!("{nudged:.1}");
    }
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(2800.0), "2,800");
        assert_eq!(thousands(1_355.0), "1,355");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(340.0), "340");
        assert_eq!(thousands(0.0), "0");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(thousands(1234.5), "1,234.5");
        assert_eq!(thousands(12.34567), "12.346");
        assert_eq!(thousands(-4500.25), "-4,500.25");
    }

    #[test]
    fn one_decimal_place() {
        assert_eq!(one_decimal(96.5), "96.5");
        assert_eq!(one_decimal(95.349_999_999_999_99), "95.3");
        assert_eq!(one_decimal(16.166_666), "16.2");
        assert_eq!(one_decimal(80.0), "80.0");
    }

    #[test]
    fn one_decimal_ties_round_away_from_zero() {
        assert_eq!(one_decimal(95.25), "95.3");
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(12.75), "12.8");
        assert_eq!(one_decimal(-0.25), "-0.3");
    }
}
