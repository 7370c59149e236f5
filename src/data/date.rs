//! Compact numeric date codec
//!
//! Dates travel as a single integer `day + (month + 1) * 32 + year * 500`,
//! where `month` is zero-based. Decoding never fails: anything that does not
//! describe a real day/month pair becomes [`INVALID_DATE`].

use super::parse_leading_int;

/// Display string for every undecodable date
pub const INVALID_DATE: &str = "invalid date";

/// Decodes a raw date field into `DD.MM.YYYY`
///
/// The field must be numeric as a whole; its integer part is decoded, so
/// `"16912.5"` reads as 16912. Missing, non-numeric and non-positive values,
/// as well as values whose day or month component is out of range, all map
/// to [`INVALID_DATE`].
pub fn decode_date(raw: &str) -> String {
    let numeric = raw.trim().parse::<f64>().is_ok_and(|n| n.is_finite());
    let Some(num) = parse_leading_int(raw).filter(|_| numeric) else {
        return INVALID_DATE.to_string();
    };
    if num <= 0 {
        return INVALID_DATE.to_string();
    }

    let year = num / 500;
    let month_day = num % 500;
    if month_day <= 0 {
        return INVALID_DATE.to_string();
    }

    let month = month_day / 32 - 1;
    let day = month_day % 32;
    if !(0..=11).contains(&month) || !(1..=31).contains(&day) {
        return INVALID_DATE.to_string();
    }

    format!("{:02}.{:02}.{}", day, month + 1, year)
}

/// Encodes a date into the compact form
///
/// `month` is zero-based. Returns `None` if a component is out of range or
/// the result does not fit in a `u32`.
pub fn encode_date(day: u32, month: u32, year: u32) -> Option<u32> {
    if !(1..=31).contains(&day) || month > 11 {
        return None;
    }
    year.checked_mul(500)?.checked_add(day + (month + 1) * 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_display_date(s: &str) -> bool {
        let parts: Vec<&str> = s.split('.').collect();
        parts.len() == 3
            && parts[0].len() == 2
            && parts[1].len() == 2
            && parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
    }

    #[test]
    fn test_decode_known_value() {
        // 16912 = 33 * 500 + 412 -> month index 11, day 28
        assert_eq!(decode_date("16912"), "28.12.33");
        // 17000 = 34 * 500 + 0 -> no month/day
        assert_eq!(decode_date("17000"), INVALID_DATE);
    }

    #[test]
    fn test_decode_rejects_non_positive_and_garbage() {
        assert_eq!(decode_date("0"), INVALID_DATE);
        assert_eq!(decode_date("-5"), INVALID_DATE);
        assert_eq!(decode_date("abc"), INVALID_DATE);
        assert_eq!(decode_date(""), INVALID_DATE);
        assert_eq!(decode_date("   "), INVALID_DATE);
        assert_eq!(decode_date("99999999999999999999999"), INVALID_DATE);
    }

    #[test]
    fn test_decode_uses_integer_part_of_numeric_input() {
        assert_eq!(decode_date("16912.5"), "28.12.33");
        assert_eq!(decode_date("16912.0"), "28.12.33");
        assert_eq!(decode_date("+16912"), "28.12.33");
        // Numeric as a whole, but the integer part is 1
        assert_eq!(decode_date("1e3"), INVALID_DATE);
    }

    #[test]
    fn test_decode_rejects_partially_numeric_input() {
        assert_eq!(decode_date("16912abc"), INVALID_DATE);
        assert_eq!(decode_date("NaN"), INVALID_DATE);
        assert_eq!(decode_date("inf"), INVALID_DATE);
        assert_eq!(decode_date(".5"), INVALID_DATE);
    }

    #[test]
    fn test_decode_rejects_out_of_range_components() {
        // month_day < 32 -> month index -1
        assert_eq!(decode_date("1010"), INVALID_DATE);
        // day 0
        assert_eq!(decode_date("1032"), INVALID_DATE);
        // month index 12
        assert_eq!(decode_date("1417"), INVALID_DATE);
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let encoded = encode_date(5, 2, 2024).unwrap();
        assert_eq!(decode_date(&format!(" {} ", encoded)), "05.03.2024");
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(encode_date(0, 0, 2020), None);
        assert_eq!(encode_date(32, 0, 2020), None);
        assert_eq!(encode_date(1, 12, 2020), None);
        assert_eq!(encode_date(1, 0, u32::MAX), None);
    }

    #[test]
    fn test_every_valid_date_decodes_to_its_components() {
        for year in [0u32, 1, 99, 1999, 2024, 9999] {
            for month in 0..12 {
                for day in 1..=31 {
                    let encoded = encode_date(day, month, year).unwrap();
                    assert_eq!(
                        decode_date(&encoded.to_string()),
                        format!("{:02}.{:02}.{}", day, month + 1, year)
                    );
                }
            }
        }
    }

    #[test]
    fn test_decode_is_total_over_a_range() {
        for n in -600i64..3000 {
            let out = decode_date(&n.to_string());
            assert!(out == INVALID_DATE || is_display_date(&out), "{} -> {}", n, out);
        }
    }
}
