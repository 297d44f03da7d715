//! Lenient numeric coercions applied to console input and stored lines.
//!
//! Bad numbers never raise errors here; each helper names the default it
//! falls back to.

/// Reads an optionally signed decimal integer at the start of `text`,
/// skipping leading whitespace. Returns `None` when no digit is present or
/// the value does not fit in an `i64`. Anything after the digits is ignored.
pub fn scan_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Integer prefix of `text`, or 0 when there is none.
pub fn parse_int_lenient(text: &str) -> i64 {
    scan_int_prefix(text).unwrap_or(0)
}

/// Reads a decimal floating-point number at the start of `text`
/// (`[+-]digits[.digits][e[+-]digits]`), ignoring whatever follows.
pub fn scan_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse().ok()
}

/// Number of nights for a booking. Unparseable, zero, negative or
/// out-of-range input becomes a single night.
pub fn parse_nights_or_default(text: &str) -> u32 {
    match scan_int_prefix(text) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(1),
        _ => 1,
    }
}

/// Menu selection; anything that is not a number reads as 0.
pub fn parse_menu_choice(text: &str) -> i64 {
    parse_int_lenient(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_follows_leading_digits() {
        assert_eq!(scan_int_prefix("42"), Some(42));
        assert_eq!(scan_int_prefix("  7 nights"), Some(7));
        assert_eq!(scan_int_prefix("-3"), Some(-3));
        assert_eq!(scan_int_prefix("+5\n"), Some(5));
        assert_eq!(scan_int_prefix("3abc"), Some(3));
        assert_eq!(scan_int_prefix("abc"), None);
        assert_eq!(scan_int_prefix(""), None);
        assert_eq!(scan_int_prefix("-"), None);
        assert_eq!(scan_int_prefix("+-4"), None);
        assert_eq!(scan_int_prefix("99999999999999999999999"), None);
    }

    #[test]
    fn lenient_int_defaults_to_zero() {
        assert_eq!(parse_int_lenient("x"), 0);
        assert_eq!(parse_int_lenient(" 12|"), 12);
    }

    #[test]
    fn nights_coerce_to_one() {
        assert_eq!(parse_nights_or_default("3"), 3);
        assert_eq!(parse_nights_or_default("0"), 1);
        assert_eq!(parse_nights_or_default("-2"), 1);
        assert_eq!(parse_nights_or_default("two"), 1);
        assert_eq!(parse_nights_or_default(""), 1);
        assert_eq!(parse_nights_or_default("5000000000"), 1);
    }

    #[test]
    fn menu_choice_reads_garbage_as_zero() {
        assert_eq!(parse_menu_choice("4\n"), 4);
        assert_eq!(parse_menu_choice("exit"), 0);
    }

    #[test]
    fn float_prefix() {
        assert_eq!(scan_float_prefix("4000.00"), Some(4000.0));
        assert_eq!(scan_float_prefix(" 12.5xyz"), Some(12.5));
        assert_eq!(scan_float_prefix("-1"), Some(-1.0));
        assert_eq!(scan_float_prefix(".5"), Some(0.5));
        assert_eq!(scan_float_prefix("7."), Some(7.0));
        assert_eq!(scan_float_prefix("1e3"), Some(1000.0));
        assert_eq!(scan_float_prefix("2e"), Some(2.0));
        assert_eq!(scan_float_prefix("abc"), None);
        assert_eq!(scan_float_prefix("."), None);
        assert_eq!(scan_float_prefix(""), None);
    }
}
