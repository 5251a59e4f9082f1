//! Base-10 text to number conversion
//!
//! Mirrors the C library conversions: leading whitespace is skipped, the
//! longest numeric prefix is converted and anything after it is ignored.

use crate::{AsChars, ParseError, ParseErrorKind};

pub fn parse_i64<S: AsChars + ?Sized>(text: &S) -> Result<i64, ParseError> {
    let bytes = text.as_bytes();
    let fail = |kind| ParseError::new(kind, "i64", String::from_utf8_lossy(bytes));

    let (negative, digits) = scan_integer(bytes).ok_or_else(|| fail(ParseErrorKind::InvalidArgument))?;
    let magnitude = accumulate(digits).ok_or_else(|| fail(ParseErrorKind::OutOfRange))?;

    if negative {
        if magnitude > i64::MAX as u64 + 1 {
            return Err(fail(ParseErrorKind::OutOfRange));
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| fail(ParseErrorKind::OutOfRange))
    }
}

pub fn parse_u64<S: AsChars + ?Sized>(text: &S) -> Result<u64, ParseError> {
    let bytes = text.as_bytes();
    let fail = |kind| ParseError::new(kind, "u64", String::from_utf8_lossy(bytes));

    let (negative, digits) = scan_integer(bytes).ok_or_else(|| fail(ParseErrorKind::InvalidArgument))?;
    let magnitude = accumulate(digits).ok_or_else(|| fail(ParseErrorKind::OutOfRange))?;

    // no wrap-around for negative input, only -0 is accepted
    if negative && magnitude != 0 {
        return Err(fail(ParseErrorKind::OutOfRange));
    }
    Ok(magnitude)
}

pub fn parse_f64<S: AsChars + ?Sized>(text: &S) -> Result<f64, ParseError> {
    let bytes = text.as_bytes();
    let fail = |kind| ParseError::new(kind, "f64", String::from_utf8_lossy(bytes));

    let start = skip_whitespace(bytes);
    let end = scan_float(&bytes[start..]).ok_or_else(|| fail(ParseErrorKind::InvalidArgument))?;
    let number = &bytes[start..start + end];

    // the scanned prefix is pure ASCII
    let literal = std::str::from_utf8(number).map_err(|_| fail(ParseErrorKind::InvalidArgument))?;
    let value: f64 = literal
        .parse()
        .map_err(|_| fail(ParseErrorKind::InvalidArgument))?;

    if value.is_infinite() && !is_special(number) {
        return Err(fail(ParseErrorKind::OutOfRange));
    }
    // a non-zero mantissa that rounds to zero underflowed
    if value == 0.0 && mantissa(number).iter().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(fail(ParseErrorKind::OutOfRange));
    }
    Ok(value)
}

fn mantissa(number: &[u8]) -> &[u8] {
    let end = number.iter().position(|b| matches!(b, b'e' | b'E')).unwrap_or(number.len());
    &number[..end]
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

/// Sign and leading digit run of an integer, None when there are no digits
fn scan_integer(bytes: &[u8]) -> Option<(bool, &[u8])> {
    let mut pos = skip_whitespace(bytes);
    let mut negative = false;
    match bytes.get(pos) {
        Some(b'-') => {
            negative = true;
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }
    let count = digit_run(&bytes[pos..]);
    if count == 0 {
        return None;
    }
    Some((negative, &bytes[pos..pos + count]))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn accumulate(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}

const SPECIALS: [&[u8]; 3] = [b"infinity", b"inf", b"nan"];

fn is_special(number: &[u8]) -> bool {
    let unsigned = match number.first() {
        Some(b'+') | Some(b'-') => &number[1..],
        _ => number,
    };
    SPECIALS.iter().any(|s| unsigned.eq_ignore_ascii_case(s))
}

/// Length of the longest float literal at the start of `bytes`
fn scan_float(bytes: &[u8]) -> Option<usize> {
    let mut pos = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };

    for special in SPECIALS {
        let rest = &bytes[pos..];
        if rest.len() >= special.len() && rest[..special.len()].eq_ignore_ascii_case(special) {
            return Some(pos + special.len());
        }
    }

    let int_digits = digit_run(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digit_run(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digit_run(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{str, SoulStr};

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("42").unwrap(), 42);
        assert_eq!(parse_i64("  -17").unwrap(), -17);
        assert_eq!(parse_i64("+8").unwrap(), 8);
        assert_eq!(parse_i64("12abc").unwrap(), 12);
        assert_eq!(parse_i64("-9223372036854775808").unwrap(), i64::MIN);
        assert_eq!(parse_i64("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_i64_errors() {
        let err = parse_i64("abc").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArgument);
        assert_eq!(err.text, "abc");
        assert_eq!(parse_i64("").unwrap_err().kind, ParseErrorKind::InvalidArgument);
        assert_eq!(parse_i64("-").unwrap_err().kind, ParseErrorKind::InvalidArgument);
        assert!(parse_i64("9223372036854775808").unwrap_err().is_out_of_range());
        assert!(parse_i64("-9223372036854775809").unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_parse_i64_round_trip() {
        for n in [0i64, 1, -1, 1234567, i64::MIN, i64::MAX] {
            assert_eq!(parse_i64(&str(&n)).unwrap(), n);
        }
    }

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(parse_u64("-0").unwrap(), 0);
        assert!(parse_u64("18446744073709551616").unwrap_err().is_out_of_range());
        assert!(parse_u64("-3").unwrap_err().is_out_of_range());
        assert_eq!(parse_u64("x1").unwrap_err().kind, ParseErrorKind::InvalidArgument);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64("3.5").unwrap(), 3.5);
        assert_eq!(parse_f64(" -0.25xyz").unwrap(), -0.25);
        assert_eq!(parse_f64("1e3").unwrap(), 1000.0);
        assert_eq!(parse_f64("2e").unwrap(), 2.0);
        assert_eq!(parse_f64(".5").unwrap(), 0.5);
        assert_eq!(parse_f64("7.").unwrap(), 7.0);
        assert!(parse_f64("-inf").unwrap().is_infinite());
        assert!(parse_f64("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_parse_f64_errors() {
        let err = parse_f64("not-a-number").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArgument);
        assert_eq!(err.text, "not-a-number");
        assert_eq!(parse_f64(".").unwrap_err().kind, ParseErrorKind::InvalidArgument);
        assert!(parse_f64("1e400").unwrap_err().is_out_of_range());
        assert!(parse_f64("1e-400").unwrap_err().is_out_of_range());
        assert!(parse_f64("-2.5e-999").unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_parse_f64_zero_is_not_underflow() {
        assert_eq!(parse_f64("0e-400").unwrap(), 0.0);
        assert_eq!(parse_f64("0.000").unwrap(), 0.0);
        assert_eq!(parse_f64("-0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_from_soul_str() {
        let text = SoulStr::from("  99 bottles");
        assert_eq!(parse_i64(&text).unwrap(), 99);
        assert_eq!(parse_f64(&text.slice(2, 4)).unwrap(), 99.0);
    }
}
