//! Number formatting for RDL output
//!
//! Report viewers read these values back as decimals, so the text must be
//! stable: shortest round-trip form for plain numbers, and fixed precision
//! with ties rounded away from zero for item geometry.

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Digits kept when expanding a value exactly. Every double at or above
/// 2^-28 has at most this many fractional digits; smaller values round to
/// zero at the precisions used here and never sit on a tie.
const EXACT_DIGITS: usize = 80;

pub fn points_to_inches(points: f64) -> f64 {
    points / POINTS_PER_INCH
}

/// Shortest representation that parses back to the same value
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        // `+ 0.0` turns negative zero into zero
        format!("{}", value + 0.0)
    }
}

/// Fixed-point with `digits` decimals, exact ties rounded away from zero
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let value = value + 0.0;
    let digits = digits.min(EXACT_DIGITS - 1);

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (head, tail) = exact.split_at(exact.len() - (EXACT_DIGITS - digits));
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let rounded = increment_last_digit(head.trim_end_matches('.'));
    if value < 0.0 {
        format!("-{}", rounded)
    } else {
        rounded
    }
}

/// Add one unit in the last place to a non-negative decimal string
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => {}
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Inches with three decimals, as used for item geometry
pub fn inches(points: f64) -> String {
    format_fixed(points_to_inches(points), 3)
}
