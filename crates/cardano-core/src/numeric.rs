// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Decimal Rounding and Number Text
// ─────────────────────────────────────────────────────────────────────
//! Rounding and formatting that reproduce the calculator's displayed
//! numbers digit for digit.
//!
//! Rounding is to the nearest decimal with ties away from zero, decided on
//! the exact binary value of the input. `format!("{:.4}")` alone rounds
//! exact ties to even, so ties are detected separately.

/// Round `value` to `decimals` places, ties away from zero.
///
/// The result is the double nearest to the rounded decimal, exactly as if
/// the decimal text had been parsed. Non-finite input is returned as is.
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals as usize;
    let text = match exact_tie_floor(value.abs(), decimals) {
        Some(floor) => decimal_text(floor + 1, places, value.is_sign_negative()),
        None => format!("{value:.places$}"),
    };
    text.parse().unwrap_or(value)
}

/// If `|x| * 10^decimals` lies exactly half-way between two integers,
/// return the lower one.
fn exact_tie_floor(x: f64, decimals: u32) -> Option<u128> {
    let bits = x.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1u64 << 52) - 1);
    let (mut mant, mut exp) = if exp_bits == 0 {
        (frac, -1074)
    } else {
        (frac | (1u64 << 52), exp_bits - 1075)
    };
    if mant == 0 {
        return None;
    }
    let tz = mant.trailing_zeros();
    mant >>= tz;
    exp += tz as i32;

    // x * 10^d = mant * 5^d * 2^(exp + d) with mant odd: a tie needs
    // exactly one factor of two left in the denominator.
    if exp + decimals as i32 != -1 {
        return None;
    }
    Some((u128::from(mant) * 5u128.pow(decimals)) >> 1)
}

/// `digits / 10^places` as decimal text.
fn decimal_text(digits: u128, places: usize, negative: bool) -> String {
    let sign = if negative { "-" } else { "" };
    if places == 0 {
        return format!("{sign}{digits}");
    }
    let padded = format!("{digits:0>width$}", width = places + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - places);
    format!("{sign}{int_part}.{frac_part}")
}

/// Digits requested when expanding a double exactly; the longest finite
/// expansion (the smallest subnormal) has 767 significant digits.
const EXACT_DIGITS: usize = 800;

/// Shortest text that reads back as `value`, in the familiar script-style
/// notation: no trailing `.0`, `-0` shown as `0`, and exponent form
/// (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
///
/// When the exact value sits half-way between two shortest candidates,
/// the one with the even last digit is chosen.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exp) = shortest_digits(magnitude);
    let body = if (1e-6..1e21).contains(&magnitude) {
        fixed_text(&digits, exp)
    } else {
        exponent_text(&digits, exp)
    };
    format!("{sign}{body}")
}

/// Split `d.ddd e±k` text into its significant digits and exponent.
fn split_scientific(text: &str) -> (String, i32) {
    let (mantissa, exp) = text.split_once('e').unwrap_or((text, "0"));
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Shortest round-trip digits of a positive finite `magnitude` and the
/// decimal exponent of the first digit.
fn shortest_digits(magnitude: f64) -> (String, i32) {
    let (digits, exp) = split_scientific(&format!("{magnitude:e}"));
    let (exact, exact_exp) = split_scientific(&format!("{:.*e}", EXACT_DIGITS, magnitude));
    let (head, tail) = exact.split_at(digits.len());
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return (digits, exp);
    }

    let last_even = head.bytes().last().is_some_and(|b| (b - b'0') % 2 == 0);
    let (mut chosen, chosen_exp) = if last_even {
        (head.to_string(), exact_exp)
    } else {
        increment_digits(head, exact_exp)
    };
    while chosen.len() > 1 && chosen.ends_with('0') {
        chosen.pop();
    }
    (chosen, chosen_exp)
}

/// Add one unit in the last place of a digit string, carrying into a new
/// leading digit (and exponent) when needed.
fn increment_digits(digits: &str, exp: i32) -> (String, i32) {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return (String::from_utf8_lossy(&bytes).into_owned(), exp);
        }
    }
    bytes.insert(0, b'1');
    bytes.pop();
    (String::from_utf8_lossy(&bytes).into_owned(), exp + 1)
}

/// Positional notation for digits `d1 d2 ...` with the first at 10^exp.
fn fixed_text(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

/// `d.ddde±k` notation.
fn exponent_text(digits: &str, exp: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let point = if rest.is_empty() { "" } else { "." };
    let exp_sign = if exp >= 0 { "+" } else { "" };
    format!("{first}{point}{rest}e{exp_sign}{exp}")
}
