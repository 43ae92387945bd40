//! Lenient numeric coercion for raw form input
//!
//! Text typed into the calculator is read the way a browser's `parseFloat`
//! reads it: skip leading whitespace, take the longest numeric prefix, and
//! ignore whatever follows. Anything without a numeric prefix becomes 0.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parse the numeric prefix of `raw`, falling back to 0.
///
/// Never fails. A parsed zero (including `-0`) is returned as `0.0`.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let value = match NUMERIC_PREFIX.find(trimmed) {
        Some(m) => parse_prefix(m.as_str()),
        None => return 0.0,
    };

    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}

fn parse_prefix(prefix: &str) -> f64 {
    let (negative, digits) = match prefix.as_bytes().first() {
        Some(b'-') => (true, &prefix[1..]),
        Some(b'+') => (false, &prefix[1..]),
        _ => (false, prefix),
    };

    let magnitude = if digits == "Infinity" {
        f64::INFINITY
    } else {
        digits.parse::<f64>().unwrap_or(0.0)
    };

    if negative { -magnitude } else { magnitude }
}
