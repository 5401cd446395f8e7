//! Resident identity card number validation.
//!
//! Accepts the 15-digit legacy form and the 18-digit form with a trailing
//! mod-11 check character. All checks must pass, short-circuiting on the
//! first failure: overall shape, region code, embedded birthdate, and (for
//! the 18-digit form) the weighted checksum.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static SHAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{15}$|^\d{17}[\dxX]$").unwrap());

// Weights for the first 17 digits of the 18-digit form.
const CHECKSUM_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

// Check characters indexed by the weighted sum mod 11.
const CHECK_CODES: &[u8; 11] = b"10X98765432";

/// Validate a resident identity card number.
///
/// Never errors: any malformed input returns `false`.
pub fn is_valid_identity(s: &str) -> bool {
    if !SHAPE_PATTERN.is_match(s) {
        return false;
    }

    let bytes = s.as_bytes();
    let region = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    if !is_region_code(region) {
        return false;
    }

    let (year, month, day) = if s.len() == 15 {
        // Legacy form carries no century; it predates 2000.
        (1900 + digits(s, 6, 2), digits(s, 8, 2), digits(s, 10, 2))
    } else {
        (digits(s, 6, 4), digits(s, 10, 2), digits(s, 12, 2))
    };
    if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
        return false;
    }

    if s.len() == 18 {
        let sum: u32 = bytes[..17]
            .iter()
            .zip(CHECKSUM_WEIGHTS)
            .map(|(b, weight)| u32::from(b - b'0') * weight)
            .sum();
        return CHECK_CODES[(sum % 11) as usize] == bytes[17].to_ascii_uppercase();
    }

    true
}

// 11-15 north, 21-23 northeast, 31-37 east, 41-46 south-central,
// 50-54 southwest, 61-65 northwest, 71 Taiwan, 81/82 HK/Macao, 91 abroad.
fn is_region_code(code: u8) -> bool {
    matches!(
        code,
        11..=15 | 21..=23 | 31..=37 | 41..=46 | 50..=54 | 61..=65 | 71 | 81 | 82 | 91
    )
}

// Shape check guarantees ASCII digits in these positions.
fn digits(s: &str, start: usize, len: usize) -> u32 {
    s[start..start + len].parse().unwrap_or(0)
}
