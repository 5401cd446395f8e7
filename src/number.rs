//! Numeric helpers and the Chinese numeral formatter.

const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const DIGITS_FORMAL: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];
// Units for tens/hundreds/thousands, indexed by power of ten minus one.
const UNITS: [&str; 3] = ["十", "百", "千"];
const UNITS_FORMAL: [&str; 3] = ["拾", "佰", "仟"];

const WAN: u64 = 10_000;
const YI: u64 = 100_000_000;

/// Clamp `target` into the closed interval `[min, max]`.
pub fn clamp(target: f64, min: f64, max: f64) -> f64 {
    target.min(max).max(min)
}

/// Whichever of `min` and `max` is closer to `target`.
pub fn nearer(target: f64, min: f64, max: f64) -> f64 {
    if target - min < max - target {
        min
    } else {
        max
    }
}

/// Render an integer with comma thousands separators.
pub fn thousands_separated(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an integer as Chinese numerals.
///
/// `formal` selects the banking glyph set (壹贰叁...) over the everyday one.
/// Grouping follows the 万/亿 units; consecutive internal zeros collapse to
/// a single 零, and whole values 10-19 drop the leading 一 (十三, not
/// 一十三).
pub fn number_to_chinese(n: u64, formal: bool) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }
    compose(n, formal, false)
}

fn compose(n: u64, formal: bool, prefix_zero: bool) -> String {
    if n >= YI {
        let mut out = compose(n / YI, formal, prefix_zero);
        out.push_str("亿");
        let rest = n % YI;
        if rest > 0 {
            out.push_str(&compose(rest, formal, rest < YI / 10));
        }
        return out;
    }

    if n >= WAN {
        let mut out = compose(n / WAN, formal, prefix_zero);
        out.push_str("万");
        let rest = n % WAN;
        if rest > 0 {
            out.push_str(&compose(rest, formal, rest < WAN / 10));
        }
        return out;
    }

    format_group(n, formal, prefix_zero)
}

// Formats a group of at most four digits. `prefix_zero` marks a group whose
// leading zeros follow a nonzero enclosing group and must surface as one 零.
fn format_group(n: u64, formal: bool, prefix_zero: bool) -> String {
    let digits = if formal { &DIGITS_FORMAL } else { &DIGITS };
    let units = if formal { &UNITS_FORMAL } else { &UNITS };

    let places = [
        (n / 1000 % 10, Some(2)),
        (n / 100 % 10, Some(1)),
        (n / 10 % 10, Some(0)),
        (n % 10, None),
    ];

    let mut out = String::new();
    let mut pending_zero = prefix_zero;

    for (digit, unit) in places {
        if digit == 0 {
            if !out.is_empty() {
                pending_zero = true;
            }
            continue;
        }

        if pending_zero {
            out.push_str(digits[0]);
            pending_zero = false;
        }

        // 10-19 at the head of the output drop the leading glyph.
        let suppress_leading_one = digit == 1 && unit == Some(0) && out.is_empty() && !prefix_zero;
        if !suppress_leading_one {
            out.push_str(digits[digit as usize]);
        }
        if let Some(u) = unit {
            out.push_str(units[u]);
        }
    }

    out
}
