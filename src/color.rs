//! RGB / hex color string conversion.

use crate::error::{Error, Result};

/// Render RGB components as a `#rrggbb` string.
///
/// With `short`, collapses to `#rgb` when every channel has repeating hex
/// digits; otherwise the long form is kept.
pub fn rgb_to_hex(r: u8, g: u8, b: u8, short: bool) -> String {
    let full = format!("{:02x}{:02x}{:02x}", r, g, b);
    if short {
        let bytes = full.as_bytes();
        if bytes[0] == bytes[1] && bytes[2] == bytes[3] && bytes[4] == bytes[5] {
            return format!("#{}{}{}", &full[0..1], &full[2..3], &full[4..5]);
        }
    }
    format!("#{}", full)
}

/// Parse a `#rgb` or `#rrggbb` string into RGB components.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let invalid = || Error::InvalidHexColor(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let mut out = [0u8; 3];
    for (slot, chunk) in out.iter_mut().zip(expanded.as_bytes().chunks(2)) {
        let pair = std::str::from_utf8(chunk).map_err(|_| invalid())?;
        *slot = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
    }
    Ok(out)
}
