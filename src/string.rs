//! String formatting helpers.

use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

static HTML_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Encoding used by [`byte_len`] to cost each character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    Utf16,
}

/// Number of bytes the string occupies in the given encoding.
///
/// UTF-8 costs 1-4 bytes per character; UTF-16 costs 2 bytes, or 4 beyond
/// the Basic Multilingual Plane.
pub fn byte_len(s: &str, charset: Charset) -> usize {
    match charset {
        Charset::Utf8 => s.chars().map(|c| c.len_utf8()).sum(),
        Charset::Utf16 => s.chars().map(|c| c.len_utf16() * 2).sum(),
    }
}

/// Truncate to at most `max` characters, ellipsis included.
///
/// Strings within the limit are returned unchanged. Counts characters, not
/// bytes.
pub fn truncate(s: &str, max: usize, ellipsis: &str) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(ellipsis.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ellipsis);
    out
}

/// Convert `-x`/`_x` pairs to camelCase.
///
/// Only separator-followed-by-character pairs are rewritten; a string with
/// no separator is returned unchanged, and a trailing or doubled separator
/// survives as-is.
pub fn camelize(s: &str) -> String {
    if !s.contains('-') && !s.contains('_') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        let is_separator = ch == '-' || ch == '_';
        let next_is_plain = chars.peek().is_some_and(|next| *next != '-' && *next != '_');
        if is_separator && next_is_plain {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert to snake_case: breaks `aA` boundaries, converts dashes, lowercases.
pub fn underscored(s: &str) -> String {
    CAMEL_BOUNDARY_PATTERN
        .replace_all(s, "${1}_${2}")
        .replace('-', "_")
        .to_lowercase()
}

/// Convert to dash-case (CSS style).
pub fn dasherize(s: &str) -> String {
    underscored(s).replace('_', "-")
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Strip `<...>` tag runs from a string.
pub fn remove_html_tags(s: &str) -> String {
    HTML_TAG_PATTERN.replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_len_ascii() {
        assert_eq!(byte_len("abc", Charset::Utf8), 3);
        assert_eq!(byte_len("abc", Charset::Utf16), 6);
    }

    #[test]
    fn byte_len_multibyte() {
        // CJK characters cost 3 bytes in UTF-8, 2 in UTF-16.
        assert_eq!(byte_len("中文", Charset::Utf8), 6);
        assert_eq!(byte_len("中文", Charset::Utf16), 4);
    }

    #[test]
    fn byte_len_supplementary_plane() {
        assert_eq!(byte_len("𝄞", Charset::Utf8), 4);
        assert_eq!(byte_len("𝄞", Charset::Utf16), 4);
    }

    #[test]
    fn byte_len_empty() {
        assert_eq!(byte_len("", Charset::default()), 0);
    }

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 30, "..."), "hello");
    }

    #[test]
    fn truncate_cuts_and_appends_ellipsis() {
        assert_eq!(truncate("abcdefghij", 6, "..."), "abc...");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("中文字符串超长", 5, "…"), "中文字符…");
    }

    #[test]
    fn camelize_underscore_and_dash() {
        assert_eq!(camelize("a_b"), "aB");
        assert_eq!(camelize("a-b-c"), "aBC");
    }

    #[test]
    fn camelize_without_separator_is_identity() {
        assert_eq!(camelize("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn camelize_keeps_unpaired_separators() {
        assert_eq!(camelize("a--b"), "a-B");
        assert_eq!(camelize("a_"), "a_");
    }

    #[test]
    fn underscored_breaks_camel_boundaries() {
        assert_eq!(underscored("aB"), "a_b");
        assert_eq!(underscored("someVarName"), "some_var_name");
        assert_eq!(underscored("a-b"), "a_b");
    }

    #[test]
    fn dasherize_converts_underscores() {
        assert_eq!(dasherize("some_var"), "some-var");
        assert_eq!(dasherize("someVar"), "some-var");
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn removes_html_tags() {
        assert_eq!(remove_html_tags("<div>123</div>"), "123");
        assert_eq!(remove_html_tags("no tags"), "no tags");
        assert_eq!(remove_html_tags("<br/>"), "");
    }
}
