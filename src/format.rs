//! Regex-based format validators.
//!
//! Every validator takes a `&str` and returns a `bool`; malformed or empty
//! input is simply `false`, never an error. Patterns are compiled once into
//! `LazyLock` statics.
//!
//! The strong-password and date-string checks from the source used
//! lookahead/backreferences, which the `regex` crate deliberately omits;
//! they are implemented as explicit scans / alternation with the same
//! accept set.

use regex::Regex;
use std::sync::LazyLock;

const IPV4_OCTETS: &str =
    r"(?:(?:25[0-5]|2[0-4]\d|1\d{2}|[1-9]\d|\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d{2}|[1-9]\d|\d)";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+@[\w-]+(?:\.[\w-]{2,3}){1,2}$").unwrap());

// Mainland mobile segments per the 2019 MIIT allocation.
static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:\+|00)86)?1(?:3\d|4[5-79]|5[0-35-9]|6[5-7]|7[0-8]|8\d|9[189])\d{8}$")
        .unwrap()
});

// Optional 3/4-digit area code, then 8 or 7 digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{3}-)?\d{8}$|^(?:\d{4}-)?\d{7}$").unwrap());

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?[\w-]+(?:\.[\w-]+)+(?:[\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?$")
        .unwrap()
});

static THUNDER_URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^thunderx?://[a-zA-Z\d]+=$").unwrap());

static ED2K_URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ed2k://\|file\|.+\|/$").unwrap());

static MAGNET_URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^magnet:\?xt=urn:btih:[0-9a-fA-F]{40,}.*$").unwrap());

static A_SHARE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:s[hz]|S[HZ])\d{6}$").unwrap());

static MD5_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-f\d]{32}|[A-F\d]{32})$").unwrap());

static VERSION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+){2}(?:-(?:alpha|beta|rc)\.\d+)?$").unwrap());

static VIDEO_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:.+/)+.+\.(?:swf|avi|flv|mpg|rm|mov|wav|asf|3gp|mkv|rmvb|mp4)$")
        .unwrap()
});

static IMAGE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:.+/)+.+\.(?:gif|png|jpg|jpeg|webp|svg|psd|bmp|tif)$").unwrap()
});

static LINUX_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:[^/\s]+/)*[^/\s]+$").unwrap());

static LINUX_HIDDEN_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:[^/\s]+/)*\.[^/\s]+").unwrap());

static WINDOWS_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]:\\(?:[^\\\s]+\\)*[^\\\s]*$").unwrap());

static LINUX_FOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:[^/\s]+/)*$").unwrap());

static WINDOWS_FOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]:\\(?:[^\\\s]+\\)*$").unwrap());

static TWELVE_HOUR_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:1[0-2]|0?[1-9]):[0-5]\d:[0-5]\d$").unwrap());

static TWENTY_FOUR_HOUR_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d:[0-5]\d$").unwrap());

static BASE64_DATA_URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*data:(?:[a-z]+/[a-z0-9.+-]+(?:;[a-z-]+=[a-z0-9-]+)?)?(?:;base64)?,[a-z0-9!$&',()*+;=._~:@/?%\s-]*?\s*$",
    )
    .unwrap()
});

static CHINESE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{4e00}-\u{9fa5}·]{2,16}$").unwrap());

static ENGLISH_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+[a-zA-Z\s]{0,20}[a-zA-Z]+$").unwrap());

static BANK_CARD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d{9,29}$").unwrap());

static NEW_ENERGY_CAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领 A-Z][A-HJ-NP-Z](?:[0-9]{5}[DF]|[DF][A-HJ-NP-Z0-9][0-9]{4})$",
    )
    .unwrap()
});

static REGULAR_CAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领 A-Z][A-HJ-NP-Z][A-Z0-9]{4}[A-Z0-9挂学警港澳]$",
    )
    .unwrap()
});

static PASSPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[EeKkGgDdSsPpHh]\d{8}$|^(?:[Ee][a-fA-F]|[DdSsPp][Ee]|[Kk][Jj]|[Mm][Aa]|1[45])\d{7}$")
        .unwrap()
});

static IPV4_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{IPV4_OCTETS}$")).unwrap());

static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let h = "[0-9A-Fa-f]{1,4}";
    Regex::new(&format!(
        "^(?:\
(?:{h}:){{7}}{h}\
|(?:{h}:){{6}}:{h}\
|(?:{h}:){{5}}:(?:{h}:)?{h}\
|(?:{h}:){{4}}:(?:{h}:){{0,2}}{h}\
|(?:{h}:){{3}}:(?:{h}:){{0,3}}{h}\
|(?:{h}:){{2}}:(?:{h}:){{0,4}}{h}\
|(?:{h}:){{6}}{IPV4_OCTETS}\
|(?:{h}:){{0,5}}:{IPV4_OCTETS}\
|::(?:{h}:){{0,5}}{IPV4_OCTETS}\
|{h}::(?:{h}:){{0,5}}{h}\
|::(?:{h}:){{0,6}}{h}\
|(?:{h}:){{1,7}}:\
)$"
    ))
    .unwrap()
});

static ENGLISH_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static CHINESE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{4e00}-\u{9fa5}]+$").unwrap());

static ENGLISH_LOWER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+$").unwrap());

static ENGLISH_UPPER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]+$").unwrap());

static NUMBER_STRING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").unwrap());

static INTEGER_STRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

// Dash or dot separated, same separator in both positions.
static DATE_STRING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$|^\d{4}\.\d{2}\.\d{2}$").unwrap());

static POSTAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[1-7]|1[0-356]|2[0-7]|3[0-6]|4[0-7]|5[1-7]|6[1-7]|7[0-5]|8[013-6])\d{4}$")
        .unwrap()
});

static QQ_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\d{4,9}$").unwrap());

static MONEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d{1,2})?$").unwrap());

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{4,16}$").unwrap());

static WEIXIN_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][-_a-zA-Z0-9]{5,19}$").unwrap());

static JAVA_PACKAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z_][a-zA-Z0-9_]*)+(?:\.[a-zA-Z_][a-zA-Z0-9_]*)+$").unwrap()
});

static MAC_ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:[0-9a-f]{2}:){5}|(?:[0-9a-f]{2}-){5})[0-9a-f]{2}$").unwrap()
});

static TRAIN_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[GCDZTSPKXLY1-9]\d{1,4}$").unwrap());

static IMEI_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{15,17}$").unwrap());

pub fn is_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

pub fn is_mobile(s: &str) -> bool {
    MOBILE_PATTERN.is_match(s)
}

pub fn is_phone(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}

pub fn is_url(s: &str) -> bool {
    URL_PATTERN.is_match(s)
}

pub fn is_thunder_uri(s: &str) -> bool {
    THUNDER_URI_PATTERN.is_match(s)
}

pub fn is_ed2k_uri(s: &str) -> bool {
    ED2K_URI_PATTERN.is_match(s)
}

pub fn is_magnet_uri(s: &str) -> bool {
    MAGNET_URI_PATTERN.is_match(s)
}

/// A-share stock code: exchange prefix plus six digits.
pub fn is_a_share_code(s: &str) -> bool {
    A_SHARE_CODE_PATTERN.is_match(s)
}

pub fn is_md5(s: &str) -> bool {
    MD5_PATTERN.is_match(s)
}

/// Semantic version, optionally with an alpha/beta/rc pre-release tag.
pub fn is_version_code(s: &str) -> bool {
    VERSION_CODE_PATTERN.is_match(s)
}

pub fn is_video_url(s: &str) -> bool {
    VIDEO_URL_PATTERN.is_match(s)
}

pub fn is_image_url(s: &str) -> bool {
    IMAGE_URL_PATTERN.is_match(s)
}

pub fn is_linux_file_path(s: &str) -> bool {
    LINUX_FILE_PATTERN.is_match(s)
}

pub fn is_linux_hidden_file_path(s: &str) -> bool {
    LINUX_HIDDEN_FILE_PATTERN.is_match(s)
}

pub fn is_windows_file_path(s: &str) -> bool {
    WINDOWS_FILE_PATTERN.is_match(s)
}

pub fn is_linux_folder_path(s: &str) -> bool {
    LINUX_FOLDER_PATTERN.is_match(s)
}

pub fn is_windows_folder_path(s: &str) -> bool {
    WINDOWS_FOLDER_PATTERN.is_match(s)
}

pub fn is_linux_path(s: &str) -> bool {
    is_linux_file_path(s) || is_linux_folder_path(s)
}

pub fn is_windows_path(s: &str) -> bool {
    is_windows_file_path(s) || is_windows_folder_path(s)
}

pub fn is_path(s: &str) -> bool {
    is_linux_path(s) || is_windows_path(s)
}

/// `hh:mm:ss` on the 12-hour clock.
pub fn is_12_hour_time(s: &str) -> bool {
    TWELVE_HOUR_TIME_PATTERN.is_match(s)
}

/// `HH:mm:ss` on the 24-hour clock.
pub fn is_24_hour_time(s: &str) -> bool {
    TWENTY_FOUR_HOUR_TIME_PATTERN.is_match(s)
}

pub fn is_base64_data_uri(s: &str) -> bool {
    BASE64_DATA_URI_PATTERN.is_match(s)
}

pub fn is_chinese_name(s: &str) -> bool {
    CHINESE_NAME_PATTERN.is_match(s)
}

pub fn is_english_name(s: &str) -> bool {
    ENGLISH_NAME_PATTERN.is_match(s)
}

pub fn is_bank_card_code(s: &str) -> bool {
    BANK_CARD_PATTERN.is_match(s)
}

pub fn is_new_energy_car_number(s: &str) -> bool {
    NEW_ENERGY_CAR_PATTERN.is_match(s)
}

pub fn is_regular_car_number(s: &str) -> bool {
    REGULAR_CAR_PATTERN.is_match(s)
}

pub fn is_car_number(s: &str) -> bool {
    is_new_energy_car_number(s) || is_regular_car_number(s)
}

pub fn is_passport_number(s: &str) -> bool {
    PASSPORT_PATTERN.is_match(s)
}

pub fn is_ipv4(s: &str) -> bool {
    IPV4_PATTERN.is_match(s)
}

pub fn is_ipv6(s: &str) -> bool {
    IPV6_PATTERN.is_match(s)
}

pub fn is_english(s: &str) -> bool {
    ENGLISH_PATTERN.is_match(s)
}

pub fn is_chinese(s: &str) -> bool {
    CHINESE_PATTERN.is_match(s)
}

pub fn is_english_lower(s: &str) -> bool {
    ENGLISH_LOWER_PATTERN.is_match(s)
}

pub fn is_english_upper(s: &str) -> bool {
    ENGLISH_UPPER_PATTERN.is_match(s)
}

pub fn is_number_string(s: &str) -> bool {
    NUMBER_STRING_PATTERN.is_match(s)
}

pub fn is_integer_string(s: &str) -> bool {
    INTEGER_STRING_PATTERN.is_match(s)
}

pub fn is_date_string(s: &str) -> bool {
    DATE_STRING_PATTERN.is_match(s)
}

pub fn is_postal_code(s: &str) -> bool {
    POSTAL_PATTERN.is_match(s)
}

pub fn is_qq(s: &str) -> bool {
    QQ_PATTERN.is_match(s)
}

/// Integer or up-to-two-decimal amount.
pub fn is_money(s: &str) -> bool {
    MONEY_PATTERN.is_match(s)
}

pub fn is_username(s: &str) -> bool {
    USERNAME_PATTERN.is_match(s)
}

/// WeChat ID: 6-20 chars, letter first, then letters/digits/dash/underscore.
pub fn is_weixin_code(s: &str) -> bool {
    WEIXIN_CODE_PATTERN.is_match(s)
}

/// At least 6 non-whitespace chars with a digit, an uppercase and lowercase
/// letter, and one of `!@#$%^&*?`.
pub fn is_strong_password(s: &str) -> bool {
    s.chars().count() >= 6
        && !s.chars().any(char::is_whitespace)
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| "!@#$%^&*?".contains(c))
}

pub fn is_java_package_name(s: &str) -> bool {
    JAVA_PACKAGE_PATTERN.is_match(s)
}

pub fn is_mac_address(s: &str) -> bool {
    MAC_ADDRESS_PATTERN.is_match(s)
}

pub fn is_train_number(s: &str) -> bool {
    TRAIN_NUMBER_PATTERN.is_match(s)
}

pub fn is_imei(s: &str) -> bool {
    IMEI_PATTERN.is_match(s)
}

/// Password score: one point each for a digit, a lowercase letter, an
/// uppercase letter, and one of `.`/`-`/`_`.
pub fn password_strength(s: &str) -> u8 {
    let checks = [
        s.chars().any(|c| c.is_ascii_digit()),
        s.chars().any(|c| c.is_ascii_lowercase()),
        s.chars().any(|c| c.is_ascii_uppercase()),
        s.chars().any(|c| matches!(c, '.' | '-' | '_')),
    ];
    checks.iter().filter(|&&hit| hit).count() as u8
}
