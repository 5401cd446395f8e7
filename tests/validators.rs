use handy::format;
use handy::is_valid_identity;
use handy::number::number_to_chinese;

#[test]
fn identity_numbers_end_to_end() {
    assert!(is_valid_identity("530121198907165303"));
    assert!(!is_valid_identity("530121198907165302"));
    assert!(!is_valid_identity(""));
    assert!(!is_valid_identity("not-a-number"));
}

#[test]
fn chinese_numeral_boundaries() {
    assert_eq!(number_to_chinese(1000001001, false), "十亿零一千零一");
    assert_eq!(number_to_chinese(80000000, false), "八千万");
    assert_eq!(number_to_chinese(13, false), "十三");
    assert_eq!(number_to_chinese(13, true), "拾叁");
}

#[test]
fn validators_accept_well_formed_input() {
    assert!(format::is_email("453491931@qq.com"));
    assert!(format::is_ipv4("10.0.0.1"));
    assert!(format::is_version_code("1.2.3-rc.1"));
    assert!(format::is_date_string("2024-08-30"));
}

#[test]
fn validators_reject_structurally_deficient_input() {
    assert!(!format::is_email("user@@host"));
    assert!(!format::is_ipv4("10.0.0"));
    assert!(!format::is_version_code("1.2.3-rc"));
    assert!(!format::is_date_string("2024-8-30"));
}
