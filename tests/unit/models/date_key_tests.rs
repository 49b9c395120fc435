// Parameterized tests for DateKey parsing and rendering

use personal_calendar::models::date_key::{DateKey, DateKeyError};
use test_case::test_case;

#[test_case("2024-01-01", 2024, 1, 1; "new year")]
#[test_case("2024-02-29", 2024, 2, 29; "leap day")]
#[test_case("1999-12-31", 1999, 12, 31; "end of millennium")]
#[test_case("0001-01-01", 1, 1, 1; "year one")]
#[test_case("0000-01-01", 0, 1, 1; "year zero")]
#[test_case("9999-12-31", 9999, 12, 31; "last supported day")]
fn test_parses_canonical_keys(text: &str, year: i32, month: u32, day: u32) {
    let key: DateKey = text.parse().expect("canonical key should parse");
    assert_eq!((key.year(), key.month(), key.day()), (year, month, day));
    assert_eq!(key.to_string(), text, "rendering should round-trip");
}

#[test_case("2024-1-01"; "unpadded month")]
#[test_case("2024-01-1"; "unpadded day")]
#[test_case("24-01-01"; "short year")]
#[test_case("2024/01/01"; "wrong separator")]
#[test_case("+024-01-01"; "signed year")]
#[test_case("2024-01-01T00:00"; "trailing time")]
#[test_case(""; "empty")]
#[test_case("someday"; "word")]
fn test_rejects_malformed_keys(text: &str) {
    assert!(matches!(
        text.parse::<DateKey>(),
        Err(DateKeyError::Malformed(_))
    ));
}

#[test_case("2023-02-29"; "no leap day in 2023")]
#[test_case("2024-13-01"; "month thirteen")]
#[test_case("2024-04-31"; "april has thirty days")]
#[test_case("2024-00-10"; "month zero")]
fn test_rejects_impossible_dates(text: &str) {
    assert!(matches!(
        text.parse::<DateKey>(),
        Err(DateKeyError::InvalidDate(_))
    ));
}

#[test_case(2024, 3, 5, "2024-03-05"; "pads month and day")]
#[test_case(987, 11, 20, "0987-11-20"; "pads year")]
fn test_renders_zero_padded(year: i32, month: u32, day: u32, expected: &str) {
    let key = DateKey::from_ymd(year, month, day).unwrap();
    assert_eq!(key.to_string(), expected);
}

#[test_case(10000, 1, 1; "five digit year")]
#[test_case(-1, 12, 31; "negative year")]
fn test_years_outside_four_digits_have_no_key(year: i32, month: u32, day: u32) {
    assert_eq!(DateKey::from_ymd(year, month, day), None);
}

#[test]
fn test_ordering_matches_chronology() {
    let mut keys: Vec<DateKey> = ["2024-10-01", "2024-02-15", "2023-12-31"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    keys.sort();
    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["2023-12-31", "2024-02-15", "2024-10-01"]);
}
