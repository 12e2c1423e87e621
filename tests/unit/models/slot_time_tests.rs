// Unit tests for SlotTime parsing and arithmetic

use festival_timetable::models::slot::SlotTime;
use test_case::test_case;

#[test_case("00:00", 0 ; "midnight")]
#[test_case("09:30", 570 ; "morning")]
#[test_case("13:00", 780 ; "afternoon")]
#[test_case("23:59", 1439 ; "last minute")]
fn test_parse_valid_times(input: &str, minutes: u16) {
    let time: SlotTime = input.parse().unwrap();
    assert_eq!(time.minutes(), minutes);
    assert_eq!(time.to_string(), input);
}

#[test_case("" ; "empty")]
#[test_case("24:00" ; "hour out of range")]
#[test_case("12:60" ; "minute out of range")]
#[test_case("9:30" ; "single digit hour")]
#[test_case("12-30" ; "wrong separator")]
#[test_case("12:30:00" ; "seconds")]
#[test_case("ab:cd" ; "not numeric")]
fn test_parse_invalid_times(input: &str) {
    assert!(input.parse::<SlotTime>().is_err());
}

#[test_case("13:00", 3, "14:30" ; "afternoon run")]
#[test_case("23:30", 2, "00:30" ; "across midnight")]
#[test_case("15:00", 1, "15:30" ; "single slot")]
#[test_case("22:00", 0, "22:00" ; "no slots")]
fn test_after_slots(start: &str, slots: usize, expected: &str) {
    let start: SlotTime = start.parse().unwrap();
    assert_eq!(start.after_slots(slots).to_string(), expected);
}

#[test_case("23:30", "00:00", 30 ; "across midnight")]
#[test_case("18:00", "19:30", 90 ; "same evening")]
#[test_case("14:00", "02:00", 720 ; "festival night")]
fn test_minutes_since(earlier: &str, later: &str, minutes: u16) {
    let earlier: SlotTime = earlier.parse().unwrap();
    let later: SlotTime = later.parse().unwrap();
    assert_eq!(later.minutes_since(earlier), minutes);
}

#[test]
fn test_serde_uses_hh_mm_strings() {
    let time: SlotTime = serde_json::from_str("\"18:30\"").unwrap();
    assert_eq!(serde_json::to_string(&time).unwrap(), "\"18:30\"");
    assert!(serde_json::from_str::<SlotTime>("\"7pm\"").is_err());
}
