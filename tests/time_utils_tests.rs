use rschooltimer::models::preferences::TimeFormat;
use rschooltimer::utils::time::{
    add_minutes, day_name, format_seconds, format_time_value, minutes_to_time,
    normalize_time_input, time_to_minutes,
};

#[test]
fn test_time_to_minutes_parses_lax() {
    assert_eq!(time_to_minutes("09:30"), Some(570));
    assert_eq!(time_to_minutes("9:30"), Some(570));
    assert_eq!(time_to_minutes("00:00"), Some(0));
    assert_eq!(time_to_minutes("24:00"), Some(1440));
    assert_eq!(time_to_minutes("09"), None);
    assert_eq!(time_to_minutes("9am"), None);
}

#[test]
fn test_minutes_to_time_wraps_on_the_day() {
    assert_eq!(minutes_to_time(0), "00:00");
    assert_eq!(minutes_to_time(570), "09:30");
    assert_eq!(minutes_to_time(1450), "00:10");
    assert_eq!(minutes_to_time(-10), "23:50");
}

#[test]
fn test_add_minutes_wraps_past_midnight() {
    assert_eq!(add_minutes("23:50", 20).as_deref(), Some("00:10"));
    assert_eq!(add_minutes("09:00", 50).as_deref(), Some("09:50"));
    assert_eq!(add_minutes("00:10", -20).as_deref(), Some("23:50"));
    assert_eq!(add_minutes("garbage", 5), None);
}

#[test]
fn test_twelve_hour_formatting() {
    assert_eq!(format_time_value("00:00", TimeFormat::H12), "12:00 AM");
    assert_eq!(format_time_value("09:05", TimeFormat::H12), "9:05 AM");
    assert_eq!(format_time_value("12:00", TimeFormat::H12), "12:00 PM");
    assert_eq!(format_time_value("13:05", TimeFormat::H12), "1:05 PM");
    assert_eq!(format_time_value("23:59", TimeFormat::H12), "11:59 PM");
}

#[test]
fn test_twenty_four_hour_formatting_is_identity() {
    assert_eq!(format_time_value("09:00", TimeFormat::H24), "09:00");
    assert_eq!(format_time_value("13:05", TimeFormat::H24), "13:05");
}

#[test]
fn test_unparseable_time_value_comes_back_unchanged() {
    assert_eq!(format_time_value("soon", TimeFormat::H12), "soon");
    assert_eq!(format_time_value("--:--", TimeFormat::H12), "--:--");
}

#[test]
fn test_countdown_seconds_format() {
    assert_eq!(format_seconds(0), "0:00");
    assert_eq!(format_seconds(59), "0:59");
    assert_eq!(format_seconds(600), "10:00");
    assert_eq!(format_seconds(3000), "50:00");
}

#[test]
fn test_day_names() {
    assert_eq!(day_name(0), "Sunday");
    assert_eq!(day_name(1), "Monday");
    assert_eq!(day_name(6), "Saturday");
    assert_eq!(day_name(9), "");
}

#[test]
fn test_loose_time_input_normalizes() {
    assert_eq!(normalize_time_input("9").as_deref(), Some("09:00"));
    assert_eq!(normalize_time_input("930").as_deref(), Some("09:30"));
    assert_eq!(normalize_time_input("0930").as_deref(), Some("09:30"));
    assert_eq!(normalize_time_input("9:5").as_deref(), Some("09:05"));
    assert_eq!(normalize_time_input("09:30").as_deref(), Some("09:30"));
    assert_eq!(normalize_time_input(" 1 2 : 3 4 ").as_deref(), Some("12:34"));
}

#[test]
fn test_loose_time_input_clamps_out_of_range() {
    assert_eq!(normalize_time_input("25:99").as_deref(), Some("23:59"));
    assert_eq!(normalize_time_input("99").as_deref(), Some("23:00"));
}

#[test]
fn test_unusable_time_input_is_rejected() {
    assert_eq!(normalize_time_input(""), None);
    assert_eq!(normalize_time_input("??"), None);
    assert_eq!(normalize_time_input("12345"), None);
}
