use super::*;

#[test]
fn formats_epoch() {
    assert_eq!(format_timestamp_ms(0), "1970-01-01 00:00:00 UTC");
}

#[test]
fn formats_known_instant_and_drops_millis() {
    // 2024-06-01T13:45:00.999Z
    assert_eq!(format_timestamp_ms(1_717_249_500_999), "2024-06-01 13:45:00 UTC");
}

#[test]
fn negative_millis_round_down_to_previous_second() {
    assert_eq!(format_timestamp_ms(-1), "1969-12-31 23:59:59 UTC");
}

#[test]
fn out_of_range_renders_dash() {
    assert_eq!(format_timestamp_ms(i64::MAX), "-");
}
