use rtimesheet::core::duration::{encode_seconds, format_hour_min, from_minutes, to_minutes};

#[test]
fn test_encode_discards_sub_minute_seconds() {
    // 5400 s = 1h30m00s
    assert_eq!(encode_seconds(5400), 1.30);
    // 9005 s = 2h30m05s → the 5 trailing seconds are floored away
    assert_eq!(encode_seconds(9005), 2.30);
    assert_eq!(encode_seconds(0), 0.0);
    assert_eq!(encode_seconds(59), 0.0);
    assert_eq!(encode_seconds(60), 0.01);
}

#[test]
fn test_round_trip_law() {
    // for any v produced by encode, from_minutes(to_minutes(v)) == v
    for secs in [0, 59, 60, 3600, 5400, 9005, 86399, 123456, 359999] {
        let v = encode_seconds(secs);
        assert_eq!(from_minutes(to_minutes(v)), v, "failed for secs={secs}");
    }

    // the worked example from the report documentation
    assert_eq!(encode_seconds(9005), 2.30);
    assert_eq!(to_minutes(2.30), 150);
    assert_eq!(from_minutes(150), 2.30);
}

#[test]
fn test_to_minutes_rounds_the_fraction() {
    // 12.59 is not exactly representable as a binary float; truncating the
    // fraction would read 58 minutes instead of 59
    assert_eq!(to_minutes(12.59), 12 * 60 + 59);
    assert_eq!(to_minutes(0.01), 1);
    assert_eq!(to_minutes(1.30), 90);
    assert_eq!(to_minutes(0.0), 0);
}

#[test]
fn test_every_minute_of_a_day_round_trips() {
    for m in 0..(24 * 60) {
        let v = from_minutes(m);
        assert_eq!(to_minutes(v), m, "failed for minutes={m}");
    }
}

#[test]
fn test_format_keeps_two_fraction_digits() {
    assert_eq!(format_hour_min(2.30), "2.30");
    assert_eq!(format_hour_min(3.05), "3.05");
    assert_eq!(format_hour_min(0.0), "0.00");
    assert_eq!(format_hour_min(encode_seconds(5400)), "1.30");
}
