use super::*;
use chrono::NaiveDate;

fn sample() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 4)
        .expect("date")
        .and_hms_opt(17, 32, 0)
        .expect("time")
}

#[test]
fn timestamp_renders_date_and_time() {
    assert_eq!(timestamp(Some(sample())), "Mar 04, 2025 17:32");
}

#[test]
fn date_renders_date_only() {
    assert_eq!(date(Some(sample())), "Mar 04, 2025");
}

#[test]
fn missing_values_render_as_a_dash() {
    assert_eq!(timestamp(None), "-");
    assert_eq!(date(None), "-");
}
