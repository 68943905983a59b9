//! Integration tests for saju_rs against the astronomical calendar.

use std::sync::Once;

use chrono::{NaiveDate, NaiveDateTime};
use saju_rs::*;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        init(SajuConfig::default()).expect("calendar init");
    });
}

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn ganzhi(chart: &SajuChart) -> [String; 4] {
    [
        chart.pillars.year.to_string(),
        chart.pillars.month.to_string(),
        chart.pillars.day.to_string(),
        chart.pillars.hour.to_string(),
    ]
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
    assert!(matches!(
        init(SajuConfig::default()),
        Err(SajuRsError::AlreadyInitialized)
    ));
}

#[test]
fn birth_before_ipchun() {
    ensure_init();
    let chart = calculate_saju_at(2020, 2, 4, 13, 22, Gender::Male, reference()).unwrap();
    assert_eq!(ganzhi(&chart), ["己亥", "丁丑", "丁丑", "丁未"]);
    assert_eq!(chart.lunar_date, "二〇二〇年正月十一");
    assert_eq!(chart.luck.len(), 10);
    assert_eq!(chart.luck[0].pillar.to_string(), "丙子");
    assert_eq!(chart.luck[0].start_age, 9);
    assert_eq!(chart.luck[0].start_age_korean, 10);
}

#[test]
fn birth_after_ipchun() {
    ensure_init();
    let chart = calculate_saju_at(2020, 2, 4, 18, 22, Gender::Male, reference()).unwrap();
    assert_eq!(ganzhi(&chart), ["庚子", "戊寅", "丁丑", "己酉"]);
    assert_eq!(chart.luck[0].pillar.to_string(), "己卯");
    assert_eq!(chart.luck[0].start_age_korean, 11);
    assert_eq!(chart.luck[9].pillar.to_string(), "戊子");
    assert_eq!(chart.ages.international, 6);
    // six years old, before the first period at ten
    assert_eq!(chart.current_luck_index, None);
}

#[test]
fn late_zi_birth_full_chart() {
    ensure_init();
    let chart = calculate_saju_at(1981, 1, 29, 23, 37, Gender::Male, reference()).unwrap();
    assert_eq!(ganzhi(&chart), ["庚申", "己丑", "丁未", "壬子"]);
    assert_eq!(chart.solar_date, "1981-01-29 23:37:00");
    assert_eq!(chart.lunar_date, "一九八〇年腊月廿四");
    assert_eq!(chart.day_master.hanja(), '丁');

    assert_eq!(chart.ages.international, 45);
    assert_eq!(chart.ages.korean, 46);
    assert_eq!(chart.current_luck_index, Some(4));
    assert_eq!(chart.current_luck().unwrap().pillar.to_string(), "甲午");

    let daily = &chart.daily;
    assert_eq!(daily.date, "2026.2.19");
    assert_eq!(daily.pillar.to_string(), "甲子");
    assert_eq!(daily.ten_god, TenGod::DirectResource);
    assert!(daily.lucky);
    assert!(!daily.clash);
}

#[test]
fn female_forward_luck() {
    ensure_init();
    let chart = calculate_saju_at(2000, 1, 1, 12, 0, Gender::Female, reference()).unwrap();
    assert_eq!(ganzhi(&chart), ["己卯", "丙子", "戊午", "戊午"]);
    assert_eq!(chart.luck[0].pillar.to_string(), "丁丑");
    assert_eq!(chart.luck[0].start_age_korean, 2);
}

#[test]
fn invalid_birth_fields() {
    ensure_init();
    let err = calculate_saju_at(2021, 2, 29, 10, 0, Gender::Male, reference()).unwrap_err();
    assert_eq!(err.user_message(), "입력한 날짜 또는 시간이 올바르지 않습니다.");
    assert!(calculate_saju_at(2020, 13, 1, 10, 0, Gender::Male, reference()).is_err());
    assert!(calculate_saju_at(2020, 1, 1, 24, 0, Gender::Male, reference()).is_err());
}

#[test]
fn lunar_leap_request() {
    ensure_init();
    let request = SajuRequest {
        calendar: CalendarKind::LunarLeap,
        solar_date: String::new(),
        time: String::new(),
        unknown_time: true,
        gender: Gender::Female,
        lunar_year: 2020,
        lunar_month: 4,
        lunar_day: 2,
    };
    let chart = calculate_saju_for(&request, reference()).unwrap();
    assert_eq!(chart.solar_date, "2020-05-24 00:00:00");
    assert_eq!(chart.lunar_date, "二〇二〇年闰四月初二");
}

#[test]
fn request_from_json() {
    ensure_init();
    let request: SajuRequest = serde_json::from_str(
        r#"{"calendar":"solar","solar_date":"1981-01-29","time":"23:37","gender":"male"}"#,
    )
    .unwrap();
    let chart = calculate_saju_for(&request, reference()).unwrap();
    assert_eq!(chart.pillars.hour.to_string(), "壬子");
}

#[test]
fn request_errors_map_to_messages() {
    ensure_init();
    let mut request = SajuRequest {
        calendar: CalendarKind::LunarLeap,
        solar_date: String::new(),
        time: "10:00".into(),
        unknown_time: false,
        gender: Gender::Male,
        lunar_year: 2021,
        lunar_month: 4,
        lunar_day: 1,
    };
    let err = calculate_saju_for(&request, reference()).unwrap_err();
    assert_eq!(
        err.user_message(),
        "선택한 연도에는 해당 윤달 월이 없습니다. 월/윤달 설정을 확인해 주세요."
    );

    request.time = "25:00".into();
    let err = calculate_saju_for(&request, reference()).unwrap_err();
    assert_eq!(err.user_message(), "태어난 시간 형식이 올바르지 않습니다.");
}

#[test]
fn lunar_helpers() {
    ensure_init();
    assert_eq!(leap_month_for_year(2020).unwrap(), 4);
    assert_eq!(leap_month_for_year(2021).unwrap(), 0);
    assert_eq!(valid_lunar_days(2020, 4, true).len(), 29);
    assert_eq!(valid_lunar_days(2020, 4, false), (1..=30).collect::<Vec<_>>());
    assert!(valid_lunar_days(2021, 4, true).is_empty());
}

#[test]
fn chart_serializes() {
    ensure_init();
    let chart = calculate_saju_at(1981, 1, 29, 23, 37, Gender::Male, reference()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["gender"], "male");
    assert_eq!(json["luck"].as_array().unwrap().len(), 10);
}

#[test]
fn wall_clock_reading_is_today() {
    ensure_init();
    // 00:30 on the host clock is already the next day, whatever the
    // calendar's UTC offset
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2026, 2, 20)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap(),
    );
    let chart = calculate_saju_with_clock(1981, 2, 20, 10, 0, Gender::Male, &clock).unwrap();
    assert_eq!(chart.daily.date, "2026.2.20");
    assert_eq!(chart.ages.international, 45);
}
