use chrono::{NaiveDate, NaiveTime};

use praytimes::timetable::{self, days_in_month};
use praytimes::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn kamloops_engine() -> PrayTimes {
    let mut pt = PrayTimes::new(Method::Isna);
    pt.adjust(
        SettingsPatch::default()
            .fajr(18.0)
            .isha(15.0)
            .maghrib("0 min")
            .high_lats(HighLatMethod::AngleBased),
    );
    pt
}

const KAMLOOPS: Location = Location {
    latitude: 50.6833,
    longitude: -120.333,
    elevation: 0.0,
};

// ── Calendar ──

#[test]
fn test_february_follows_gregorian_leap_rules() {
    assert_eq!(days_in_month(2024, 2), Ok(29));
    assert_eq!(days_in_month(2000, 2), Ok(29));
    assert_eq!(days_in_month(1900, 2), Ok(28));
    assert_eq!(days_in_month(2023, 2), Ok(28));
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2024, 2), Ok(29));
    assert_eq!(days_in_month(2023, 2), Ok(28));
    assert_eq!(days_in_month(2023, 4), Ok(30));
    assert_eq!(days_in_month(2023, 12), Ok(31));
    assert_eq!(days_in_month(2023, 13), Err(PrayTimesError::InvalidMonth { month: 13 }));
    assert_eq!(days_in_month(2023, 0), Err(PrayTimesError::InvalidMonth { month: 0 }));
    assert_eq!(
        days_in_month(i32::MAX, 1),
        Err(PrayTimesError::InvalidDate { year: i32::MAX, month: 1, day: 1 })
    );
}

// ── Zone offsets ──

#[test]
fn test_vancouver_dst() {
    assert_eq!(is_dst(date(2023, 4, 1), "America/Vancouver"), Ok(true));
    assert_eq!(is_dst(date(2023, 1, 15), "America/Vancouver"), Ok(false));
    let off = zone_offset_by_name(date(2023, 7, 1), "America/Vancouver").unwrap();
    assert_eq!(off.base_hours, -8.0);
    assert_eq!(off.total_hours(), -7.0);
}

#[test]
fn test_zone_without_dst() {
    let off = zone_offset_by_name(date(2024, 6, 1), "Asia/Riyadh").unwrap();
    assert_eq!(off.total_hours(), 3.0);
    assert!(!off.is_dst());
}

#[test]
fn test_unknown_zone() {
    assert_eq!(
        is_dst(date(2023, 4, 1), "Mars/Olympus"),
        Err(PrayTimesError::UnknownTimezone {
            name: "Mars/Olympus".to_string()
        })
    );
}

// ── Month table ──

#[test]
fn test_month_recomputes_offset_per_day() {
    let zone = parse_zone("America/Vancouver").unwrap();
    let table = timetable::month(&kamloops_engine(), 2023, 3, KAMLOOPS, zone, None).unwrap();
    assert_eq!(table.days.len(), 31);
    for entry in &table.days {
        let expected = if entry.date < date(2023, 3, 12) { -8.0 } else { -7.0 };
        assert_eq!(entry.offset.total_hours(), expected, "{}", entry.date);
    }
    // dhuhr jumps by about an hour across the change
    let before = table.days[10].times.prayers.get(PrayerName::Dhuhr).to_string();
    let after = table.days[11].times.prayers.get(PrayerName::Dhuhr).to_string();
    assert!(before.starts_with("12:"), "{}", before);
    assert!(after.starts_with("13:"), "{}", after);
}

#[test]
fn test_month_day_matches_single_call() {
    let zone = parse_zone("America/Vancouver").unwrap();
    let engine = kamloops_engine();
    let table = timetable::month(&engine, 2023, 4, KAMLOOPS, zone, None).unwrap();
    let direct = engine.get_prayer_and_iqamah_times(date(2023, 4, 1), KAMLOOPS, -7.0, false, None);
    assert_eq!(table.days[0].times, direct);
    assert_eq!(table.days[0].times.iqamah.fajr, "06:00");
}

#[test]
fn test_month_rejects_bad_month() {
    let zone = parse_zone("America/Vancouver").unwrap();
    let err = timetable::month(&kamloops_engine(), 2023, 0, KAMLOOPS, zone, None).unwrap_err();
    assert_eq!(err, PrayTimesError::InvalidMonth { month: 0 });
}

// ── Next prayer ──

#[test]
fn test_next_prayer_walks_daily_order() {
    let zone = parse_zone("America/Vancouver").unwrap();
    let entry = timetable::day(&kamloops_engine(), date(2023, 4, 1), KAMLOOPS, zone, None);

    let next = next_prayer(&entry.times, at(14, 0)).unwrap();
    assert_eq!(next.name, PrayerName::Asr);
    assert_eq!(next.time, "16:38");
    assert_eq!(next.iqamah.as_deref(), Some("16:45"));

    let next = next_prayer(&entry.times, at(5, 0)).unwrap();
    assert_eq!(next.name, PrayerName::Sunrise);
    assert_eq!(next.iqamah, None);

    let next = next_prayer(&entry.times, at(0, 0)).unwrap();
    assert_eq!(next.name, PrayerName::Imsak);
}

#[test]
fn test_next_prayer_ignores_display_format() {
    let pt = PrayTimes::new(Method::Isna);
    for (format, shown) in [(TimeFormat::H12, "12:34pm"), (TimeFormat::H24, "12:34")] {
        let day = pt.get_prayer_and_iqamah_times(date(2011, 2, 9), (43.0, -80.0), -5.0, false, Some(format));
        let next = next_prayer(&day, at(10, 0)).unwrap();
        assert_eq!(next.name, PrayerName::Dhuhr);
        assert_eq!(next.time, shown);
    }

    let day = pt.get_prayer_and_iqamah_times(
        date(2011, 2, 9),
        (43.0, -80.0),
        -5.0,
        false,
        Some(TimeFormat::Float),
    );
    let next = next_prayer(&day, at(18, 0)).unwrap();
    assert_eq!(next.name, PrayerName::Isha);
    assert_eq!(day.anchors.get(PrayerName::Isha).to_string(), "19:03");
}

#[test]
fn test_next_prayer_after_last_event() {
    let zone = parse_zone("America/Vancouver").unwrap();
    let entry = timetable::day(&kamloops_engine(), date(2023, 4, 1), KAMLOOPS, zone, None);
    // midnight falls after 00:00 of the next day, so nothing is left
    assert_eq!(next_prayer(&entry.times, at(23, 59)), None);
}
