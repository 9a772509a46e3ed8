// SPDX-License-Identifier: AGPL-3.0-or-later

use chrono::FixedOffset;
use qtty::Days;
use selene_calendar::names::{first_lunation_after_solstice, lunation_name, weekday};
use selene_calendar::solar::{december_solstice, year_from_solstice, SolarEvent};
use selene_calendar::{
    date_at, jd_of, CalendarSystem, Field, FieldError, JulianDate, SeleneCalendar, SeleneDate,
};

fn utc_calendar() -> SeleneCalendar {
    SeleneCalendar::with_offset(FixedOffset::east_opt(0).unwrap())
}

#[test]
fn engine_roundtrips_through_millis() {
    let mut cal = utc_calendar();
    cal.set_date(5_780, 7, 22);
    let millis = cal.time_millis();

    let mut other = utc_calendar();
    other.set_time_millis(millis);
    assert_eq!(SeleneDate::new(5_780, 7, 22), other.date());
}

#[test]
fn adding_thirteen_months_equals_adding_one_year() {
    let mut months = utc_calendar();
    months.set_date(5_780, 2, 9);
    months.add(Field::Month, 13);

    let mut years = utc_calendar();
    years.set_date(5_780, 2, 9);
    years.add(Field::Year, 1);

    assert_eq!(months.date(), years.date());
    assert_eq!(5_781, months.get(Field::Year));
    assert_eq!(2, months.get(Field::Month));
}

#[test]
fn adding_days_overflows_into_next_lunation() {
    let mut cal = utc_calendar();
    cal.set_date(5_780, 0, 1);
    let max = cal.actual_maximum(Field::Day);
    cal.set(Field::Day, max - 1);
    cal.add(Field::Day, 2);
    assert_eq!(1, cal.get(Field::Day));
    assert_eq!(1, cal.get(Field::Month));
    assert_eq!(5_780, cal.get(Field::Year));
}

#[test]
fn rolling_month_wraps_and_preserves_year() {
    let mut cal = utc_calendar();
    cal.set_date(5_780, 0, 5);
    cal.roll(Field::Month, true);
    assert_eq!(1, cal.get(Field::Month));
    assert_eq!(5_780, cal.get(Field::Year));

    cal.set_date(5_780, 12, 5);
    cal.roll(Field::Month, true);
    assert_eq!(0, cal.get(Field::Month));
    assert_eq!(5_780, cal.get(Field::Year));

    cal.roll(Field::Month, false);
    assert_eq!(12, cal.get(Field::Month));
    assert_eq!(5_780, cal.get(Field::Year));
}

#[test]
fn rolling_day_wraps_at_the_lunation_edges() {
    let mut cal = utc_calendar();
    cal.set_date(5_780, 4, 1);
    cal.roll(Field::Day, true);
    assert_eq!(2, cal.get(Field::Day));
    cal.roll(Field::Day, false);
    assert_eq!(1, cal.get(Field::Day));
    cal.roll(Field::Day, false);
    assert_eq!(cal.actual_maximum(Field::Day), cal.get(Field::Day));
}

#[test]
fn actual_maximum_day_is_29_or_30() {
    let mut cal = utc_calendar();
    for month in 0..13 {
        cal.set_date(5_780, month, 1);
        let max = cal.actual_maximum(Field::Day);
        assert!(max == 29 || max == 30, "month {month}: {max}");
    }
}

#[test]
fn explicit_reconciliation_matches_lazy_reads() {
    let mut cal = utc_calendar();
    cal.set_date(5_780, 6, 12);
    cal.complete();
    assert_eq!(SeleneDate::new(5_780, 6, 12), cal.date());

    cal.compute_time();
    let millis = cal.time_millis();
    cal.set_time_millis(millis);
    cal.compute_fields();
    assert_eq!(SeleneDate::new(5_780, 6, 12), cal.date());
}

#[test]
fn winter_solstice_2024_matches_calibration() {
    let jd = december_solstice(2024);
    assert!((jd - JulianDate::new(2_460_665.888_89)).abs() < Days::new(0.01));
}

#[test]
fn solar_events_step_by_a_tropical_year() {
    let step = SolarEvent::JuneSolstice.instant(2026) - SolarEvent::JuneSolstice.instant(2025);
    assert!((step - Days::new(365.242_2)).abs() < Days::new(1e-9));
}

#[test]
fn solstice_year_is_gregorian_plus_3760() {
    // Mid-2025 on the continuous axis.
    let jd = JulianDate::new(2_460_918.0);
    assert_eq!(2_025 + 3_760, year_from_solstice(jd));
}

#[test]
fn current_solstice_year_is_in_the_modern_range() {
    // The Gregorian year plus 3760; anything earlier means the anchor broke.
    let cal = utc_calendar();
    assert!(cal.current_year_from_solstice() >= 2_025 + 3_760);
}

#[test]
fn first_lunation_after_solstice_is_positive_and_named_wolf() {
    let first = first_lunation_after_solstice(2024);
    assert!(first > 0);
    assert_eq!("Wolf Moon", lunation_name(2024, first as i32));
}

#[test]
fn planet_week_cycles_over_sixteen_days() {
    let names = [
        "Mercva", "Venuva", "Earava", "Marva", "Jupva", "Saturva", "Urava", "Neptuva",
    ];
    let epoch = JulianDate::new(347_998.0);
    for offset in 0..16 {
        let expected = names[offset % 8];
        assert_eq!(expected, weekday(epoch + Days::new(offset as f64)));
    }
}

#[test]
fn planet_week_before_epoch_wraps_to_neptuva() {
    let epoch = JulianDate::new(347_998.0);
    assert_eq!("Neptuva", weekday(epoch - Days::new(1.0)));
}

#[test]
fn pure_conversion_agrees_with_the_engine() {
    let date = SeleneDate::new(5_784, 9, 3);
    let mut cal = utc_calendar();
    cal.set_date(date.year, date.month, date.day);
    let millis = cal.time_millis();
    let engine_jd = cal.julian_date(millis, true);
    // The engine stores whole milliseconds; the pure conversion is exact.
    assert!((engine_jd - jd_of(date)).abs() < Days::new(1e-7));
    assert_eq!(date, date_at(engine_jd));
}

#[test]
fn unknown_field_index_is_rejected() {
    assert_eq!(Err(FieldError::Unsupported(3)), Field::try_from(3));
    let message = FieldError::Unsupported(3).to_string();
    assert!(message.contains("3"), "{message}");
}

#[cfg(feature = "serde")]
#[test]
fn serde_date_and_instant_roundtrip() {
    let date = SeleneDate::new(5_780, 3, 15);
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(date, serde_json::from_str(&json).unwrap());

    let jd = JulianDate::new(2_460_556.5);
    let json = serde_json::to_string(&jd).unwrap();
    assert_eq!(json, "2460556.5");
    let back: JulianDate = serde_json::from_str(&json).unwrap();
    assert_eq!(jd, back);
}
