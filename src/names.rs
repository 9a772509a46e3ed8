// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Lunation names, the 8-day planetary week, and date formatting
//!
//! The thirteen lunations of a Selene year carry traditional names.  The
//! naming cycle is anchored to the Sun, not to the calendar's month numbers:
//! the first new moon at or after a year's December solstice opens the Wolf
//! Moon, and the remaining names follow in order.  Because the solstice
//! drifts against the lunation grid, the same month number maps to a
//! different name in different years.
//!
//! Independently of lunations, days cycle through an 8-day planetary week
//! counted in whole days from [`WEEK_EPOCH`].

use crate::date::date_at;
use crate::epochs::{JD_0, MEAN_SYNODIC_MONTH, WEEK_EPOCH};
use crate::instant::days_ratio;
use crate::solar::december_solstice;
use crate::{JulianDate, JD};

/// The thirteen lunation names and their traditional readings, in cycle
/// order starting from the first lunation after the December solstice.
const LUNATIONS: [(&str, &str); 13] = [
    ("Wolf Moon", "Howling in deep winter, marking the year's start."),
    ("Snow Moon", "Quiet reflection amid icy calm."),
    ("Storm Moon", "Heralding fierce, late-winter storms."),
    ("Worm Moon", "Signaling the first stirrings of renewal."),
    ("Seed Moon", "When hope is sown and new growth begins."),
    ("Flower Moon", "Celebrating blooming life in spring."),
    ("Honey Moon", "Early summer warmth and fruitful days."),
    ("Thunder Moon", "The intense, stormy heart of summer."),
    ("Corn Moon", "Crops ripen as autumn approaches."),
    ("Harvest Moon", "Bounty of early autumn reaping the earth's gifts."),
    ("Ancestor’s Moon", "A time for remembrance and ancestral wisdom."),
    ("Frost Moon", "A delicate chill as the year winds down."),
    ("Hecate’s Moon", "The secret, transformative moon that closes the cycle."),
];

/// The eight planetary week-day names, in cycle order from the week epoch.
const PLANET_WEEK_DAYS: [&str; 8] = [
    "Mercva", "Venuva", "Earava", "Marva", "Jupva", "Saturva", "Urava", "Neptuva",
];

/// Index (counted from the [`JD_0`] reference new moon by mean motion) of the
/// first lunation beginning at or after the given year's December solstice.
pub fn first_lunation_after_solstice(year: i32) -> i64 {
    let since_reference = december_solstice(year) - JD_0.to::<JD>();
    days_ratio(since_reference, MEAN_SYNODIC_MONTH).ceil() as i64
}

/// Position of a lunation within the 13-name cycle of the given year.
fn cycle_index(year: i32, lunation: i32) -> usize {
    let first = first_lunation_after_solstice(year);
    (lunation as i64 - first).rem_euclid(LUNATIONS.len() as i64) as usize
}

/// Name of the given lunation of the given year.
pub fn lunation_name(year: i32, lunation: i32) -> &'static str {
    LUNATIONS[cycle_index(year, lunation)].0
}

/// Traditional reading of the given lunation of the given year.
pub fn lunation_description(year: i32, lunation: i32) -> &'static str {
    LUNATIONS[cycle_index(year, lunation)].1
}

/// Planetary week-day name of the given instant.
///
/// Whole days elapsed since the week epoch, taken modulo 8; total over the
/// entire axis, including instants before the epoch.
pub fn weekday(jd: JulianDate) -> &'static str {
    let days_since_epoch = (jd - WEEK_EPOCH).value().floor() as i64;
    PLANET_WEEK_DAYS[days_since_epoch.rem_euclid(PLANET_WEEK_DAYS.len() as i64) as usize]
}

/// Formatted description of the instant: year, numbered and named lunation,
/// day, planetary week day, and the fractional Julian Day itself.
///
/// Read-only; goes through the same conversion as the calendar engine
/// without touching any state.
pub fn describe(jd: JulianDate) -> String {
    let date = date_at(jd);
    format!(
        "Selene Date: Year {}, Lunation {} {}, Day {}, Weekday {}, JD {:.5}",
        date.year,
        date.month,
        lunation_name(date.year, date.month),
        date.day,
        weekday(jd),
        jd.value()
    )
}
