// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pure Selene date model and field ↔ instant conversion.
//!
//! A Selene year holds 13 lunations (months 0–12); a lunation holds 29 or 30
//! whole days (1-indexed).  Year and month are projections of a single
//! **global lunation index** `L`, counted from the calendar's start of time:
//!
//! ```text
//! L = (year − 1) · 13 + month        (bijective for month ∈ [0, 12])
//! ```
//!
//! Both conversion directions are closed-form: fields → instant locates the
//! lunation's new moon through the periodic series and adds whole days;
//! instant → fields estimates `L` from mean synodic motion, refines against
//! the precise new moon, and applies at most one single-lunation boundary
//! correction.  The stateful engine in [`crate::calendar`] and the read-only
//! formatter in [`crate::names`] are both thin layers over these functions.

use crate::epochs::{BASE_YEAR, JDE_REF, JD_START_OF_TIME, MEAN_SYNODIC_MONTH, MONTHS_PER_YEAR};
use crate::instant::days_ratio;
use crate::lunation::{days_in_lunation, new_moon};
use crate::{JulianDate, JulianEphemerisDay, JD};
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Selene calendar date.
///
/// Invariants when produced by this crate: `month ∈ [0, 12]` and
/// `day ∈ [1, days_in_lunation]`.  The fields are public plain integers so
/// that the calendar engine can hold transiently out-of-range values while
/// carrying and borrowing during field arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeleneDate {
    /// Selene year; the first year is 1.
    pub year: i32,
    /// Lunation within the year, 0 through 12.
    pub month: i32,
    /// Day within the lunation, 1 through 29 or 30.
    pub day: i32,
}

impl SeleneDate {
    /// Bundle raw field values. No validation; see the type-level invariants.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Global lunation index of this date's (year, month) pair.
    pub const fn global_lunation(&self) -> i64 {
        (self.year as i64 - BASE_YEAR as i64) * MONTHS_PER_YEAR as i64 + self.month as i64
    }

    /// Inverse of [`global_lunation`](Self::global_lunation): the date of
    /// day 1 of global lunation `l`, using Euclidean division so that
    /// negative indices still yield `month ∈ [0, 12]`.
    pub const fn from_global_lunation(l: i64, day: i32) -> Self {
        Self {
            year: (l.div_euclid(MONTHS_PER_YEAR as i64) + BASE_YEAR as i64) as i32,
            month: l.rem_euclid(MONTHS_PER_YEAR as i64) as i32,
            day,
        }
    }
}

impl std::fmt::Display for SeleneDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Calibration between the global index and the periodic series
// ---------------------------------------------------------------------------

/// Fractional series index of the start-of-time new moon:
/// `(JD_START_OF_TIME − JDE_REF) / MEAN_SYNODIC_MONTH`.
#[inline]
fn series_index_of_epoch() -> f64 {
    days_ratio(JD_START_OF_TIME - JDE_REF.to::<JD>(), MEAN_SYNODIC_MONTH)
}

/// Fixed integer offset aligning global lunation 0 to the start-of-time new
/// moon: the nearest series index to [`series_index_of_epoch`].
#[inline]
pub fn series_offset() -> i64 {
    series_index_of_epoch().round() as i64
}

/// New moon opening global lunation `l`.
#[inline]
pub fn start_of_lunation(l: i64) -> JulianEphemerisDay {
    new_moon(l + series_offset())
}

/// Day count (29 or 30) of global lunation `l`.
#[inline]
pub fn days_in_global_lunation(l: i64) -> u32 {
    days_in_lunation(l + series_offset())
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Instant of 00:00 of the given Selene date: the lunation's new moon plus
/// the elapsed whole days.
pub fn jd_of(date: SeleneDate) -> JulianDate {
    let new_moon_jd = start_of_lunation(date.global_lunation());
    (new_moon_jd + Days::new((date.day - 1) as f64)).to::<JD>()
}

/// Selene date containing the given instant.
///
/// The lunation index is first estimated from mean synodic motion, then
/// refined against the precise new moons on either side (the mean estimate
/// can miss the true lunation by one near a boundary).  A final day-count
/// correction handles instants in the overhang of a lunation that runs
/// longer than its 29-day calendar classification; such instants belong to
/// day 1 of the following month.  Both corrections are part of the
/// algorithm, not error paths.
pub fn date_at(jd: JulianDate) -> SeleneDate {
    let k_approx = days_ratio(jd - JDE_REF.to::<JD>(), MEAN_SYNODIC_MONTH);
    let mut l = (k_approx - series_index_of_epoch()).floor() as i64;

    // Refine the mean-motion estimate with the precise series.
    if jd < start_of_lunation(l).to::<JD>() {
        l -= 1;
    } else if jd >= start_of_lunation(l + 1).to::<JD>() {
        l += 1;
    }

    let new_moon_jd = start_of_lunation(l).to::<JD>();
    let mut day = (jd - new_moon_jd).value().floor() as i32 + 1;

    let max_day = days_in_global_lunation(l) as i32;
    if day > max_day {
        day -= max_day;
        l += 1;
    }

    SeleneDate::from_global_lunation(l, day)
}
