// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Lunar prediction — new moons, lunation lengths, moon phases, eclipses
//!
//! This module implements the new-moon timing algorithm from Chapter 49 of
//! *Jean Meeus — Astronomical Algorithms (2nd ed. 1998)*, truncated to the
//! eleven largest periodic terms.  Everything the calendar knows about the
//! Moon derives from [`new_moon`]: lunation lengths, the 29/30-day
//! classification of each lunation, and (via mean motion) the intermediate
//! phases.
//!
//! ## Quick example
//! ```rust
//! use selene_calendar::lunation;
//!
//! // New moon of lunation 0 of the Meeus series (2000-01-06).
//! let nm = lunation::new_moon(0);
//! assert!((nm.value() - 2_451_550.25).abs() < 1.0);
//!
//! // Every lunation is 29 or 30 calendar days long.
//! assert!(matches!(lunation::days_in_lunation(0), 29 | 30));
//! ```
//!
//! ## Valid time range
//! The truncated series targets sub-hour accuracy within several centuries of
//! the reference epoch (J2000) and degrades slowly outside that window.  Any
//! integer lunation index is accepted; accuracy loss is silent, never an
//! error.

use crate::epochs::{JDE_REF, JD_0, JD_ECLIPSE_0, MEAN_SYNODIC_MONTH, SAROS_CYCLE};
use crate::JulianEphemerisDay;
use qtty::Days;

/// Reduce an angle in degrees into `[0, 360)`.
#[inline]
fn normalized_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Instant of the new moon opening lunation `k` of the Meeus series.
///
/// `k = 0` corresponds to the reference new moon of 2000-01-06 ([`JDE_REF`]);
/// negative indices reach into the past.  The mean instant (a quartic in
/// `T = k/1236.85`) is corrected by an eleven-term sum of sine contributions
/// in the Sun's mean anomaly `M`, the Moon's mean anomaly `M′`, and the
/// Moon's argument of latitude `F`.
///
/// Deterministic, pure, and total over `i64`.
pub fn new_moon(k: i64) -> JulianEphemerisDay {
    let k = k as f64;
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde_mean = JDE_REF.value()
        + MEAN_SYNODIC_MONTH.value() * k
        + 0.000_133_7 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    // Sun's mean anomaly.
    let m = normalized_degrees(2.5534 + 29.105_356_69 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3);
    // Moon's mean anomaly.
    let mp = normalized_degrees(
        201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3 - 0.000_000_058 * t4,
    );
    // Moon's argument of latitude.
    let f = normalized_degrees(
        160.7108 + 390.670_502_74 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3 + 0.000_000_011 * t4,
    );

    let m = m.to_radians();
    let mp = mp.to_radians();
    let f = f.to_radians();

    // Eleven largest periodic terms of Meeus table 49.a.
    let delta_jde = -0.407_20 * mp.sin()
        + 0.172_41 * m.sin()
        + 0.016_08 * (2.0 * mp).sin()
        + 0.010_39 * (2.0 * f).sin()
        + 0.007_39 * (mp - m).sin()
        - 0.005_14 * (mp + m).sin()
        + 0.002_08 * (2.0 * m).sin()
        - 0.001_11 * (mp - 2.0 * f).sin()
        - 0.000_57 * (mp + 2.0 * f).sin()
        + 0.000_56 * (2.0 * mp + m).sin()
        - 0.000_42 * (3.0 * mp).sin();

    JulianEphemerisDay::new(jde_mean + delta_jde)
}

/// Mean (uncorrected) new moon of lunation `k`, counted from the calendar
/// reference new moon [`JD_0`] by mean synodic motion.
#[inline]
pub fn mean_new_moon(k: i64) -> JulianEphemerisDay {
    JD_0 + MEAN_SYNODIC_MONTH * k as f64
}

/// Length of lunation `k`: the interval between its new moon and the next.
///
/// Always positive — consecutive new moons are ≈29.27 to ≈29.83 days apart.
#[inline]
pub fn lunation_length(k: i64) -> Days {
    new_moon(k + 1) - new_moon(k)
}

/// Calendar day count of lunation `k`: 29 or 30.
///
/// A lunation shorter than the mean synodic month holds 29 whole days;
/// one at or above the mean holds 30.
#[inline]
pub fn days_in_lunation(k: i64) -> u32 {
    if lunation_length(k) < MEAN_SYNODIC_MONTH {
        29
    } else {
        30
    }
}

// ---------------------------------------------------------------------------
// Mean-motion phase predictions
// ---------------------------------------------------------------------------

/// Full moon of lunation `k`, half a mean synodic month after the mean new moon.
#[inline]
pub fn full_moon(k: i64) -> JulianEphemerisDay {
    mean_new_moon(k) + MEAN_SYNODIC_MONTH * 0.5
}

/// First-quarter moon of lunation `k`.
#[inline]
pub fn first_quarter_moon(k: i64) -> JulianEphemerisDay {
    mean_new_moon(k) + MEAN_SYNODIC_MONTH * 0.25
}

/// Third-quarter moon of lunation `k`.
#[inline]
pub fn third_quarter_moon(k: i64) -> JulianEphemerisDay {
    mean_new_moon(k) + MEAN_SYNODIC_MONTH * 0.75
}

/// Eve of the dark moon closing lunation `k − 1`: one day before the mean
/// new moon of lunation `k`.
#[inline]
pub fn dark_moon_eve(k: i64) -> JulianEphemerisDay {
    mean_new_moon(k) - Days::new(1.0)
}

// ---------------------------------------------------------------------------
// Eclipse extrapolation
// ---------------------------------------------------------------------------

/// `k`-th repetition of the reference eclipse, one Saros cycle apart.
///
/// Linear extrapolation only; eclipse *geometry* repeats approximately, the
/// instant drifts by about 8 hours per cycle in local terms.
#[inline]
pub fn eclipse(k: i64) -> JulianEphemerisDay {
    JD_ECLIPSE_0 + SAROS_CYCLE * k as f64
}

/// `k`-th exeligmos (triple-Saros) repetition of the reference eclipse,
/// which recurs near the same geographic longitude.
#[inline]
pub fn exeligmos_eclipse(k: i64) -> JulianEphemerisDay {
    JD_ECLIPSE_0 + SAROS_CYCLE * (3 * k) as f64
}
