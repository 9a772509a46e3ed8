// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reference epochs and cycle lengths of the Selene calendar.
//!
//! These are process-wide immutable calibration values: fixed instants on the
//! Julian-Date axis plus the mean cycle lengths used for linear extrapolation.
//! They are never recomputed at run time.

use crate::{JulianDate, JulianEphemerisDay};
use qtty::Days;

/// Meeus reference new moon (lunation k = 0 of the periodic series),
/// 2000-01-06 ≈ 18:14 TT.
pub const JDE_REF: JulianEphemerisDay = JulianEphemerisDay::new(2_451_550.097_65);

/// Calendar reference new moon used for lunation naming and mean motion,
/// September 2024.
pub const JD_0: JulianEphemerisDay = JulianEphemerisDay::new(2_460_556.580_372);

/// New moon opening global lunation 0, the calendar's start of time.
pub const JD_START_OF_TIME: JulianDate = JulianDate::new(347_998.466_192);

/// Epoch of the 8-day planetary week: `floor(JD_START_OF_TIME)`.
pub const WEEK_EPOCH: JulianDate = JulianDate::new(347_998.0);

/// First winter solstice after the start of time; year counting is anchored
/// here (the year containing it is year 1).
pub const JD_FIRST_SOLSTICE: JulianDate = JulianDate::new(348_072.958_333);

/// Reference eclipse instant for Saros-cycle extrapolation, September 2024.
pub const JD_ECLIPSE_0: JulianEphemerisDay = JulianEphemerisDay::new(2_460_571.614_010);

/// Mean synodic month — new moon to new moon.
pub const MEAN_SYNODIC_MONTH: Days = Days::new(29.530_59);

/// Saros cycle, after which eclipse geometry approximately repeats.
pub const SAROS_CYCLE: Days = Days::new(6_585.321_3);

/// Mean tropical year — equinox to equinox.
pub const TROPICAL_YEAR: Days = Days::new(365.242_2);

/// Twelve mean synodic months.
pub const LUNAR_YEAR: Days = Days::new(354.367_08);

/// March equinox of the calibration year.
pub const JD_MARCH_EQUINOX: JulianDate = JulianDate::new(2_460_389.875_694);

/// June solstice of the calibration year.
pub const JD_JUNE_SOLSTICE: JulianDate = JulianDate::new(2_460_481.612_5);

/// September equinox of the calibration year.
pub const JD_SEPTEMBER_EQUINOX: JulianDate = JulianDate::new(2_460_576.263_194);

/// December solstice of the calibration year.
pub const JD_DECEMBER_SOLSTICE: JulianDate = JulianDate::new(2_460_665.888_889_9);

/// Gregorian year the solstice/equinox reference instants belong to.
pub const CALIBRATION_YEAR: i32 = 2024;

/// The first Selene year is 1, not 0.
pub const BASE_YEAR: i32 = 1;

/// Lunations per Selene year.
pub const MONTHS_PER_YEAR: i32 = 13;
