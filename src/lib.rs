// SPDX-License-Identifier: AGPL-3.0-or-later

//! Selene Calendar
//!
//! A lunisolar calendar of 13 lunations per year, anchored to the December
//! solstice, with bidirectional conversion between broken-out date fields
//! and continuous time.
//!
//! # Core types
//!
//! - [`SeleneCalendar`] — stateful engine reconciling a millisecond counter
//!   with broken-out fields.
//! - [`SeleneDate`] — plain `(year, month, day)` value type.
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`.
//! - [`JulianEphemerisDay`] — type alias for `Time<JDE>`.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`lunation`] | New-moon series, lunation lengths, phases, eclipses |
//! | [`solar`] | Equinox/solstice prediction and solstice-anchored years |
//! | [`names`] | Lunation names, the 8-day planetary week, formatting |
//! | [`epochs`] | Reference instants and mean cycle lengths |
//!
//! # Quickstart
//!
//! ```rust
//! use selene_calendar::{date_at, jd_of, SeleneDate};
//!
//! // Day 15 of the 4th lunation of year 5780.
//! let date = SeleneDate::new(5780, 3, 15);
//! let jd = jd_of(date);
//!
//! // And back again.
//! assert_eq!(date, date_at(jd));
//! ```
//!
//! # Time scales
//!
//! The following markers implement [`TimeScale`]:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`JDE`] | Julian Ephemeris Day |
//! | [`UnixDays`] | Days since the Unix epoch |
//!
//! The JD and JDE axes are treated as numerically identical; the truncated
//! new-moon series is far less precise than the dynamical-time difference
//! between them.

mod calendar;
mod date;
pub mod epochs;
pub(crate) mod instant;
pub mod lunation;
pub mod names;
pub mod solar;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{CalendarSystem, Field, FieldError, SeleneCalendar};
pub use date::{date_at, days_in_global_lunation, jd_of, start_of_lunation, SeleneDate};
pub use instant::{Time, TimeScale};
pub use scales::{UnixDays, JD, JDE};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Julian Ephemeris Day — dynamical Julian day used by ephemeris formulas.
///
/// This is a type alias for [`Time<JDE>`].
pub type JulianEphemerisDay = Time<JDE>;
