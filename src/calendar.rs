// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Stateful calendar engine
//!
//! [`SeleneCalendar`] keeps two representations of one moment — a signed
//! millisecond count since the Unix epoch and a broken-out [`SeleneDate`] —
//! and lazily reconciles them.  Whichever side was written last is the
//! **authority**; the other side is recomputed on demand through the pure
//! conversions in [`crate::date`].
//!
//! Field access goes through the [`Field`] enum (or its numeric indices via
//! `TryFrom<i32>`), and mutation comes in two flavours borrowed from the
//! classic calendar API:
//!
//! * [`add`](SeleneCalendar::add) — arithmetic with carry: adding a month to
//!   the last month of a year moves into the next year.
//! * [`roll`](SeleneCalendar::roll) — cyclic within the field: rolling the
//!   month up from 12 wraps to 0 and leaves the year untouched.
//!
//! A fixed UTC offset (taken from the local zone by default) shifts the
//! continuous axis before field extraction, so the broken-out date reflects
//! local civil midnight rather than UTC midnight.

use chrono::{FixedOffset, Local, Offset, Utc};
use thiserror::Error;

use crate::date::{date_at, days_in_global_lunation, jd_of, SeleneDate};
use crate::epochs::BASE_YEAR;
use crate::instant::{MS_PER_DAY, UNIX_EPOCH_JD};
use crate::names::{describe, weekday};
use crate::solar::year_from_solstice;
use crate::JulianDate;

/// Error raised when a numeric field index has no [`Field`] counterpart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The index is outside the supported `0..=2` range.
    #[error("unsupported calendar field index {0}")]
    Unsupported(i32),
}

/// The three broken-out fields of a Selene date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    /// Solstice-anchored year, starting at 1.
    Year,
    /// Lunation within the year, 0 through 12.
    Month,
    /// Day within the lunation, 1 through 29 or 30.
    Day,
}

impl TryFrom<i32> for Field {
    type Error = FieldError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Field::Year),
            1 => Ok(Field::Month),
            2 => Ok(Field::Day),
            other => Err(FieldError::Unsupported(other)),
        }
    }
}

/// Which representation was written last and therefore wins a reconciliation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Authority {
    /// The broken-out fields are authoritative.
    Fields,
    /// The millisecond counter is authoritative.
    Time,
}

/// Bidirectional reconciliation between a continuous time value and
/// broken-out fields.
///
/// Implementors keep both representations and recompute the stale one from
/// the authoritative one.  [`complete`](CalendarSystem::complete) brings the
/// two sides back into agreement.
pub trait CalendarSystem {
    /// Recompute the continuous time value from the fields.
    fn compute_time(&mut self);

    /// Recompute the broken-out fields from the continuous time value.
    fn compute_fields(&mut self);

    /// Reconcile both representations from whichever side is authoritative.
    fn complete(&mut self);
}

/// The Selene calendar engine.
///
/// Not synchronised: mutation requires `&mut self` and a shared instance
/// needs external locking.  The pure predictor functions in the other
/// modules are freely shareable.
#[derive(Debug, Clone)]
pub struct SeleneCalendar {
    /// Fixed UTC offset applied before field extraction.
    offset: FixedOffset,
    /// Milliseconds since the Unix epoch, UTC.
    time_millis: i64,
    /// Broken-out local date.
    date: SeleneDate,
    authority: Authority,
    in_sync: bool,
}

impl SeleneCalendar {
    /// Engine initialised to the current instant in the local zone's
    /// current UTC offset.
    pub fn new() -> Self {
        Self::with_offset(Local::now().offset().fix())
    }

    /// Engine initialised to the current instant with an explicit offset.
    ///
    /// The fields start stale and are derived on first read.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset,
            time_millis: Utc::now().timestamp_millis(),
            date: SeleneDate::new(BASE_YEAR, 0, 1),
            authority: Authority::Time,
            in_sync: false,
        }
    }

    /// The engine's fixed UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    // ── continuous side ───────────────────────────────────────────────

    /// Set the continuous value; the fields become stale until read.
    pub fn set_time_millis(&mut self, millis: i64) {
        self.time_millis = millis;
        self.authority = Authority::Time;
        self.in_sync = false;
    }

    /// Milliseconds since the Unix epoch, recomputed from the fields first
    /// if those are authoritative.
    pub fn time_millis(&mut self) -> i64 {
        if !self.in_sync {
            self.complete();
        }
        self.time_millis
    }

    /// Julian Date of a millisecond count, optionally shifted into the
    /// engine's local offset.
    pub fn julian_date(&self, millis: i64, apply_offset: bool) -> JulianDate {
        let shift_ms = if apply_offset {
            self.offset.local_minus_utc() as i64 * 1_000
        } else {
            0
        };
        JulianDate::from_unix_millis(millis + shift_ms)
    }

    // ── field side ────────────────────────────────────────────────────

    /// Read a field, reconciling from the continuous value if needed.
    pub fn get(&mut self, field: Field) -> i32 {
        if !self.in_sync {
            self.complete();
        }
        match field {
            Field::Year => self.date.year,
            Field::Month => self.date.month,
            Field::Day => self.date.day,
        }
    }

    /// Write a field; the continuous value becomes stale until read.
    ///
    /// Out-of-range values are accepted and normalised on the next
    /// reconciliation (a month of 13 carries into the next year).
    pub fn set(&mut self, field: Field, value: i32) {
        // The other fields must be current before one is overwritten.
        if !self.in_sync && self.authority == Authority::Time {
            self.compute_fields();
        }
        match field {
            Field::Year => self.date.year = value,
            Field::Month => self.date.month = value,
            Field::Day => self.date.day = value,
        }
        self.authority = Authority::Fields;
        self.in_sync = false;
    }

    /// Set all three fields at once.
    pub fn set_date(&mut self, year: i32, month: i32, day: i32) {
        self.date = SeleneDate::new(year, month, day);
        self.authority = Authority::Fields;
        self.in_sync = false;
    }

    /// The reconciled broken-out date.
    pub fn date(&mut self) -> SeleneDate {
        if !self.in_sync {
            self.complete();
        }
        self.date
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Add a signed amount to a field, carrying into the larger fields.
    ///
    /// Day arithmetic walks lunation by lunation because lunation lengths
    /// vary; month arithmetic works on the global lunation index; in both
    /// cases a day beyond the target lunation's length is pinned to its
    /// last day.
    pub fn add(&mut self, field: Field, amount: i32) {
        if !self.in_sync {
            self.complete();
        }
        match field {
            Field::Year => {
                self.date.year += amount;
                self.pin_day();
            }
            Field::Month => {
                let l = self.date.global_lunation() + amount as i64;
                let day = self.date.day.min(days_in_global_lunation(l) as i32);
                self.date = SeleneDate::from_global_lunation(l, day);
            }
            Field::Day => {
                let mut l = self.date.global_lunation();
                let mut day = self.date.day as i64 + amount as i64;
                while day > days_in_global_lunation(l) as i64 {
                    day -= days_in_global_lunation(l) as i64;
                    l += 1;
                }
                while day < 1 {
                    l -= 1;
                    day += days_in_global_lunation(l) as i64;
                }
                self.date = SeleneDate::from_global_lunation(l, day as i32);
            }
        }
        self.authority = Authority::Fields;
        self.compute_time();
        self.in_sync = true;
    }

    /// Move a field up or down by one, wrapping within the field's own
    /// range and never disturbing the larger fields.
    pub fn roll(&mut self, field: Field, up: bool) {
        if !self.in_sync {
            self.complete();
        }
        match field {
            Field::Year => {
                self.date.year += if up { 1 } else { -1 };
                self.pin_day();
            }
            Field::Month => {
                self.date.month = if up {
                    (self.date.month + 1) % 13
                } else {
                    (self.date.month + 12) % 13
                };
                self.pin_day();
            }
            Field::Day => {
                let max = self.actual_maximum(Field::Day);
                self.date.day = if up {
                    self.date.day % max + 1
                } else {
                    (self.date.day + max - 2) % max + 1
                };
            }
        }
        self.authority = Authority::Fields;
        self.compute_time();
        self.in_sync = true;
    }

    /// Clamp the day to the length of the (possibly changed) lunation.
    fn pin_day(&mut self) {
        let max = days_in_global_lunation(self.date.global_lunation()) as i32;
        if self.date.day > max {
            self.date.day = max;
        }
    }

    // ── field ranges ──────────────────────────────────────────────────

    /// Smallest value the field ever takes.
    pub fn minimum(&self, field: Field) -> i32 {
        match field {
            Field::Year => i32::MIN,
            Field::Month => 0,
            Field::Day => 1,
        }
    }

    /// Largest value the field ever takes.
    pub fn maximum(&self, field: Field) -> i32 {
        match field {
            Field::Year => i32::MAX,
            Field::Month => 12,
            Field::Day => 30,
        }
    }

    /// Largest minimum over all dates; every field's minimum is fixed.
    pub fn greatest_minimum(&self, field: Field) -> i32 {
        self.minimum(field)
    }

    /// Smallest maximum over all dates: a short lunation has 29 days.
    pub fn least_maximum(&self, field: Field) -> i32 {
        match field {
            Field::Day => 29,
            other => self.maximum(other),
        }
    }

    /// Largest value the field takes for the currently set date.
    pub fn actual_maximum(&mut self, field: Field) -> i32 {
        if !self.in_sync {
            self.complete();
        }
        match field {
            Field::Day => days_in_global_lunation(self.date.global_lunation()) as i32,
            other => self.maximum(other),
        }
    }

    // ── read-only views ───────────────────────────────────────────────
    //
    // These never touch the fields/time pair; they convert the instant
    // they are given (or "now") through the pure layer.

    /// Planetary week-day name of a millisecond instant.
    pub fn weekday(&self, millis: i64, apply_offset: bool) -> &'static str {
        weekday(self.julian_date(millis, apply_offset))
    }

    /// Solstice-anchored year containing the present moment, counted on the
    /// continuous axis rather than from the lunation fields.
    pub fn current_year_from_solstice(&self) -> i32 {
        year_from_solstice(self.julian_date(Utc::now().timestamp_millis(), true))
    }

    /// Human-readable description of a millisecond instant: year, named
    /// lunation, day, and week day.
    pub fn describe(&self, millis: i64) -> String {
        describe(self.julian_date(millis, true))
    }
}

impl CalendarSystem for SeleneCalendar {
    fn compute_time(&mut self) {
        let local_jd = jd_of(self.date);
        let offset_ms = self.offset.local_minus_utc() as i64 * 1_000;
        // Round up to the next whole millisecond: the stored instant must
        // never fall before the day boundary the fields describe, or the
        // next field extraction would land on the previous day.
        let local_ms = ((local_jd.julian_day() - UNIX_EPOCH_JD).value() * MS_PER_DAY).ceil() as i64;
        self.time_millis = local_ms - offset_ms;
    }

    fn compute_fields(&mut self) {
        self.date = date_at(self.julian_date(self.time_millis, true));
    }

    fn complete(&mut self) {
        if self.authority == Authority::Fields {
            self.compute_time();
        }
        // Always re-derive the fields so out-of-range writes normalise.
        self.compute_fields();
        self.in_sync = true;
    }
}

impl Default for SeleneCalendar {
    fn default() -> Self {
        Self::new()
    }
}
