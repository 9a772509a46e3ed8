// SPDX-License-Identifier: AGPL-3.0-or-later

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] is the continuous-time type used by every astronomical
//! formula in this crate.  It stores a scalar quantity in [`Days`] whose
//! *meaning* is determined by the compile-time marker `S: TimeScale`.
//! Arithmetic (addition/subtraction of durations, difference between
//! instants), the Unix-millisecond bridge, UTC conversion, serialisation,
//! and display are implemented generically.
//!
//! The calendar engine stores its continuous value as a signed count of
//! milliseconds since the Unix epoch; [`Time::from_unix_millis`] and
//! [`Time::to_unix_millis`] convert between that representation and the
//! fractional-day axis through the fixed epoch offset (JD 2 440 587.5)
//! and the 86 400 000 ms/day scale.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// Milliseconds per day, the fixed scale of the millisecond bridge.
pub(crate) const MS_PER_DAY: f64 = 86_400_000.0;

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A **time scale** defines:
///
/// 1. A human-readable **label** (e.g. `"Julian Day:"`, `"Unix"`).
/// 2. A pair of conversion functions between the scale's native quantity
///    (in [`Days`]) and the **Julian Date** — the canonical internal
///    representation used throughout the crate.
///
/// All scales in this crate are pure *epoch counters*: the conversions are
/// trivial constant offsets that the compiler will inline and fold away.
/// There is no ΔT or leap-second handling; the calendar's accuracy target
/// (sub-hour near the reference epoch) does not warrant it.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute JD back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// Internally stores a single `Days` quantity whose interpretation depends on
/// `S: TimeScale`.  The struct is `Copy` and zero-cost: `PhantomData` is
/// zero-sized, so `Time<S>` is layout-identical to `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Build an instant from an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another time scale.
    ///
    /// The conversion routes through the canonical JD intermediate:
    ///
    /// ```text
    /// self → JD → target
    /// ```
    ///
    /// For the epoch-offset scales of this crate this compiles down to a
    /// single addition/subtraction.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.quantity))
    }

    // ── millisecond bridge ────────────────────────────────────────────

    /// Build an instant from a signed millisecond count since the Unix epoch.
    #[inline]
    pub fn from_unix_millis(millis: i64) -> Self {
        let jd = UNIX_EPOCH_JD + Days::new(millis as f64 / MS_PER_DAY);
        Self::from_julian_day(jd)
    }

    /// Signed millisecond count since the Unix epoch for this instant.
    ///
    /// Truncates sub-millisecond residue; the inverse of
    /// [`from_unix_millis`](Self::from_unix_millis) up to that residue.
    #[inline]
    pub fn to_unix_millis(&self) -> i64 {
        ((self.julian_day() - UNIX_EPOCH_JD).value() * MS_PER_DAY) as i64
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.julian_day() - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64)
            + Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_julian_day(UNIX_EPOCH_JD + seconds_since_epoch.to::<Day>())
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

/// Dimensionless ratio of two day quantities.
#[inline]
pub(crate) fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{UnixDays, JD};
    use super::*;

    #[test]
    fn test_julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn test_unix_millis_roundtrip() {
        let jd = Time::<JD>::from_unix_millis(946_728_000_000);
        assert!((jd.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-9));
        assert_eq!(jd.to_unix_millis(), 946_728_000_000);
    }

    #[test]
    fn test_negative_unix_millis() {
        // One day before the Unix epoch.
        let jd = Time::<JD>::from_unix_millis(-86_400_000);
        assert!((jd.quantity() - Days::new(2_440_586.5)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_utc_roundtrip() {
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        assert!((jd.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-9));
        let back = jd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn test_unix_days_scale_roundtrip() {
        let unix = Time::<UnixDays>::new(0.0);
        let jd: Time<JD> = unix.to::<JD>();
        assert!((jd.quantity() - UNIX_EPOCH_JD).abs() < Days::new(1e-12));
        let back: Time<UnixDays> = jd.to::<UnixDays>();
        assert!((back.quantity() - Days::new(0.0)).abs() < Days::new(1e-12));
    }

    #[test]
    fn test_add_sub_days() {
        let mut jd = Time::<JD>::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
        assert_eq!(jd - Time::<JD>::new(2_451_545.0), Days::new(0.5));
    }

    #[test]
    fn test_const_min_max() {
        const A: Time<JD> = Time::<JD>::new(10.0);
        const B: Time<JD> = Time::<JD>::new(14.0);
        const MIN: Time<JD> = A.min(B);
        const MAX: Time<JD> = A.max(B);
        assert_eq!(MIN.quantity(), Days::new(10.0));
        assert_eq!(MAX.quantity(), Days::new(14.0));
    }

    #[test]
    fn test_into_days() {
        let jd = Time::<JD>::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, 2_451_547.5);

        let roundtrip = Time::<JD>::from(days);
        assert_eq!(roundtrip, jd);
    }

    #[test]
    fn test_display_jd() {
        let jd = Time::<JD>::new(2_451_545.0);
        let s = format!("{jd}");
        assert!(s.contains("Julian Day"));
    }
}
