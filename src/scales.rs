// SPDX-License-Identifier: AGPL-3.0-or-later

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a specific time scale and encodes how
//! values in that scale relate to the canonical **Julian Date** axis.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`JDE`] | Julian Ephemeris Day | 0.0 |
//! | [`UnixDays`] | Days since 1970-01-01T00:00:00Z | 2 440 587.5 |
//!
//! The Selene calendar treats the JD and JDE axes as numerically identical:
//! the truncated periodic series it uses for new-moon prediction has an
//! intrinsic error far above the minute-level difference between the two
//! dynamical axes, so carrying that distinction would be false precision.

use super::instant::{TimeScale, UNIX_EPOCH_JD};
use qtty::Days;

/// Julian Date — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Julian Ephemeris Day — dynamical Julian day used by ephemeris formulas.
///
/// Numerically identical to [`JD`] in this crate; it is a semantic label for
/// the outputs of the new-moon and eclipse prediction series.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Days since the Unix epoch (1970-01-01T00:00:00Z), ignoring leap seconds.
///
/// The calendar engine's millisecond counter lives on this axis, scaled by
/// 86 400 000 ms/day.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixDays;

impl TimeScale for UnixDays {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    // Base case: single scale, nothing left.
    ($single:ty) => {};

    // Recursive: generate pairs between $first and every $rest, then recurse.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, JDE, UnixDays);
