// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Solar prediction — equinoxes, solstices, and solstice-anchored years
//!
//! Solstice and equinox instants are extrapolated linearly from the four
//! calibration instants of 2024 using the mean tropical year.  No periodic
//! correction is applied: the calendar only needs the December solstice to
//! anchor lunation naming and year counting, and mean-motion accuracy
//! (within a few hours over several centuries) is sufficient for that.

use crate::epochs::{
    CALIBRATION_YEAR, JD_DECEMBER_SOLSTICE, JD_FIRST_SOLSTICE, JD_JUNE_SOLSTICE, JD_MARCH_EQUINOX,
    JD_SEPTEMBER_EQUINOX, TROPICAL_YEAR,
};
use crate::instant::days_ratio;
use crate::JulianDate;

/// The four cardinal solar events of a tropical year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SolarEvent {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SolarEvent {
    /// Calibration-year instant of this event.
    const fn reference(self) -> JulianDate {
        match self {
            SolarEvent::MarchEquinox => JD_MARCH_EQUINOX,
            SolarEvent::JuneSolstice => JD_JUNE_SOLSTICE,
            SolarEvent::SeptemberEquinox => JD_SEPTEMBER_EQUINOX,
            SolarEvent::DecemberSolstice => JD_DECEMBER_SOLSTICE,
        }
    }

    /// Predicted instant of this event in the given Gregorian year.
    ///
    /// Linear extrapolation from the calibration year by the mean tropical
    /// year; pure and total over `i32`.
    pub fn instant(self, year: i32) -> JulianDate {
        self.reference() + TROPICAL_YEAR * (year - CALIBRATION_YEAR) as f64
    }
}

/// December solstice of the given Gregorian year.
///
/// This is the event the calendar is anchored to: the first new moon at or
/// after it opens the Wolf Moon of the next naming cycle.
#[inline]
pub fn december_solstice(year: i32) -> JulianDate {
    SolarEvent::DecemberSolstice.instant(year)
}

/// Selene year containing the given instant, counted in whole tropical years
/// from the first winter solstice after the start of time.
///
/// The year holding that solstice is year 1, so the elapsed-year count is
/// offset by one.
pub fn year_from_solstice(jd: JulianDate) -> i32 {
    let years_passed = days_ratio(jd - JD_FIRST_SOLSTICE, TROPICAL_YEAR);
    years_passed.floor() as i32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Days;

    #[test]
    fn calibration_year_returns_reference_instants() {
        assert_eq!(
            SolarEvent::DecemberSolstice.instant(2024),
            JD_DECEMBER_SOLSTICE
        );
        assert_eq!(SolarEvent::MarchEquinox.instant(2024), JD_MARCH_EQUINOX);
    }

    #[test]
    fn december_solstice_2024_calibration_value() {
        // Winter solstice 2024, the anchor the original tables were built from.
        let jd = december_solstice(2024);
        assert!((jd - JulianDate::new(2_460_665.888_889)).abs() < Days::new(0.01));
    }

    #[test]
    fn events_step_by_one_tropical_year() {
        for event in [
            SolarEvent::MarchEquinox,
            SolarEvent::JuneSolstice,
            SolarEvent::SeptemberEquinox,
            SolarEvent::DecemberSolstice,
        ] {
            let step = event.instant(2030) - event.instant(2029);
            assert!((step - TROPICAL_YEAR).abs() < Days::new(1e-9));
        }
    }

    #[test]
    fn year_from_solstice_starts_at_one() {
        // Just after the first solstice: still within year 1.
        assert_eq!(1, year_from_solstice(JD_FIRST_SOLSTICE + Days::new(1.0)));
        // Just before it: year 0 (the partial year preceding the anchor).
        assert_eq!(0, year_from_solstice(JD_FIRST_SOLSTICE - Days::new(1.0)));
        // One tropical year later: year 2.
        assert_eq!(
            2,
            year_from_solstice(JD_FIRST_SOLSTICE + TROPICAL_YEAR + Days::new(1.0))
        );
    }
}
