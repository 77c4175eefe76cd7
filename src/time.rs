//! # Julian dates in the TDB time scale
//!
//! The observer projector only needs one number from a time value: the Julian date expressed
//! in **Barycentric Dynamical Time** (TDB). [`JulianDate`] stores exactly that number, so the
//! extrapolation interval `T0 − tdb − Δt` is computed from the value the caller supplied, with
//! no round trip through another representation.
//!
//! Conversions from calendar dates and other time scales (UTC, TT, TAI, …) go through
//! [`hifitime::Epoch`], which handles leap seconds and the TT → TDB periodic terms.
//!
//! ## Example
//!
//! ```rust
//! use hifitime::Epoch;
//! use starlib::time::{JulianDate, T0};
//!
//! let j2000 = JulianDate::from_tdb(T0);
//! assert_eq!(j2000.tdb(), 2451545.0);
//!
//! let noon_utc = JulianDate::from_epoch(Epoch::from_gregorian_utc_at_noon(2000, 1, 1));
//! assert!((noon_utc.tdb() - T0).abs() < 1e-3);
//! ```
use std::fmt;
use std::str::FromStr;

use hifitime::{Epoch, TimeScale};

use crate::constants::{Day, JDTOMJD};
use crate::starlib_errors::StarlibError;

/// Julian date of the J2000.0 reference epoch, TDB scale
pub const T0: f64 = 2451545.0;

/// A Julian date in the TDB time scale.
///
/// The stored value is the full Julian date (not a Modified Julian Date) in days.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    tdb: Day,
}

impl JulianDate {
    /// Build a Julian date from a TDB Julian day number.
    pub fn from_tdb(tdb: Day) -> Self {
        JulianDate { tdb }
    }

    /// Build a Julian date from a hifitime [`Epoch`] in any time scale.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: the instant to represent; its time scale is converted to TDB by hifitime.
    ///
    /// Return
    /// ------
    /// * The TDB Julian date of `epoch`.
    pub fn from_epoch(epoch: Epoch) -> Self {
        JulianDate {
            tdb: epoch.to_jde_tdb_days(),
        }
    }

    /// The J2000.0 reference epoch, [`T0`].
    pub fn j2000() -> Self {
        JulianDate::from_tdb(T0)
    }

    /// Julian date in the TDB scale, in days.
    pub fn tdb(&self) -> Day {
        self.tdb
    }

    /// Days elapsed since [`T0`]; negative before J2000.0.
    pub fn days_since_j2000(&self) -> Day {
        self.tdb - T0
    }

    /// The same instant as a hifitime [`Epoch`] in the TDB time scale.
    ///
    /// The epoch is built from the TDB Modified Julian Date, so converting it back with
    /// [`JulianDate::from_epoch`] only loses hifitime's nanosecond rounding.
    pub fn epoch(&self) -> Epoch {
        Epoch::from_mjd_in_time_scale(self.tdb - JDTOMJD, TimeScale::TDB)
    }
}

impl From<Epoch> for JulianDate {
    fn from(epoch: Epoch) -> Self {
        JulianDate::from_epoch(epoch)
    }
}

impl FromStr for JulianDate {
    type Err = StarlibError;

    /// Parse any date string understood by hifitime, e.g. `"2000-01-01T12:00:00 TDB"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch =
            Epoch::from_str(s).map_err(|e| StarlibError::InvalidEpoch(format!("{s}: {e}")))?;
        Ok(JulianDate::from_epoch(epoch))
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {} TDB", self.tdb)
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_tdb_is_exact() {
        let jd = JulianDate::from_tdb(2460000.123456789);
        assert_eq!(jd.tdb(), 2460000.123456789);
        assert_eq!(JulianDate::j2000().tdb(), T0);
        assert_eq!(JulianDate::j2000().days_since_j2000(), 0.0);
    }

    #[test]
    fn test_from_epoch_converts_scale() {
        // 2000-01-01 12:00:00 TT is J2000.0; TDB differs from TT by less than 2 ms
        let tt = Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::TT);
        let jd = JulianDate::from(tt);
        assert_abs_diff_eq!(jd.tdb(), T0, epsilon = 2e-3 / 86400.0);

        // UTC noon lags TT by 64.184 s at that date
        let utc = Epoch::from_gregorian_utc_at_noon(2000, 1, 1);
        let jd = JulianDate::from_epoch(utc);
        assert_abs_diff_eq!(jd.tdb() - T0, 64.184 / 86400.0, epsilon = 1e-7);
    }

    #[test]
    fn test_epoch_round_trip() {
        for tdb in [T0, 2455197.5, 2460000.123456789, 2415020.0] {
            let jd = JulianDate::from_tdb(tdb);
            let epoch = jd.epoch();
            assert_eq!(epoch.time_scale, TimeScale::TDB);

            // 1e-10 day is under 10 µs, far below the 1 ms TAI/TDB offset
            let back = JulianDate::from_epoch(epoch);
            assert_abs_diff_eq!(back.tdb(), jd.tdb(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_epoch_matches_tdb_calendar_date() {
        let noon_tdb = Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::TDB);
        let diff = JulianDate::j2000().epoch() - noon_tdb;
        assert!(diff.abs().to_seconds() < 1e-6, "offset {diff}");
    }

    #[test]
    fn test_parse() {
        let jd: JulianDate = "2000-01-01T12:00:00 TDB".parse().unwrap();
        assert_abs_diff_eq!(jd.tdb(), T0, epsilon = 1e-8);

        let err = "not a date".parse::<JulianDate>().unwrap_err();
        assert!(matches!(err, StarlibError::InvalidEpoch(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate::from_tdb(T0).to_string(), "JD 2451545 TDB");
    }
}
