//! # Catalog stars
//!
//! A [`Star`] is built from six catalog astrometric parameters and turned once, at construction,
//! into a barycentric **position** (AU) and **velocity** (AU/day) in the equatorial frame. Both
//! vectors are cached for the lifetime of the value; nothing can change them afterwards, so they
//! always agree with the parameters they came from.
//!
//! Observing the star from a moving observer is done with [`Star::observe_from`]:
//!
//! 1. Estimate the light-time offset `Δt` between the barycenter and the observer along the
//!    star direction ([`light_time_difference`]).
//! 2. Move the star linearly by `velocity × (T0 − tdb − Δt)`.
//! 3. Subtract the observer position and velocity.
//! 4. Attach the distance and the light-travel time `distance / c`.
//!
//! The light-time correction is a single pass: it is not iterated to convergence.
//!
//! ## Units
//!
//! | parameter         | unit                                  |
//! |-------------------|---------------------------------------|
//! | `ra`              | hours                                 |
//! | `dec`             | degrees                               |
//! | `pm_ra`, `pm_dec` | catalog proper motion units           |
//! | `parallax`        | milliarcseconds, `<= 0` means unknown |
//! | `radial_velocity` | km/s, positive receding               |
//!
//! A non-positive parallax is replaced by [`MIN_PARALLAX_MAS`], which puts the star at about one
//! gigaparsec.
//!
//! ## Example
//!
//! ```rust
//! use starlib::observers::ObserverState;
//! use starlib::starlib::Star;
//! use starlib::time::JulianDate;
//!
//! // Barnard's star, roughly
//! let star = Star::new(17.963, 4.694, -798.6, 10328.1, 548.3, -110.6);
//! let observer = ObserverState::at_rest(JulianDate::from_tdb(2460000.5));
//!
//! let apparent = star.observe_from(&observer);
//! let (ra, dec, _) = apparent.radec();
//! assert!((ra - 17.963).abs() < 1e-2);
//! assert!((dec - 4.694).abs() < 2e-1);
//! ```
use log::{debug, trace, warn};
use nalgebra::Vector3;

use crate::constants::{
    Au, Degree, Hour, KmPerSec, MilliArcSec, ASEC2RAD, AU_KM, C, C_AUDAY, DAYS_PER_JULIAN_YEAR,
    DEG2RAD, MIN_PARALLAX_MAS, SECONDS_PER_DAY,
};
use crate::coordinates::Gcrs;
use crate::observers::Observer;
use crate::relativity::light_time_difference;
use crate::starlib_errors::StarlibError;
use crate::time::T0;

/// The six catalog parameters a [`Star`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogEntry {
    pub ra: Hour,
    pub dec: Degree,
    pub pm_ra: f64,
    pub pm_dec: f64,
    pub parallax: MilliArcSec,
    pub radial_velocity: KmPerSec,
}

impl CatalogEntry {
    /// A motionless entry at infinite distance (sentinel parallax).
    pub fn at(ra: Hour, dec: Degree) -> Self {
        CatalogEntry {
            ra,
            dec,
            ..Default::default()
        }
    }
}

/// A star with its cached barycentric position and velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    entry: CatalogEntry,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl Star {
    /// Build a star from catalog parameters.
    ///
    /// No validation is done: non-finite inputs propagate as `NaN`/`inf` into the cached vectors.
    /// Use [`Star::try_new`] to reject them.
    ///
    /// Arguments
    /// ---------
    /// * `ra`: right ascension, hours.
    /// * `dec`: declination, degrees.
    /// * `pm_ra`, `pm_dec`: proper motion components.
    /// * `parallax`: milliarcseconds; `<= 0` selects [`MIN_PARALLAX_MAS`].
    /// * `radial_velocity`: km/s, positive receding.
    pub fn new(
        ra: Hour,
        dec: Degree,
        pm_ra: f64,
        pm_dec: f64,
        parallax: MilliArcSec,
        radial_velocity: KmPerSec,
    ) -> Star {
        Star::from_catalog(CatalogEntry {
            ra,
            dec,
            pm_ra,
            pm_dec,
            parallax,
            radial_velocity,
        })
    }

    /// A motionless star at the sentinel distance.
    pub fn at(ra: Hour, dec: Degree) -> Star {
        Star::from_catalog(CatalogEntry::at(ra, dec))
    }

    /// Build a star from a [`CatalogEntry`], without validation.
    pub fn from_catalog(entry: CatalogEntry) -> Star {
        let (position, velocity) = compute_vectors(&entry);
        Star {
            entry,
            position,
            velocity,
        }
    }

    /// Build a star, rejecting parameters that would poison the cached vectors.
    ///
    /// Errors
    /// ------
    /// * [`StarlibError::NonFiniteParameter`] if any of the six inputs is `NaN` or infinite.
    /// * [`StarlibError::SuperluminalRadialVelocity`] if `radial_velocity` is at or above the
    ///   speed of light, where the Doppler factor diverges or changes sign.
    pub fn try_new(
        ra: Hour,
        dec: Degree,
        pm_ra: f64,
        pm_dec: f64,
        parallax: MilliArcSec,
        radial_velocity: KmPerSec,
    ) -> Result<Star, StarlibError> {
        let fields = [
            ("ra", ra),
            ("dec", dec),
            ("pm_ra", pm_ra),
            ("pm_dec", pm_dec),
            ("parallax", parallax),
            ("radial_velocity", radial_velocity),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            warn!("rejecting star: {name} = {value}");
            return Err(StarlibError::NonFiniteParameter { name, value });
        }

        if radial_velocity / C * 1000.0 >= 1.0 {
            warn!("rejecting star: radial velocity {radial_velocity} km/s");
            return Err(StarlibError::SuperluminalRadialVelocity(radial_velocity));
        }

        Ok(Star::new(ra, dec, pm_ra, pm_dec, parallax, radial_velocity))
    }

    /// Right ascension, hours.
    pub fn ra(&self) -> Hour {
        self.entry.ra
    }

    /// Declination, degrees.
    pub fn dec(&self) -> Degree {
        self.entry.dec
    }

    pub fn pm_ra(&self) -> f64 {
        self.entry.pm_ra
    }

    pub fn pm_dec(&self) -> f64 {
        self.entry.pm_dec
    }

    /// Catalog parallax as given, milliarcseconds (possibly the `<= 0` sentinel).
    pub fn parallax(&self) -> MilliArcSec {
        self.entry.parallax
    }

    /// Radial velocity, km/s.
    pub fn radial_velocity(&self) -> KmPerSec {
        self.entry.radial_velocity
    }

    /// The parameters this star was built from.
    pub fn catalog_entry(&self) -> CatalogEntry {
        self.entry
    }

    /// Barycentric position, AU.
    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Barycentric velocity, AU/day.
    pub fn velocity(&self) -> &Vector3<f64> {
        &self.velocity
    }

    /// Distance from the barycenter, AU.
    pub fn distance(&self) -> Au {
        self.position.norm()
    }

    /// Parallax used for the vectors: the catalog value, or [`MIN_PARALLAX_MAS`] if it is `<= 0`.
    pub fn effective_parallax(&self) -> MilliArcSec {
        effective_parallax(self.entry.parallax)
    }

    /// Factor `1 / (1 − v_r / c)` applied to the catalog motion rates.
    pub fn doppler_factor(&self) -> f64 {
        doppler_factor(self.entry.radial_velocity)
    }

    /// Apparent position of the star seen from `observer`.
    ///
    /// The star is moved along its cached velocity to the epoch light left it, estimated in a
    /// single pass, then the observer state is subtracted.
    ///
    /// Arguments
    /// ---------
    /// * `observer`: provides the barycentric position (AU), velocity (AU/day) and TDB epoch.
    ///
    /// Return
    /// ------
    /// * A [`Gcrs`] holding the observer-relative position and velocity at the observer's
    ///   epoch, with `observer`, `distance` (AU) and `lighttime` (days) set.
    ///
    /// Remarks
    /// -------
    /// * No error is raised: an observer on top of the star gives a zero distance, and any
    ///   `NaN` in the inputs propagates to the result.
    pub fn observe_from<'o, O: Observer>(&self, observer: &'o O) -> Gcrs<'o> {
        let jd = observer.jd();
        let observer_position = observer.position();

        let dt = light_time_difference(&self.position, &observer_position);
        let position = self.position + self.velocity * (T0 - jd.tdb() - dt);
        let vector = position - observer_position;
        let distance = vector.norm();
        let lighttime = distance / C_AUDAY;

        trace!(
            "observed at {jd}: dt = {dt} d, distance = {distance} AU, lighttime = {lighttime} d"
        );

        let mut g = Gcrs::new(vector, self.velocity - observer.velocity(), jd);
        g.observer = Some(observer as &dyn Observer);
        g.distance = Some(distance);
        g.lighttime = Some(lighttime);
        g
    }

    /// [`Star::observe_from`] for each observer in turn.
    pub fn observe_from_each<'o, O: Observer>(&self, observers: &'o [O]) -> Vec<Gcrs<'o>> {
        observers.iter().map(|obs| self.observe_from(obs)).collect()
    }
}

impl From<CatalogEntry> for Star {
    fn from(entry: CatalogEntry) -> Self {
        Star::from_catalog(entry)
    }
}

fn effective_parallax(parallax: MilliArcSec) -> MilliArcSec {
    if parallax <= 0.0 {
        MIN_PARALLAX_MAS
    } else {
        parallax
    }
}

fn doppler_factor(radial_velocity: KmPerSec) -> f64 {
    1.0 / (1.0 - radial_velocity / C * 1000.0)
}

/// Barycentric position (AU) and velocity (AU/day) of a catalog entry.
fn compute_vectors(entry: &CatalogEntry) -> (Vector3<f64>, Vector3<f64>) {
    let parallax = effective_parallax(entry.parallax);
    if entry.parallax <= 0.0 {
        debug!(
            "parallax {} mas replaced by {} mas",
            entry.parallax, MIN_PARALLAX_MAS
        );
    }

    // Position on the unit sphere scaled by the parallax distance
    let dist = 1.0 / (parallax * 1.0e-3 * ASEC2RAD).sin();
    let r = entry.ra * 15.0 * DEG2RAD;
    let d = entry.dec * DEG2RAD;
    let cra = r.cos();
    let sra = r.sin();
    let cdc = d.cos();
    let sdc = d.sin();

    let position = Vector3::new(dist * cdc * cra, dist * cdc * sra, dist * sdc);

    // Catalog rates scaled by the change in light travel time to the star
    let k = doppler_factor(entry.radial_velocity);

    let pmr = entry.pm_ra / (parallax * DAYS_PER_JULIAN_YEAR) * k;
    let pmd = entry.pm_dec / (parallax * DAYS_PER_JULIAN_YEAR) * k;
    let rvl = entry.radial_velocity * SECONDS_PER_DAY / AU_KM * k;

    let velocity = Vector3::new(
        -pmr * sra - pmd * sdc * cra + rvl * cdc * cra,
        pmr * cra - pmd * sdc * sra + rvl * cdc * sra,
        pmd * cdc + rvl * sdc,
    );

    trace!(
        "star vectors: dist = {dist} AU, k = {k}, position = {position:?}, velocity = {velocity:?}"
    );

    (position, velocity)
}
