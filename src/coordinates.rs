//! # Frame-tagged positions
//!
//! [`Gcrs`] is the value returned by
//! [`Star::observe_from`](crate::starlib::Star::observe_from): an observer-relative position and
//! velocity in the GCRS frame at a given epoch, annotated with the observer it was computed for,
//! the apparent distance and the light-travel time.
//!
//! The annotations are optional so that a bare frame vector can be built with [`Gcrs::new`] and
//! decorated afterwards, which is exactly what the projector does.
use std::f64::consts::TAU;

use nalgebra::Vector3;

use crate::constants::{Au, Day, Degree, Hour, Radian, DEG2RAD};
use crate::observers::Observer;
use crate::time::JulianDate;

/// Position and velocity relative to an observer, GCRS axes.
///
/// Units
/// -----
/// * `position`: AU
/// * `velocity`: AU/day
/// * `distance`: AU
/// * `lighttime`: days
#[derive(Debug, Clone)]
pub struct Gcrs<'o> {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub jd: JulianDate,
    pub observer: Option<&'o dyn Observer>,
    pub distance: Option<Au>,
    pub lighttime: Option<Day>,
}

impl<'o> Gcrs<'o> {
    /// Build an unannotated frame vector.
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, jd: JulianDate) -> Self {
        Gcrs {
            position,
            velocity,
            jd,
            observer: None,
            distance: None,
            lighttime: None,
        }
    }

    /// Right ascension, declination and distance of [`Gcrs::position`].
    ///
    /// Return
    /// ------
    /// * `(ra, dec, distance)` with `ra` in **hours** in `[0, 24)`, `dec` in **degrees** and
    ///   `distance` in **AU**.
    ///
    /// See also
    /// --------
    /// * [`cartesian_to_radec`] – the same conversion in radians.
    pub fn radec(&self) -> (Hour, Degree, Au) {
        let (alpha, delta, rho) = cartesian_to_radec(self.position);
        let hours = alpha / (15.0 * DEG2RAD);
        let hours = if hours >= 24.0 { 0.0 } else { hours };
        (hours, delta / DEG2RAD, rho)
    }
}

/// Convert a 3D Cartesian position vector to right ascension and declination.
///
/// Arguments
/// ---------
/// * `cartesian_position`: position vector in an equatorial frame, any length unit.
///
/// Returns
/// --------
/// * Tuple `(α, δ, ρ)`:
///     - `α`: right ascension in radians, in the range [0, 2π).
///     - `δ`: declination in radians, in the range [−π/2, +π/2].
///     - `ρ`: Euclidean norm of the vector.
///
/// Remarks
/// -------
/// * A zero vector gives `(0.0, 0.0, 0.0)`; a vector along the pole gives `α = 0`.
pub fn cartesian_to_radec(cartesian_position: Vector3<f64>) -> (Radian, Radian, f64) {
    let pos_norm = cartesian_position.norm();
    if pos_norm == 0. {
        return (0.0, 0.0, pos_norm);
    }

    let delta = (cartesian_position.z / pos_norm).asin();

    let cos_delta = delta.cos();
    if cos_delta == 0.0 {
        return (0.0, delta, pos_norm);
    }

    // a tiny negative atan2 plus 2π rounds to exactly 2π
    let alpha = cartesian_position.y.atan2(cartesian_position.x);
    let alpha = if alpha < 0.0 { alpha + TAU } else { alpha };
    let alpha = if alpha >= TAU { 0.0 } else { alpha };
    (alpha, delta, pos_norm)
}
