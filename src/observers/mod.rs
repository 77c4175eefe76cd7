//! # Observers
//!
//! An observer is anything that can report where it is, how fast it moves and when it looks.
//! The projector in [`Star::observe_from`](crate::starlib::Star::observe_from) reads those three
//! values and nothing else, so observers are modelled as a small trait, [`Observer`], with a
//! plain value implementation, [`ObserverState`], for callers that already hold a barycentric
//! state vector (from an ephemeris, a spacecraft navigation solution, a test fixture, …).
//!
//! ## Frames & units
//!
//! - Positions: **AU**, barycentric, equatorial (ICRS-aligned axes).
//! - Velocities: **AU/day**, same axes.
//! - Time: [`JulianDate`], TDB scale.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use starlib::observers::{Observer, ObserverState};
//! use starlib::time::JulianDate;
//!
//! let earth = ObserverState::new(
//!     Vector3::new(-0.1771, 0.8874, 0.3847),
//!     Vector3::new(-0.0172, -0.0029, -0.0013),
//!     JulianDate::from_tdb(2451545.0),
//! );
//! assert_eq!(earth.jd().tdb(), 2451545.0);
//! ```
use std::fmt::Debug;

use nalgebra::Vector3;

use crate::time::JulianDate;

/// Barycentric state of an observer at one instant.
///
/// Results of an observation keep a `&dyn Observer` back-reference, hence the `Debug` bound.
pub trait Observer: Debug {
    /// Barycentric position, AU.
    fn position(&self) -> Vector3<f64>;

    /// Barycentric velocity, AU/day.
    fn velocity(&self) -> Vector3<f64>;

    /// Instant of the observation, TDB.
    fn jd(&self) -> JulianDate;
}

/// An [`Observer`] holding its state as plain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub jd: JulianDate,
}

impl ObserverState {
    /// Create an observer from its barycentric position (AU), velocity (AU/day) and epoch.
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, jd: JulianDate) -> Self {
        ObserverState {
            position,
            velocity,
            jd,
        }
    }

    /// An observer at rest at the solar system barycenter.
    pub fn at_rest(jd: JulianDate) -> Self {
        ObserverState::new(Vector3::zeros(), Vector3::zeros(), jd)
    }
}

impl Observer for ObserverState {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn jd(&self) -> JulianDate {
        self.jd
    }
}

#[cfg(test)]
mod observer_test {
    use super::*;
    use crate::time::T0;

    #[test]
    fn test_observer_constructor() {
        let position = Vector3::new(0.5, -0.25, 0.125);
        let velocity = Vector3::new(1e-2, 2e-2, -3e-3);
        let observer = ObserverState::new(position, velocity, JulianDate::from_tdb(2460000.5));

        assert_eq!(observer.position(), position);
        assert_eq!(observer.velocity(), velocity);
        assert_eq!(observer.jd().tdb(), 2460000.5);
    }

    #[test]
    fn test_observer_at_rest() {
        let observer = ObserverState::at_rest(JulianDate::from_tdb(T0));
        assert_eq!(observer.position(), Vector3::zeros());
        assert_eq!(observer.velocity(), Vector3::zeros());
        assert_eq!(observer.jd(), JulianDate::j2000());
    }

    #[test]
    fn test_observer_as_trait_object() {
        let observer = ObserverState::at_rest(JulianDate::j2000());
        let dynamic: &dyn Observer = &observer;
        assert_eq!(dynamic.jd().tdb(), T0);
        assert!(format!("{dynamic:?}").contains("ObserverState"));
    }
}
