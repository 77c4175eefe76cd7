//! # starlib
//!
//! Apparent positions of catalog stars seen from a moving observer.
//!
//! A [`Star`](crate::starlib::Star) turns catalog astrometry (RA, Dec, proper motion, parallax,
//! radial velocity) into a barycentric position and velocity once, at construction. Each call to
//! [`Star::observe_from`](crate::starlib::Star::observe_from) then moves the star to the epoch its
//! light left it, with a single-pass light-time estimate, and returns the observer-relative
//! [`Gcrs`](crate::coordinates::Gcrs) vector with its distance and light-travel time.
//!
//! ```rust
//! use starlib::observers::ObserverState;
//! use starlib::starlib::Star;
//! use starlib::time::{JulianDate, T0};
//!
//! let star = Star::new(6.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//! let observer = ObserverState::at_rest(JulianDate::from_tdb(T0));
//! let apparent = star.observe_from(&observer);
//! assert_eq!(apparent.distance, Some(star.distance()));
//! ```
pub mod constants;
pub mod coordinates;
pub mod observers;
pub mod relativity;
pub mod starlib;
pub mod starlib_errors;
pub mod time;
