//! Light-time helpers for distant sources.
use nalgebra::Vector3;

use crate::constants::{Day, C_AUDAY};

/// Difference in light-time between the solar system barycenter and the observer for a source
/// in the direction of `position`.
///
/// The result is the projection of `observer_position` onto the unit vector of `position`,
/// divided by the speed of light. It is positive when the observer sits on the side of the
/// barycenter facing the source, i.e. when light reaches the observer first.
///
/// Arguments
/// ---------
/// * `position`: barycentric position of the source, AU. Only its direction is used.
/// * `observer_position`: barycentric position of the observer, AU.
///
/// Return
/// ------
/// * The light-time difference in days. A zero-length `position` yields `NaN`.
pub fn light_time_difference(position: &Vector3<f64>, observer_position: &Vector3<f64>) -> Day {
    let unit = position / position.norm();
    unit.dot(observer_position) / C_AUDAY
}

#[cfg(test)]
mod relativity_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_observer_along_line_of_sight() {
        let star = Vector3::new(0.0, 2.0e5, 0.0);
        let observer = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(light_time_difference(&star, &observer), 1.0 / C_AUDAY);

        let behind = Vector3::new(0.0, -1.0, 0.0);
        assert_eq!(light_time_difference(&star, &behind), -1.0 / C_AUDAY);
    }

    #[test]
    fn test_observer_perpendicular() {
        let star = Vector3::new(3.0e7, 0.0, 0.0);
        let observer = Vector3::new(0.0, 0.7, -0.2);
        assert_eq!(light_time_difference(&star, &observer), 0.0);
    }

    #[test]
    fn test_scale_invariant_in_source_distance() {
        let observer = Vector3::new(0.3, -0.9, 0.4);
        let near = Vector3::new(1.0, 2.0, 3.0);
        let far = near * 1.0e9;
        assert_relative_eq!(
            light_time_difference(&near, &observer),
            light_time_difference(&far, &observer),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_observer_at_barycenter() {
        let star = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(light_time_difference(&star, &Vector3::zeros()), 0.0);
    }

    #[test]
    fn test_degenerate_source() {
        let observer = Vector3::new(1.0, 0.0, 0.0);
        assert!(light_time_difference(&Vector3::zeros(), &observer).is_nan());
    }
}
