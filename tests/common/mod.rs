use approx::assert_relative_eq;
use starlib::coordinates::Gcrs;

pub fn assert_gcrs_close(actual: &Gcrs, expected: &Gcrs, epsilon: f64) {
    assert_relative_eq!(actual.position, expected.position, max_relative = epsilon);
    assert_relative_eq!(actual.velocity, expected.velocity, max_relative = epsilon);
    assert_eq!(actual.jd, expected.jd);
    match (actual.distance, expected.distance) {
        (Some(a), Some(b)) => {
            assert_relative_eq!(a, b, max_relative = epsilon);
        }
        (a, b) => assert_eq!(a, b),
    }
    match (actual.lighttime, expected.lighttime) {
        (Some(a), Some(b)) => {
            assert_relative_eq!(a, b, max_relative = epsilon);
        }
        (a, b) => assert_eq!(a, b),
    }
}
