use std::env;

use nalgebra::Vector3;
use starlib::constants::DAYS_PER_JULIAN_YEAR;
use starlib::observers::ObserverState;
use starlib::starlib::Star;
use starlib::starlib_errors::StarlibError;
use starlib::time::JulianDate;

/// Barycentric state of the Earth at J2000.0 (equatorial, AU and AU/day).
///
/// Good to a few 1e-4 AU, which is plenty to see parallax and light-time effects.
fn earth_at_j2000() -> (Vector3<f64>, Vector3<f64>) {
    (
        Vector3::new(-0.1771354, 0.8873932, 0.3847220),
        Vector3::new(-0.0172003, -0.0028976, -0.0012563),
    )
}

/// Observe a handful of nearby stars from the Earth and print their apparent places.
///
/// Usage:
///   observe_star [DATE] [--verbose]
/// Example:
///   observe_star "2000-01-01T12:00:00 TDB" --verbose
fn main() -> Result<(), StarlibError> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let verbose = if let Some(pos) = args.iter().position(|a| a == "--verbose") {
        args.remove(pos);
        true
    } else {
        false
    };

    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Trace)
            .init();
    }

    let date = args
        .first()
        .cloned()
        .unwrap_or_else(|| "2000-01-01T12:00:00 TDB".to_string());
    let jd: JulianDate = date.parse()?;

    let (position, velocity) = earth_at_j2000();
    let earth = ObserverState::new(position, velocity, jd);

    let stars = [
        ("Proxima Centauri", Star::try_new(14.4953, -62.6795, -3781.3, 769.8, 768.5, -22.4)?),
        ("Barnard's star", Star::try_new(17.9634, 4.6934, -798.6, 10328.1, 548.3, -110.6)?),
        ("Sirius", Star::try_new(6.7525, -16.7161, -546.0, -1223.1, 379.2, -5.5)?),
        ("Polaris", Star::try_new(2.5303, 89.2641, 44.5, -11.9, 7.5, -17.4)?),
    ];

    println!("Apparent places at {jd}");
    for (name, star) in &stars {
        let apparent = star.observe_from(&earth);
        let (ra, dec, distance) = apparent.radec();
        let lighttime = apparent.lighttime.unwrap_or(f64::NAN);
        println!(
            "{name:<18} ra = {ra:>10.6} h  dec = {dec:>+10.6} deg  \
             distance = {distance:.6e} AU  lighttime = {:.3} yr",
            lighttime / DAYS_PER_JULIAN_YEAR
        );
    }

    Ok(())
}
