use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StarlibError {
    #[error("Non-finite value for {name}: {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("Radial velocity {0} km/s reaches the speed of light")]
    SuperluminalRadialVelocity(f64),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),
}
