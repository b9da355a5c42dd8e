//! Error types for sphere-scattering computations.
//!
//! This module provides structured error handling for the partial-wave
//! scattering models, following the Microsoft Rust Guidelines pattern of
//! using `thiserror` for library error types with helper methods for
//! error categorization.

use thiserror::Error;

/// Errors that can occur while evaluating a scattering model.
#[derive(Debug, Error)]
pub enum ScatterError {
    /// Sound speed is invalid (must be > 0).
    #[error("invalid sound speed: {speed} m/s (must be > 0)")]
    InvalidSoundSpeed {
        /// The invalid sound speed value
        speed: f64,
    },

    /// Acoustic frequency is invalid (must be > 0).
    #[error("invalid frequency: {freq} Hz (must be > 0)")]
    InvalidFrequency {
        /// The invalid frequency value
        freq: f64,
    },

    /// Sphere radius is invalid (must be > 0).
    #[error("invalid radius: {radius} m (must be > 0)")]
    InvalidRadius {
        /// The invalid radius value
        radius: f64,
    },

    /// Observation range is invalid (must be >= 0).
    #[error("invalid range: {range} m (must be >= 0)")]
    InvalidRange {
        /// The invalid range value
        range: f64,
    },

    /// Density is invalid (must be > 0).
    #[error("invalid density: {density} kg/m^3 (must be > 0)")]
    InvalidDensity {
        /// The invalid density value
        density: f64,
    },

    /// Density contrast g = rho_body / rho_medium is invalid (must be > 0).
    #[error("invalid density contrast: g = {g} (must be > 0)")]
    InvalidDensityContrast {
        /// The invalid contrast value
        g: f64,
    },

    /// Sound-speed contrast h = c_body / c_medium is invalid (must be > 0).
    #[error("invalid sound speed contrast: h = {h} (must be > 0)")]
    InvalidSoundSpeedContrast {
        /// The invalid contrast value
        h: f64,
    },

    /// The wavenumber-radius product is degenerate (zero radius or frequency).
    #[error("degenerate wavenumber-radius product: ka = {ka} (must be > 0)")]
    DegenerateKa {
        /// The degenerate product value
        ka: f64,
    },

    /// No scattering angles were provided.
    #[error("no scattering angles provided (theta_points is empty)")]
    NoScatteringAngles,

    /// A spherical Bessel function of the second kind was evaluated at a
    /// point where it is undefined.
    #[error("spherical Bessel y_n is undefined at argument {argument}")]
    BesselDomain {
        /// The offending argument
        argument: f64,
    },
}

/// A specialized `Result` type for scattering operations.
pub type Result<T> = std::result::Result<T, ScatterError>;

impl ScatterError {
    /// Returns `true` if this is a physical-parameter validation error.
    ///
    /// These errors are raised before the partial-wave summation starts.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            ScatterError::InvalidSoundSpeed { .. }
                | ScatterError::InvalidFrequency { .. }
                | ScatterError::InvalidRadius { .. }
                | ScatterError::InvalidRange { .. }
                | ScatterError::InvalidDensity { .. }
                | ScatterError::InvalidDensityContrast { .. }
                | ScatterError::InvalidSoundSpeedContrast { .. }
                | ScatterError::DegenerateKa { .. }
                | ScatterError::NoScatteringAngles
        )
    }

    /// Returns `true` if this is a special-function domain error.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, ScatterError::BesselDomain { .. })
    }
}
