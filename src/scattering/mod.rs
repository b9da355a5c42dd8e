//! Partial-wave scattering models for spheres
//!
//! Closed-form series solutions for a plane wave incident on a sphere:
//! the exact fluid-sphere boundary match of Anderson (1950) and the
//! simplified fluid, pressure-release, and rigid variants of
//! Jech et al. (2015). All variants share one summation engine
//! ([`series`]) and one coefficient selector ([`boundary`]).

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{Result, ScatterError};

pub mod boundary;
pub mod series;
pub mod sphere;

pub use boundary::SphereBoundary;
pub use series::{SeriesConfig, SeriesSolution, TruncationPolicy};
pub use sphere::*;

/// Acoustic wavelength λ = c/f (m).
pub fn wavelength(sound_speed: f64, frequency: f64) -> f64 {
    sound_speed / frequency
}

/// Acoustic wavenumber k = 2π/λ = 2πf/c (rad/m).
pub fn wave_number(sound_speed: f64, frequency: f64) -> f64 {
    2.0 * PI / wavelength(sound_speed, frequency)
}

/// Classify scattering regime based on ka
pub fn classify_regime(ka: f64) -> &'static str {
    if ka < 0.3 {
        "Rayleigh (ka << 1)"
    } else if ka < 3.0 {
        "Mie (ka ~ 1)"
    } else {
        "Geometric (ka >> 1)"
    }
}

/// Inputs for the exact fluid-sphere model.
///
/// Angles are radians, lengths meters, sound speeds m/s, frequency Hz,
/// densities kg/m³. All physical quantities are strictly positive except
/// the observation range and the scattering angles, which may be zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluidSphereParams {
    /// Acoustic frequency (Hz)
    pub frequency: f64,
    /// Sphere radius (m)
    pub radius: f64,
    /// Distance from the sphere center to the observation point (m)
    pub range: f64,
    /// Density of the surrounding medium (kg/m³)
    pub rho_w: f64,
    /// Density of the scattering body (kg/m³)
    pub rho_b: f64,
    /// Sound speed in the surrounding medium (m/s)
    pub c_w: f64,
    /// Sound speed inside the scattering body (m/s)
    pub c_b: f64,
    /// Scattering angles relative to the incident direction (rad);
    /// π is backscatter
    pub theta_points: Vec<f64>,
}

impl FluidSphereParams {
    /// Density contrast g = ρ_body / ρ_medium.
    pub fn density_contrast(&self) -> f64 {
        self.rho_b / self.rho_w
    }

    /// Sound-speed contrast h = c_body / c_medium.
    pub fn sound_speed_contrast(&self) -> f64 {
        self.c_b / self.c_w
    }

    /// Characteristic impedance ρc of the surrounding medium.
    pub fn impedance(&self) -> f64 {
        self.rho_w * self.c_w
    }

    /// Check the positivity invariants, failing fast before any series work.
    pub fn validate(&self) -> Result<()> {
        if self.c_w <= 0.0 {
            return Err(ScatterError::InvalidSoundSpeed { speed: self.c_w });
        }
        if self.c_b <= 0.0 {
            return Err(ScatterError::InvalidSoundSpeed { speed: self.c_b });
        }
        if self.frequency <= 0.0 {
            return Err(ScatterError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if self.radius <= 0.0 {
            return Err(ScatterError::InvalidRadius {
                radius: self.radius,
            });
        }
        if self.range < 0.0 {
            return Err(ScatterError::InvalidRange { range: self.range });
        }
        if self.rho_w <= 0.0 {
            return Err(ScatterError::InvalidDensity {
                density: self.rho_w,
            });
        }
        if self.rho_b <= 0.0 {
            return Err(ScatterError::InvalidDensity {
                density: self.rho_b,
            });
        }
        if self.theta_points.is_empty() {
            return Err(ScatterError::NoScatteringAngles);
        }
        Ok(())
    }
}

/// Derived wavenumbers and dimensionless products, computed once per call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveNumbers {
    /// Exterior wavenumber k = 2πf/c_w
    pub k_ext: f64,
    /// Interior wavenumber k' = 2πf/c_b
    pub k_int: f64,
    /// Exterior wavenumber-radius product
    pub ka: f64,
    /// Interior wavenumber-radius product
    pub k1a: f64,
    /// Wavenumber-range product
    pub kr: f64,
}

impl WaveNumbers {
    /// Derive the wavenumber products for a fluid-sphere computation.
    ///
    /// # Errors
    ///
    /// Returns [`ScatterError::DegenerateKa`] if either wavenumber-radius
    /// product underflows to zero; the series is undefined there.
    pub fn for_fluid_sphere(params: &FluidSphereParams) -> Result<Self> {
        let k_ext = wave_number(params.c_w, params.frequency);
        let k_int = wave_number(params.c_b, params.frequency);
        let ka = k_ext * params.radius;
        let k1a = k_int * params.radius;

        if ka == 0.0 {
            return Err(ScatterError::DegenerateKa { ka });
        }
        if k1a == 0.0 {
            return Err(ScatterError::DegenerateKa { ka: k1a });
        }

        Ok(Self {
            k_ext,
            k_int,
            ka,
            k1a,
            kr: k_ext * params.range,
        })
    }
}
