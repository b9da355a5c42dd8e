//! Analytical partial-wave solutions for acoustic sphere scattering
//!
//! This crate evaluates the classical multipole-series solutions for a
//! plane wave incident on a sphere, producing backscatter target strength
//! (dB re 1 m²) and the scattered pressure field. It provides analytical
//! reference values for fluid, pressure-release, and rigid spheres,
//! parameterized by frequency, geometry, and material contrasts.
//!
//! # Features
//!
//! - **Exact fluid sphere**: three-region boundary match (Anderson 1950)
//!   with dynamic convergence control and per-angle pressure/velocity fields
//! - **Simplified variants**: fluid, pressure-release, and rigid spheres
//!   via closed-form modal amplitudes (Jech et al. 2015)
//! - **Special functions**: spherical Bessel/Hankel functions and
//!   Legendre polynomials, implemented with stable recurrences
//!
//! # Example
//!
//! ```rust
//! use math_scatter::{fluid_sphere, rigid_sphere_ts, FluidSphereParams};
//! use std::f64::consts::PI;
//!
//! // Exact fluid-sphere backscatter at 38 kHz
//! let params = FluidSphereParams {
//!     frequency: 38_000.0,
//!     radius: 0.01,
//!     range: 1.0,
//!     rho_w: 1025.0,
//!     rho_b: 1028.0,
//!     c_w: 1500.0,
//!     c_b: 1550.0,
//!     theta_points: vec![PI],
//! };
//! let solution = fluid_sphere(&params).unwrap();
//! assert!(solution.converged);
//! assert!(solution.target_strength_db.is_finite());
//!
//! // Rigid-sphere reference value
//! let ts = rigid_sphere_ts(38_000.0, 0.01, 1500.0).unwrap();
//! assert!(ts.is_finite());
//! ```
//!
//! Every entry point is a pure function of its arguments with no shared
//! state, so independent parameter sets may be evaluated concurrently by
//! an outer sweep driver.

pub mod error;
pub mod scattering;
pub mod special;

// Re-export main types at crate root
pub use error::{Result, ScatterError};
pub use scattering::{
    backscatter_ts, classify_regime, fluid_sphere, fluid_sphere_ts, fluid_sphere_with_config,
    pressure_release_sphere_ts, rigid_sphere_ts, wave_number, wavelength, FluidSphereParams,
    FluidSphereSolution, SeriesConfig, SphereBoundary, WaveNumbers,
};
