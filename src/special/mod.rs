//! Special mathematical functions for the partial-wave expansion
//!
//! This module provides the basis-function layer of the scattering
//! models:
//!
//! - Spherical Bessel functions (jₙ, yₙ) and their derivatives
//! - Spherical Hankel functions (hₙ = jₙ + i·yₙ) and their derivatives
//! - Legendre polynomials (Pₙ)
//!
//! All evaluators are pure functions with no hidden caches, so they are
//! reentrant and safe to call from concurrent parameter sweeps.

mod legendre;
mod spherical;

pub use legendre::*;
pub use spherical::*;
