//! Sphere scattering models
//!
//! The exact fluid-sphere field solution following
//! Anderson, "Sound scattering from a fluid sphere",
//! J. Acoust. Soc. America 22 (4), 1950, and the simplified
//! backscatter target-strength forms of Jech et al. (2015).

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::boundary::{exact_fluid_modal_ratio, SphereBoundary};
use super::series::{sum_partial_waves, SeriesConfig, SeriesTerm, TruncationPolicy};
use super::{classify_regime, wave_number, FluidSphereParams, WaveNumbers};
use crate::error::{Result, ScatterError};
use crate::special::{legendre_p, spherical_jn, spherical_jn_prime, spherical_yn, spherical_yn_prime};

/// Converged field solution of the exact fluid-sphere model.
///
/// Pressure and velocity sums carry one entry per scattering angle in
/// the input `theta_points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluidSphereSolution {
    /// Backscatter target strength, dB re 1 m²
    pub target_strength_db: f64,
    /// Scattered pressure at the observation range, per angle
    pub scattered_pressure: Vec<Complex64>,
    /// Incident pressure at the observation range, per angle
    pub incident_pressure: Vec<Complex64>,
    /// Exterior particle velocity of the scattered field, per angle
    pub velocity: Vec<Complex64>,
    /// Particle velocity of the incident field, per angle
    pub incident_velocity: Vec<Complex64>,
    /// Number of partial-wave orders summed
    pub orders: usize,
    /// Whether the series satisfied the convergence tolerance
    pub converged: bool,
    /// Additional metadata
    pub metadata: serde_json::Value,
}

/// Per-order contribution of the exact fluid-sphere series.
///
/// Created fresh each iteration, folded into the accumulator, dropped.
#[derive(Debug, Clone)]
struct FluidSphereTerm {
    scattered: Vec<Complex64>,
    incident: Vec<Complex64>,
    target_strength: Complex64,
    velocity: Vec<Complex64>,
    incident_velocity: Vec<Complex64>,
}

impl SeriesTerm for FluidSphereTerm {
    fn magnitude(&self) -> f64 {
        // Maximum over angle samples; NaN propagates so the stopping
        // rule cannot fire on a corrupt term
        let mut max = 0.0_f64;
        for p in &self.scattered {
            let mag = p.norm();
            if mag.is_nan() {
                return f64::NAN;
            }
            if mag > max {
                max = mag;
            }
        }
        max
    }

    fn sanitize(&mut self) {
        for channel in [
            &mut self.scattered,
            &mut self.incident,
            &mut self.velocity,
            &mut self.incident_velocity,
        ] {
            for value in channel.iter_mut() {
                value.sanitize();
            }
        }
        self.target_strength.sanitize();
    }

    fn accumulate_into(&self, acc: &mut Self) {
        for (a, t) in acc.scattered.iter_mut().zip(&self.scattered) {
            *a += t;
        }
        for (a, t) in acc.incident.iter_mut().zip(&self.incident) {
            *a += t;
        }
        for (a, t) in acc.velocity.iter_mut().zip(&self.velocity) {
            *a += t;
        }
        for (a, t) in acc.incident_velocity.iter_mut().zip(&self.incident_velocity) {
            *a += t;
        }
        acc.target_strength += self.target_strength;
    }
}

/// (-1)^m
fn parity(m: usize) -> f64 {
    if m % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// (-i)^m, exact for integer m
fn neg_i_pow(m: usize) -> Complex64 {
    match m % 4 {
        0 => Complex64::new(1.0, 0.0),
        1 => Complex64::new(0.0, -1.0),
        2 => Complex64::new(-1.0, 0.0),
        _ => Complex64::new(0.0, 1.0),
    }
}

/// Order-m term of the exact fluid-sphere series.
fn fluid_sphere_term(
    m: usize,
    wave: &WaveNumbers,
    g: f64,
    h: f64,
    rho_c: f64,
    cos_theta: &[f64],
) -> Result<FluidSphereTerm> {
    let weight = (2 * m + 1) as f64;

    let j_kr = spherical_jn(m, wave.kr);
    let y_kr = spherical_yn(m, wave.kr)?;
    let alpha_kr = weight * spherical_jn_prime(m, wave.kr);
    let beta_kr = weight * spherical_yn_prime(m, wave.kr)?;

    let c_m = exact_fluid_modal_ratio(m, wave.ka, wave.k1a, g, h)?;
    let one_plus_ic = Complex64::new(1.0, c_m);

    let phase = neg_i_pow(m);
    // Aₘ = -(-i)ᵐ (2m+1) / (1 + i Cₘ)
    let a_m = -phase * weight / one_plus_ic;
    let h_kr = Complex64::new(j_kr, y_kr);
    let ts = Complex64::from(parity(m) * weight) / one_plus_ic;
    // -i/ρc, shared by both velocity channels
    let vel_scale = Complex64::new(0.0, -1.0 / rho_c);

    let mut scattered = Vec::with_capacity(cos_theta.len());
    let mut incident = Vec::with_capacity(cos_theta.len());
    let mut velocity = Vec::with_capacity(cos_theta.len());
    let mut incident_velocity = Vec::with_capacity(cos_theta.len());

    for &mu in cos_theta {
        let p_m = legendre_p(m, mu);
        scattered.push(a_m * p_m * h_kr);
        incident.push(phase * (weight * p_m * j_kr));
        velocity.push(vel_scale * (a_m / weight) * p_m * Complex64::new(alpha_kr, beta_kr));
        incident_velocity.push(vel_scale * phase * (p_m * alpha_kr));
    }

    Ok(FluidSphereTerm {
        scattered,
        incident,
        target_strength: ts,
        velocity,
        incident_velocity,
    })
}

/// Backscatter target strength from the accumulated per-order TS sum:
///
/// ```text
/// TS = 10 log₁₀( (2/ka)² |ΣTSₘ|² π a² / 4π )
/// ```
fn fluid_sphere_ts_db(ts_sum: Complex64, ka: f64, radius: f64) -> f64 {
    let sigma = (2.0 / ka).powi(2) * ts_sum.norm_sqr() * PI * radius * radius;
    10.0 * (sigma / (4.0 * PI)).log10()
}

/// Scattered field of a plane wave incident on a fluid sphere, with the
/// default convergence configuration.
///
/// See [`fluid_sphere_with_config`].
///
/// # Example
/// ```
/// use math_scatter::{fluid_sphere, FluidSphereParams};
/// use std::f64::consts::PI;
///
/// let params = FluidSphereParams {
///     frequency: 38_000.0,
///     radius: 0.01,
///     range: 1.0,
///     rho_w: 1025.0,
///     rho_b: 1028.0,
///     c_w: 1500.0,
///     c_b: 1550.0,
///     theta_points: vec![PI],
/// };
/// let solution = fluid_sphere(&params).unwrap();
/// assert!(solution.converged);
/// assert!(solution.target_strength_db.is_finite());
/// ```
pub fn fluid_sphere(params: &FluidSphereParams) -> Result<FluidSphereSolution> {
    fluid_sphere_with_config(params, &SeriesConfig::default())
}

/// Scattered field of a plane wave incident on a fluid sphere.
///
/// Solves the three-region boundary-condition system of Anderson (1950)
/// order by order under dynamic convergence control, accumulating the
/// scattered/incident pressure, the TS contribution, and the exterior
/// particle-velocity contributions per scattering angle.
///
/// Exceeding the iteration ceiling is not an error: the partial sums are
/// returned with `converged = false` and a diagnostic is logged.
///
/// # Errors
///
/// Returns a parameter error for non-physical inputs (fails fast before
/// the series), or a domain error if the observation range is zero (the
/// second-kind Bessel functions are singular there).
pub fn fluid_sphere_with_config(
    params: &FluidSphereParams,
    config: &SeriesConfig,
) -> Result<FluidSphereSolution> {
    params.validate()?;
    let wave = WaveNumbers::for_fluid_sphere(params)?;

    let g = params.density_contrast();
    let h = params.sound_speed_contrast();
    let rho_c = params.impedance();
    let cos_theta: Vec<f64> = params.theta_points.iter().map(|t| t.cos()).collect();

    let policy = TruncationPolicy::Dynamic(config.clone());
    let series = sum_partial_waves(&policy, |m| {
        fluid_sphere_term(m, &wave, g, h, rho_c, &cos_theta)
    })?;

    let target_strength_db = fluid_sphere_ts_db(series.sum.target_strength, wave.ka, params.radius);

    Ok(FluidSphereSolution {
        target_strength_db,
        scattered_pressure: series.sum.scattered,
        incident_pressure: series.sum.incident,
        velocity: series.sum.velocity,
        incident_velocity: series.sum.incident_velocity,
        orders: series.orders,
        converged: series.converged,
        metadata: serde_json::json!({
            "model": "fluid sphere (exact boundary match)",
            "ka": wave.ka,
            "k1a": wave.k1a,
            "g": g,
            "h": h,
            "orders": series.orders,
            "converged": series.converged,
            "regime": classify_regime(wave.ka),
        }),
    })
}

/// Backscatter target strength of a sphere from the amplitude series:
///
/// ```text
/// f_bs = -(i/k₀) Σₘ (-1)ᵐ (2m+1) Aₘ
/// TS   = 10 log₁₀ |f_bs|²
/// ```
///
/// Sums a fixed floor(ka) + 20 orders; ka bounds the number of
/// significant terms in these closed-form truncations. Note the
/// normalization differs from the full model's σ_bs/4π form.
///
/// # Errors
///
/// Returns a parameter error for non-positive frequency, radius, sound
/// speed, or contrasts, or a degenerate ka.
pub fn backscatter_ts(
    frequency: f64,
    radius: f64,
    sound_speed: f64,
    boundary: &SphereBoundary,
) -> Result<f64> {
    if sound_speed <= 0.0 {
        return Err(ScatterError::InvalidSoundSpeed { speed: sound_speed });
    }
    if frequency <= 0.0 {
        return Err(ScatterError::InvalidFrequency { freq: frequency });
    }
    if radius <= 0.0 {
        return Err(ScatterError::InvalidRadius { radius });
    }
    boundary.validate()?;

    let k0 = wave_number(sound_speed, frequency);
    let ka = k0 * radius;
    if ka == 0.0 {
        return Err(ScatterError::DegenerateKa { ka });
    }

    let orders = ka.floor() as usize + 20;
    let series = sum_partial_waves(&TruncationPolicy::Fixed(orders), |m| {
        let a_m = boundary.modal_amplitude(m, ka)?;
        Ok(a_m * (parity(m) * (2 * m + 1) as f64))
    })?;

    let f_bs = Complex64::new(0.0, -1.0 / k0) * series.sum;
    Ok(10.0 * f_bs.norm_sqr().log10())
}

/// Simplified fluid-sphere backscatter TS (Jech et al. 2015).
///
/// `g` and `h` are the density and sound-speed contrasts of the body
/// relative to the surrounding medium.
pub fn fluid_sphere_ts(
    frequency: f64,
    radius: f64,
    sound_speed: f64,
    g: f64,
    h: f64,
) -> Result<f64> {
    backscatter_ts(
        frequency,
        radius,
        sound_speed,
        &SphereBoundary::FluidSimplified { g, h },
    )
}

/// Backscatter TS of a pressure-release sphere.
pub fn pressure_release_sphere_ts(frequency: f64, radius: f64, sound_speed: f64) -> Result<f64> {
    backscatter_ts(frequency, radius, sound_speed, &SphereBoundary::PressureRelease)
}

/// Backscatter TS of a rigid sphere.
pub fn rigid_sphere_ts(frequency: f64, radius: f64, sound_speed: f64) -> Result<f64> {
    backscatter_ts(frequency, radius, sound_speed, &SphereBoundary::Rigid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn example_params() -> FluidSphereParams {
        FluidSphereParams {
            frequency: 38_000.0,
            radius: 0.01,
            range: 1.0,
            rho_w: 1025.0,
            rho_b: 1028.0,
            c_w: 1500.0,
            c_b: 1550.0,
            theta_points: vec![PI],
        }
    }

    /// Frequency giving the requested ka for a radius/sound-speed pair.
    fn frequency_for_ka(ka: f64, radius: f64, sound_speed: f64) -> f64 {
        ka * sound_speed / (2.0 * PI * radius)
    }

    #[test]
    fn test_example_scenario_converges() {
        // 38 kHz, 1 cm sphere, weak contrasts: finite TS, convergence
        // well inside the ceiling, past the minimum-order floor
        let solution = fluid_sphere(&example_params()).unwrap();

        assert!(solution.target_strength_db.is_finite());
        assert!(solution.converged);
        assert!(solution.orders > 10);
        assert!(solution.orders < 200);
        assert_eq!(solution.scattered_pressure.len(), 1);
        assert!(solution.scattered_pressure[0].norm().is_finite());
        assert!(solution.target_strength_db < 0.0);
    }

    #[test]
    fn test_term_magnitudes_decay_past_floor() {
        let params = example_params();
        let wave = WaveNumbers::for_fluid_sphere(&params).unwrap();
        let g = params.density_contrast();
        let h = params.sound_speed_contrast();
        let rho_c = params.impedance();
        let cos_theta = [PI.cos()];

        let magnitudes: Vec<f64> = (11..=16)
            .map(|m| {
                fluid_sphere_term(m, &wave, g, h, rho_c, &cos_theta)
                    .unwrap()
                    .magnitude()
            })
            .collect();

        for pair in magnitudes.windows(2) {
            assert!(
                pair[1] < pair[0],
                "terms must decay past the floor: {:?}",
                magnitudes
            );
        }
        assert!(magnitudes[magnitudes.len() - 1] < 1e-10);
    }

    #[test]
    fn test_rigid_sphere_rayleigh_asymptote() {
        // Long-wavelength limit: TS sits a constant 10 log10(25/4) dB
        // above 10 log10((ka)^4 a^2 / 9)
        let radius = 0.01;
        let c = 1500.0;
        let offset_db = 10.0 * (25.0_f64 / 4.0).log10();

        let ka = 0.05;
        let ts = rigid_sphere_ts(frequency_for_ka(ka, radius, c), radius, c).unwrap();
        let rayleigh = 10.0 * (ka.powi(4) * radius * radius / 9.0).log10();
        assert_abs_diff_eq!(ts - rayleigh, offset_db, epsilon = 0.05);

        // (ka)^4 scaling: halving ka lowers TS by 40 log10(2) dB
        let ts_a = rigid_sphere_ts(frequency_for_ka(0.04, radius, c), radius, c).unwrap();
        let ts_b = rigid_sphere_ts(frequency_for_ka(0.02, radius, c), radius, c).unwrap();
        assert_abs_diff_eq!(ts_a - ts_b, 40.0 * 2.0_f64.log10(), epsilon = 0.05);
    }

    #[test]
    fn test_full_and_simplified_fluid_agree_at_backscatter() {
        let params = example_params();
        let g = params.density_contrast();
        let h = params.sound_speed_contrast();

        let full = fluid_sphere(&params).unwrap().target_strength_db;
        let simplified =
            fluid_sphere_ts(params.frequency, params.radius, params.c_w, g, h).unwrap();
        let exact_fixed = backscatter_ts(
            params.frequency,
            params.radius,
            params.c_w,
            &SphereBoundary::FluidExact { g, h },
        )
        .unwrap();

        // Same modal ratio, same order count: tight agreement
        assert_abs_diff_eq!(exact_fixed, simplified, epsilon = 1e-9);
        // Dynamic vs fixed truncation differ only in a negligible tail
        assert_abs_diff_eq!(full, simplified, epsilon = 1e-4);
    }

    #[test]
    fn test_vanishing_contrast_suppresses_scattering() {
        // g = h = 1 means the body is indistinguishable from the medium
        let ts_weak = fluid_sphere_ts(38_000.0, 0.01, 1500.0, 1.0 + 1e-6, 1.0 + 1e-6).unwrap();
        let ts_weaker = fluid_sphere_ts(38_000.0, 0.01, 1500.0, 1.0 + 1e-9, 1.0 + 1e-9).unwrap();

        assert!(ts_weak < -100.0);
        assert!(ts_weaker < ts_weak);

        let mut params = example_params();
        params.rho_b = params.rho_w * (1.0 + 1e-6);
        params.c_b = params.c_w * (1.0 + 1e-6);
        let full = fluid_sphere(&params).unwrap();
        assert!(full.target_strength_db < -100.0);
    }

    #[test]
    fn test_forced_nonconvergence_degrades_gracefully() {
        let config = SeriesConfig {
            tolerance: 1e-10,
            min_orders: 10,
            max_orders: 5,
        };
        let solution = fluid_sphere_with_config(&example_params(), &config).unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.orders, 6);
        assert!(solution.target_strength_db.is_finite());
    }

    #[test]
    fn test_zero_range_is_a_domain_error() {
        let mut params = example_params();
        params.range = 0.0;

        let err = fluid_sphere(&params).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_invalid_parameters_fail_before_series() {
        let mut params = example_params();
        params.radius = -0.01;
        assert!(fluid_sphere(&params).unwrap_err().is_parameter_error());

        assert!(rigid_sphere_ts(0.0, 0.01, 1500.0)
            .unwrap_err()
            .is_parameter_error());
        assert!(pressure_release_sphere_ts(38_000.0, 0.01, -1.0)
            .unwrap_err()
            .is_parameter_error());
        assert!(fluid_sphere_ts(38_000.0, 0.01, 1500.0, -1.0, 1.0)
            .unwrap_err()
            .is_parameter_error());
    }

    #[test]
    fn test_simplified_variants_are_finite_and_distinct() {
        let (f, a, c) = (38_000.0, 0.01, 1500.0);

        let rigid = rigid_sphere_ts(f, a, c).unwrap();
        let release = pressure_release_sphere_ts(f, a, c).unwrap();
        let fluid = fluid_sphere_ts(f, a, c, 1.05, 1.02).unwrap();

        for ts in [rigid, release, fluid] {
            assert!(ts.is_finite());
        }
        // Different boundary conditions, different answers
        assert!((rigid - release).abs() > 1.0);
    }

    #[test]
    fn test_solution_metadata() {
        let solution = fluid_sphere(&example_params()).unwrap();

        assert_eq!(
            solution.metadata["model"],
            "fluid sphere (exact boundary match)"
        );
        assert!(solution.metadata["ka"].as_f64().unwrap() > 1.0);
        assert_eq!(solution.metadata["regime"], "Mie (ka ~ 1)");
    }

    #[test]
    fn test_multiple_angles() {
        let mut params = example_params();
        params.theta_points = vec![0.0, PI / 2.0, PI];

        let solution = fluid_sphere(&params).unwrap();
        assert_eq!(solution.scattered_pressure.len(), 3);
        assert_eq!(solution.incident_pressure.len(), 3);
        assert_eq!(solution.velocity.len(), 3);
        assert_eq!(solution.incident_velocity.len(), 3);
        for p in &solution.scattered_pressure {
            assert!(p.norm().is_finite());
        }
    }
}
