//! Spherical Bessel and Hankel functions
//!
//! Scalar evaluators for the radial basis functions of the partial-wave
//! expansion. Magnitudes vary across many orders of magnitude as the order
//! grows relative to the argument, so the first-kind functions use Miller's
//! downward recurrence rather than a direct power series.
//!
//! ## Definitions
//!
//! Spherical Bessel function of first kind:
//! ```text
//! j_n(x) = √(π/2x) * J_{n+1/2}(x)
//! ```
//!
//! Spherical Bessel function of second kind (Neumann):
//! ```text
//! y_n(x) = √(π/2x) * Y_{n+1/2}(x)
//! ```
//!
//! Spherical Hankel function of first kind:
//! ```text
//! h_n(x) = j_n(x) + i * y_n(x)
//! ```

use num_complex::Complex64;

use crate::error::{Result, ScatterError};

/// Spherical Bessel function of the first kind, jₙ(x).
///
/// Uses closed forms for n = 0, 1 and Miller's downward recurrence for
/// higher orders, which is essential for stability when n > x:
/// ```text
/// j_{n-1}(x) = (2n+1)/x * j_n(x) - j_{n+1}(x)
/// ```
/// Normalization uses j₀(x) = sin(x)/x, falling back to j₁ when the
/// argument sits near a zero of j₀.
///
/// Defined for all x; at x = 0, j₀ = 1 and jₙ = 0 for n > 0.
///
/// # Example
/// ```
/// use math_scatter::special::spherical_jn;
/// let j0 = spherical_jn(0, 1.0);
/// assert!((j0 - 1.0_f64.sin()).abs() < 1e-12);
/// ```
pub fn spherical_jn(n: usize, x: f64) -> f64 {
    if x.abs() < 1e-10 {
        return if n == 0 { 1.0 } else { 0.0 };
    }

    match n {
        0 => x.sin() / x,
        1 => x.sin() / (x * x) - x.cos() / x,
        _ => {
            // Miller's downward recurrence, seeded far above both n and x
            let start_n = n + (x.abs() as usize) + 20;

            let mut values = vec![0.0; start_n + 2];
            values[start_n + 1] = 0.0;
            values[start_n] = 1e-30;

            for k in (0..start_n).rev() {
                values[k] = (2 * k + 3) as f64 / x * values[k + 1] - values[k + 2];
            }

            // Normalize against j₀, or j₁ when x is near a zero of j₀
            let true_j0 = x.sin() / x;
            let scale = if true_j0.abs() > 1e-8 {
                true_j0 / values[0]
            } else {
                let true_j1 = x.sin() / (x * x) - x.cos() / x;
                true_j1 / values[1]
            };

            values[n] * scale
        }
    }
}

/// Spherical Bessel function of the second kind (Neumann), yₙ(x).
///
/// Uses the upward recurrence, which is stable for yₙ:
/// ```text
/// y_{n+1}(x) = (2n+1)/x * y_n(x) - y_{n-1}(x)
/// ```
/// seeded with y₀(x) = -cos(x)/x and y₁(x) = -cos(x)/x² - sin(x)/x.
///
/// # Errors
///
/// yₙ is singular at the origin; an argument of exactly zero returns
/// [`ScatterError::BesselDomain`] rather than a silent NaN or infinity.
pub fn spherical_yn(n: usize, x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(ScatterError::BesselDomain { argument: x });
    }

    let cos_x = x.cos();
    let sin_x = x.sin();

    let y0 = -cos_x / x;
    if n == 0 {
        return Ok(y0);
    }

    let y1 = -cos_x / (x * x) - sin_x / x;
    if n == 1 {
        return Ok(y1);
    }

    let mut y_nm2 = y0;
    let mut y_nm1 = y1;
    for k in 2..=n {
        let y_n = (2 * k - 1) as f64 / x * y_nm1 - y_nm2;
        y_nm2 = y_nm1;
        y_nm1 = y_n;
    }

    Ok(y_nm1)
}

/// Derivative of the spherical Bessel function, jₙ'(x).
///
/// Uses the recurrence:
/// ```text
/// j_n'(x) = j_{n-1}(x) - (n+1)/x * j_n(x)
/// ```
/// with j₀' = -j₁. At x = 0: j₁'(0) = 1/3 and all other orders vanish.
pub fn spherical_jn_prime(n: usize, x: f64) -> f64 {
    if n == 0 {
        return -spherical_jn(1, x);
    }

    if x.abs() < 1e-10 {
        return if n == 1 { 1.0 / 3.0 } else { 0.0 };
    }

    spherical_jn(n - 1, x) - (n + 1) as f64 / x * spherical_jn(n, x)
}

/// Derivative of the spherical Neumann function, yₙ'(x).
///
/// Uses the recurrence:
/// ```text
/// y_n'(x) = y_{n-1}(x) - (n+1)/x * y_n(x)
/// ```
/// with y₀' = -y₁.
///
/// # Errors
///
/// Propagates [`ScatterError::BesselDomain`] for an argument of zero.
pub fn spherical_yn_prime(n: usize, x: f64) -> Result<f64> {
    if n == 0 {
        return Ok(-spherical_yn(1, x)?);
    }

    Ok(spherical_yn(n - 1, x)? - (n + 1) as f64 / x * spherical_yn(n, x)?)
}

/// Spherical Hankel function of the first kind, hₙ(x) = jₙ(x) + i·yₙ(x).
///
/// # Errors
///
/// Propagates [`ScatterError::BesselDomain`] for an argument of zero.
pub fn spherical_hankel(n: usize, x: f64) -> Result<Complex64> {
    Ok(Complex64::new(spherical_jn(n, x), spherical_yn(n, x)?))
}

/// Derivative of the spherical Hankel function, hₙ'(x).
///
/// Order 0 uses the one-sided recurrence (there is no order −1 term):
/// ```text
/// h_0'(x) = (0/x) h_0(x) - h_1(x) = -h_1(x)
/// ```
/// Higher orders use the symmetric two-term recurrence:
/// ```text
/// h_n'(x) = h_{n-1}(x) - (n+1)/x * h_n(x)
/// ```
///
/// # Errors
///
/// Propagates [`ScatterError::BesselDomain`] for an argument of zero.
pub fn spherical_hankel_prime(n: usize, x: f64) -> Result<Complex64> {
    if n == 0 {
        return Ok(-spherical_hankel(1, x)?);
    }

    Ok(spherical_hankel(n - 1, x)? - spherical_hankel(n, x)? * ((n + 1) as f64 / x))
}
