//! Legendre polynomials
//!
//! The angular basis of the partial-wave expansion, evaluated at the
//! cosine of the scattering angle.

/// Legendre polynomial Pₙ(x).
///
/// Uses the stable three-term recurrence:
/// ```text
/// P_j(x) = ((2j-1) x P_{j-1}(x) - (j-1) P_{j-2}(x)) / j
/// ```
/// seeded with P₀ = 1 and P₁ = x. Defined for all real x and all n ≥ 0.
///
/// # Example
/// ```
/// use math_scatter::special::legendre_p;
/// assert!((legendre_p(0, 0.3) - 1.0).abs() < 1e-12);
/// assert!((legendre_p(1, 0.3) - 0.3).abs() < 1e-12);
/// ```
pub fn legendre_p(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut p_nm2 = 1.0;
            let mut p_nm1 = x;

            for j in 2..=n {
                let p_n = ((2 * j - 1) as f64 * x * p_nm1 - (j - 1) as f64 * p_nm2) / j as f64;
                p_nm2 = p_nm1;
                p_nm1 = p_n;
            }

            p_nm1
        }
    }
}

/// Legendre polynomial of one degree at several arguments, one per
/// scattering-angle sample.
pub fn legendre_p_samples(n: usize, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| legendre_p(n, x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_legendre_p0_p1() {
        for &x in &[-0.7, 0.0, 0.3, 1.0] {
            assert_abs_diff_eq!(legendre_p(0, x), 1.0, epsilon = EPSILON);
            assert_abs_diff_eq!(legendre_p(1, x), x, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_legendre_closed_forms() {
        let x = 0.5;

        // P₂(x) = (3x² - 1)/2
        assert_abs_diff_eq!(
            legendre_p(2, x),
            (3.0 * x * x - 1.0) / 2.0,
            epsilon = EPSILON
        );

        // P₃(x) = (5x³ - 3x)/2
        assert_abs_diff_eq!(
            legendre_p(3, x),
            (5.0 * x * x * x - 3.0 * x) / 2.0,
            epsilon = EPSILON
        );

        // P₄(x) = (35x⁴ - 30x² + 3)/8
        assert_abs_diff_eq!(
            legendre_p(4, x),
            (35.0 * x.powi(4) - 30.0 * x * x + 3.0) / 8.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_legendre_at_one() {
        // P_n(1) = 1 for all n
        for n in 0..20 {
            assert_abs_diff_eq!(legendre_p(n, 1.0), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_legendre_at_minus_one() {
        // P_n(-1) = (-1)^n
        for n in 0..20 {
            let expected = if n % 2 == 0 { 1.0 } else { -1.0 };
            assert_abs_diff_eq!(legendre_p(n, -1.0), expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_legendre_samples() {
        let xs = [-1.0, -0.25, 0.5, 1.0];
        let p = legendre_p_samples(3, &xs);

        assert_eq!(p.len(), xs.len());
        for (i, &x) in xs.iter().enumerate() {
            assert_abs_diff_eq!(p[i], legendre_p(3, x), epsilon = EPSILON);
        }
    }
}
