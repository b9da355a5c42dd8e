//! Convergence-controlled partial-wave summation
//!
//! The orchestration core shared by every model variant: iterate the
//! order index m = 0, 1, 2, …, form the order-m term, fold it into the
//! running accumulator, and decide when to stop. Termination is an
//! explicit three-state machine (accumulating, converged, ceiling
//! exceeded) so the stopping contract is testable in isolation.

use num_complex::Complex64;

use crate::error::Result;

/// Stopping-rule parameters for the dynamically truncated series.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Absolute tolerance on the magnitude of the latest term
    pub tolerance: f64,
    /// Minimum number of orders to sum before the tolerance may fire;
    /// prevents stopping before the series enters its asymptotic decay
    pub min_orders: usize,
    /// Ceiling on the number of summed orders
    pub max_orders: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            min_orders: 10,
            max_orders: 200,
        }
    }
}

/// How the series decides to stop.
#[derive(Debug, Clone)]
pub enum TruncationPolicy {
    /// Stop once the latest term magnitude drops below tolerance (after
    /// the minimum-order floor), or at the ceiling with a diagnostic.
    Dynamic(SeriesConfig),
    /// Sum exactly this many orders with no runtime convergence check.
    /// Valid for the closed-form truncations, where ka bounds the number
    /// of significant terms (callers pass floor(ka) + 20).
    Fixed(usize),
}

/// Accumulated partial-wave sum.
#[derive(Debug, Clone)]
pub struct SeriesSolution<T> {
    /// The running sum after termination
    pub sum: T,
    /// Number of orders summed
    pub orders: usize,
    /// Magnitude of the last term, as seen by the stopping rule
    pub last_term_magnitude: f64,
    /// Whether the dynamic stopping rule fired (always true for the
    /// fixed-count policy)
    pub converged: bool,
}

/// One term of a partial-wave series, as seen by the summation engine.
pub trait SeriesTerm {
    /// Magnitude used by the stopping rule; for angle-dependent terms
    /// this is the maximum over all angle samples. NaN must propagate so
    /// a corrupt term can never satisfy the tolerance.
    fn magnitude(&self) -> f64;

    /// Zero NaN channels produced by near-singular derivative ratios at
    /// isolated orders. Runs after [`Self::magnitude`] is read, so a
    /// corrupt term contributes nothing but can never satisfy the
    /// tolerance either.
    fn sanitize(&mut self);

    /// Fold this term into the running accumulator.
    fn accumulate_into(&self, acc: &mut Self);
}

impl SeriesTerm for Complex64 {
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    fn sanitize(&mut self) {
        if self.re.is_nan() || self.im.is_nan() {
            *self = Complex64::new(0.0, 0.0);
        }
    }

    fn accumulate_into(&self, acc: &mut Self) {
        *acc += self;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeriesState {
    Accumulating,
    Converged,
    MaxOrdersExceeded,
}

/// Sum a partial-wave series under the given truncation policy.
///
/// The order-0 term seeds the accumulator, so at least the monopole term
/// is always summed. Exceeding the dynamic ceiling is not an error: the
/// partial sum is returned with `converged = false` and a diagnostic is
/// logged.
///
/// # Errors
///
/// Propagates the first error returned by the term builder (e.g. a
/// special-function domain error the caller cannot proceed past).
pub fn sum_partial_waves<T, F>(policy: &TruncationPolicy, mut next_term: F) -> Result<SeriesSolution<T>>
where
    T: SeriesTerm,
    F: FnMut(usize) -> Result<T>,
{
    let mut first = next_term(0)?;
    let mut last_magnitude = first.magnitude();
    first.sanitize();
    let mut sum = first;
    let mut orders = 1;

    let mut state = transition(policy, orders, last_magnitude);
    while state == SeriesState::Accumulating {
        let mut term = next_term(orders)?;
        last_magnitude = term.magnitude();
        term.sanitize();
        term.accumulate_into(&mut sum);
        orders += 1;

        state = transition(policy, orders, last_magnitude);
    }

    Ok(SeriesSolution {
        sum,
        orders,
        last_term_magnitude: last_magnitude,
        converged: state == SeriesState::Converged,
    })
}

fn transition(policy: &TruncationPolicy, orders: usize, last_magnitude: f64) -> SeriesState {
    match policy {
        TruncationPolicy::Fixed(count) => {
            if orders >= *count {
                SeriesState::Converged
            } else {
                SeriesState::Accumulating
            }
        }
        TruncationPolicy::Dynamic(config) => {
            if last_magnitude < config.tolerance && orders > config.min_orders {
                SeriesState::Converged
            } else if orders > config.max_orders {
                log::warn!(
                    "partial-wave series did not converge after {} orders \
                     (last term magnitude {:.3e}, tolerance {:.1e})",
                    orders,
                    last_magnitude,
                    config.tolerance
                );
                SeriesState::MaxOrdersExceeded
            } else {
                SeriesState::Accumulating
            }
        }
    }
}
