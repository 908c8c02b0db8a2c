//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Step size for the symmetric finite-difference derivative.
const DERIVATIVE_STEP: f64 = 1e-8;

/// Derivatives smaller than this are treated as zero.
const ZERO_DERIVATIVE: f64 = 1e-15;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Iteration stops as soon as `|f(x_n)| < config.tolerance`. There is no
/// step-size stopping rule: a root is only reported when the residual
/// itself is small.
///
/// # Errors
///
/// - [`MathError::StationaryPoint`] if the derivative vanishes at an iterate
/// - [`MathError::NonFinite`] if `f` or the step produce NaN/infinity
/// - [`MathError::ConvergenceFailed`] if `max_iterations` steps do not
///   reach the tolerance
///
/// # Example
///
/// ```rust
/// use tally_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { x, value: fx });
        }

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if dfx.is_nan() || dfx.abs() < ZERO_DERIVATIVE {
            return Err(MathError::StationaryPoint { x, derivative: dfx });
        }

        x -= fx / dfx;
        log::trace!("newton iteration {iteration}: x = {x}, f = {fx:.3e}, f' = {dfx:.3e}");
    }

    let residual = f(x);
    if residual.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: config.max_iterations,
            residual,
        });
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        x,
        residual,
    ))
}

/// Newton-Raphson with numerical derivative estimation.
///
/// The derivative is the symmetric difference
/// `(f(x + h) - f(x - h)) / 2h` with `h = 1e-8`.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP)) / (2.0 * DERIVATIVE_STEP);

    newton_raphson(&f, df, initial_guess, config)
}
