//! Root finding algorithms.
//!
//! Bracketing methods (`bisection`, `regula_falsi`) and `secant` take a plain
//! closure.  Derivative-based methods take the function bundled with its
//! derivatives; see the `wrap` module for how to do this.
//!
//! Every solver takes a `SolverConfig` holding the stopping tolerance and the
//! iteration budget.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use scalaroots::config::SolverConfig;
//! use scalaroots::solver::newton_raphson;
//! use scalaroots::wrap::RealFnAndFirst;
//!
//! // function and its derivative
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let in_df = |x: f64| -2.0*x + 2.0;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! let root = newton_raphson(&f, 3.0, &SolverConfig::new(1e-10)).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root-2.41421356237).abs() < 1e-9);
//! ```
//!
//! Using Bisection Method:
//!
//! ```
//! use scalaroots::bracket::Bounds;
//! use scalaroots::config::SolverConfig;
//! use scalaroots::solver::bisection;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//!
//! let root = bisection(&in_f, &Bounds::new(2.0, 3.0), &SolverConfig::new(1e-10)).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root-2.41421356237).abs() < 1e-9);
//! ```

mod driver;

use crate::bracket::{is_bracket, is_strict_sign_change, Bounds};
use crate::config::{SolverConfig, DEGENERACY_THRESHOLD};
use crate::convergence::{IsConverged, SequenceDelta};
use crate::error::{Method, RootError};
use crate::wrap::{RealD2fEval, RealDfEval, RealFnEval};
use driver::iterative_root_find;

/// Validates a starting bracket.  Returns the endpoint itself when it is
/// already an exact root.
fn open_bracket(window: &Bounds, f_a: f64, f_b: f64) -> Result<Option<f64>, RootError> {
    if !is_bracket(f_a, f_b) {
        return Err(RootError::InvalidBracket {
            a: window.a,
            b: window.b,
            f_a,
            f_b,
        });
    }
    if f_a == 0.0 {
        return Ok(Some(window.a));
    }
    if f_b == 0.0 {
        return Ok(Some(window.b));
    }
    Ok(None)
}

/// Root finding via Bisection Method.
///
/// Returns the midpoint of the current bracket once either |f(mid)| < tol or
/// the bracket half-width drops below tol.  It always converges given a valid
/// starting bracket, but the speed of convergence is linear.
pub fn bisection<F>(f: &F, bounds: &Bounds, config: &SolverConfig) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let mut window = bounds.clone();
    let mut f_a = f(window.a);

    // ensure we started with valid bracket
    if let Some(root) = open_bracket(&window, f_a, f(window.b))? {
        return Ok(root);
    }

    let tol = config.tol();
    let mut last_x = window.middle();
    for it in 0..config.max_iter() {
        let mid = window.middle();
        let f_mid = f(mid);
        last_x = mid;

        // convergence criteria
        if f_mid.abs() < tol || window.size() / 2.0 < tol {
            debug!("Bisection converged to x={} after {} iterations", mid, it + 1);
            return Ok(mid);
        }

        if is_strict_sign_change(f_a, f_mid) {
            window.b = mid;
        } else {
            window.a = mid;
            f_a = f_mid;
        }
    }

    debug!("Bisection exhausted {} iterations", config.max_iter());
    Err(RootError::NonConvergence {
        method: Method::Bisection,
        last_x,
    })
}

/// Root finding via Regula Falsi (false position).
///
/// Each step intersects the chord through the bracket endpoints with the
/// x-axis.  Only the residual |f(x)| < tol stops the iteration: there is no
/// bracket width criterion, so a function that is flat near one endpoint can
/// leave the other endpoint pinned and exhaust the budget.
pub fn regula_falsi<F>(f: &F, bounds: &Bounds, config: &SolverConfig) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let mut window = bounds.clone();
    let mut f_a = f(window.a);
    let mut f_b = f(window.b);

    if let Some(root) = open_bracket(&window, f_a, f_b)? {
        return Ok(root);
    }

    // f_a and f_b keep strictly opposite signs, so the chord is never flat
    let tol = config.tol();
    let mut last_x = window.a;
    for it in 0..config.max_iter() {
        let x = (window.a * f_b - window.b * f_a) / (f_b - f_a);
        let f_x = f(x);
        last_x = x;

        if f_x.abs() < tol {
            debug!("Regula Falsi converged to x={} after {} iterations", x, it + 1);
            return Ok(x);
        }

        if is_strict_sign_change(f_a, f_x) {
            window.b = x;
            f_b = f_x;
        } else {
            window.a = x;
            f_a = f_x;
        }
    }

    debug!("Regula Falsi exhausted {} iterations", config.max_iter());
    Err(RootError::NonConvergence {
        method: Method::RegulaFalsi,
        last_x,
    })
}

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close to
/// the root this algorithm has quadratic convergence.  The method is
/// unbracketed: it may diverge, or converge to a root other than the nearest.
///
/// Stops once the step size drops below `config.tol()` and returns the new
/// point.
///
/// This algorithm requires the first derivative of f(x).
///
/// * If the second derivative is also available, consider Halley's method.
/// * If analytically computed derivatives are not available, consider secant.
pub fn newton_raphson<F>(f: &F, start: f64, config: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    let finish = SequenceDelta::new(config.tol());
    newton_raphson_with(f, start, &finish, config.max_iter())
}

/// Newton-Raphson with a custom convergence criterion.
pub fn newton_raphson_with<F, C>(
    f: &F,
    start: f64,
    finish: &C,
    max_iter: usize,
) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
    C: IsConverged,
{
    iterative_root_find(f, &nr_iteration, start, finish, max_iter, Method::NewtonRaphson)
}

/// Evaluate a single iteration for Newton's method.  Returns an error if the
/// derivative is (numerically) zero.  Returns (x_new, f(x)) otherwise.
fn nr_iteration<F>(f: &F, x: f64) -> Result<(f64, f64), RootError>
where
    F: RealFnEval + RealDfEval,
{
    let f_x = f.eval_f(x);
    let df_x = f.eval_df(x);
    if df_x.abs() <= DEGENERACY_THRESHOLD {
        return Err(RootError::ZeroDerivative { x, df: df_x });
    }
    let x_new = x - f_x / df_x;
    if !x_new.is_finite() {
        return Err(RootError::NonFiniteStep { x });
    }
    Ok((x_new, f_x))
}

/// Root finding using Halley's method.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close to
/// the root this algorithm has cubic convergence.  Stopping criterion is the
/// same step size test as Newton-Raphson.
///
/// This algorithm requires both the first and second derivatives of f(x).
///
/// A good overview of the derivation, history, and geometric interpretation of
/// Halley's method is in:
///
/// *Scavo, T. R.; Thoo, J. B. (1995). "On the geometry of Halley's method".
/// American Mathematical Monthly. 102 (5): 417-426.*
pub fn halley_method<F>(f: &F, start: f64, config: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval + RealD2fEval,
{
    let finish = SequenceDelta::new(config.tol());
    iterative_root_find(
        f,
        &halley_iteration,
        start,
        &finish,
        config.max_iter(),
        Method::Halley,
    )
}

/// Evaluate a single iteration for Halley's method.  Returns (x_new, f(x))
/// on success.
fn halley_iteration<F>(f: &F, x: f64) -> Result<(f64, f64), RootError>
where
    F: RealFnEval + RealDfEval + RealD2fEval,
{
    let f_x = f.eval_f(x);
    let df_x = f.eval_df(x);
    let d2f_x = f.eval_d2f(x);

    if df_x.abs() <= DEGENERACY_THRESHOLD {
        return Err(RootError::ZeroDerivative { x, df: df_x });
    }

    let x_new = x - (2.0 * f_x * df_x) / (2.0 * df_x * df_x - f_x * d2f_x);
    if !x_new.is_finite() {
        return Err(RootError::NonFiniteStep { x });
    }
    Ok((x_new, f_x))
}

/// Root finding via the Secant Method.
///
/// Replaces the derivative in Newton-Raphson with the slope through the two
/// most recent points, starting from `x0` and `x1`.  Stops once the new point
/// is within `config.tol()` of `x1`.
pub fn secant<F>(f: &F, mut x0: f64, mut x1: f64, config: &SolverConfig) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    let tol = config.tol();
    for it in 0..config.max_iter() {
        let denom = f1 - f0;
        if denom.abs() <= DEGENERACY_THRESHOLD {
            return Err(RootError::DegenerateSecant { x0, x1 });
        }

        let x_new = x0 - f0 * (x1 - x0) / denom;
        if !x_new.is_finite() {
            return Err(RootError::NonFiniteStep { x: x1 });
        }
        if (x_new - x1).abs() < tol {
            debug!("Secant converged to x={} after {} iterations", x_new, it + 1);
            return Ok(x_new);
        }

        x0 = x1;
        f0 = f1;
        x1 = x_new;
        f1 = f(x1);
    }

    debug!("Secant exhausted {} iterations", config.max_iter());
    Err(RootError::NonConvergence {
        method: Method::Secant,
        last_x: x1,
    })
}

/// Finds a local maximum of f on [a,b].
///
/// Locates a critical point by bisecting the first derivative, then confirms
/// it with the second derivative test.  Bisection errors are returned as-is;
/// a critical point with d2f >= 0 (minimum or inconclusive) is
/// `NoExtremumFound`.
pub fn localmax<F>(f: &F, bounds: &Bounds, config: &SolverConfig) -> Result<f64, RootError>
where
    F: RealDfEval + RealD2fEval,
{
    let df = |x: f64| f.eval_df(x);
    let x = bisection(&df, bounds, config)?;

    let d2f = f.eval_d2f(x);
    if d2f < 0.0 {
        return Ok(x);
    }
    Err(RootError::NoExtremumFound { x, d2f })
}
