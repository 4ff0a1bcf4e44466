//! Solver configuration: stopping tolerance and iteration budget.

/// Tolerance used when the caller has no particular precision in mind.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Iteration budget shared by every solver.
pub const MAX_ITER: usize = 1_000_000;

/// Magnitude at or below which a derivative or secant slope denominator is
/// treated as zero.
pub const DEGENERACY_THRESHOLD: f64 = 1e-12;

/// Stopping tolerance and iteration budget for a single solver call.
///
/// What `tol` bounds depends on the method: residual and half-width for
/// bisection, residual for regula falsi, step size for Newton-Raphson, Halley
/// and secant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    tol: f64,
    max_iter: usize,
}

impl SolverConfig {
    /// Configuration with the given tolerance and the default budget.
    pub fn new(tol: f64) -> SolverConfig {
        assert!(tol > 0.0);
        assert!(tol.is_finite());
        SolverConfig {
            tol,
            max_iter: MAX_ITER,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> SolverConfig {
        assert!(max_iter > 0);
        self.max_iter = max_iter;
        self
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig::new(DEFAULT_TOL)
    }
}
