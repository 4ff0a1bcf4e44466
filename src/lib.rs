//! Classical root finding for scalar real functions.
//!
//! * Bracketing: `bisection`, `regula_falsi`.
//! * Open: `newton_raphson`, `halley_method`, `secant`.
//! * Extrema: `localmax`, a critical point of f confirmed by f''.
//!
//! All solvers are pure: they borrow the user's function for the duration of
//! the call and keep no state between calls.
//!
//! ```
//! use scalaroots::bracket::Bounds;
//! use scalaroots::config::SolverConfig;
//! use scalaroots::solver::{bisection, regula_falsi};
//!
//! let f = |x: f64| x * x - 2.0;
//! let cfg = SolverConfig::default();
//!
//! let r1 = bisection(&f, &Bounds::new(0.0, 2.0), &cfg).expect("root");
//! let r2 = regula_falsi(&f, &Bounds::new(0.0, 2.0), &cfg).expect("root");
//! assert!((r1 - 2f64.sqrt()).abs() < 1e-5);
//! assert!((r2 - 2f64.sqrt()).abs() < 1e-5);
//! ```

#[macro_use]
mod macros;

pub mod bracket;
pub mod config;
pub mod convergence;
pub mod error;
pub mod solver;
pub mod wrap;

pub use crate::error::{Method, RootError};
