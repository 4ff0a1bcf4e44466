use std::fmt;
use thiserror::Error;

/// Identifies the solver that produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bisection,
    RegulaFalsi,
    NewtonRaphson,
    Halley,
    Secant,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Method::Bisection => "Bisection",
            Method::RegulaFalsi => "Regula Falsi",
            Method::NewtonRaphson => "Newton-Raphson",
            Method::Halley => "Halley",
            Method::Secant => "Secant",
        };
        f.write_str(name)
    }
}

/// Root finding error conditions.
///
/// To help with diagnostics, these errors carry the last relevant `x`
/// position along with the function value that caused the failure.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RootError {
    /// Endpoint values share a strict sign, so the interval is not known to
    /// hold a root.
    #[error("f(a) and f(b) must have opposite signs: f({a})={f_a}, f({b})={f_b}")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Iteration budget ran out before the stopping criterion held.
    #[error("{method} method did not converge within the maximum number of iterations (last x={last_x})")]
    NonConvergence { method: Method, last_x: f64 },

    /// Derivative went to zero for a method that divides by it.
    #[error("derivative is zero at x={x} (df={df})")]
    ZeroDerivative { x: f64, df: f64 },

    /// Secant through the two current points is horizontal.
    #[error("division by zero in secant method: f(x0) and f(x1) coincide at x0={x0}, x1={x1}")]
    DegenerateSecant { x0: f64, x1: f64 },

    /// Critical point found, but the second derivative does not confirm a
    /// maximum.
    #[error("no local maximum found in the given interval: critical point x={x} has d2f={d2f}")]
    NoExtremumFound { x: f64, d2f: f64 },

    /// The solver computed a NaN or infinite next step.
    #[error("iteration from x={x} produced a non-finite step")]
    NonFiniteStep { x: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonconvergence_names_method() {
        let e = RootError::NonConvergence {
            method: Method::RegulaFalsi,
            last_x: 1.5,
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Regula Falsi method did not converge"), "{}", msg);
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_invalid_bracket_message() {
        let e = RootError::InvalidBracket {
            a: 1.0,
            b: 2.0,
            f_a: 1.0,
            f_b: 4.0,
        };
        assert_eq!(
            e.to_string(),
            "f(a) and f(b) must have opposite signs: f(1)=1, f(2)=4"
        );
    }
}
