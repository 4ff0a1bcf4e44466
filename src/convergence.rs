//! Stopping criteria for the single-point iterative solvers.

/// Decides whether an iteration has converged.
///
/// `x_pre` is the point the step was taken from, `x_cur` the point it landed
/// on and `f_pre` the function value at `x_pre`.
pub trait IsConverged {
    fn is_converged(&self, x_pre: f64, x_cur: f64, f_pre: f64) -> bool;
}

/// Converged once the step size |x_cur - x_pre| drops below epsilon.
pub struct SequenceDelta {
    epsilon_abs: f64,
}

impl SequenceDelta {
    pub fn new(epsilon_abs: f64) -> SequenceDelta {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        SequenceDelta { epsilon_abs }
    }
}

impl IsConverged for SequenceDelta {
    fn is_converged(&self, x_pre: f64, x_cur: f64, _f_pre: f64) -> bool {
        (x_pre - x_cur).abs() < self.epsilon_abs
    }
}

/// Converged once the residual |f(x)| drops below epsilon.
pub struct Residual {
    epsilon_abs: f64,
}

impl Residual {
    pub fn new(epsilon_abs: f64) -> Residual {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        Residual { epsilon_abs }
    }
}

impl IsConverged for Residual {
    fn is_converged(&self, _x_pre: f64, _x_cur: f64, f_pre: f64) -> bool {
        f_pre.abs() < self.epsilon_abs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64;

    #[test]
    fn test_sequence_delta_convergence() {
        // too far apart
        let c = SequenceDelta::new(1e-9);
        let x_0 = 10.2;
        assert!(!c.is_converged(x_0, x_0 + 1e-8, 10.0));

        // just right
        assert!(c.is_converged(x_0, x_0 + 5e-10, 10.0));
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_zero() {
        let _ = SequenceDelta::new(0.0);
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_negative() {
        let _ = SequenceDelta::new(-1.0);
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_nan() {
        let _ = SequenceDelta::new(f64::NAN);
    }

    #[test]
    fn test_residual_convergence() {
        // step size is irrelevant
        let c = Residual::new(1e-6);
        assert!(c.is_converged(0.0, 100.0, -5e-7));
        assert!(!c.is_converged(1.0, 1.0, 2e-6));
    }

    #[test]
    #[should_panic]
    fn test_residual_accuracy_infinite() {
        let _ = Residual::new(f64::INFINITY);
    }
}
