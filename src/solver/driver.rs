use crate::convergence::IsConverged;
use crate::error::{Method, RootError};

/// Driver for single-point iterative root finders.
///
/// Allows for arbitrary iteration functions and converge criteria.  The
/// iteration maps the current point to `(x_new, f(x))`; the user function 'f'
/// is kept compatible with the iteration routine using trait bounds defined
/// in the 'wrap' module.
pub(crate) fn iterative_root_find<F, I, C>(
    f: &F,
    iterate: &I,
    start: f64,
    finish: &C,
    max_iter: usize,
    method: Method,
) -> Result<f64, RootError>
where
    I: Fn(&F, f64) -> Result<(f64, f64), RootError>,
    C: IsConverged,
{
    assert!(start.is_finite());

    let mut x_pre = start;
    let mut x_cur = start;

    // stay inside maximum iteration count
    for it in 0..max_iter {
        let (x_new, f_pre) = iterate(f, x_pre)?;
        x_cur = x_new;

        if finish.is_converged(x_pre, x_cur, f_pre) {
            debug!("{} converged to x={} after {} iterations", method, x_cur, it + 1);
            return Ok(x_cur);
        }

        x_pre = x_cur;
    }

    debug!("{} exhausted {} iterations at x={}", method, max_iter, x_cur);
    Err(RootError::NonConvergence {
        method,
        last_x: x_cur,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convergence::SequenceDelta;

    // x -> x/2 halves the step every time
    fn halve(_: &(), x: f64) -> Result<(f64, f64), RootError> {
        Ok((x / 2.0, x))
    }

    #[test]
    fn test_driver_converges() {
        let conv = SequenceDelta::new(1e-3);
        let x = iterative_root_find(&(), &halve, 1.0, &conv, 100, Method::NewtonRaphson)
            .expect("converged");
        assert!(x.abs() < 1e-3);
    }

    #[test]
    fn test_driver_iteration_limit() {
        let conv = SequenceDelta::new(1e-3);
        match iterative_root_find(&(), &halve, 1.0, &conv, 3, Method::Halley) {
            Err(RootError::NonConvergence { method, last_x }) => {
                assert_eq!(method, Method::Halley);
                assert_eq!(last_x, 0.125);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_driver_propagates_iteration_error() {
        let conv = SequenceDelta::new(1e-3);
        let fail = |_: &(), x: f64| -> Result<(f64, f64), RootError> {
            Err(RootError::NonFiniteStep { x })
        };
        let err = iterative_root_find(&(), &fail, 2.0, &conv, 10, Method::NewtonRaphson)
            .expect_err("iteration failed");
        assert_eq!(err, RootError::NonFiniteStep { x: 2.0 });
    }

    #[test]
    #[should_panic]
    fn test_driver_nonfinite_start() {
        let conv = SequenceDelta::new(1e-3);
        let _ = iterative_root_find(&(), &halve, f64::NAN, &conv, 10, Method::NewtonRaphson);
    }
}
