//! Bundles a function with its analytic derivatives.
//!
//! Derivative-based solvers determine via traits what is f(x), df(x) and
//! d2f(x).  The wrappers here annotate plain closures accordingly:
//!
//! ```
//! use scalaroots::wrap::{RealDfEval, RealFnAndFirst, RealFnEval};
//!
//! let in_f = |x: f64| x * x - 2.0;
//! let in_df = |x: f64| 2.0 * x;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! assert_eq!(f.eval_f(3.0), 7.0);
//! assert_eq!(f.eval_df(3.0), 6.0);
//! ```

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Trait evaluating the second derivative: d2f(x) with x in R^1.
pub trait RealD2fEval {
    fn eval_d2f(&self, x: f64) -> f64;
}

/// Function and its first derivative.
pub struct RealFnAndFirst<'a, F1, F2> {
    pub f: &'a F1,
    pub df: &'a F2,
}

impl<'a, F1, F2> RealFnAndFirst<'a, F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2) -> RealFnAndFirst<'a, F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<F1, F2> RealFnEval for RealFnAndFirst<'_, F1, F2>
where
    F1: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F1, F2> RealDfEval for RealFnAndFirst<'_, F1, F2>
where
    F2: Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Function with its first and second derivatives.
pub struct RealFnAndFirstSecond<'a, F1, F2, F3> {
    pub f: &'a F1,
    pub df: &'a F2,
    pub d2f: &'a F3,
}

impl<'a, F1, F2, F3> RealFnAndFirstSecond<'a, F1, F2, F3>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
    F3: Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2, d2f: &'a F3) -> RealFnAndFirstSecond<'a, F1, F2, F3> {
        RealFnAndFirstSecond { f, df, d2f }
    }
}

impl<F1, F2, F3> RealFnEval for RealFnAndFirstSecond<'_, F1, F2, F3>
where
    F1: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F1, F2, F3> RealDfEval for RealFnAndFirstSecond<'_, F1, F2, F3>
where
    F2: Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

impl<F1, F2, F3> RealD2fEval for RealFnAndFirstSecond<'_, F1, F2, F3>
where
    F3: Fn(f64) -> f64,
{
    fn eval_d2f(&self, x: f64) -> f64 {
        (self.d2f)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_second_dispatch() {
        let in_f = |x: f64| -(x - 3.0) * (x - 3.0);
        let in_df = |x: f64| -2.0 * (x - 3.0);
        let in_d2f = |_: f64| -2.0;
        let f = RealFnAndFirstSecond::new(&in_f, &in_df, &in_d2f);

        assert_eq!(f.eval_f(1.0), -4.0);
        assert_eq!(f.eval_df(1.0), 4.0);
        assert_eq!(f.eval_d2f(1.0), -2.0);
    }
}
