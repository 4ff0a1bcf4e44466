//! Intervals and sign tests for bracketing methods.
//!
//! A bracket is a closed interval [a,b] whose endpoint values differ in sign.
//! For a continuous function the Intermediate Value Theorem guarantees that
//! the bracket contains at least one root.  Without a continuity guarantee, it
//! might be a singularity instead.

/// Bounds represents the closed interval [a,b].
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Bounds {
    /// Panics if `a > b` or either endpoint is not finite.  A reversed
    /// interval is not reordered.
    pub fn new(a: f64, b: f64) -> Bounds {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Bounds { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Midpoint (a+b)/2.  The sum overflows to infinity for endpoints near
    /// `f64::MAX`, so such intervals cannot be bisected.
    pub fn middle(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    pub fn size(&self) -> f64 {
        self.b - self.a
    }
}

/// Whether signs of values differ, properly handling float underflow.
///
/// Zero counts with the sign bit it carries, so a window ending exactly on a
/// root is reported.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    lhs.signum() != rhs.signum()
}

/// Whether values have strictly opposite signs; zero has no sign here.
///
/// Same answer as `lhs * rhs < 0.0` without the underflow.
pub fn is_strict_sign_change(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}

/// Whether endpoint values are acceptable for a bracketing solver, i.e. they
/// do not share a strict sign.  This is `f_a * f_b <= 0.0` without the
/// underflow.
pub fn is_bracket(f_a: f64, f_b: f64) -> bool {
    !((f_a > 0.0 && f_b > 0.0) || (f_a < 0.0 && f_b < 0.0))
}

/// Scans interval [a,b] and emits the first bracket containing a sign change.
pub fn first_bracket<F>(f: &F, bounds: &Bounds, window_size: f64) -> Option<Bounds>
where
    F: Fn(f64) -> f64,
{
    BracketGenerator::new(f, bounds.clone(), window_size).next()
}

/// Iterator over consecutive windows of [a,b] that contain a sign change.
///
/// Windows are `window_size` wide except the last one, which is clipped to
/// the end of the scanned interval.
pub struct BracketGenerator<'a, F>
where
    F: Fn(f64) -> f64,
{
    f: &'a F,
    span: Bounds,
    window_size: f64,
    cursor: f64,
    f_cursor: f64,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: &'a F, span: Bounds, window_size: f64) -> BracketGenerator<'a, F> {
        assert!(window_size > 0.0);
        let cursor = span.a;
        let f_cursor = f(cursor);
        BracketGenerator {
            f,
            span,
            window_size,
            cursor,
            f_cursor,
        }
    }
}

impl<'a, F> Iterator for BracketGenerator<'a, F>
where
    F: Fn(f64) -> f64,
{
    type Item = Bounds;

    fn next(&mut self) -> Option<Bounds> {
        while self.cursor < self.span.b {
            let win = Bounds {
                a: self.cursor,
                b: (self.cursor + self.window_size).min(self.span.b),
            };
            let f_b = (self.f)(win.b);
            let found = is_sign_change(self.f_cursor, f_b);

            self.cursor = win.b;
            self.f_cursor = f_b;

            // found root or singularity
            if found {
                return Some(win);
            }
        }
        None
    }
}
