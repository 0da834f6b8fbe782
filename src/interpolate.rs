//! Apply a curve to a value range over time.

use num_traits::Float;

use crate::Curve;

/// Apply `curve` to the value range `from..to`, given the time that has
/// elapsed out of `total_time`.
///
/// Computes `from + (to − from) · curve(elapsed_time / total_time)`. Nothing
/// is validated: a `total_time` of zero or an `elapsed_time` outside of
/// `[0, total_time]` yields whatever the arithmetic yields (possibly infinite
/// or NaN).
///
/// Pass curves by reference to keep using them afterwards.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::out_quad();
///
/// // Halfway through, an ease-out has already covered three quarters
/// assert_approx_eq!(easings::interpolate(0.0f64, 100.0, 2.0, 1.0, &ease), 75.0);
///
/// // Works just as well for decreasing ranges
/// assert_approx_eq!(easings::interpolate(100.0f64, 0.0, 2.0, 1.0, &ease), 25.0);
/// ```
pub fn interpolate<T, C>(from: T, to: T, total_time: T, elapsed_time: T, curve: C) -> T
where
    T: Float,
    C: Curve<T>,
{
    from + (to - from) * curve.eval(elapsed_time / total_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{in_expo, linear, out_quad};

    #[test]
    fn reaches_both_ends() {
        assert_eq!(interpolate(0.0, 10.0, 2.0, 0.0, out_quad()), 0.0);
        assert_eq!(interpolate(10.0, 20.0, 4.0, 4.0, linear()), 20.0);
        assert_eq!(interpolate(-5.0f32, 5.0, 3.0, 3.0, in_expo()), 5.0);
    }

    #[test]
    fn zero_total_time_is_not_rejected() {
        assert!(interpolate(0.0f64, 1.0, 0.0, 0.0, linear()).is_nan());
        assert_eq!(interpolate(0.0, 1.0, 0.0, 1.0, linear()), f64::INFINITY);
    }

    #[test]
    fn elapsed_beyond_total_extrapolates() {
        assert_eq!(interpolate(0.0, 10.0, 1.0, 2.0, linear()), 20.0);
        assert_eq!(interpolate(0.0, 10.0, 1.0, -1.0, linear()), -10.0);
    }
}
