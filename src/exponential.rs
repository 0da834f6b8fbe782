//! Exponential easing.

use num_traits::Float;

use crate::{lit, Curve, Ease, Mode};

/// Exponential easing, based on `2^(10·t)`.
///
/// The raw formulas never quite reach the endpoints, so progress of exactly
/// `0` (for `In`) and `1` (for `Out`) is special-cased; `InOut` handles both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Expo(pub Mode);

impl<T: Float> Curve<T> for Expo {
    fn eval(&self, t: T) -> T {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let half = one / two;
        let ten: T = lit(10.0);
        let base: T = lit(1024.0);

        match self.0 {
            Mode::In => {
                if t == zero {
                    return zero;
                }

                base.powf(t - one)
            }
            Mode::Out => {
                if t == one {
                    return one;
                }

                one - two.powf(-ten * t)
            }
            Mode::InOut => {
                if t == zero {
                    return zero;
                } else if t == one {
                    return one;
                }

                let t = t * two;
                if t < one {
                    return half * base.powf(t - one);
                }

                half * (-two.powf(-ten * (t - one)) + two)
            }
        }
    }
}

/// `f(t) = 2^(10·(t − 1))`, with `f(0) = 0` exactly.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::in_expo();
///
/// assert_eq!(ease.eval(0.0f64), 0.0);
/// assert_approx_eq!(ease.eval(0.9f64), 0.5);
/// assert_eq!(ease.eval(1.0f64), 1.0);
/// ```
pub fn in_expo() -> Ease<Expo> {
    Ease(Expo(Mode::In))
}

/// `f(t) = 1 − 2^(−10·t)`, with `f(1) = 1` exactly.
pub fn out_expo() -> Ease<Expo> {
    Ease(Expo(Mode::Out))
}

/// [`in_expo`](fn.in_expo.html) for the first half, then
/// [`out_expo`](fn.out_expo.html), exact at `0` and `1`.
pub fn in_out_expo() -> Ease<Expo> {
    Ease(Expo(Mode::InOut))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for mode in [Mode::In, Mode::Out, Mode::InOut] {
            assert_eq!(Expo(mode).eval(0.0f64), 0.0);
            assert_eq!(Expo(mode).eval(1.0f64), 1.0);
            assert_eq!(Expo(mode).eval(0.0f32), 0.0);
            assert_eq!(Expo(mode).eval(1.0f32), 1.0);
        }
    }

    #[test]
    fn raw_formula_near_endpoints() {
        // Just inside the special cases, the formula is close to but not at
        // the endpoint.
        let tiny = 1e-12f64;
        assert!(Expo(Mode::In).eval(tiny) > 0.0);
        assert_approx_eq!(Expo(Mode::In).eval(tiny), 1.0 / 1024.0);
        assert!(Expo(Mode::Out).eval(1.0 - tiny) < 1.0);
        assert_approx_eq!(Expo(Mode::Out).eval(1.0 - tiny), 1.0 - 1.0 / 1024.0);
    }

    #[test]
    fn fixed_points() {
        assert_eq!(Expo(Mode::InOut).eval(0.5f64), 0.5);
        assert_approx_eq!(Expo(Mode::Out).eval(0.1f64), 0.5);
        assert_approx_eq!(Expo(Mode::InOut).eval(0.25f64), 0.5 * 2.0f64.powf(-5.0));
        assert_approx_eq!(Expo(Mode::InOut).eval(0.75f64), 1.0 - 0.5 * 2.0f64.powf(-5.0));
    }
}
