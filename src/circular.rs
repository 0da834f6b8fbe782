//! Sinusoidal and circular easing.

use num_traits::{Float, FloatConst};

use crate::{Curve, Ease, Mode};

/// Sinusoidal easing, following a quarter (or half) cosine wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sine(pub Mode);

/// Circular easing, following a quarter circle.
///
/// For inputs outside of `[0, 1]` the square root is taken of a negative
/// number and the result is NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Circ(pub Mode);

impl<T: Float + FloatConst> Curve<T> for Sine {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let half = one / (one + one);

        match self.0 {
            Mode::In => one - (t * T::FRAC_PI_2()).cos(),
            Mode::Out => (t * T::FRAC_PI_2()).sin(),
            Mode::InOut => half * (one - (T::PI() * t).cos()),
        }
    }
}

impl<T: Float> Curve<T> for Circ {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.0 {
            Mode::In => one - (one - t * t).sqrt(),
            Mode::Out => {
                let t = t - one;
                (one - t * t).sqrt()
            }
            Mode::InOut => {
                let t = t * two;
                if t < one {
                    return -half * ((one - t * t).sqrt() - one);
                }

                half * ((one - (t - two) * (t - two)).sqrt() + one)
            }
        }
    }
}

/// `f(t) = 1 − cos(t·π/2)`
pub fn in_sine() -> Ease<Sine> {
    Ease(Sine(Mode::In))
}

/// `f(t) = sin(t·π/2)`
pub fn out_sine() -> Ease<Sine> {
    Ease(Sine(Mode::Out))
}

/// `f(t) = (1 − cos(π·t)) / 2`
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::in_out_sine();
///
/// assert_approx_eq!(ease.eval(0.5f64), 0.5);
/// assert_approx_eq!(ease.eval(0.25f64), (1.0 - std::f64::consts::FRAC_1_SQRT_2) / 2.0);
/// ```
pub fn in_out_sine() -> Ease<Sine> {
    Ease(Sine(Mode::InOut))
}

/// `f(t) = 1 − √(1 − t²)`
pub fn in_circ() -> Ease<Circ> {
    Ease(Circ(Mode::In))
}

/// `f(t) = √(1 − (t − 1)²)`
pub fn out_circ() -> Ease<Circ> {
    Ease(Circ(Mode::Out))
}

/// [`in_circ`](fn.in_circ.html) for the first half, then
/// [`out_circ`](fn.out_circ.html).
pub fn in_out_circ() -> Ease<Circ> {
    Ease(Circ(Mode::InOut))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn endpoints() {
        for mode in [Mode::In, Mode::Out, Mode::InOut] {
            assert_approx_eq!(Sine(mode).eval(0.0f64), 0.0, 1e-9);
            assert_approx_eq!(Sine(mode).eval(1.0f64), 1.0, 1e-9);
            assert_approx_eq!(Circ(mode).eval(0.0f64), 0.0, 1e-9);
            assert_approx_eq!(Circ(mode).eval(1.0f64), 1.0, 1e-9);
        }
    }

    #[test]
    fn in_out_midpoint() {
        assert_approx_eq!(Sine(Mode::InOut).eval(0.5f64), 0.5, 1e-12);
        assert_eq!(Circ(Mode::InOut).eval(0.5f64), 0.5);
    }

    #[test]
    fn fixed_points() {
        let half_sqrt3 = 3.0f64.sqrt() / 2.0;

        assert_approx_eq!(Sine(Mode::Out).eval(1.0f64 / 3.0), 0.5);
        assert_approx_eq!(Sine(Mode::In).eval(2.0f64 / 3.0), 0.5);
        assert_approx_eq!(Circ(Mode::In).eval(0.5f64), 1.0 - half_sqrt3);
        assert_approx_eq!(Circ(Mode::Out).eval(0.5f64), half_sqrt3);
        assert_approx_eq!(Circ(Mode::InOut).eval(0.25f64), (1.0 - half_sqrt3) / 2.0);
    }

    #[test]
    fn circ_outside_unit_interval_is_nan() {
        assert!(Circ(Mode::In).eval(2.0f64).is_nan());
        assert!(Circ(Mode::Out).eval(-1.0f64).is_nan());
    }
}
