//! Polynomial easing: linear, quad, cubic, quart and quint.

use num_traits::Float;

use crate::{Curve, Ease, Mode};

/// `f(t) = t`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Linear;

/// Quadratic easing, `t²`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quad(pub Mode);

/// Cubic easing, `t³`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cubic(pub Mode);

/// Quartic easing, `t⁴`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quart(pub Mode);

/// Quintic easing, `t⁵`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quint(pub Mode);

impl<T: Float> Curve<T> for Linear {
    #[inline]
    fn eval(&self, t: T) -> T {
        t
    }
}

impl<T: Float> Curve<T> for Quad {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.0 {
            Mode::In => t * t,
            Mode::Out => t * (two - t),
            Mode::InOut => {
                let t = t * two;
                if t < one {
                    return half * t * t;
                }

                let t = t - one;
                -half * (t * (t - two) - one)
            }
        }
    }
}

impl<T: Float> Curve<T> for Cubic {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.0 {
            Mode::In => t * t * t,
            Mode::Out => {
                let t = t - one;
                t * t * t + one
            }
            Mode::InOut => {
                let t = t * two;
                if t < one {
                    return half * t * t * t;
                }

                let t = t - two;
                half * (t * t * t + two)
            }
        }
    }
}

impl<T: Float> Curve<T> for Quart {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.0 {
            Mode::In => t * t * t * t,
            Mode::Out => {
                let t = t - one;
                one - t * t * t * t
            }
            Mode::InOut => {
                let t = t * two;
                if t < one {
                    return half * t * t * t * t;
                }

                let t = t - two;
                -half * (t * t * t * t - two)
            }
        }
    }
}

impl<T: Float> Curve<T> for Quint {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.0 {
            Mode::In => t * t * t * t * t,
            Mode::Out => {
                let t = t - one;
                t * t * t * t * t + one
            }
            Mode::InOut => {
                let t = t * two;
                if t < one {
                    return half * t * t * t * t * t;
                }

                let t = t - two;
                half * (t * t * t * t * t + two)
            }
        }
    }
}

/// No easing at all: progress is returned unchanged.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::linear();
///
/// assert_approx_eq!(ease.eval(0.25f32), 0.25);
/// assert_approx_eq!(ease.eval(-3.0f32), -3.0);
/// ```
pub fn linear() -> Ease<Linear> {
    Ease(Linear)
}

/// `f(t) = t²`
pub fn in_quad() -> Ease<Quad> {
    Ease(Quad(Mode::In))
}

/// `f(t) = t·(2 − t)`
pub fn out_quad() -> Ease<Quad> {
    Ease(Quad(Mode::Out))
}

/// [`in_quad`](fn.in_quad.html) for the first half, then
/// [`out_quad`](fn.out_quad.html).
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::in_out_quad();
///
/// assert_approx_eq!(ease.eval(0.25f64), 0.125);
/// assert_approx_eq!(ease.eval(0.5f64), 0.5);
/// assert_approx_eq!(ease.eval(0.75f64), 0.875);
/// ```
pub fn in_out_quad() -> Ease<Quad> {
    Ease(Quad(Mode::InOut))
}

/// `f(t) = t³`
pub fn in_cubic() -> Ease<Cubic> {
    Ease(Cubic(Mode::In))
}

/// `f(t) = (t − 1)³ + 1`
pub fn out_cubic() -> Ease<Cubic> {
    Ease(Cubic(Mode::Out))
}

/// [`in_cubic`](fn.in_cubic.html) for the first half, then
/// [`out_cubic`](fn.out_cubic.html).
pub fn in_out_cubic() -> Ease<Cubic> {
    Ease(Cubic(Mode::InOut))
}

/// `f(t) = t⁴`
pub fn in_quart() -> Ease<Quart> {
    Ease(Quart(Mode::In))
}

/// `f(t) = 1 − (t − 1)⁴`
pub fn out_quart() -> Ease<Quart> {
    Ease(Quart(Mode::Out))
}

/// [`in_quart`](fn.in_quart.html) for the first half, then
/// [`out_quart`](fn.out_quart.html).
pub fn in_out_quart() -> Ease<Quart> {
    Ease(Quart(Mode::InOut))
}

/// `f(t) = t⁵`
pub fn in_quint() -> Ease<Quint> {
    Ease(Quint(Mode::In))
}

/// `f(t) = (t − 1)⁵ + 1`
pub fn out_quint() -> Ease<Quint> {
    Ease(Quint(Mode::Out))
}

/// [`in_quint`](fn.in_quint.html) for the first half, then
/// [`out_quint`](fn.out_quint.html).
pub fn in_out_quint() -> Ease<Quint> {
    Ease(Quint(Mode::InOut))
}
