//! Bounce easing.
//!
//! `Out` is the primitive: four parabolic arcs keyed on bands of `1/2.75`.
//! `In` mirrors it and `InOut` stitches both together at the midpoint.

use num_traits::Float;

use crate::{lit, Curve, Ease, Mode};

/// Bounce easing, like a ball dropped onto the target.
///
/// The last arc of `Out` scales the parabola by `0.984375` instead of adding
/// that offset. This is kept as-is: `Out` therefore drops to
/// `0.015380859375` at `t = 1`, and `In` starts at `0.984619140625`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounce(pub Mode);

const OUT: Bounce = Bounce(Mode::Out);
const IN: Bounce = Bounce(Mode::In);

impl Bounce {
    fn out<T: Float>(t: T) -> T {
        let one = T::one();
        let d: T = lit(2.75);
        let k: T = lit(7.5625);

        if t < one / d {
            return k * t * t;
        } else if t < lit::<T>(2.0) / d {
            let t = t - lit::<T>(1.5) / d;
            return k * t * t + lit(0.75);
        } else if t < lit::<T>(2.5) / d {
            let t = t - lit::<T>(2.25) / d;
            return k * t * t + lit(0.9375);
        }

        let t = t - lit::<T>(2.625) / d;
        k * t * t * lit(0.984375)
    }
}

impl<T: Float> Curve<T> for Bounce {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.0 {
            Mode::Out => Bounce::out(t),
            Mode::In => one - OUT.eval(one - t),
            Mode::InOut => {
                if t < half {
                    return IN.eval(t * two) * half;
                }

                OUT.eval(t * two - one) * half + half
            }
        }
    }
}

/// Mirror image of [`out_bounce`](fn.out_bounce.html): `1 − out(1 − t)`.
pub fn in_bounce() -> Ease<Bounce> {
    Ease(IN)
}

/// Bounce against the target a few times before coming to rest.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::out_bounce();
///
/// assert_approx_eq!(ease.eval(0.0f64), 0.0);
/// assert_approx_eq!(ease.eval(0.5f64), 0.765625);
/// ```
pub fn out_bounce() -> Ease<Bounce> {
    Ease(OUT)
}

/// [`in_bounce`](fn.in_bounce.html) for the first half, then
/// [`out_bounce`](fn.out_bounce.html).
pub fn in_out_bounce() -> Ease<Bounce> {
    Ease(Bounce(Mode::InOut))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn out_bands() {
        // first arc: 7.5625·t²
        assert_approx_eq!(OUT.eval(0.2f64), 7.5625 * 0.04);
        // second arc touches 0.75 at 1.5/2.75
        assert_approx_eq!(OUT.eval(1.5f64 / 2.75), 0.75);
        assert_approx_eq!(OUT.eval(0.5f64), 0.765625);
        // third arc touches 0.9375 at 2.25/2.75
        assert_approx_eq!(OUT.eval(2.25f64 / 2.75), 0.9375);
        // first and second arc meet at 1/2.75
        assert_approx_eq!(OUT.eval(1.0f64 / 2.75), 1.0);
    }

    #[test]
    fn last_arc_is_scaled_not_offset() {
        assert_approx_eq!(OUT.eval(2.625f64 / 2.75), 0.0);
        assert_approx_eq!(OUT.eval(1.0f64), 0.015380859375, 1e-12);
        assert_approx_eq!(IN.eval(0.0f64), 0.984619140625, 1e-12);
    }

    #[test]
    fn in_mirrors_out() {
        for t in [0.0, 0.1, 0.3, 0.5, 0.77, 0.95, 1.0] {
            assert_eq!(IN.eval(t), 1.0 - OUT.eval(1.0 - t));
        }
    }

    #[test]
    fn in_out_halves() {
        let ease = Bounce(Mode::InOut);

        assert_eq!(ease.eval(0.25f64), IN.eval(0.5f64) * 0.5);
        assert_eq!(ease.eval(0.75f64), OUT.eval(0.5f64) * 0.5 + 0.5);
        assert_eq!(ease.eval(0.5f64), 0.5);
    }

    #[test]
    fn works_for_f32() {
        assert_approx_eq!(OUT.eval(0.5f32), 0.765625f32);
        assert_eq!(IN.eval(0.25f32), 1.0 - OUT.eval(0.75f32));
    }
}
