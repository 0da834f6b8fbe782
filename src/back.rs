//! Back easing: pull back slightly before moving, or overshoot the target
//! before settling.

use num_traits::Float;

use crate::{lit, Curve, Ease, Mode};

/// Overshoot used by [`in_back`](fn.in_back.html) and friends. Gives roughly a
/// 10% dip below zero for `In`.
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Factor applied to the overshoot in `InOut` mode.
const IN_OUT_SCALE: f64 = 1.525;

/// Back easing with a given overshoot.
///
/// `In` dips below `0` and `Out` rises above `1`. In `InOut` mode the overshoot
/// is scaled by `1.525`; the second half evaluates the `Out` polynomial on the
/// doubled progress without halving or shifting it, so it leaves `[0, 1]`
/// quickly and ends well above `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Back<T> {
    mode: Mode,
    overshoot: T,
}

impl<T: Float> Back<T> {
    /// Build a back curve with the given overshoot. The `InOut` scaling is
    /// applied during evaluation, so `overshoot()` returns `overshoot`
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use easings::{Back, Mode};
    ///
    /// let back = Back::new(Mode::InOut, 2.0f32);
    ///
    /// assert_eq!(back.mode(), Mode::InOut);
    /// assert_eq!(back.overshoot(), 2.0);
    /// ```
    pub fn new(mode: Mode, overshoot: T) -> Self {
        Back { mode, overshoot }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn overshoot(&self) -> T {
        self.overshoot
    }
}

impl<T: Float> Curve<T> for Back<T> {
    fn eval(&self, t: T) -> T {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        match self.mode {
            Mode::In => {
                let v = self.overshoot;
                t * t * ((v + one) * t - v)
            }
            Mode::Out => {
                let v = self.overshoot;
                let t = t - one;
                t * t * ((v + one) * t + v) + one
            }
            Mode::InOut => {
                let v = self.overshoot * lit(IN_OUT_SCALE);
                let t = t * two;
                if t < one {
                    return half * (t * t * ((v + one) * t - v));
                }

                t * t * ((v + one) * t + v) + one
            }
        }
    }
}

/// Back ease-in with the default overshoot of `1.70158`.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let ease = easings::in_back::<f64>();
///
/// assert_approx_eq!(ease.eval(0.0f64), 0.0);
/// assert!(ease.eval(0.3f64) < 0.0);
/// assert_approx_eq!(ease.eval(1.0f64), 1.0);
/// ```
pub fn in_back<T: Float>() -> Ease<Back<T>> {
    in_back_custom(lit(DEFAULT_OVERSHOOT))
}

/// Back ease-in with a custom overshoot.
pub fn in_back_custom<T: Float>(overshoot: T) -> Ease<Back<T>> {
    Ease(Back::new(Mode::In, overshoot))
}

/// Back ease-out with the default overshoot of `1.70158`.
pub fn out_back<T: Float>() -> Ease<Back<T>> {
    out_back_custom(lit(DEFAULT_OVERSHOOT))
}

/// Back ease-out with a custom overshoot.
pub fn out_back_custom<T: Float>(overshoot: T) -> Ease<Back<T>> {
    Ease(Back::new(Mode::Out, overshoot))
}

/// Back ease-in-out with the default overshoot of `1.70158`.
pub fn in_out_back<T: Float>() -> Ease<Back<T>> {
    in_out_back_custom(lit(DEFAULT_OVERSHOOT))
}

/// Back ease-in-out with a custom overshoot, which is scaled by `1.525`.
pub fn in_out_back_custom<T: Float>(overshoot: T) -> Ease<Back<T>> {
    Ease(Back::new(Mode::InOut, overshoot))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn in_and_out_endpoints() {
        for v in [DEFAULT_OVERSHOOT, 0.0, 3.0] {
            assert_approx_eq!(Back::new(Mode::In, v).eval(0.0f64), 0.0, 1e-9);
            assert_approx_eq!(Back::new(Mode::In, v).eval(1.0f64), 1.0, 1e-9);
            assert_approx_eq!(Back::new(Mode::Out, v).eval(0.0f64), 0.0, 1e-9);
            assert_approx_eq!(Back::new(Mode::Out, v).eval(1.0f64), 1.0, 1e-9);
        }
    }

    #[test]
    fn overshoot() {
        let ease_in = Back::new(Mode::In, DEFAULT_OVERSHOOT);
        let ease_out = Back::new(Mode::Out, DEFAULT_OVERSHOOT);

        assert!(ease_in.eval(0.2f64) < 0.0);
        assert!(ease_out.eval(0.8f64) > 1.0);
        assert_approx_eq!(ease_in.eval(0.5f64), 0.25 * (2.70158 * 0.5 - 1.70158));
    }

    #[test]
    fn zero_overshoot_is_cubic() {
        let ease_in = Back::new(Mode::In, 0.0f64);
        let ease_out = Back::new(Mode::Out, 0.0f64);

        for t in [0.1, 0.35, 0.5, 0.9] {
            assert_approx_eq!(ease_in.eval(t), t * t * t);
            assert_approx_eq!(ease_out.eval(t), (t - 1.0) * (t - 1.0) * (t - 1.0) + 1.0);
        }
    }

    #[test]
    fn in_out_scales_overshoot_and_keeps_asymmetric_join() {
        let ease = Back::new(Mode::InOut, DEFAULT_OVERSHOOT);
        let v = DEFAULT_OVERSHOOT * 1.525;

        // First half: halved `In` polynomial on doubled progress.
        assert_eq!(ease.eval(0.25f64), 0.5 * (0.25 * ((v + 1.0) * 0.5 - v)));
        assert!(ease.eval(0.25f64) < 0.0);

        // Second half: raw `Out` polynomial on doubled progress.
        assert_eq!(ease.eval(0.5f64), (v + 1.0) + v + 1.0);
        assert_eq!(ease.eval(1.0f64), 4.0 * ((v + 1.0) * 2.0 + v) + 1.0);
        assert_eq!(ease.eval(0.0f64), 0.0);
    }

    #[test]
    fn in_out_does_not_accumulate_between_calls() {
        let ease = Back::new(Mode::InOut, DEFAULT_OVERSHOOT);
        let first = ease.eval(0.3f64);

        for _ in 0..10 {
            assert_eq!(ease.eval(0.3f64), first);
        }
    }
}
