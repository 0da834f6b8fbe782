//! Elastic easing: an exponentially decaying sine wave.

use num_traits::{Float, FloatConst};

use crate::{lit, Curve, Ease, Mode};

/// Amplitude used by [`in_elastic`](fn.in_elastic.html) and friends.
pub const DEFAULT_AMPLITUDE: f64 = 0.1;

/// Period used by [`in_elastic`](fn.in_elastic.html) and friends.
pub const DEFAULT_PERIOD: f64 = 0.4;

/// Elastic easing with a given amplitude and period.
///
/// Amplitudes below one are raised to one, in which case the phase shift is a
/// quarter period. Progress of exactly `0` and `1` always maps to `0` and `1`.
///
/// The curve oscillates around its target, so values outside of `[0, 1]` are
/// expected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elastic<T> {
    mode: Mode,
    amplitude: T,
    period: T,
    shift: T,
}

impl<T: Float + FloatConst> Elastic<T> {
    /// Build an elastic curve, deriving its phase shift from `amplitude` and
    /// `period`.
    ///
    /// # Example
    /// ```
    /// use easings::{Elastic, Mode};
    ///
    /// let elastic = Elastic::new(Mode::InOut, 0.5f64, 0.3);
    ///
    /// assert_eq!(elastic.mode(), Mode::InOut);
    /// assert_eq!(elastic.amplitude(), 1.0);
    /// assert_eq!(elastic.period(), 0.3);
    /// ```
    pub fn new(mode: Mode, amplitude: T, period: T) -> Self {
        let one = T::one();
        let tau = T::PI() + T::PI();

        let (amplitude, shift) = if amplitude < one {
            (one, period / lit(4.0))
        } else {
            (amplitude, period * (one / amplitude).asin() / tau)
        };

        Elastic {
            mode,
            amplitude,
            period,
            shift,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The effective amplitude, i.e. after raising it to at least one.
    pub fn amplitude(&self) -> T {
        self.amplitude
    }

    pub fn period(&self) -> T {
        self.period
    }

    /// The phase shift derived from amplitude and period.
    pub fn shift(&self) -> T {
        self.shift
    }

    #[inline]
    fn wave(&self, t: T) -> T {
        let tau = T::PI() + T::PI();

        ((t - self.shift) * tau / self.period).sin()
    }
}

impl<T: Float + FloatConst> Curve<T> for Elastic<T> {
    fn eval(&self, t: T) -> T {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let half = one / two;
        let ten: T = lit(10.0);

        if t == zero {
            return zero;
        }

        if t == one {
            return one;
        }

        let a = self.amplitude;

        match self.mode {
            Mode::In => a * two.powf(ten * (t - one)) * self.wave(t - one),
            Mode::Out => a * two.powf(-ten * t) * self.wave(t) + one,
            Mode::InOut => {
                let t = t * two;
                if t < one {
                    return -half * (a * two.powf(ten * (t - one)) * self.wave(t - one));
                }

                a * two.powf(-ten * (t - one)) * self.wave(t - one) * half + one
            }
        }
    }
}

/// Elastic ease-in with amplitude `0.1` and period `0.4`.
///
/// # Example
/// ```
/// let ease = easings::in_elastic::<f64>();
///
/// assert_eq!(ease.eval(0.0), 0.0);
/// assert!(ease.eval(0.6) < 0.0);
/// assert_eq!(ease.eval(1.0), 1.0);
/// ```
pub fn in_elastic<T: Float + FloatConst>() -> Ease<Elastic<T>> {
    in_elastic_custom(lit(DEFAULT_AMPLITUDE), lit(DEFAULT_PERIOD))
}

/// Elastic ease-in with a custom amplitude and period.
pub fn in_elastic_custom<T: Float + FloatConst>(amplitude: T, period: T) -> Ease<Elastic<T>> {
    Ease(Elastic::new(Mode::In, amplitude, period))
}

/// Elastic ease-out with amplitude `0.1` and period `0.4`.
pub fn out_elastic<T: Float + FloatConst>() -> Ease<Elastic<T>> {
    out_elastic_custom(lit(DEFAULT_AMPLITUDE), lit(DEFAULT_PERIOD))
}

/// Elastic ease-out with a custom amplitude and period.
pub fn out_elastic_custom<T: Float + FloatConst>(amplitude: T, period: T) -> Ease<Elastic<T>> {
    Ease(Elastic::new(Mode::Out, amplitude, period))
}

/// Elastic ease-in-out with amplitude `0.1` and period `0.4`.
pub fn in_out_elastic<T: Float + FloatConst>() -> Ease<Elastic<T>> {
    in_out_elastic_custom(lit(DEFAULT_AMPLITUDE), lit(DEFAULT_PERIOD))
}

/// Elastic ease-in-out with a custom amplitude and period.
pub fn in_out_elastic_custom<T: Float + FloatConst>(
    amplitude: T,
    period: T,
) -> Ease<Elastic<T>> {
    Ease(Elastic::new(Mode::InOut, amplitude, period))
}
