//! Use easing functions from the [`easer`](https://docs.rs/easer) library as
//! normalized curves.
//!
//! This is only available when enabling the `easer` feature.

use std::marker::PhantomData;

use easer::functions::Easing;
use num_traits::Float;

use crate::{Curve, Ease, Mode};

/// An `easer` easing function, evaluated with start `0`, change `1` and
/// duration `1`. See [`easer_curve`](fn.easer_curve.html).
#[derive(Debug)]
pub struct EaserCurve<E> {
    mode: Mode,
    easing: PhantomData<fn() -> E>,
}

impl<E> Clone for EaserCurve<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EaserCurve<E> {}

impl<T, E> Curve<T> for EaserCurve<E>
where
    T: Float,
    E: Easing<T>,
{
    fn eval(&self, t: T) -> T {
        let zero = T::zero();
        let one = T::one();

        match self.mode {
            Mode::In => E::ease_in(t, zero, one, one),
            Mode::Out => E::ease_out(t, zero, one, one),
            Mode::InOut => E::ease_in_out(t, zero, one, one),
        }
    }
}

/// Integrate an easing function from the
/// [`easer`](https://docs.rs/easer/0.2.1/easer/index.html) library.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let theirs = easings::easer_curve::<easings::easer::functions::Quad>(easings::Mode::Out);
/// let ours = easings::out_quad();
///
/// assert_approx_eq!(theirs.eval(0.3f64), ours.eval(0.3f64));
/// ```
pub fn easer_curve<E>(mode: Mode) -> Ease<EaserCurve<E>> {
    Ease(EaserCurve {
        mode,
        easing: PhantomData,
    })
}
