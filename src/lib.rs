//! Easings is a small library of normalized *easing curves*.
//!
//! An easing curve remaps linear progress `t` (usually in `[0, 1]`) to eased
//! progress, giving transitions a non-constant perceived velocity. The crate
//! provides the usual families (quad, cubic, quart, quint, sine, expo, circ,
//! elastic, back and bounce) in their `In`, `Out` and `InOut` flavors, and an
//! [`interpolate`](fn.interpolate.html) helper that applies a curve to a value
//! range over time.
//!
//! Curves are tiny immutable values, so construct them once and evaluate them
//! as often as you like. Evaluation never allocates, never panics and never
//! clamps: inputs outside of `[0, 1]` simply produce whatever the formula
//! implies.
//!
//! ## Examples
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! // Curves are constructed once...
//! let ease = easings::in_out_cubic();
//!
//! // ...and evaluated at any progress value
//! assert_approx_eq!(ease.eval(0.0f64), 0.0);
//! assert_approx_eq!(ease.eval(0.5f64), 0.5);
//! assert_approx_eq!(ease.eval(1.0f64), 1.0);
//!
//! // Move a sprite from x = 10 to x = 110 over two seconds
//! let x = easings::interpolate(10.0f64, 110.0, 2.0, 1.0, &ease);
//! assert_approx_eq!(x, 60.0);
//!
//! // Some families overshoot on purpose
//! let back = easings::in_back::<f32>();
//! assert!(back.eval(0.2) < 0.0);
//! ```

use std::ops::Deref;

use num_traits::Float;

mod back;
mod bounce;
mod circular;
#[cfg(feature = "easer")]
mod easer_compat;
mod elastic;
mod exponential;
mod interpolate;
mod kind;
mod polynomial;

pub use back::{
    in_back, in_back_custom, in_out_back, in_out_back_custom, out_back, out_back_custom, Back,
    DEFAULT_OVERSHOOT,
};
pub use bounce::{in_bounce, in_out_bounce, out_bounce, Bounce};
pub use circular::{in_circ, in_out_circ, in_out_sine, in_sine, out_circ, out_sine, Circ, Sine};
#[cfg(feature = "easer")]
pub use easer_compat::{easer_curve, EaserCurve};
pub use elastic::{
    in_elastic, in_elastic_custom, in_out_elastic, in_out_elastic_custom, out_elastic,
    out_elastic_custom, Elastic, DEFAULT_AMPLITUDE, DEFAULT_PERIOD,
};
pub use exponential::{in_expo, in_out_expo, out_expo, Expo};
pub use interpolate::interpolate;
pub use kind::{EaseKind, ParseEaseKindError};
pub use polynomial::{
    in_cubic, in_out_cubic, in_out_quad, in_out_quart, in_out_quint, in_quad, in_quart, in_quint,
    linear, out_cubic, out_quad, out_quart, out_quint, Cubic, Linear, Quad, Quart, Quint,
};

#[cfg(feature = "easer")]
pub use easer;

/// A `Curve` maps normalized progress to eased progress.
///
/// `T` is the floating point type the curve is evaluated with. All curves in
/// this crate are implemented for every [`num_traits::Float`], so the same
/// curve value works for both `f32` and `f64`.
///
/// Implementations must be pure: evaluating a curve never changes it, and two
/// evaluations at the same `t` return the same value.
pub trait Curve<T> {
    /// Evaluate the curve at progress `t`.
    fn eval(&self, t: T) -> T;
}

impl<'a, T, C> Curve<T> for &'a C
where
    C: Curve<T> + ?Sized,
{
    fn eval(&self, t: T) -> T {
        (*self).eval(t)
    }
}

impl<T, C> Curve<T> for Box<C>
where
    C: Curve<T> + ?Sized,
{
    fn eval(&self, t: T) -> T {
        self.deref().eval(t)
    }
}

/// The three easing flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Accelerate from zero velocity; the effect sits at the start.
    In,

    /// Decelerate to zero velocity; the effect sits at the end.
    Out,

    /// `In` for the first half, `Out` for the second half.
    InOut,
}

/// `Ease` is the value handed out by every constructor in this crate. It is a
/// thin wrapper around any type implementing [`Curve`](trait.Curve.html).
///
/// The wrapper exists so that every curve, whatever its family, shares a
/// common set of convenience methods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ease<C>(pub C);

impl<C> Ease<C> {
    /// Evaluate the curve at progress `t`.
    pub fn eval<T>(&self, t: T) -> T
    where
        C: Curve<T>,
    {
        self.0.eval(t)
    }

    /// Apply the curve to the value range `from..to`, given the time that has
    /// elapsed out of `total_time`.
    ///
    /// See [`interpolate`](fn.interpolate.html).
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// let ease = easings::linear();
    ///
    /// assert_approx_eq!(ease.interpolate(0.0f64, 100.0, 10.0, 5.0), 50.0);
    /// ```
    pub fn interpolate<T>(&self, from: T, to: T, total_time: T, elapsed_time: T) -> T
    where
        T: Float,
        C: Curve<T>,
    {
        interpolate(from, to, total_time, elapsed_time, &self.0)
    }

    /// Sample the curve at `n + 1` evenly spaced points of `[0, 1]`, yielding
    /// `(t, value)` pairs. Yields nothing for `n == 0`.
    ///
    /// # Example
    /// ```
    /// let points: Vec<(f32, f32)> = easings::in_quad().samples(4).collect();
    ///
    /// assert_eq!(points.len(), 5);
    /// assert_eq!(points[2], (0.5, 0.25));
    /// ```
    pub fn samples<'a, T>(&'a self, n: usize) -> impl Iterator<Item = (T, T)> + 'a
    where
        T: Float + 'a,
        C: Curve<T>,
    {
        let steps = if n == 0 { None } else { Some(0..=n) };
        let denom = T::from(n).unwrap_or_else(T::nan);

        steps.into_iter().flatten().map(move |i| {
            let t = T::from(i).unwrap_or_else(T::nan) / denom;
            (t, self.0.eval(t))
        })
    }

    /// Converts from `Ease<C>` to `Ease<&C>`.
    ///
    /// # Example
    /// ```
    /// let ease = easings::out_bounce();
    /// let borrowed = ease.as_ref();
    ///
    /// assert_eq!(borrowed.eval(0.5f64), ease.eval(0.5f64));
    /// assert_eq!(borrowed.interpolate(0.0f64, 2.0, 1.0, 1.0), ease.interpolate(0.0, 2.0, 1.0, 1.0));
    /// ```
    pub fn as_ref(&self) -> Ease<&C> {
        Ease(&self.0)
    }

    /// Erase the concrete curve type, e.g. to keep curves of different
    /// families in one collection.
    ///
    /// # Example
    /// ```
    /// let curves: Vec<easings::Ease<Box<dyn easings::Curve<f64>>>> = vec![
    ///     easings::out_bounce().boxed(),
    ///     easings::in_elastic::<f64>().boxed(),
    /// ];
    ///
    /// assert!(curves.iter().all(|ease| ease.eval(0.0) < 1.0));
    /// ```
    pub fn boxed<'a, T>(self) -> Ease<Box<dyn Curve<T> + 'a>>
    where
        C: Curve<T> + 'a,
    {
        Ease(Box::new(self.0))
    }
}

impl<T, C> Curve<T> for Ease<C>
where
    C: Curve<T>,
{
    fn eval(&self, t: T) -> T {
        self.0.eval(t)
    }
}

/// Turn any function `Fn(T) -> T` into an [`Ease`](struct.Ease.html).
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// fn smoothstep(t: f64) -> f64 {
///     t * t * (3.0 - 2.0 * t)
/// }
///
/// let ease = easings::curve(smoothstep);
///
/// assert_approx_eq!(ease.eval(0.5f64), 0.5);
/// assert_approx_eq!(easings::interpolate(0.0f64, 4.0, 1.0, 1.0, &ease), 4.0);
/// ```
pub fn curve<T, F>(f: F) -> Ease<FnCurve<F>>
where
    F: Fn(T) -> T,
{
    Ease(FnCurve(f))
}

/// A curve backed by a plain function. See [`curve`](fn.curve.html).
#[derive(Clone, Copy, Debug)]
pub struct FnCurve<F>(F);

impl<T, F> Curve<T> for FnCurve<F>
where
    F: Fn(T) -> T,
{
    fn eval(&self, t: T) -> T {
        (self.0)(t)
    }
}

/// Convert an `f64` literal into `T`. Casting between floats cannot fail for
/// the constants used in this crate; NaN keeps the conversion total anyway.
#[inline]
pub(crate) fn lit<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}
