//! Select curves by name, e.g. from a configuration file.

use std::fmt;
use std::str::FromStr;

use num_traits::{Float, FloatConst};

use crate::{
    lit, Back, Bounce, Circ, Cubic, Curve, Ease, Elastic, Expo, Linear, Mode, Quad, Quart, Quint,
    Sine, DEFAULT_AMPLITUDE, DEFAULT_OVERSHOOT, DEFAULT_PERIOD,
};

/// Every easing curve of this crate, with default parameters, as one plain
/// enum.
///
/// `EaseKind` is itself a [`Curve`](trait.Curve.html). It parses from and
/// displays as the snake_case name of the matching constructor function
/// (`"in_out_quad"`, `"out_bounce"`, ...). With the `serde` feature enabled it
/// also (de)serializes as that name.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use easings::{Curve, EaseKind};
///
/// let kind: EaseKind = "in_out_cubic".parse().unwrap();
///
/// assert_eq!(kind, EaseKind::InOutCubic);
/// assert_eq!(kind.to_string(), "in_out_cubic");
/// assert_approx_eq!(kind.eval(0.5f64), easings::in_out_cubic().eval(0.5f64));
/// assert!("in_out_wobble".parse::<EaseKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EaseKind {
    #[default]
    Linear,

    InQuad,
    OutQuad,
    InOutQuad,

    InCubic,
    OutCubic,
    InOutCubic,

    InQuart,
    OutQuart,
    InOutQuart,

    InQuint,
    OutQuint,
    InOutQuint,

    InSine,
    OutSine,
    InOutSine,

    InExpo,
    OutExpo,
    InOutExpo,

    InCirc,
    OutCirc,
    InOutCirc,

    InElastic,
    OutElastic,
    InOutElastic,

    InBack,
    OutBack,
    InOutBack,

    InBounce,
    OutBounce,
    InOutBounce,
}

impl EaseKind {
    /// Every kind, in declaration order.
    pub const ALL: [EaseKind; 31] = [
        EaseKind::Linear,
        EaseKind::InQuad,
        EaseKind::OutQuad,
        EaseKind::InOutQuad,
        EaseKind::InCubic,
        EaseKind::OutCubic,
        EaseKind::InOutCubic,
        EaseKind::InQuart,
        EaseKind::OutQuart,
        EaseKind::InOutQuart,
        EaseKind::InQuint,
        EaseKind::OutQuint,
        EaseKind::InOutQuint,
        EaseKind::InSine,
        EaseKind::OutSine,
        EaseKind::InOutSine,
        EaseKind::InExpo,
        EaseKind::OutExpo,
        EaseKind::InOutExpo,
        EaseKind::InCirc,
        EaseKind::OutCirc,
        EaseKind::InOutCirc,
        EaseKind::InElastic,
        EaseKind::OutElastic,
        EaseKind::InOutElastic,
        EaseKind::InBack,
        EaseKind::OutBack,
        EaseKind::InOutBack,
        EaseKind::InBounce,
        EaseKind::OutBounce,
        EaseKind::InOutBounce,
    ];

    /// The snake_case name, identical to the constructor function's name.
    pub fn name(self) -> &'static str {
        match self {
            EaseKind::Linear => "linear",
            EaseKind::InQuad => "in_quad",
            EaseKind::OutQuad => "out_quad",
            EaseKind::InOutQuad => "in_out_quad",
            EaseKind::InCubic => "in_cubic",
            EaseKind::OutCubic => "out_cubic",
            EaseKind::InOutCubic => "in_out_cubic",
            EaseKind::InQuart => "in_quart",
            EaseKind::OutQuart => "out_quart",
            EaseKind::InOutQuart => "in_out_quart",
            EaseKind::InQuint => "in_quint",
            EaseKind::OutQuint => "out_quint",
            EaseKind::InOutQuint => "in_out_quint",
            EaseKind::InSine => "in_sine",
            EaseKind::OutSine => "out_sine",
            EaseKind::InOutSine => "in_out_sine",
            EaseKind::InExpo => "in_expo",
            EaseKind::OutExpo => "out_expo",
            EaseKind::InOutExpo => "in_out_expo",
            EaseKind::InCirc => "in_circ",
            EaseKind::OutCirc => "out_circ",
            EaseKind::InOutCirc => "in_out_circ",
            EaseKind::InElastic => "in_elastic",
            EaseKind::OutElastic => "out_elastic",
            EaseKind::InOutElastic => "in_out_elastic",
            EaseKind::InBack => "in_back",
            EaseKind::OutBack => "out_back",
            EaseKind::InOutBack => "in_out_back",
            EaseKind::InBounce => "in_bounce",
            EaseKind::OutBounce => "out_bounce",
            EaseKind::InOutBounce => "in_out_bounce",
        }
    }

    /// The easing flavor, or `None` for `Linear`.
    pub fn mode(self) -> Option<Mode> {
        match self {
            EaseKind::Linear => None,
            EaseKind::InQuad
            | EaseKind::InCubic
            | EaseKind::InQuart
            | EaseKind::InQuint
            | EaseKind::InSine
            | EaseKind::InExpo
            | EaseKind::InCirc
            | EaseKind::InElastic
            | EaseKind::InBack
            | EaseKind::InBounce => Some(Mode::In),
            EaseKind::OutQuad
            | EaseKind::OutCubic
            | EaseKind::OutQuart
            | EaseKind::OutQuint
            | EaseKind::OutSine
            | EaseKind::OutExpo
            | EaseKind::OutCirc
            | EaseKind::OutElastic
            | EaseKind::OutBack
            | EaseKind::OutBounce => Some(Mode::Out),
            EaseKind::InOutQuad
            | EaseKind::InOutCubic
            | EaseKind::InOutQuart
            | EaseKind::InOutQuint
            | EaseKind::InOutSine
            | EaseKind::InOutExpo
            | EaseKind::InOutCirc
            | EaseKind::InOutElastic
            | EaseKind::InOutBack
            | EaseKind::InOutBounce => Some(Mode::InOut),
        }
    }

    /// Wrap the kind in an [`Ease`](struct.Ease.html) for its convenience
    /// methods.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// let ease = easings::EaseKind::OutQuad.ease();
    ///
    /// assert_approx_eq!(ease.interpolate(0.0f64, 100.0, 2.0, 1.0), 75.0);
    /// ```
    pub fn ease(self) -> Ease<Self> {
        Ease(self)
    }
}

impl<T: Float + FloatConst> Curve<T> for EaseKind {
    fn eval(&self, t: T) -> T {
        match self {
            EaseKind::Linear => Linear.eval(t),

            EaseKind::InQuad => Quad(Mode::In).eval(t),
            EaseKind::OutQuad => Quad(Mode::Out).eval(t),
            EaseKind::InOutQuad => Quad(Mode::InOut).eval(t),

            EaseKind::InCubic => Cubic(Mode::In).eval(t),
            EaseKind::OutCubic => Cubic(Mode::Out).eval(t),
            EaseKind::InOutCubic => Cubic(Mode::InOut).eval(t),

            EaseKind::InQuart => Quart(Mode::In).eval(t),
            EaseKind::OutQuart => Quart(Mode::Out).eval(t),
            EaseKind::InOutQuart => Quart(Mode::InOut).eval(t),

            EaseKind::InQuint => Quint(Mode::In).eval(t),
            EaseKind::OutQuint => Quint(Mode::Out).eval(t),
            EaseKind::InOutQuint => Quint(Mode::InOut).eval(t),

            EaseKind::InSine => Sine(Mode::In).eval(t),
            EaseKind::OutSine => Sine(Mode::Out).eval(t),
            EaseKind::InOutSine => Sine(Mode::InOut).eval(t),

            EaseKind::InExpo => Expo(Mode::In).eval(t),
            EaseKind::OutExpo => Expo(Mode::Out).eval(t),
            EaseKind::InOutExpo => Expo(Mode::InOut).eval(t),

            EaseKind::InCirc => Circ(Mode::In).eval(t),
            EaseKind::OutCirc => Circ(Mode::Out).eval(t),
            EaseKind::InOutCirc => Circ(Mode::InOut).eval(t),

            EaseKind::InElastic => default_elastic(Mode::In).eval(t),
            EaseKind::OutElastic => default_elastic(Mode::Out).eval(t),
            EaseKind::InOutElastic => default_elastic(Mode::InOut).eval(t),

            EaseKind::InBack => default_back(Mode::In).eval(t),
            EaseKind::OutBack => default_back(Mode::Out).eval(t),
            EaseKind::InOutBack => default_back(Mode::InOut).eval(t),

            EaseKind::InBounce => Bounce(Mode::In).eval(t),
            EaseKind::OutBounce => Bounce(Mode::Out).eval(t),
            EaseKind::InOutBounce => Bounce(Mode::InOut).eval(t),
        }
    }
}

fn default_elastic<T: Float + FloatConst>(mode: Mode) -> Elastic<T> {
    Elastic::new(mode, lit(DEFAULT_AMPLITUDE), lit(DEFAULT_PERIOD))
}

fn default_back<T: Float>(mode: Mode) -> Back<T> {
    Back::new(mode, lit(DEFAULT_OVERSHOOT))
}

impl fmt::Display for EaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown curve name into an
/// [`EaseKind`](enum.EaseKind.html).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing curve `{name}`")]
pub struct ParseEaseKindError {
    name: String,
}

impl ParseEaseKindError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for EaseKind {
    type Err = ParseEaseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EaseKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseEaseKindError {
                name: s.to_owned(),
            })
    }
}
