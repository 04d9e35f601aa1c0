//! Easing curves used to blend values at fractional positions.
//!
//! All curves take a normalized position `t` that is expected to be in
//! range `[0, 1]`. Scalar curves extrapolate outside of this range,
//! color curves additionally saturate every channel into `[0, 255]`.
use num_traits::Float;

use crate::Rgba;

/// Reference to a function that blends two colors at position `t`.
///
/// Any closure with a suitable signature may be used as a curve, e.g.
/// `&|c0, c1, t| interp_linear_rgba(c0, c1, t * t)`.
pub type CurveFn<'a> = &'a (dyn Fn(Rgba, Rgba, f64) -> Rgba + Sync);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum EasingCurve {
    /// Values change with constant rate.
    Linear,
    /// Quintic curve with zero rate of change at both ends.
    /// The maximal rate of change is 1.875 at the center.
    #[default]
    Ease5,
    /// Steeper quintic curve with zero rate of change at both ends.
    /// The maximal rate of change is 5.0 at the center.
    Bezier5,
}

impl EasingCurve {
    /// Reshapes normalized position `t`.
    pub fn ease<F: Float + From<u8>>(self, t: F) -> F {
        match self {
            Self::Linear => t,
            Self::Ease5 => ease5(t),
            Self::Bezier5 => bezier5(t),
        }
    }

    /// Returns reference to a function that blends colors with help of this curve.
    #[inline]
    pub fn curve_func(self) -> CurveFn<'static> {
        match self {
            Self::Linear => &interp_linear_rgba,
            Self::Ease5 => &interp_ease5_rgba,
            Self::Bezier5 => &interp_bezier5_rgba,
        }
    }
}

#[inline]
pub fn interp_linear<F: Float>(v0: F, v1: F, t: F) -> F {
    v0 + (v1 - v0) * t
}

/// `6t^5 - 15t^4 + 10t^3`
#[inline]
pub fn ease5<F: Float + From<u8>>(t: F) -> F {
    let six = <F as From<u8>>::from(6);
    let ten = <F as From<u8>>::from(10);
    let fifteen = <F as From<u8>>::from(15);
    t * t * t * (t * (t * six - fifteen) + ten)
}

/// Two halves of `t^5` glued together at the center.
#[inline]
pub fn bezier5<F: Float + From<u8>>(t: F) -> F {
    let half = F::one() / <F as From<u8>>::from(2);
    let k = <F as From<u8>>::from(16);
    if t < half {
        k * t.powi(5)
    } else {
        F::one() - k * (F::one() - t).powi(5)
    }
}

#[inline]
pub fn interp_ease5<F: Float + From<u8>>(v0: F, v1: F, t: F) -> F {
    interp_linear(v0, v1, ease5(t))
}

#[inline]
pub fn interp_bezier5<F: Float + From<u8>>(v0: F, v1: F, t: F) -> F {
    interp_linear(v0, v1, bezier5(t))
}

/// Blends every channel independently.
pub fn interp_linear_rgba(c0: Rgba, c1: Rgba, t: f64) -> Rgba {
    let [r0, g0, b0, a0] = c0.channels();
    let [r1, g1, b1, a1] = c1.channels();
    Rgba::from_channels([
        blend_channel(r0, r1, t),
        blend_channel(g0, g1, t),
        blend_channel(b0, b1, t),
        blend_channel(a0, a1, t),
    ])
}

pub fn interp_ease5_rgba(c0: Rgba, c1: Rgba, t: f64) -> Rgba {
    interp_linear_rgba(c0, c1, ease5(t))
}

pub fn interp_bezier5_rgba(c0: Rgba, c1: Rgba, t: f64) -> Rgba {
    interp_linear_rgba(c0, c1, bezier5(t))
}

#[inline(always)]
fn blend_channel(v0: u8, v1: u8, t: f64) -> u8 {
    // Casting of NaN gives zero.
    interp_linear(v0 as f64, v1 as f64, t).round().clamp(0., 255.) as u8
}
