#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use buffer::PixelBuffer;
pub use codec::ImageFormat;
pub use color::Rgba;
pub use easing::{CurveFn, EasingCurve};
pub use errors::*;

mod buffer;
pub mod codec;
mod color;
pub mod easing;
mod errors;
mod resample;
#[cfg(feature = "rayon")]
mod threading;
