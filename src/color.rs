use bytemuck::{Pod, Zeroable};

/// RGBA color with 8-bit per channel.
///
/// Default value is the fully opaque black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Sum of absolute differences of RGB-channels.
    /// Alpha-channel is ignored.
    pub fn diff(&self, other: &Rgba) -> u32 {
        let d = |a: u8, b: u8| a.abs_diff(b) as u32;
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }

    /// Perceived brightness in range `[0, 1]`.
    ///
    /// It is an average of RGB-channels multiplied by opacity.
    pub fn brightness(&self) -> f64 {
        let sum = self.r as f64 + self.g as f64 + self.b as f64;
        sum / 765.0 * (self.a as f64 / 255.0)
    }

    #[inline]
    pub(crate) fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub(crate) fn from_channels([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Self::from_channels(value)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        value.channels()
    }
}
