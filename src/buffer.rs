use std::io::{self, Write};
use std::ops::{Index, IndexMut, Range};

use crate::{ImageBufferError, OutOfBoundsError, Rgba};

/// Owned rectangular grid of RGBA pixels.
///
/// Pixels are stored row by row in one contiguous vector. Cloning always
/// makes a deep copy of pixels, [PixelBuffer::take] moves pixels out and
/// leaves an empty (0x0) buffer on their place.
///
/// There are three ways to access one pixel:
/// - [PixelBuffer::at] and [PixelBuffer::at_mut] check coordinates and return an error;
/// - [PixelBuffer::at_safe] and [PixelBuffer::at_safe_mut] clamp coordinates
///   to the nearest edge pixel;
/// - indexing with `buffer[(x, y)]` and [PixelBuffer::get_unchecked] are
///   intended for hot loops where coordinates were validated by caller.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a buffer with given dimensions filled by opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::default())
    }

    /// Create a buffer with given dimensions filled by `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let pixels_count = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![color; pixels_count],
        }
    }

    /// Create a buffer from vector with pixels in row-major order.
    ///
    /// Extra pixels at the end of the vector are dropped.
    pub fn from_pixels(
        width: u32,
        height: u32,
        mut pixels: Vec<Rgba>,
    ) -> Result<Self, ImageBufferError> {
        let pixels_count = width as usize * height as usize;
        if pixels.len() < pixels_count {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        pixels.truncate(pixels_count);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from decoded samples.
    ///
    /// `buffer` must contain `width * height` samples in row-major order with
    /// `channels` bytes per sample. RGB samples (3 channels) become opaque.
    /// If `vertical_flip` is `true`, the first row of the buffer is taken
    /// from the last row of samples.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u8,
        buffer: &[u8],
        vertical_flip: bool,
    ) -> Result<Self, ImageBufferError> {
        if !matches!(channels, 3 | 4) {
            return Err(ImageBufferError::UnsupportedChannelsCount(channels));
        }
        let row_size = width as usize * channels as usize;
        let size = row_size * height as usize;
        if buffer.len() < size {
            return Err(ImageBufferError::InvalidBufferSize);
        }

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        if row_size > 0 {
            let rows = buffer[..size].chunks_exact(row_size);
            let mut push_row = |row: &[u8]| {
                pixels.extend(row.chunks_exact(channels as usize).map(|s| match *s {
                    [r, g, b] => Rgba::rgb(r, g, b),
                    [r, g, b, a] => Rgba::new(r, g, b, a),
                    _ => unreachable!(),
                }));
            };
            if vertical_flip {
                rows.rev().for_each(&mut push_row);
            } else {
                rows.for_each(&mut push_row);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Moves pixels into a new buffer and leaves this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if the buffer doesn't contain any pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn contains_coord(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Same as [PixelBuffer::contains_coord] for fractional coordinates.
    ///
    /// Coordinates are not rounded, so `-0.5` is outside the buffer
    /// and `width - 0.5` is inside.
    #[inline]
    pub fn contains_coord_f64(&self, x: f64, y: f64) -> bool {
        x >= 0. && y >= 0. && x < self.width as f64 && y < self.height as f64
    }

    /// Returns a pixel reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, x: u32, y: u32) -> &Rgba {
        // SAFETY: Caller guarantees `x < width` and `y < height`, so the
        // index is less than `width * height`.
        unsafe { self.pixels.get_unchecked(self.flat_index(x, y)) }
    }

    /// Returns a mutable pixel reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, x: u32, y: u32) -> &mut Rgba {
        let idx = self.flat_index(x, y);
        // SAFETY: Caller guarantees `x < width` and `y < height`, so the
        // index is less than `width * height`.
        unsafe { self.pixels.get_unchecked_mut(idx) }
    }

    /// Returns the pixel nearest to the given coordinates.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    #[inline]
    pub fn at_safe(&self, x: i64, y: i64) -> &Rgba {
        let (x, y) = self.clamp_coord(x, y);
        &self[(x, y)]
    }

    /// Mutable version of [PixelBuffer::at_safe].
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    #[inline]
    pub fn at_safe_mut(&mut self, x: i64, y: i64) -> &mut Rgba {
        let (x, y) = self.clamp_coord(x, y);
        &mut self[(x, y)]
    }

    pub fn at(&self, x: i64, y: i64) -> Result<&Rgba, OutOfBoundsError> {
        if self.contains_coord(x, y) {
            Ok(&self[(x as u32, y as u32)])
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    pub fn at_mut(&mut self, x: i64, y: i64) -> Result<&mut Rgba, OutOfBoundsError> {
        if self.contains_coord(x, y) {
            Ok(&mut self[(x as u32, y as u32)])
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Channels of pixels in row-major order, 4 bytes per pixel.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgba]> + ExactSizeIterator {
        // Buffer without columns has no pixels
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Fills a half-open rectangle with `color`.
    ///
    /// The rectangle includes column `x1` and row `y1` and stretches toward
    /// (but not including) column `x2` and row `y2`, so `x2` may be less
    /// than `x1`. Parts of the rectangle outside the buffer are skipped.
    pub fn fill_color(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Rgba) {
        let cols = half_open_range(x1, x2, self.width);
        let rows = half_open_range(y1, y2, self.height);
        if cols.is_empty() {
            return;
        }
        let width = self.width as usize;
        for y in rows {
            let start = y * width;
            self.pixels[start + cols.start..start + cols.end].fill(color);
        }
    }

    /// Makes fully transparent every pixel that satisfies `condition`.
    /// Color channels are left untouched.
    pub fn make_transparent<F>(&mut self, mut condition: F)
    where
        F: FnMut(&Rgba) -> bool,
    {
        self.pixels
            .iter_mut()
            .filter(|pixel| condition(pixel))
            .for_each(|pixel| pixel.a = 0);
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.pixels.iter_mut().for_each(|pixel| pixel.a = alpha);
    }

    /// Writes raw channels of pixels without any header, 4 bytes per pixel.
    ///
    /// Pixels are written row by row if `by_row` is `true`,
    /// and column by column otherwise.
    pub fn write_binary<W: Write>(&self, mut writer: W, by_row: bool) -> io::Result<()> {
        if by_row {
            return writer.write_all(self.as_bytes());
        }
        let width = self.width as usize;
        let mut column: Vec<u8> = Vec::with_capacity(self.height as usize * 4);
        for x in 0..width {
            column.clear();
            for row in self.rows() {
                column.extend_from_slice(&row[x].channels());
            }
            writer.write_all(&column)?;
        }
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn flat_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn clamp_coord(&self, x: i64, y: i64) -> (u32, u32) {
        assert!(!self.is_empty(), "unable to access pixels of an empty buffer");
        (
            x.clamp(0, self.width as i64 - 1) as u32,
            y.clamp(0, self.height as i64 - 1) as u32,
        )
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> OutOfBoundsError {
        OutOfBoundsError {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl Clone for PixelBuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    /// Copies pixels of `source` reusing already allocated memory.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.pixels.clone_from(&source.pixels);
    }
}

/// Unchecked access to the pixel at `(x, y)`.
///
/// It panics only if the flat index `y * width + x` lies outside the
/// storage; `x >= width` silently addresses a pixel of the next row.
impl Index<(u32, u32)> for PixelBuffer {
    type Output = Rgba;

    #[inline(always)]
    fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
        &self.pixels[self.flat_index(x, y)]
    }
}

impl IndexMut<(u32, u32)> for PixelBuffer {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Self::Output {
        let idx = self.flat_index(x, y);
        &mut self.pixels[idx]
    }
}

/// Indices stepping from `from` toward `to` (excluding `to`),
/// clipped by `[0, len)`.
fn half_open_range(from: i64, to: i64, len: u32) -> Range<usize> {
    let (start, end) = if from <= to {
        (from, to)
    } else {
        (to.saturating_add(1), from.saturating_add(1))
    };
    let len = len as i64;
    let start = start.clamp(0, len);
    let end = end.clamp(start, len);
    start as usize..end as usize
}
