use log::debug;

use crate::easing::interp_linear_rgba;
use crate::{CurveFn, EasingCurve, PixelBuffer, ResizeError, Rgba};

impl PixelBuffer {
    /// Samples color at fractional coordinates with help of
    /// the [EasingCurve::Ease5] curve.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    pub fn sample(&self, x: f64, y: f64) -> Rgba {
        self.sample_with(x, y, Some(EasingCurve::default().curve_func()))
    }

    /// Samples color at fractional coordinates.
    ///
    /// Four pixels around `(x, y)` are blended by `curve`, first
    /// horizontally and then vertically. Pixels outside the buffer are
    /// replaced by the nearest edge pixels. Linear blending is used
    /// if `curve` is `None`.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    pub fn sample_with(&self, x: f64, y: f64, curve: Option<CurveFn<'_>>) -> Rgba {
        let curve = curve.unwrap_or(&interp_linear_rgba);
        // Both neighbours of a point outside of [-1, size] are edge pixels,
        // so clamping keeps the result and makes infinities finite.
        let x = x.clamp(-1., self.width() as f64);
        let y = y.clamp(-1., self.height() as f64);
        let x0 = x.floor();
        let y0 = y.floor();
        let tx = x - x0;
        let ty = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));

        let top = curve(*self.at_safe(x0, y0), *self.at_safe(x1, y0), tx);
        let bottom = curve(*self.at_safe(x0, y1), *self.at_safe(x1, y1), tx);
        curve(top, bottom, ty)
    }

    /// Resizes the buffer with linear blending of source pixels.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ResizeError> {
        self.resize_with(width, height, None)
    }

    /// Resizes the buffer by sampling of the source pixels.
    ///
    /// Every pixel of the result is mapped back into the source buffer
    /// so that corner pixels of both buffers match, and sampled there with
    /// the given `curve` (see [PixelBuffer::sample_with]). The buffer is
    /// left unchanged if an error is returned or if dimensions are equal
    /// to the current ones.
    pub fn resize_with(
        &mut self,
        width: u32,
        height: u32,
        curve: Option<CurveFn<'_>>,
    ) -> Result<(), ResizeError> {
        if width == 0 || height == 0 {
            return Err(ResizeError::ZeroDimension);
        }
        if self.is_empty() {
            return Err(ResizeError::EmptySource);
        }
        if self.dimensions() == (width, height) {
            return Ok(());
        }

        debug!(
            "Resize the buffer from {}x{} into {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        let x_map = back_mapping_table(self.width(), width);
        let y_map = back_mapping_table(self.height(), height);
        let mut pixels = vec![Rgba::default(); width as usize * height as usize];
        self.resample_rows(&x_map, &y_map, curve, &mut pixels);

        // The result is complete, the old pixels may be replaced now.
        *self = PixelBuffer::from_parts(width, height, pixels);
        Ok(())
    }

    fn resample_rows(
        &self,
        x_map: &[f64],
        y_map: &[f64],
        curve: Option<CurveFn<'_>>,
        dst_pixels: &mut [Rgba],
    ) {
        let dst_width = x_map.len();
        let resample_part = |first_row: usize, part: &mut [Rgba]| {
            let rows = part.chunks_exact_mut(dst_width);
            for (dst_row, &src_y) in rows.zip(&y_map[first_row..]) {
                for (dst_pixel, &src_x) in dst_row.iter_mut().zip(x_map) {
                    *dst_pixel = self.sample_with(src_x, src_y, curve);
                }
            }
        };

        for_each_rows_part(dst_pixels, dst_width, y_map.len(), resample_part);
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        fn for_each_rows_part<F>(pixels: &mut [Rgba], width: usize, height: usize, func: F)
        where
            F: Fn(usize, &mut [Rgba]) + Send + Sync,
        {
            use rayon::prelude::*;

            if let Some(parts) =
                crate::threading::split_rows_for_threading(pixels, width as u32, height as u32)
            {
                parts.for_each(|(first_row, part)| func(first_row, part));
                return;
            }
            func(0, pixels);
        }
    } else {
        fn for_each_rows_part<F>(pixels: &mut [Rgba], _width: usize, _height: usize, func: F)
        where
            F: Fn(usize, &mut [Rgba]),
        {
            func(0, pixels);
        }
    }
}

/// Source coordinates of every destination pixel along one axis.
fn back_mapping_table(src_size: u32, dst_size: u32) -> Vec<f64> {
    if dst_size <= 1 {
        return vec![0.; dst_size as usize];
    }
    let src_last = (src_size - 1) as f64;
    let dst_last = (dst_size - 1) as f64;
    (0..dst_size)
        .map(|i| i as f64 * src_last / dst_last)
        .collect()
}
