use pixel_buffer::{PixelBuffer, Rgba};

/// Sums of every channel over all pixels of the buffer.
pub fn image_checksum(buffer: &PixelBuffer) -> [u64; 4] {
    let mut res = [0u64; 4];
    for pixel in buffer.as_bytes().chunks_exact(4) {
        res.iter_mut().zip(pixel).for_each(|(d, &s)| *d += s as u64);
    }
    res
}

/// Buffer where red grows from left to right, green grows from top
/// to bottom, blue and alpha are constant.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let step = |i: u32, size: u32| -> u8 {
        if size > 1 {
            (i * 255 / (size - 1)) as u8
        } else {
            0
        }
    };
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| Rgba::new(step(x, width), step(y, height), 64, 255)))
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Buffer with pixels that all differ from each other (for small sizes).
pub fn numbered(width: u32, height: u32) -> PixelBuffer {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| Rgba::new(x as u8, y as u8, (x * 7 + y * 13) as u8, 200))
        })
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Maximal difference of channels between pixels of two buffers
/// with equal dimensions.
pub fn max_channel_diff(a: &PixelBuffer, b: &PixelBuffer) -> u8 {
    assert_eq!(a.dimensions(), b.dimensions());
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}
