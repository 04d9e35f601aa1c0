use rayon::current_num_threads;
use rayon::prelude::*;

use crate::Rgba;

/// Splits pixels of an image into parts with whole rows that may be
/// processed in parallel. Every item contains the index of the first row
/// of a part and pixels of the part.
#[inline]
pub(crate) fn split_rows_for_threading(
    pixels: &mut [Rgba],
    width: u32,
    height: u32,
) -> Option<impl ParallelIterator<Item = (usize, &mut [Rgba])>> {
    let max_num_parts = calculate_max_h_parts_number(width, height);

    let num_threads = current_num_threads() as u32;
    if num_threads > 1 && max_num_parts > 1 {
        let num_parts = num_threads.min(max_num_parts);
        let rows_per_part = height.div_ceil(num_parts) as usize;
        let part_size = rows_per_part * width as usize;
        let parts = pixels
            .par_chunks_mut(part_size)
            .enumerate()
            .map(move |(i, part)| (i * rows_per_part, part));
        return Some(parts);
    }
    None
}

/// It is not optimal to split images on too small parts.
/// We have to calculate minimal height of one part.
/// For small images, it is equal to `constant / area`.
/// For tall images, it is equal to `height / 256`.
fn calculate_max_h_parts_number(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let area = height as u64 * height.max(width) as u64;
    let min_height = ((1u64 << 14) / area).max(height as u64 / 256);
    (height as u64 / min_height.max(1)) as u32
}
