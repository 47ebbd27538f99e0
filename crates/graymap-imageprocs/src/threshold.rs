/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binary thresholding
use graymap_image::image::Image;

/// Binarize `src` into `dst`
///
/// For every pixel of the rectangle both images share, `dst` receives
/// `dst.max_value()` when the source sample is strictly greater than `level`
/// and zero otherwise.
///
/// Pixels of `dst` outside that rectangle are left untouched.
pub fn threshold(src: &Image, dst: &mut Image, level: u8) {
    let width = src.width().min(dst.width());
    let height = src.height().min(dst.height());

    let src_width = src.width();
    let dst_width = dst.width();
    let high = dst.max_value();

    let src_pixels = src.pixels();
    let dst_pixels = dst.pixels_mut();

    for (src_row, dst_row) in src_pixels
        .chunks_exact(src_width)
        .zip(dst_pixels.chunks_exact_mut(dst_width))
        .take(height)
    {
        for (out, sample) in dst_row[..width].iter_mut().zip(&src_row[..width]) {
            *out = if *sample > level { high } else { 0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use graymap_image::image::Image;

    use crate::threshold::threshold;

    #[test]
    fn test_threshold_is_strict() {
        let src = Image::new(vec![9, 10, 11, 200], 2, 2, 255).unwrap();
        let mut dst = Image::allocate(2, 2, 255).unwrap();

        threshold(&src, &mut dst, 10);
        assert_eq!(dst.pixels(), [0, 0, 255, 255]);
    }

    #[test]
    fn test_threshold_uses_destination_max() {
        let src = Image::new(vec![0, 50, 100, 3], 2, 2, 100).unwrap();
        let mut dst = Image::allocate(2, 2, 100).unwrap();

        threshold(&src, &mut dst, 3);
        assert_eq!(dst.pixels(), [0, 100, 100, 0]);
    }

    #[test]
    fn test_threshold_overlap_only() {
        let src = Image::fill(200, 3, 3, 255).unwrap();
        let mut dst = Image::fill(7, 4, 2, 255).unwrap();

        threshold(&src, &mut dst, 100);
        assert_eq!(dst.pixels(), [255, 255, 255, 7, 255, 255, 255, 7]);

        let src = Image::fill(200, 4, 2, 255).unwrap();
        let mut dst = Image::fill(7, 2, 3, 255).unwrap();

        threshold(&src, &mut dst, 100);
        assert_eq!(dst.pixels(), [255, 255, 255, 255, 7, 7]);
    }
}
