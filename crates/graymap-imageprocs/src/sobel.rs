/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sobel derivatives
//!
//! The output is the L1 gradient magnitude `|dfdi| + |dfdj|` of the two
//! 3x3 Sobel derivatives, rescaled from the source range to the destination range.
use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;
use log::trace;

use crate::border::BorderMode;

#[rustfmt::skip]
const SOBEL_HORIZONTAL: [i32; 9] = [
    -1, 0, 1,
    -2, 0, 2,
    -1, 0, 1
];

#[rustfmt::skip]
const SOBEL_VERTICAL: [i32; 9] = [
    -1, -2, -1,
     0,  0,  0,
     1,  2,  1
];

/// Tap offsets in the same order as the kernels
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0), (0,  0), (1,  0),
    (-1,  1), (0,  1), (1,  1)
];

/// Compute the Sobel gradient magnitude of an image
///
/// The image is replaced with one of the same dimensions and max value.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sobel {
    border: BorderMode
}

impl Sobel {
    /// Create a new sobel operation using [`BorderMode::Flat`]
    #[must_use]
    pub fn new() -> Sobel {
        Sobel::default()
    }
    /// Create a sobel operation resolving edge taps with `border`
    #[must_use]
    pub fn new_with_border(border: BorderMode) -> Sobel {
        Sobel { border }
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "Sobel"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let mut output = Image::allocate(width, height, image.max_value())?;

        apply_gradient_with_border(image, &mut output, self.border);

        *image = output;

        Ok(())
    }
}

#[inline]
fn sobel_inner(window: &[i32; 9]) -> i32 {
    let mut dfdi = 0;
    let mut dfdj = 0;

    for ((h, v), s) in SOBEL_HORIZONTAL
        .iter()
        .zip(SOBEL_VERTICAL.iter())
        .zip(window.iter())
    {
        dfdi += h * s;
        dfdj += v * s;
    }
    dfdi.abs() + dfdj.abs()
}

/// Write the gradient magnitude of `src` into `dst` using the flat border lookup
///
/// See [`apply_gradient_with_border`]
pub fn apply_gradient(src: &Image, dst: &mut Image) {
    apply_gradient_with_border(src, dst, BorderMode::Flat);
}

/// Write the gradient magnitude of `src` into `dst`
///
/// Every output sample is
///
/// ```text
/// clamp((|dfdi| + |dfdj|) * dst.max_value / src.max_value, 0, dst.max_value)
/// ```
///
/// using truncating integer division. Only the rectangle both images share is
/// written, pixels of `dst` outside it are left untouched.
pub fn apply_gradient_with_border(src: &Image, dst: &mut Image, border: BorderMode) {
    let width = src.width().min(dst.width());
    let height = src.height().min(dst.height());

    trace!("Sobel over {width}x{height} with {border:?} borders");

    let (src_width, src_height) = src.dimensions();
    let src_max = i32::from(src.max_value());
    let dst_max = i32::from(dst.max_value());
    let dst_width = dst.width();

    let src_pixels = src.pixels();
    let dst_pixels = dst.pixels_mut();

    let mut window = [0_i32; 9];

    for y in 0..height {
        for x in 0..width {
            for (tap, (dx, dy)) in window.iter_mut().zip(OFFSETS.iter()) {
                *tap = border
                    .sample(src_pixels, src_width, src_height, x, y, *dx, *dy)
                    .map_or(0, i32::from);
            }
            let magnitude = sobel_inner(&window);

            dst_pixels[x + dst_width * y] = ((magnitude * dst_max) / src_max).clamp(0, dst_max) as u8;
        }
    }
}
