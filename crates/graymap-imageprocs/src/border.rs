/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Border handling for neighbourhood operations
//!
//! Neighbourhood filters read samples around each pixel, and some of those
//! samples fall outside the image. A [`BorderMode`] decides what such a tap reads.

/// How to resolve a neighbourhood tap that may lie outside the image
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BorderMode {
    /// Address taps by their flat row-major index `(x + dx) + width * (y + dy)`.
    ///
    /// A tap is in range when `0 <= index < width * height`, otherwise it reads as zero.
    /// This means taps left of column zero wrap onto the last column of the previous
    /// row and taps right of the last column wrap onto the first column of the next row.
    #[default]
    Flat,
    /// Taps outside the 2-D image read as zero
    ///
    /// ```text
    ///   0  0  0  0
    ///   0 [1  2] 0
    ///   0 [3  4] 0
    ///   0  0  0  0
    /// ```
    Zero,
    /// Taps outside the image read the nearest edge sample
    ///
    /// ```text
    ///   1  1  2  2
    ///   1 [1  2] 2
    ///   3 [3  4] 4
    ///   3  3  4  4
    /// ```
    Replicate
}

impl BorderMode {
    /// Read the sample at offset `(dx, dy)` from `(x, y)` in a row-major
    /// `width * height` plane.
    ///
    /// Returns `None` for taps this mode treats as out of range, callers
    /// should read those as zero.
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn sample(
        self, pixels: &[u8], width: usize, height: usize, x: usize, y: usize, dx: isize,
        dy: isize
    ) -> Option<u8> {
        let (x, y) = (x as isize, y as isize);
        let (w, h) = (width as isize, height as isize);

        match self {
            BorderMode::Flat => {
                let index = (x + dx) + w * (y + dy);

                if (0..w * h).contains(&index) {
                    pixels.get(index as usize).copied()
                } else {
                    None
                }
            }
            BorderMode::Zero => {
                let (nx, ny) = (x + dx, y + dy);

                if (0..w).contains(&nx) && (0..h).contains(&ny) {
                    pixels.get((nx + w * ny) as usize).copied()
                } else {
                    None
                }
            }
            BorderMode::Replicate => {
                let nx = (x + dx).clamp(0, w - 1);
                let ny = (y + dy).clamp(0, h - 1);

                pixels.get((nx + w * ny) as usize).copied()
            }
        }
    }
}
