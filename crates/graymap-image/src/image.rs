/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image struct
//!
//! An image is a single grayscale plane of 8 bit samples, stored row-major
//! so the sample at `(x, y)` lives at index `x + width * y`.
//!
//! Every image upholds the following
//! - `width > 0` and `height > 0`
//! - `pixels.len() == width * height`
//! - no sample is greater than `max_value`, which is in `1..=255`
use std::io::{BufRead, Write};

use graymap_core::options::DecoderOptions;

use crate::codecs::{PGMImageDecoder, PGMImageEncoder};
use crate::errors::ImageErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:     usize,
    height:    usize,
    max_value: u8,
    pixels:    Vec<u8>
}

impl Image {
    /// Create an image from already existing samples
    ///
    /// # Errors
    /// - Zero width or height, zero `max_value`
    /// - `pixels.len()` not matching `width * height`
    /// - a sample greater than `max_value`
    pub fn new(
        pixels: Vec<u8>, width: usize, height: usize, max_value: u8
    ) -> Result<Image, ImageErrors> {
        let size = checked_size(width, height, max_value)?;

        if pixels.len() != size {
            return Err(ImageErrors::DimensionsMisMatch(size, pixels.len()));
        }
        if let Some(sample) = pixels.iter().copied().find(|x| *x > max_value) {
            return Err(ImageErrors::SampleOutOfRange(sample, max_value));
        }
        Ok(Image {
            width,
            height,
            max_value,
            pixels
        })
    }
    /// Allocate a zero filled image with the given dimensions
    ///
    /// # Errors
    /// Invalid dimensions, or [`ImageErrors::AllocationFailure`] when
    /// the pixel buffer cannot be reserved
    pub fn allocate(width: usize, height: usize, max_value: u8) -> Result<Image, ImageErrors> {
        Image::fill(0, width, height, max_value)
    }
    /// Create an image where every sample is `value`
    pub fn fill(
        value: u8, width: usize, height: usize, max_value: u8
    ) -> Result<Image, ImageErrors> {
        let size = checked_size(width, height, max_value)?;

        if value > max_value {
            return Err(ImageErrors::SampleOutOfRange(value, max_value));
        }
        let mut pixels = Vec::new();

        pixels
            .try_reserve_exact(size)
            .map_err(|_| ImageErrors::AllocationFailure(size))?;
        pixels.resize(size, value);

        Ok(Image {
            width,
            height,
            max_value,
            pixels
        })
    }
    /// Create an image by calling `func(x, y)` for every sample
    ///
    /// Values the closure returns above `max_value` are an error.
    pub fn from_fn<F>(
        width: usize, height: usize, max_value: u8, mut func: F
    ) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> u8
    {
        let mut image = Image::allocate(width, height, max_value)?;

        for (y, row) in image.pixels.chunks_exact_mut(width).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = func(x, y);
            }
        }
        if let Some(sample) = image.pixels.iter().copied().find(|x| *x > max_value) {
            return Err(ImageErrors::SampleOutOfRange(sample, max_value));
        }
        Ok(image)
    }
    /// Decode a binary pgm image from `reader`
    pub fn read<R: BufRead>(reader: R, options: DecoderOptions) -> Result<Image, ImageErrors> {
        PGMImageDecoder::new_with_options(reader, options).decode()
    }
    /// Encode this image as a binary pgm into `writer`
    pub fn write<W: Write>(&self, writer: W) -> Result<(), ImageErrors> {
        PGMImageEncoder::new(writer).encode(self)
    }
    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// The maximum representable sample value
    pub const fn max_value(&self) -> u8 {
        self.max_value
    }
    /// Row-major samples of the image
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// Mutable access to the samples
    ///
    /// Callers must keep every sample at or below [`max_value`](Self::max_value).
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
    /// Return the sample at `(x, y)` or `None` if out of bounds
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(x + self.width * y).copied()
    }
    /// Consume the image returning its samples
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
    /// Return true if the image upholds every invariant listed in the module docs
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.max_value > 0
            && self.width.checked_mul(self.height) == Some(self.pixels.len())
            && self.pixels.iter().all(|x| *x <= self.max_value)
    }
}

fn checked_size(width: usize, height: usize, max_value: u8) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::InvalidDimensions(width, height));
    }
    if max_value == 0 {
        return Err(ImageErrors::InvalidMaxValue(max_value));
    }
    width
        .checked_mul(height)
        .ok_or(ImageErrors::AllocationFailure(usize::MAX))
}

#[cfg(test)]
mod tests {
    use graymap_core::errors::ErrorKind;
    use graymap_core::options::DecoderOptions;
    use nanorand::Rng;

    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn test_new_checks_invariants() {
        assert!(Image::new(vec![0; 6], 3, 2, 255).is_ok());
        assert!(matches!(
            Image::new(vec![0; 5], 3, 2, 255),
            Err(ImageErrors::DimensionsMisMatch(6, 5))
        ));
        assert!(matches!(
            Image::new(vec![], 0, 2, 255),
            Err(ImageErrors::InvalidDimensions(0, 2))
        ));
        assert!(matches!(
            Image::new(vec![0], 1, 1, 0),
            Err(ImageErrors::InvalidMaxValue(0))
        ));
        assert!(matches!(
            Image::new(vec![0, 101], 2, 1, 100),
            Err(ImageErrors::SampleOutOfRange(101, 100))
        ));
    }

    #[test]
    fn test_allocate_is_zeroed() {
        let image = Image::allocate(4, 3, 15).unwrap();

        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.max_value(), 15);
        assert_eq!(image.pixels().len(), 12);
        assert!(image.pixels().iter().all(|x| *x == 0));
        assert!(image.is_valid());
    }

    #[test]
    fn test_huge_allocation_fails() {
        let err = Image::allocate(usize::MAX, 2, 255).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Memory);
    }

    #[test]
    fn test_row_major_layout() {
        let image = Image::from_fn(3, 2, 255, |x, y| (x + 10 * y) as u8).unwrap();

        assert_eq!(image.pixels(), [0, 1, 2, 10, 11, 12]);
        assert_eq!(image.get_pixel(2, 1), Some(12));
        assert_eq!(image.get_pixel(3, 0), None);
        assert_eq!(image.get_pixel(0, 2), None);
    }

    #[test]
    fn test_read_write_random_image() {
        let (width, height) = (37, 19);
        let mut pixels = vec![0_u8; width * height];
        nanorand::WyRand::new().fill(&mut pixels);

        let image = Image::new(pixels, width, height, 255).unwrap();

        let mut encoded = vec![];
        image.write(&mut encoded).unwrap();

        let decoded = Image::read(&encoded[..], DecoderOptions::default()).unwrap();
        assert_eq!(decoded, image);
    }
}
