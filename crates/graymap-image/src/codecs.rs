/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Glue between the pgm codec and the image struct
use std::io::{BufRead, Write};

use graymap_core::options::DecoderOptions;
use graymap_pgm::{PGMDecoder, PGMEncoder};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

pub struct PGMImageDecoder<R: BufRead> {
    inner: PGMDecoder<R>
}

impl<R: BufRead> PGMImageDecoder<R> {
    pub fn new(reader: R) -> PGMImageDecoder<R> {
        PGMImageDecoder::new_with_options(reader, DecoderOptions::default())
    }
    pub fn new_with_options(reader: R, options: DecoderOptions) -> PGMImageDecoder<R> {
        PGMImageDecoder {
            inner: PGMDecoder::new_with_options(options, reader)
        }
    }
}

impl<R: BufRead> DecoderTrait for PGMImageDecoder<R> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.inner.decode()?;
        // both are set once decode succeeds
        let (width, height) = self
            .inner
            .get_dimensions()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;
        let max_value = self
            .inner
            .get_max_value()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;

        Image::new(pixels, width, height, max_value)
    }

    fn name(&self) -> &'static str {
        "pgm"
    }
}

/// A pgm encoder writing to an owned sink
pub struct PGMImageEncoder<W: Write> {
    writer: W
}

impl<W: Write> PGMImageEncoder<W> {
    pub fn new(writer: W) -> PGMImageEncoder<W> {
        PGMImageEncoder { writer }
    }
}

impl<W: Write> EncoderTrait for PGMImageEncoder<W> {
    fn name(&self) -> &'static str {
        "pgm"
    }

    fn encode(&mut self, image: &Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        PGMEncoder::new(&mut self.writer).encode(width, height, image.max_value(), image.pixels())?;

        Ok(())
    }
}
