/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::BufRead;

use graymap_core::bytestream::{ByteIoError, ZReader};
use graymap_core::errors::ErrorKind;
use graymap_core::options::DecoderOptions;
use log::{info, trace, warn};

/// An instance of a PGM decoder
///
/// The decoder reads the binary (`P5`) variant with 8 bit samples.
pub struct PGMDecoder<T: BufRead> {
    width:           usize,
    height:          usize,
    max_value:       u8,
    decoded_headers: bool,
    reader:          ZReader<T>,
    options:         DecoderOptions
}

pub enum PGMDecodeErrors {
    /// The first header line does not start with `P5`
    InvalidMagic(String),
    InvalidHeader(String),
    /// The stream ended before the named header field
    UnexpectedEof(&'static str),
    LargeDimensions(usize, usize),
    /// sample, max value
    SampleOutOfRange(u8, u8),
    // expected, found
    NotEnoughBytes(usize, usize),
    AllocationFailure(usize),
    IoErrors(io::Error)
}

impl PGMDecodeErrors {
    /// The coarse category this error belongs to
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMagic(_)
            | Self::InvalidHeader(_)
            | Self::LargeDimensions(..)
            | Self::SampleOutOfRange(..) => ErrorKind::Format,
            Self::UnexpectedEof(_) | Self::NotEnoughBytes(..) | Self::IoErrors(_) => ErrorKind::Io,
            Self::AllocationFailure(_) => ErrorKind::Memory
        }
    }
}

impl Debug for PGMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(found) => {
                writeln!(f, "Invalid magic number, expected P5 but found `{found}`")
            }
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnexpectedEof(field) => {
                writeln!(f, "Stream ended before the {field} header field")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::SampleOutOfRange(sample, max_value) => {
                writeln!(f, "Sample {sample} is greater than the maximum value {max_value}")
            }
            Self::NotEnoughBytes(expected, found) => {
                writeln!(f, "Expected {expected} bytes of pixel data but found {found}")
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Could not allocate {size} bytes for pixel data")
            }
            Self::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for PGMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PGMDecodeErrors {}

impl From<ByteIoError> for PGMDecodeErrors {
    fn from(err: ByteIoError) -> Self {
        match err {
            ByteIoError::StdIoError(err) => Self::IoErrors(err),
            ByteIoError::NotEnoughBytes(expected, found) => Self::NotEnoughBytes(expected, found)
        }
    }
}

impl From<io::Error> for PGMDecodeErrors {
    fn from(err: io::Error) -> Self {
        Self::IoErrors(err)
    }
}

impl<T: BufRead> PGMDecoder<T> {
    /// Create a new pgm decoder with default options
    ///
    /// # Arguments
    /// - data: PGM encoded stream
    ///
    /// # Example
    /// ```
    /// use graymap_pgm::PGMDecoder;
    /// let mut decoder = PGMDecoder::new(&b"NOT VALID PGM"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PGMDecoder<T> {
        PGMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PGM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PGM encoded stream
    pub fn new_with_options(options: DecoderOptions, data: T) -> PGMDecoder<T> {
        PGMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader: ZReader::new(data),
            options
        }
    }
    /// Read PGM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op after the first success.
    pub fn read_headers(&mut self) -> Result<(), PGMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        let magic = next_line(&mut self.reader, "magic number")?;

        if !magic.starts_with(b"P5") {
            let found = String::from_utf8_lossy(magic.trim_ascii_end()).to_string();
            return Err(PGMDecodeErrors::InvalidMagic(found));
        }

        let line = next_line(&mut self.reader, "width and height")?;

        let (width, end) = get_integer(line).ok_or_else(|| {
            PGMDecodeErrors::InvalidHeader(format!(
                "Could not read width from `{}`",
                String::from_utf8_lossy(line.trim_ascii_end())
            ))
        })?;
        let (height, _) = get_integer(&line[end..]).ok_or_else(|| {
            PGMDecodeErrors::InvalidHeader(format!(
                "Could not read height from `{}`",
                String::from_utf8_lossy(line.trim_ascii_end())
            ))
        })?;

        if width <= 0 || height <= 0 {
            let msg = format!("Width and height must be positive, found {width}x{height}");
            return Err(PGMDecodeErrors::InvalidHeader(msg));
        }

        let line = next_line(&mut self.reader, "maximum value")?;

        let (max_value, _) = get_integer(line).ok_or_else(|| {
            PGMDecodeErrors::InvalidHeader(format!(
                "Could not read maximum value from `{}`",
                String::from_utf8_lossy(line.trim_ascii_end())
            ))
        })?;

        let max_value = u8::try_from(max_value)
            .ok()
            .filter(|x| *x > 0)
            .ok_or_else(|| {
                let msg = format!("Maximum value must be in 1..=255, found {max_value}");
                PGMDecodeErrors::InvalidHeader(msg)
            })?;

        let width = usize::try_from(width).unwrap_or(usize::MAX);
        let height = usize::try_from(height).unwrap_or(usize::MAX);

        if width > self.options.get_max_width() {
            return Err(PGMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PGMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        info!("Width: {width}, height: {height}");
        info!("Max value: {max_value}");
        trace!("Header length: {} bytes", self.reader.position());

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.decoded_headers = true;

        Ok(())
    }
    /// Read the pixel data following the header
    ///
    /// Exactly `width*height` bytes are read. Reads headers first
    /// if that hasn't happened yet.
    pub fn read_body(&mut self) -> Result<Vec<u8>, PGMDecodeErrors> {
        self.read_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .ok_or(PGMDecodeErrors::LargeDimensions(usize::MAX, self.width))?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| PGMDecodeErrors::AllocationFailure(size))?;

        self.reader.read_exact_into(&mut data, size)?;

        if let Some(sample) = data.iter().copied().find(|x| *x > self.max_value) {
            if self.options.get_strict_mode() {
                return Err(PGMDecodeErrors::SampleOutOfRange(sample, self.max_value));
            }
            warn!(
                "Found sample {sample} above the maximum value {}, clamping",
                self.max_value
            );
            let max_value = self.max_value;
            data.iter_mut().for_each(|x| *x = (*x).min(max_value));
        }

        Ok(data)
    }
    /// Decode a pgm encoded stream and return the raw samples from it
    pub fn decode(&mut self) -> Result<Vec<u8>, PGMDecodeErrors> {
        self.read_headers()?;
        self.read_body()
    }
    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Return the maximum sample value or none if headers aren't decoded
    pub const fn get_max_value(&self) -> Option<u8> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }
    /// Return the underlying stream
    pub fn into_inner(self) -> T {
        self.reader.into_inner()
    }
}

fn next_line<'a, T: BufRead>(
    reader: &'a mut ZReader<T>, field: &'static str
) -> Result<&'a [u8], PGMDecodeErrors> {
    reader
        .read_header_line()?
        .ok_or(PGMDecodeErrors::UnexpectedEof(field))
}

/// Parse a decimal integer at the start of `bytes`
///
/// Leading whitespace is skipped, a sign is accepted and parsing stops
/// at the first non digit, so `12abc` reads as 12.
///
/// Returns the value and the position right after its last digit,
/// or `None` if no digits were found or the value overflows.
fn get_integer(bytes: &[u8]) -> Option<(i64, usize)> {
    let mut position = bytes
        .iter()
        .position(|x| !x.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    let mut negative = false;

    if let Some(sign @ (b'-' | b'+')) = bytes.get(position).copied() {
        negative = sign == b'-';
        position += 1;
    }
    let start = position;
    let mut value = 0_i64;

    while let Some(byte) = bytes.get(position).filter(|x| x.is_ascii_digit()) {
        value = value
            .checked_mul(10)?
            .checked_add(i64::from(byte - b'0'))?;
        position += 1;
    }
    if position == start {
        return None;
    }
    Some((if negative { -value } else { value }, position))
}
