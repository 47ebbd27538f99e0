/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use graymap_core::errors::ErrorKind;

/// Errors occurring during encoding
pub enum PGMEncodeErrors {
    Static(&'static str),
    // expected, found
    DimensionsMisMatch(usize, usize),
    IOErrors(io::Error)
}

impl PGMEncodeErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Static(_) | Self::DimensionsMisMatch(..) => ErrorKind::Format,
            Self::IOErrors(_) => ErrorKind::Io
        }
    }
}

impl From<io::Error> for PGMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PGMEncodeErrors::IOErrors(err)
    }
}

impl Debug for PGMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PGMEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PGMEncodeErrors::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Data length does not match image dimensions, expected {expected} but found {found}"
                )
            }
            PGMEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PGMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PGMEncodeErrors {}

/// A PGM encoder
pub struct PGMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PGMEncoder<'a, W> {
    /// Create a new PGM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PGMEncoder<'a, W> {
        Self { writer }
    }

    /// Write the three header lines
    ///
    /// Magic number, `width height` and the maximum value,
    /// each terminated by a single newline.
    pub fn write_headers(
        &mut self, width: usize, height: usize, max_value: u8
    ) -> Result<(), PGMEncodeErrors> {
        if width == 0 || height == 0 {
            return Err(PGMEncodeErrors::Static("Width and height must be positive"));
        }
        if max_value == 0 {
            return Err(PGMEncodeErrors::Static("Maximum value must be positive"));
        }
        let header = format!("P5\n{width} {height}\n{max_value}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write the raw samples
    pub fn write_body(&mut self, data: &[u8]) -> Result<(), PGMEncodeErrors> {
        self.writer.write_all(data)?;
        Ok(())
    }

    /// Encode `data` as a binary PGM file and flush the writer
    pub fn encode(
        &mut self, width: usize, height: usize, max_value: u8, data: &[u8]
    ) -> Result<(), PGMEncodeErrors> {
        let expected = width.checked_mul(height).unwrap_or(usize::MAX);

        if expected != data.len() {
            return Err(PGMEncodeErrors::DimensionsMisMatch(expected, data.len()));
        }
        self.write_headers(width, height, max_value)?;
        self.write_body(data)?;
        self.writer.flush()?;

        Ok(())
    }
}
