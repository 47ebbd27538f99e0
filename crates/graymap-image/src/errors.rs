/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use graymap_core::errors::ErrorKind;
use graymap_pgm::{PGMDecodeErrors, PGMEncodeErrors};

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    PGMDecodeErrors(PGMDecodeErrors),
    PGMEncodeErrors(PGMEncodeErrors),
    /// width, height
    InvalidDimensions(usize, usize),
    InvalidMaxValue(u8),
    // expected, found
    DimensionsMisMatch(usize, usize),
    /// sample, max value
    SampleOutOfRange(u8, u8),
    AllocationFailure(usize),
    NoImageForOperations,
    NoImageForEncoding,
    NoDecoder,
    GenericStr(&'static str)
}

impl ImageErrors {
    /// The coarse category this error belongs to
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PGMDecodeErrors(err) => err.kind(),
            Self::PGMEncodeErrors(err) => err.kind(),
            Self::AllocationFailure(_) => ErrorKind::Memory,
            Self::InvalidDimensions(..)
            | Self::InvalidMaxValue(_)
            | Self::DimensionsMisMatch(..)
            | Self::SampleOutOfRange(..)
            | Self::NoImageForOperations
            | Self::NoImageForEncoding
            | Self::NoDecoder
            | Self::GenericStr(_) => ErrorKind::Format
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PGMDecodeErrors(ref error) => {
                writeln!(f, "PGM decoding failed: {error:?}")
            }
            Self::PGMEncodeErrors(ref error) => {
                writeln!(f, "PGM encoding failed: {error:?}")
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(f, "Invalid dimensions {width}x{height}, both must be positive")
            }
            Self::InvalidMaxValue(max_value) => {
                writeln!(f, "Invalid maximum value {max_value}, expected a value in 1..=255")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(f, "Dimensions mismatch, expected {expected} but found {found}")
            }
            Self::SampleOutOfRange(sample, max_value) => {
                writeln!(f, "Sample {sample} is greater than the maximum value {max_value}")
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Out of memory, could not allocate {size} bytes")
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::NoImageForEncoding => {
                writeln!(f, "No image found for which we can encode")
            }
            Self::NoDecoder => writeln!(f, "No decoder present for the workflow"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PGMDecodeErrors> for ImageErrors {
    fn from(from: PGMDecodeErrors) -> Self {
        ImageErrors::PGMDecodeErrors(from)
    }
}

impl From<PGMEncodeErrors> for ImageErrors {
    fn from(from: PGMEncodeErrors) -> Self {
        ImageErrors::PGMEncodeErrors(from)
    }
}
