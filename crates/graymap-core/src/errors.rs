/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Error categories shared across the graymap crates
use core::fmt::{Display, Formatter};

/// Coarse category of an error.
///
/// Each crate has its own error enum carrying the details,
/// and every variant of those maps into one of these categories
/// via a `kind()` method.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Wrong command line usage
    Argument,
    /// An input or output file could not be opened
    FileOpen,
    /// The stream does not follow the expected format, or a value is out of range
    Format,
    /// Short read, short write or an underlying stream failure
    Io,
    /// A pixel buffer could not be allocated
    Memory
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Argument => write!(f, "argument error"),
            Self::FileOpen => write!(f, "file open error"),
            Self::Format => write!(f, "format error"),
            Self::Io => write!(f, "I/O error"),
            Self::Memory => write!(f, "memory error")
        }
    }
}
