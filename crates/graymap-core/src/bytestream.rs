/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A byte reader for formats with a textual preamble and a binary payload.
//!
//! The header is consumed one line at a time with [`ZReader::read_header_line`],
//! after which the payload is pulled with [`ZReader::read_exact_into`] from the
//! same underlying stream, so no bytes are lost when the framing switches.
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{BufRead, Read};

use crate::errors::ErrorKind;

pub enum ByteIoError {
    StdIoError(io::Error),
    // requested, read
    NotEnoughBytes(usize, usize)
}

impl ByteIoError {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<io::Error> for ByteIoError {
    fn from(value: io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// A reader wrapping any `BufRead` source
pub struct ZReader<T: BufRead> {
    inner:    T,
    line:     Vec<u8>,
    position: u64
}

impl<T: BufRead> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader {
            inner:    source,
            line:     vec![],
            position: 0
        }
    }
    /// Read the next line whose first byte is not `#`.
    ///
    /// Any number of comment lines are skipped. The returned slice
    /// includes the trailing newline if the stream had one.
    ///
    /// # Returns
    /// - `Ok(Some(line))`: The next non-comment line
    /// - `Ok(None)`: The stream ended before such a line was found
    pub fn read_header_line(&mut self) -> Result<Option<&[u8]>, ByteIoError> {
        loop {
            self.line.clear();

            let read = self.inner.read_until(b'\n', &mut self.line)?;
            self.position += read as u64;

            if read == 0 {
                return Ok(None);
            }
            if self.line[0] != b'#' {
                return Ok(Some(&self.line));
            }
        }
    }
    /// Append exactly `size` bytes from the stream to `sink`
    ///
    /// On a short read, the bytes that were available are still
    /// appended and the error reports how many were found.
    pub fn read_exact_into(&mut self, sink: &mut Vec<u8>, size: usize) -> Result<(), ByteIoError> {
        let start = sink.len();

        (&mut self.inner).take(size as u64).read_to_end(sink)?;

        let read = sink.len() - start;
        self.position += read as u64;

        if read != size {
            return Err(ByteIoError::NotEnoughBytes(size, read));
        }
        Ok(())
    }
    /// Return true if no more bytes can be read from the stream
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.inner.fill_buf()?.is_empty())
    }
    /// Number of bytes consumed from the stream so far
    pub const fn position(&self) -> u64 {
        self.position
    }
    /// Return the underlying reader
    pub fn into_inner(self) -> T {
        self.inner
    }
}
