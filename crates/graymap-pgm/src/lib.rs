/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A binary Portable Graymap (`P5`) decoder and encoder
//!
//! The header is three newline terminated text lines, magic number,
//! `width height` and the maximum sample value, any of which may be
//! preceded by `#` comment lines. The body is `width*height` raw bytes
//! in row-major order.
//!
//! # Example
//! ```
//! use graymap_pgm::{PGMDecoder, PGMEncoder};
//!
//! let file = b"P5\n# a comment\n2 1\n255\n\x00\xff";
//! let mut decoder = PGMDecoder::new(&file[..]);
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.get_dimensions(), Some((2, 1)));
//! assert_eq!(pixels, [0, 255]);
//!
//! let mut output = vec![];
//! PGMEncoder::new(&mut output)
//!     .encode(2, 1, 255, &pixels)
//!     .unwrap();
//! assert_eq!(output, b"P5\n2 1\n255\n\x00\xff");
//! ```
pub use decoder::*;
pub use encoder::*;

mod decoder;
mod encoder;
