/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The graymap image type and the workflow that moves it from a decoder,
//! through image operations, to one or more encoders.
//!
//! # Example
//! ```
//! use graymap_core::options::DecoderOptions;
//! use graymap_image::image::Image;
//!
//! let image = Image::read(&b"P5\n2 2\n255\n\x00\x40\x80\xff"[..], DecoderOptions::default()).unwrap();
//! assert_eq!(image.dimensions(), (2, 2));
//!
//! let mut output = vec![];
//! image.write(&mut output).unwrap();
//! assert_eq!(output, b"P5\n2 2\n255\n\x00\x40\x80\xff");
//! ```
pub mod codecs;
pub mod errors;
pub mod image;
pub mod traits;
pub mod workflow;
