/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `graymap-image`
//!
//! This implements the operations the graymap pipeline can run,
//! each implementing the `OperationsTrait` defined by graymap-image.
//!
//! # Example
//! - Binarize an image with a threshold chosen by Otsu's method
//! ```
//! use graymap_image::image::Image;
//! use graymap_image::traits::OperationsTrait;
//! use graymap_imageprocs::otsu::OtsuThreshold;
//!
//! let mut image = Image::from_fn(4, 4, 255, |x, _| if x < 2 { 10 } else { 200 }).unwrap();
//! let otsu = OtsuThreshold::new();
//! otsu.execute(&mut image).unwrap();
//!
//! assert_eq!(otsu.threshold(), Some(10));
//! assert_eq!(image.pixels()[..4], [0, 0, 255, 255]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod border;
pub mod histogram;
pub mod otsu;
pub mod sobel;
pub mod threshold;
