/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all graymap libraries
//!
//! It currently contains
//!
//! - A line aware byte reader used by the header parser, with comment skipping
//! - Decoder options respected by the pgm decoder
//! - The coarse error categories every graymap error maps into
pub mod bytestream;
pub mod errors;
pub mod options;
