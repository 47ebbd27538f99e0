/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use graymap_core::options::DecoderOptions;
use graymap_image::image::Image;
use graymap_imageprocs::histogram::{histogram, summarize};
use log::info;

use crate::errors::CliErrors;
use crate::file_io::open_input;
use crate::serde::Metadata;

/// Decode an input file, extract metadata and sample statistics
/// and return them as pretty printed json
pub fn probe_input_file(in_file: &Path, options: DecoderOptions) -> Result<String, CliErrors> {
    let reader = open_input(in_file)?;

    let size = reader
        .get_ref()
        .metadata()
        .map_err(|error| CliErrors::FileOpen {
            path: in_file.to_path_buf(),
            error
        })?
        .len();

    let image = Image::read(reader, options)?;
    info!("Probed {:?}, {:?} image", in_file, image.dimensions());

    let summary = summarize(&histogram(image.pixels()));
    let metadata = Metadata::new(in_file, size, &image, summary);

    Ok(serde_json::to_string_pretty(&metadata)?)
}
