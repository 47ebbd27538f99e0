/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;

use crate::errors::CliErrors;

/// Open `path` for buffered reading
pub fn open_input(path: &Path) -> Result<BufReader<File>, CliErrors> {
    debug!("Opening {:?} for reading", path);

    let file = File::open(path).map_err(|error| CliErrors::FileOpen {
        path: path.to_path_buf(),
        error
    })?;
    Ok(BufReader::new(file))
}

/// Create or truncate `path` for buffered writing
pub fn create_output(path: &Path) -> Result<BufWriter<File>, CliErrors> {
    debug!("Opening {:?} for writing", path);

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|error| CliErrors::FileOpen {
            path: path.to_path_buf(),
            error
        })?;

    Ok(BufWriter::new(file))
}
