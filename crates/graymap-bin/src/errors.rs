/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use graymap_core::errors::ErrorKind;
use graymap_image::errors::ImageErrors;

/// Errors that stop a command line run
pub enum CliErrors {
    /// Command line could not be parsed, includes `--help` and `--version` requests
    Arguments(clap::Error),
    FileOpen { path: PathBuf, error: std::io::Error },
    ImageErrors(ImageErrors),
    /// Could not write probe output
    Serialization(serde_json::Error),
    GenericStr(&'static str)
}

impl CliErrors {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliErrors::Arguments(_) | CliErrors::GenericStr(_) => ErrorKind::Argument,
            CliErrors::FileOpen { .. } => ErrorKind::FileOpen,
            CliErrors::ImageErrors(err) => err.kind(),
            CliErrors::Serialization(_) => ErrorKind::Io
        }
    }
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Arguments(err) => writeln!(f, "Invalid arguments: {err}"),
            CliErrors::FileOpen { path, error } => {
                writeln!(f, "Could not open {:?}: {error}", path)
            }
            CliErrors::ImageErrors(err) => writeln!(f, "{err:?}"),
            CliErrors::Serialization(err) => writeln!(f, "Could not serialize output: {err}"),
            CliErrors::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CliErrors {}

impl From<clap::Error> for CliErrors {
    fn from(value: clap::Error) -> Self {
        CliErrors::Arguments(value)
    }
}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::ImageErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Serialization(value)
    }
}
