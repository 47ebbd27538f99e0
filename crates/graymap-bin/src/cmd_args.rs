/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use graymap_imageprocs::border::BorderMode;

/// The single operation a run applies
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterOptions {
    Otsu,
    Sobel
}

impl ValueEnum for FilterOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Otsu, Self::Sobel]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Otsu => PossibleValue::new("otsu").help("Binarize with a threshold chosen by Otsu's method"),
            Self::Sobel => PossibleValue::new("sobel").help("Sobel gradient magnitude")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BorderOptions {
    Flat,
    Zero,
    Replicate
}

impl ValueEnum for BorderOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Flat, Self::Zero, Self::Replicate]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Flat => PossibleValue::new("flat"),
            Self::Zero => PossibleValue::new("zero"),
            Self::Replicate => PossibleValue::new("replicate")
        })
    }
}

impl From<BorderOptions> for BorderMode {
    fn from(value: BorderOptions) -> Self {
        match value {
            BorderOptions::Flat => BorderMode::Flat,
            BorderOptions::Zero => BorderMode::Zero,
            BorderOptions::Replicate => BorderMode::Replicate
        }
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("graymap")
        .about("Threshold or edge-detect binary PGM (P5) images")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .help("Input pgm file to read data from")
            .index(1)
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .help("Output pgm file to write the result to")
            .index(2)
            .value_parser(value_parser!(PathBuf))
            .required_unless_present("probe"))
        .arg(Arg::new("filter")
            .long("filter")
            .help_heading("OPERATIONS")
            .help("Operation to apply to the image")
            .default_value("otsu")
            .value_parser(value_parser!(FilterOptions)))
        .arg(Arg::new("border")
            .long("border")
            .help_heading("OPERATIONS")
            .help("How the sobel filter reads samples outside the image")
            .long_help("How the sobel filter reads samples outside the image.\nflat addresses neighbours by their row-major index so edges wrap onto adjacent rows,\nzero treats outside samples as zero and replicate repeats the nearest edge sample")
            .default_value("flat")
            .value_parser(value_parser!(BorderOptions)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image metadata and sample statistics as json without writing output"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat samples above the maximum value as an error instead of clamping them"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}
