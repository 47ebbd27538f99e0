/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use graymap_core::options::DecoderOptions;
use log::{debug, info, Level};

use crate::cmd_args::{BorderOptions, FilterOptions};
use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub filter:          FilterOptions,
    pub border:          BorderOptions,
    pub probe:           bool,
    pub decoder_options: DecoderOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            filter:          FilterOptions::Otsu,
            border:          BorderOptions::Flat,
            probe:           false,
            decoder_options: DecoderOptions::new_cmd()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(filter) = options.get_one::<FilterOptions>("filter") {
        info!("Using {:?} filter", filter);
        cmd_options.filter = *filter;
    }
    if let Some(border) = options.get_one::<BorderOptions>("border") {
        if options.value_source("border") == Some(ValueSource::CommandLine)
            && cmd_options.filter != FilterOptions::Sobel
        {
            info!("Border mode {:?} only affects the sobel filter", border);
        }
        cmd_options.border = *border;
    }
    cmd_options.probe = options.get_flag("probe");
    cmd_options.decoder_options = get_decoder_options(options);

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if simple_logger::init_with_level(log_level).is_err() {
        // a logger is already installed, e.g. a second run in the same process
        debug!("Logger already initialized");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
