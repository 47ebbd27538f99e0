/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line driver for the graymap tools
//!
//! ```text
//! graymap <input> <output> [--filter otsu|sobel] [--border flat|zero|replicate]
//! ```
use std::ffi::OsString;
use std::process::exit;

use log::error;

pub use crate::errors::CliErrors;
pub use crate::workflow::RunOutput;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    match run(std::env::args_os()) {
        Ok(RunOutput::Threshold(threshold)) => println!("{threshold}"),
        Ok(RunOutput::Probe(json)) => println!("{json}"),
        Ok(RunOutput::Gradient) => {}
        Err(CliErrors::Arguments(err)) => {
            let _ = err.print();
            exit(if err.use_stderr() { 1 } else { 0 });
        }
        Err(err) => {
            error!("Could not complete workflow, reason {err:?}");
            eprintln!("{}", cmd_args::create_cmd_args().render_usage());
            exit(1);
        }
    }
}

/// Parse `args` and run a single image through the requested operation
///
/// `args` includes the program name, as in [`std::env::args_os`].
///
/// # Errors
/// Any argument, file, decoding, processing or encoding failure
pub fn run<I, T>(args: I) -> Result<RunOutput, CliErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone
{
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.try_get_matches_from(args)?;

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    create_and_exec_workflow_from_cmd(&options, &parsed_opts)
}
