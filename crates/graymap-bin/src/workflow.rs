/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use graymap_image::codecs::{PGMImageDecoder, PGMImageEncoder};
use graymap_image::workflow::{WorkFlow, WorkFlowState};
use graymap_imageprocs::otsu::OtsuThreshold;
use graymap_imageprocs::sobel::Sobel;
use log::{debug, info};

use crate::cmd_args::FilterOptions;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{create_output, open_input};
use crate::probe_files::probe_input_file;

/// What a successful run produced
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunOutput {
    /// Threshold selected by the otsu filter
    ///
    /// Only returned once the output file is written, so a run that fails
    /// to create or encode the output reports an error and no threshold.
    Threshold(u8),
    /// Gradient image was written
    Gradient,
    /// Json metadata of a probed file
    Probe(String)
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<RunOutput, CliErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or(CliErrors::GenericStr("No input file specified"))?;

    if cmd_opts.probe {
        return Ok(RunOutput::Probe(probe_input_file(
            in_file,
            cmd_opts.decoder_options
        )?));
    }
    let out_file = args
        .get_one::<PathBuf>("out")
        .ok_or(CliErrors::GenericStr("No output file specified"))?;

    let otsu = OtsuThreshold::new();
    let sobel = Sobel::new_with_border(cmd_opts.border.into());

    let reader = open_input(in_file)?;
    let decoder = PGMImageDecoder::new_with_options(reader, cmd_opts.decoder_options);

    let mut workflow = WorkFlow::new();
    workflow.add_decoder(Box::new(decoder));

    match cmd_opts.filter {
        FilterOptions::Otsu => workflow.add_operation(&otsu),
        FilterOptions::Sobel => workflow.add_operation(&sobel)
    }
    // the output is only created once the input decoded and processed cleanly
    workflow.advance_to(WorkFlowState::Encode)?;

    debug!("Treating {:?} as a pgm file", out_file);

    let writer = create_output(out_file)?;
    workflow.add_encoder(Box::new(PGMImageEncoder::new(writer)));

    workflow.advance_to_end()?;

    match cmd_opts.filter {
        FilterOptions::Otsu => otsu
            .threshold()
            .map(RunOutput::Threshold)
            .ok_or(CliErrors::GenericStr("Otsu threshold did not run")),
        FilterOptions::Sobel => Ok(RunOutput::Gradient)
    }
}
