/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use graymap_core::options::DecoderOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::new_cmd();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.get_max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.get_max_height());
    let strict_mode = options.get_flag("strict");

    defaults
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::get_decoder_options;

    #[test]
    fn test_decoder_options_from_cmd() {
        let matches = create_cmd_args()
            .try_get_matches_from(["graymap", "a", "b", "--strict", "--max-width", "20"])
            .unwrap();
        let options = get_decoder_options(&matches);

        assert!(options.get_strict_mode());
        assert_eq!(options.get_max_width(), 20);
        assert_eq!(options.get_max_height(), 16384);
    }
}
