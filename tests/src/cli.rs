/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use graymap_bin::{run, CliErrors, RunOutput};
use graymap_core::errors::ErrorKind;

use crate::{args, pgm, ScratchDir};

#[test]
fn test_otsu_uniform_image() {
    let dir = ScratchDir::new("otsu-uniform");
    let input = dir.write("in.pgm", &pgm(2, 2, 255, &[10, 10, 10, 10]));
    let output = dir.join("out.pgm");

    let result = run(args(&input, &output, &[])).unwrap();

    assert_eq!(result, RunOutput::Threshold(0));
    assert_eq!(read(&output).unwrap(), pgm(2, 2, 255, &[255; 4]));
}

#[test]
fn test_otsu_two_clusters() {
    let dir = ScratchDir::new("otsu-clusters");
    let pixels = [10, 10, 200, 200, 10, 10, 200, 200];
    let input = dir.write("in.pgm", &pgm(4, 2, 255, &pixels));
    let output = dir.join("out.pgm");

    let result = run(args(&input, &output, &["--filter", "otsu"])).unwrap();

    let RunOutput::Threshold(t) = result else {
        panic!("Expected a threshold, found {result:?}");
    };
    assert!((10..200).contains(&t));
    assert_eq!(
        read(&output).unwrap(),
        pgm(4, 2, 255, &[0, 0, 255, 255, 0, 0, 255, 255])
    );
}

#[test]
fn test_otsu_keeps_max_value() {
    let dir = ScratchDir::new("otsu-max");
    let input = dir.write("in.pgm", &pgm(2, 1, 15, &[2, 13]));
    let output = dir.join("out.pgm");

    run(args(&input, &output, &[])).unwrap();

    assert_eq!(read(&output).unwrap(), pgm(2, 1, 15, &[0, 15]));
}

#[test]
fn test_sobel_bright_centre() {
    let dir = ScratchDir::new("sobel-centre");
    let mut pixels = [0_u8; 25];
    pixels[12] = 255;

    let input = dir.write("in.pgm", &pgm(5, 5, 255, &pixels));
    let output = dir.join("out.pgm");

    let result = run(args(&input, &output, &["--filter", "sobel"])).unwrap();
    assert_eq!(result, RunOutput::Gradient);

    #[rustfmt::skip]
    let expected = [
        0, 0,   0,   0,   0,
        0, 255, 255, 255, 0,
        0, 255, 0,   255, 0,
        0, 255, 255, 255, 0,
        0, 0,   0,   0,   0
    ];
    assert_eq!(read(&output).unwrap(), pgm(5, 5, 255, &expected));
}

#[test]
fn test_sobel_replicate_flat_field() {
    let dir = ScratchDir::new("sobel-flat");
    let input = dir.write("in.pgm", &pgm(4, 3, 255, &[90; 12]));
    let output = dir.join("out.pgm");

    run(args(&input, &output, &["--filter", "sobel", "--border", "replicate"])).unwrap();

    assert_eq!(read(&output).unwrap(), pgm(4, 3, 255, &[0; 12]));
}

#[test]
fn test_sobel_single_pixel() {
    let dir = ScratchDir::new("sobel-single");
    let input = dir.write("in.pgm", &pgm(1, 1, 255, &[200]));
    let output = dir.join("out.pgm");

    run(args(&input, &output, &["--filter", "sobel"])).unwrap();

    assert_eq!(read(&output).unwrap(), pgm(1, 1, 255, &[0]));
}

#[test]
fn test_ascii_header_creates_no_output() {
    let dir = ScratchDir::new("p2-header");
    let input = dir.write("in.pgm", b"P2\n2 2\n255\n1 2 3 4\n");
    let output = dir.join("out.pgm");

    let err = run(args(&input, &output, &[])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(!output.exists());
}

#[test]
fn test_truncated_body() {
    let dir = ScratchDir::new("truncated");
    let input = dir.write("in.pgm", &pgm(4, 4, 255, &[1; 10]));
    let output = dir.join("out.pgm");

    let err = run(args(&input, &output, &[])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!output.exists());
}

#[test]
fn test_header_comments() {
    let dir = ScratchDir::new("comments");
    let input = dir.write("in.pgm", b"# made by hand\nP5\n# size\n2 1\n255\n\x05\xF0");
    let output = dir.join("out.pgm");

    run(args(&input, &output, &[])).unwrap();

    assert_eq!(read(&output).unwrap(), pgm(2, 1, 255, &[0, 255]));
}

#[test]
fn test_missing_input() {
    let dir = ScratchDir::new("missing-input");
    let input = dir.join("does-not-exist.pgm");
    let output = dir.join("out.pgm");

    let err = run(args(&input, &output, &[])).unwrap_err();

    assert!(matches!(err, CliErrors::FileOpen { .. }));
    assert_eq!(err.kind(), ErrorKind::FileOpen);
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = ScratchDir::new("bad-output");
    let input = dir.write("in.pgm", &pgm(1, 1, 255, &[1]));
    let output = dir.join("no-such-dir/out.pgm");

    let err = run(args(&input, &output, &[])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FileOpen);
}

#[test]
fn test_threshold_not_reported_when_output_fails() {
    let dir = ScratchDir::new("otsu-bad-output");
    let input = dir.write("in.pgm", &pgm(4, 1, 255, &[10, 10, 200, 200]));
    let output = dir.join("no-such-dir/out.pgm");

    let result = run(args(&input, &output, &["--filter", "otsu"]));

    assert!(matches!(result, Err(CliErrors::FileOpen { .. })), "{result:?}");
}

#[test]
fn test_wrong_arity() {
    let err = run(["graymap", "only-one.pgm"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = run(["graymap", "a.pgm", "b.pgm", "c.pgm"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_strict_mode_rejects_out_of_range_samples() {
    let dir = ScratchDir::new("strict");
    let input = dir.write("in.pgm", &pgm(2, 1, 100, &[50, 250]));
    let output = dir.join("out.pgm");

    let err = run(args(&input, &output, &["--strict"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(!output.exists());

    // lenient mode clamps 250 to 100
    run(args(&input, &output, &[])).unwrap();
    assert_eq!(read(&output).unwrap(), pgm(2, 1, 100, &[0, 100]));
}

#[test]
fn test_max_dimensions() {
    let dir = ScratchDir::new("max-dims");
    let input = dir.write("in.pgm", &pgm(4, 4, 255, &[0; 16]));
    let output = dir.join("out.pgm");

    let err = run(args(&input, &output, &["--max-width", "3"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);

    run(args(&input, &output, &["--max-width", "4", "--max-height", "4"])).unwrap();
    assert!(output.exists());
}
