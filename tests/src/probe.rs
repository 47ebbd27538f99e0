/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use graymap_bin::{run, RunOutput};
use graymap_core::errors::ErrorKind;
use serde::Deserialize;

use crate::{pgm, ScratchDir};

#[derive(Clone, Deserialize, Debug)]
struct ProbeEntry {
    file:      String,
    size:      u64,
    width:     usize,
    height:    usize,
    max_value: u8,
    min:       Option<u8>,
    max:       Option<u8>,
    mean:      Option<f64>
}

#[test]
fn test_probe_reports_metadata() {
    let dir = ScratchDir::new("probe");
    let contents = pgm(3, 2, 200, &[0, 10, 20, 30, 40, 50]);
    let input = dir.write("in.pgm", &contents);

    let input_arg = input.display().to_string();

    let result = run(["graymap", input_arg.as_str(), "--probe"]).unwrap();

    let RunOutput::Probe(json) = result else {
        panic!("Expected probe output, found {result:?}");
    };
    let entry: ProbeEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(entry.file, input_arg);
    assert_eq!(entry.size, contents.len() as u64);
    assert_eq!((entry.width, entry.height), (3, 2));
    assert_eq!(entry.max_value, 200);
    assert_eq!(entry.min, Some(0));
    assert_eq!(entry.max, Some(50));
    assert!((entry.mean.unwrap() - 25.0).abs() < 1e-9);
}

#[test]
fn test_probe_writes_nothing() {
    let dir = ScratchDir::new("probe-no-output");
    let input = dir.write("in.pgm", &pgm(1, 1, 255, &[7]));
    let output = dir.join("out.pgm");

    let (input_arg, output_arg) = (input.display().to_string(), output.display().to_string());

    let result = run(["graymap", input_arg.as_str(), output_arg.as_str(), "--probe"]).unwrap();

    assert!(matches!(result, RunOutput::Probe(_)));
    assert!(!output.exists());
}

#[test]
fn test_probe_invalid_file() {
    let dir = ScratchDir::new("probe-invalid");
    let input = dir.write("in.pgm", b"P6\n1 1\n255\n\x00\x00\x00");

    let input_arg = input.display().to_string();

    let err = run(["graymap", input_arg.as_str(), "--probe"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
