/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end tests running the command line driver over real files

use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod probe;

/// A scratch directory removed when dropped
pub struct ScratchDir {
    path: PathBuf
}

impl ScratchDir {
    pub fn new(name: &str) -> ScratchDir {
        let path = std::env::temp_dir().join(format!("graymap-{}-{name}", std::process::id()));

        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();

        ScratchDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }

    /// Write `contents` into `file` inside this directory, returning its path
    pub fn write(&self, file: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(file);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Build a binary pgm stream
pub fn pgm(width: usize, height: usize, max_value: u8, pixels: &[u8]) -> Vec<u8> {
    let mut out = format!("P5\n{width} {height}\n{max_value}\n").into_bytes();
    out.extend_from_slice(pixels);
    out
}

/// Arguments for a run, program name included
pub fn args(input: &Path, output: &Path, extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "graymap".to_string(),
        input.display().to_string(),
        output.display().to_string(),
    ];
    args.extend(extra.iter().map(|x| x.to_string()));
    args
}
