/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Otsu's method for selecting a global threshold
//!
//! Every candidate `t` splits the samples into class 0 (`<= t`) and class 1 (`> t`).
//! The candidate maximising the between-class variance
//!
//! ```text
//! Sb2 = R0 * R1 * (M0 - M1)^2
//! ```
//!
//! is selected, where `R` are the population fractions and `M` the class means.
use std::cell::Cell;

use graymap_image::errors::ImageErrors;
use graymap_image::image::Image;
use graymap_image::traits::OperationsTrait;
use log::debug;

use crate::histogram::histogram;
use crate::threshold::threshold;

/// Select a threshold for an image using Otsu's method
///
/// The result lies in `0..max_value`.
///
/// Candidates that leave either class empty are skipped, and a candidate only replaces
/// the current best on a strict improvement, so ties keep the lowest value.
/// If no candidate separates the samples (e.g. a uniform image) this returns `0`.
#[must_use]
pub fn select_threshold(image: &Image) -> u8 {
    let histo = histogram(image.pixels());

    select_threshold_from_histogram(&histo, image.max_value())
}

/// Run Otsu's selection over a precomputed histogram
///
/// Only candidates `0..max_value` are considered.
#[must_use]
pub fn select_threshold_from_histogram(histogram: &[u32; 256], max_value: u8) -> u8 {
    let mut total_count = 0_u64;
    let mut total_sum = 0_u64;

    for (value, count) in histogram.iter().enumerate() {
        total_count += u64::from(*count);
        total_sum += value as u64 * u64::from(*count);
    }

    let mut count0 = 0_u64;
    let mut sum0 = 0_u64;

    let mut best_variance = 0.0_f64;
    let mut best = 0_u8;

    for t in 0..max_value {
        let hits = u64::from(histogram[usize::from(t)]);

        count0 += hits;
        sum0 += u64::from(t) * hits;

        let count1 = total_count - count0;

        if count0 == 0 || count1 == 0 {
            continue;
        }
        let p0 = count0 as f64;
        let p1 = count1 as f64;

        let m0 = sum0 as f64 / p0;
        let m1 = (total_sum - sum0) as f64 / p1;

        let r0 = p0 / (p0 + p1);
        let r1 = p1 / (p0 + p1);

        let variance = r0 * r1 * (m0 - m1) * (m0 - m1);

        if variance > best_variance {
            best_variance = variance;
            best = t;
        }
    }
    best
}

/// Binarize an image with a threshold chosen by Otsu's method
///
/// The image is replaced with one of the same dimensions and max value
/// where samples above the threshold become `max_value` and the rest zero.
///
/// The selected threshold can be read back with [`threshold`](Self::threshold)
/// after the operation ran.
#[derive(Default)]
pub struct OtsuThreshold {
    selected: Cell<Option<u8>>
}

impl OtsuThreshold {
    #[must_use]
    pub fn new() -> OtsuThreshold {
        OtsuThreshold::default()
    }
    /// The threshold picked by the last execution, `None` if it never ran
    pub fn threshold(&self) -> Option<u8> {
        self.selected.get()
    }
}

impl OperationsTrait for OtsuThreshold {
    fn name(&self) -> &'static str {
        "Otsu threshold"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let level = select_threshold(image);

        debug!("Otsu selected threshold {level}");

        let (width, height) = image.dimensions();
        let mut output = Image::allocate(width, height, image.max_value())?;

        threshold(image, &mut output, level);

        *image = output;
        self.selected.set(Some(level));

        Ok(())
    }
}
