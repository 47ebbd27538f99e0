/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate image histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value

/// Summary statistics derived from a histogram
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HistogramSummary {
    pub min:   u8,
    pub max:   u8,
    pub mean:  f64,
    pub count: u64
}

#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    // Four interleaved tables break the store to load dependency
    // when neighbouring samples hit the same bin.
    let mut start1 = [0_u32; 256];
    let mut counts = [0_u32; 256 * 3];
    let (start2, counts) = counts.split_at_mut(256);
    let (start3, start4) = counts.split_at_mut(256);

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    for i in chunks {
        start1[usize::from(i[0])] += 1;
        start2[usize::from(i[1])] += 1;
        start3[usize::from(i[2])] += 1;
        start4[usize::from(i[3])] += 1;
    }

    for i in remainder {
        start1[usize::from(*i)] += 1;
    }
    // add them together
    for (((b, c), d), e) in start1
        .iter_mut()
        .zip(start2.iter())
        .zip(start3.iter())
        .zip(start4.iter())
    {
        *b += c + d + e;
    }

    start1
}

/// Return min, max and mean sample of a histogram or `None` if it is empty
#[must_use]
pub fn summarize(histogram: &[u32; 256]) -> Option<HistogramSummary> {
    let min = histogram.iter().position(|x| *x != 0)?;
    let max = histogram.iter().rposition(|x| *x != 0)?;

    let (count, sum) = histogram
        .iter()
        .enumerate()
        .fold((0_u64, 0_u64), |(count, sum), (value, hits)| {
            (count + u64::from(*hits), sum + value as u64 * u64::from(*hits))
        });

    Some(HistogramSummary {
        min: min as u8,
        max: max as u8,
        mean: sum as f64 / count as f64,
        count
    })
}
