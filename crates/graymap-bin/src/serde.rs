/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use graymap_image::image::Image;
use graymap_imageprocs::histogram::HistogramSummary;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:    &'a Path,
    size:    u64,
    image:   &'a Image,
    summary: Option<HistogramSummary>
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: &'a Path, size: u64, image: &'a Image, summary: Option<HistogramSummary>
    ) -> Metadata<'a> {
        Metadata {
            file,
            size,
            image,
            summary
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 8)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.image.width())?;
        state.serialize_field("height", &self.image.height())?;
        state.serialize_field("max_value", &self.image.max_value())?;
        state.serialize_field("min", &self.summary.map(|x| x.min))?;
        state.serialize_field("max", &self.summary.map(|x| x.max))?;
        state.serialize_field("mean", &self.summary.map(|x| x.mean))?;

        state.end()
    }
}
