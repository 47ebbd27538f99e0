/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this trait
pub trait DecoderTrait {
    /// Decode the stream the decoder was created with
    ///
    /// # Errors
    ///  - Any image decoding errors will be propagated to the caller.
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to implement this trait.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image, this is called
    /// by [`execute`](Self::execute) and contains the actual work
    ///
    /// Operations that need the original samples while writing
    /// output allocate a fresh image and replace `image` with it.
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute an operation on the image
    ///
    /// # Example
    /// ```
    /// use graymap_image::errors::ImageErrors;
    /// use graymap_image::image::Image;
    /// use graymap_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///     fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
    ///         let max_value = image.max_value();
    ///         image.pixels_mut().iter_mut().for_each(|x| *x = max_value - *x);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut image = Image::fill(10, 2, 2, 255).unwrap();
    /// Invert.execute(&mut image).unwrap();
    /// assert!(image.pixels().iter().all(|x| *x == 245));
    /// ```
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        trace!("Running {} on a {:?} image", self.name(), image.dimensions());

        self.execute_impl(image)?;

        debug_assert!(image.is_valid(), "{} produced an invalid image", self.name());

        Ok(())
    }
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode the image and write it to the sink the encoder owns
    fn encode(&mut self, image: &Image) -> Result<(), ImageErrors>;
}
