/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode, operate and encode an image as a sequence of states
use std::time::Instant;

use log::info;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait, OperationsTrait};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorkFlowState {
    Initialized,
    Decode,
    Operations,
    Encode,
    Finished
}

impl WorkFlowState {
    pub fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Initialized => Some(WorkFlowState::Decode),
            WorkFlowState::Decode => Some(WorkFlowState::Operations),
            WorkFlowState::Operations => Some(WorkFlowState::Encode),
            WorkFlowState::Encode => Some(WorkFlowState::Finished),
            WorkFlowState::Finished => None
        }
    }
}

/// A single image pipeline
///
/// Operations are borrowed so callers can inspect them after
/// the workflow ran, e.g. to read a computed threshold.
pub struct WorkFlow<'a> {
    state:      Option<WorkFlowState>,
    decode:     Option<Box<dyn DecoderTrait + 'a>>,
    image:      Option<Image>,
    operations: Vec<&'a dyn OperationsTrait>,
    encode:     Vec<Box<dyn EncoderTrait + 'a>>
}

impl<'a> WorkFlow<'a> {
    /// Create a new empty workflow
    #[allow(clippy::new_without_default)]
    pub fn new() -> WorkFlow<'a> {
        WorkFlow {
            state:      Some(WorkFlowState::Initialized),
            decode:     None,
            image:      None,
            operations: vec![],
            encode:     vec![]
        }
    }
    /// Add a single decoder for this image
    pub fn add_decoder(&mut self, decoder: Box<dyn DecoderTrait + 'a>) {
        self.decode = Some(decoder);
    }
    /// Add an operation, operations run in order of addition
    pub fn add_operation(&mut self, operation: &'a dyn OperationsTrait) {
        self.operations.push(operation);
    }
    /// Add a single encoder for this image
    ///
    /// One can define multiple encoders for a single decoder
    /// the workflow will run all encoders in order of definition.
    /// Encoders may be added at any point before the encode state runs.
    pub fn add_encoder(&mut self, encoder: Box<dyn EncoderTrait + 'a>) {
        self.encode.push(encoder);
    }

    pub fn chain_decoder(&mut self, decoder: Box<dyn DecoderTrait + 'a>) -> &mut WorkFlow<'a> {
        self.add_decoder(decoder);
        self
    }
    pub fn chain_operations(&mut self, operation: &'a dyn OperationsTrait) -> &mut WorkFlow<'a> {
        self.add_operation(operation);
        self
    }
    pub fn chain_encoder(&mut self, encoder: Box<dyn EncoderTrait + 'a>) -> &mut WorkFlow<'a> {
        self.add_encoder(encoder);
        self
    }
    /// Return the current image, present after the decode state
    pub fn get_image(&self) -> Option<&Image> {
        self.image.as_ref()
    }
    /// The state that the next call to [`advance`](Self::advance) runs,
    /// `None` once the workflow is done
    pub const fn state(&self) -> Option<WorkFlowState> {
        self.state
    }
    /// Advance the workflow one state forward
    ///
    /// The workflow advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. One or more encodes [all ran at once]
    /// 4. Finish
    ///
    /// An error leaves the workflow in the state that failed.
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        info!("Current state: {state:?}");

        match state {
            WorkFlowState::Decode => {
                let start = Instant::now();

                let decoder = self.decode.as_mut().ok_or(ImageErrors::NoDecoder)?;
                let image = decoder.decode()?;

                info!(
                    "Finished decoding {} image in {} ms",
                    decoder.name(),
                    start.elapsed().as_millis()
                );
                self.image = Some(image);
            }
            WorkFlowState::Operations => {
                let image = self
                    .image
                    .as_mut()
                    .ok_or(ImageErrors::NoImageForOperations)?;

                for operation in &self.operations {
                    let operation_name = operation.name();

                    info!("Running {operation_name}");

                    let start = Instant::now();

                    operation.execute(image)?;

                    info!(
                        "Finished running `{operation_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            WorkFlowState::Encode => {
                let image = self.image.as_ref().ok_or(ImageErrors::NoImageForEncoding)?;

                for encoder in &mut self.encode {
                    let encoder_name = encoder.name();

                    info!("Running {encoder_name} encoder");

                    let start = Instant::now();

                    encoder.encode(image)?;

                    info!(
                        "Finished running `{encoder_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            WorkFlowState::Finished => {
                info!("Finished operations for this workflow");
            }
            WorkFlowState::Initialized => {}
        }
        self.state = state.next();

        Ok(())
    }
    /// Run states until `target` is the next one to run
    ///
    /// Does nothing if `target` was already passed.
    pub fn advance_to(&mut self, target: WorkFlowState) -> Result<(), ImageErrors> {
        while self.state.is_some_and(|x| x != target) {
            self.advance()?;
        }
        Ok(())
    }
    /// Advance the operations in this workflow up until
    /// we finish.
    ///
    /// This will run a decoder, all operations and all encoders
    /// for this particular workflow
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::codecs::{PGMImageDecoder, PGMImageEncoder};
    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::traits::OperationsTrait;
    use crate::workflow::{WorkFlow, WorkFlowState};

    struct CountingOp {
        runs: Cell<usize>
    }

    impl OperationsTrait for CountingOp {
        fn name(&self) -> &'static str {
            "Counting"
        }

        fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
            self.runs.set(self.runs.get() + 1);
            image.pixels_mut()[0] = 1;
            Ok(())
        }
    }

    #[test]
    fn test_full_workflow() {
        let input = b"P5\n2 1\n255\n\x00\x00";
        let mut output = vec![];
        let op = CountingOp { runs: Cell::new(0) };
        {
            let mut workflow = WorkFlow::new();
            workflow
                .chain_decoder(Box::new(PGMImageDecoder::new(&input[..])))
                .chain_operations(&op)
                .chain_encoder(Box::new(PGMImageEncoder::new(&mut output)));

            workflow.advance_to_end().unwrap();
            assert!(workflow.state().is_none());
        }
        assert_eq!(op.runs.get(), 1);
        assert_eq!(output, b"P5\n2 1\n255\n\x01\x00");
    }

    #[test]
    fn test_encoder_added_late() {
        let input = b"P5\n1 1\n255\n\x05";
        let mut output = vec![];
        {
            let mut workflow = WorkFlow::new();
            workflow.add_decoder(Box::new(PGMImageDecoder::new(&input[..])));

            workflow.advance_to(WorkFlowState::Encode).unwrap();
            assert_eq!(workflow.get_image().unwrap().pixels(), [5]);

            workflow.add_encoder(Box::new(PGMImageEncoder::new(&mut output)));
            workflow.advance_to_end().unwrap();
        }
        assert_eq!(output, b"P5\n1 1\n255\n\x05");
    }

    #[test]
    fn test_decode_error_stops_workflow() {
        let mut output = vec![];
        let op = CountingOp { runs: Cell::new(0) };
        {
            let mut workflow = WorkFlow::new();
            workflow
                .chain_decoder(Box::new(PGMImageDecoder::new(&b"P2\n"[..])))
                .chain_operations(&op)
                .chain_encoder(Box::new(PGMImageEncoder::new(&mut output)));

            assert!(matches!(
                workflow.advance_to_end(),
                Err(ImageErrors::PGMDecodeErrors(_))
            ));
            assert_eq!(workflow.state(), Some(WorkFlowState::Decode));
        }
        assert_eq!(op.runs.get(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_missing_decoder() {
        let mut workflow = WorkFlow::new();
        assert!(matches!(
            workflow.advance_to_end(),
            Err(ImageErrors::NoDecoder)
        ));
    }
}
