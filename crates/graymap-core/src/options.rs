/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// Decoder options
///
/// Influence how forgiving the decoder is and how large
/// an image it will agree to allocate.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Whether samples above the declared maximum value
    /// are an error (strict) or get clamped to it (lenient)
    ///
    /// Files with no such samples decode identically either way.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl DecoderOptions {
    /// Options that reject every non-conformance the decoder can detect
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }
    /// Command line options, error resilient
    ///
    /// Same as the default, samples above the maximum value are clamped
    /// with a warning instead of failing the run.
    ///
    /// Clamping rewrites those samples, so decoding such a file and encoding
    /// it again does not reproduce the input bytes. Use [`new_strict`](Self::new_strict)
    /// to reject such files instead.
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }
    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }
    /// Return true whether the decoder should be in strict mode
    /// and reject most errors
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }
    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    /// Set whether the decoder should be in strict mode
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn test_defaults() {
        let options = DecoderOptions::default();
        assert_eq!(options.get_max_width(), 16384);
        assert_eq!(options.get_max_height(), 16384);
        assert!(!options.get_strict_mode());
    }

    #[test]
    fn test_setters_chain() {
        let options = DecoderOptions::new_cmd()
            .set_max_width(10)
            .set_max_height(20)
            .set_strict_mode(true);

        assert_eq!(options.get_max_width(), 10);
        assert_eq!(options.get_max_height(), 20);
        assert!(options.get_strict_mode());
        assert!(DecoderOptions::new_strict().get_strict_mode());
    }
}
