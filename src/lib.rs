//! # charnum
//!
//! Character-level numeric encoding of text for model input.
//!
//! ## Overview
//!
//! Every paragraph becomes a fixed-shape integer matrix:
//!
//! ```text
//! paragraph ──split(' ')──► words ──CharMap──► codes ──pad/truncate──► [word_len]
//!                                                                         │
//!                        [sent_len, word_len] ◄──pad/truncate── word rows ┘
//! ```
//!
//! A corpus of `N` paragraphs is stacked into an array of shape
//! `(N, sent_len, word_len)`. Code `0` doubles as the padding value and the
//! code of the space character, which never appears inside a word.
//!
//! ## Structure
//!
//! - [`core`](crate::core) — The stateless transform: word padding, sentence encoding, vectorization
//! - [`data`] — The character vocabulary ([`CharMap`]) and the diagnostics report
//! - [`encoder`] — [`CharNumberEncoder`], the two-pass build-then-vectorize facade
//! - [`checkpoint`] — JSON persistence for character maps
//!
//! ## Example
//!
//! ```
//! use charnum::{CharNumberEncoder, EncoderConfig};
//!
//! let paragraphs = ["the cat", "a dog sat"];
//! let config = EncoderConfig::new(4, 3).unwrap();
//! let mut encoder = CharNumberEncoder::new(paragraphs.iter(), config);
//! let embedded = encoder.make_char_embed().unwrap();
//! assert_eq!(embedded.shape(), &[2, 3, 4]);
//! ```

pub mod checkpoint;
pub mod core;
pub mod data;
pub mod encoder;

pub use crate::core::{
    encode_sentence, encode_word, spawn_word_vec, to_f32, vectorize, EncodeError, EncodeResult,
    PAD_CODE,
};
pub use checkpoint::{load_char_map, save_char_map};
pub use data::{CharMap, EncodeReport};
pub use encoder::CharNumberEncoder;

use serde::{Deserialize, Serialize};

/// Default maximum number of characters kept per word.
pub const DEFAULT_WORD_LEN: usize = 30;

/// Default maximum number of words kept per sentence.
pub const DEFAULT_SENT_LEN: usize = 200;

/// Output dimensions for encoding.
///
/// Used by [`vectorize`], [`encode_sentence`], and [`CharNumberEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Characters per word; longer words are cut, shorter ones zero-padded.
    pub word_len: usize,
    /// Words per sentence; longer sentences are cut, shorter ones zero-padded.
    pub sent_len: usize,
}

impl EncoderConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidConfig`] if either length is zero.
    pub fn new(word_len: usize, sent_len: usize) -> EncodeResult<Self> {
        let config = Self { word_len, sent_len };
        config.validate()?;
        Ok(config)
    }

    /// Check that both output dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> EncodeResult<()> {
        if self.word_len == 0 {
            return Err(EncodeError::InvalidConfig(
                "word_len must be positive".to_string(),
            ));
        }
        if self.sent_len == 0 {
            return Err(EncodeError::InvalidConfig(
                "sent_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            word_len: DEFAULT_WORD_LEN,
            sent_len: DEFAULT_SENT_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.word_len, 30);
        assert_eq!(config.sent_len, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_word_len_rejected() {
        let err = EncoderConfig::new(0, 10).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidConfig(_)));
        assert!(err.to_string().contains("word_len"));
    }

    #[test]
    fn test_zero_sent_len_rejected() {
        let err = EncoderConfig::new(10, 0).unwrap_err();
        assert!(err.to_string().contains("sent_len"));
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let config: EncoderConfig =
            serde_json::from_str(r#"{"word_len": 12, "sent_len": 64}"#).expect("valid json");
        assert_eq!(config, EncoderConfig::new(12, 64).expect("valid dims"));
    }
}
