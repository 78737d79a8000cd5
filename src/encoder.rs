//! Two-pass encoder over a restartable data source.
//!
//! [`CharNumberEncoder`] pairs a data source with an optional [`CharMap`] and
//! an [`EncoderConfig`]. The first pass builds the vocabulary if none was
//! supplied; the second vectorizes. Each pass iterates a fresh clone of the
//! source, so a single-pass iterator can never leave the second pass empty.

use ndarray::Array3;
use tracing::info;

use crate::core::{vectorize, EncodeResult};
use crate::data::{CharMap, EncodeReport};
use crate::EncoderConfig;

/// Converts text paragraphs to a `(N, sent_len, word_len)` code array.
///
/// `I` is typically a slice iterator or a borrowed collection, which are
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct CharNumberEncoder<I> {
    data: I,
    char_map: Option<CharMap>,
    config: EncoderConfig,
}

impl<I> CharNumberEncoder<I>
where
    I: IntoIterator + Clone,
    I::Item: AsRef<str>,
{
    /// Create an encoder that will build its own vocabulary on demand.
    pub fn new(data: I, config: EncoderConfig) -> Self {
        Self {
            data,
            char_map: None,
            config,
        }
    }

    /// Use a pre-built vocabulary instead of building one from the data.
    #[must_use]
    pub fn with_char_map(mut self, char_map: CharMap) -> Self {
        self.char_map = Some(char_map);
        self
    }

    /// Build a vocabulary from the data source and store it, replacing any
    /// map already held.
    pub fn build_char_map(&mut self) -> &CharMap {
        let char_map = CharMap::build(self.data.clone());
        info!(vocab_size = char_map.len(), "Built character map");
        self.char_map.insert(char_map)
    }

    /// Encode every paragraph of the data source.
    ///
    /// Builds the vocabulary first if none is held.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EncodeError::InvalidConfig`] if a configured length is zero.
    pub fn make_char_embed(&mut self) -> EncodeResult<Array3<u32>> {
        self.make_char_embed_with_report().map(|(corpus, _)| corpus)
    }

    /// Like [`make_char_embed`](Self::make_char_embed), also returning the
    /// pass diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EncodeError::InvalidConfig`] if a configured length is zero.
    pub fn make_char_embed_with_report(&mut self) -> EncodeResult<(Array3<u32>, EncodeReport)> {
        self.config.validate()?;

        if self.char_map.is_none() {
            info!("No char map, building new character map");
        }
        let data = &self.data;
        let char_map = self
            .char_map
            .get_or_insert_with(|| CharMap::build(data.clone()));
        info!(vocab_size = char_map.len(), "Total characters in char map");

        let (corpus, report) = vectorize(self.data.clone(), char_map, &self.config)?;
        if !report.unmapped.is_empty() {
            info!(
                distinct = report.unmapped.len(),
                occurrences = report.unmapped_total(),
                "Skipped characters not in char map"
            );
        }
        Ok((corpus, report))
    }

    /// The vocabulary, if one has been built or supplied.
    #[must_use]
    pub fn char_map(&self) -> Option<&CharMap> {
        self.char_map.as_ref()
    }

    /// Give up the encoder, keeping its vocabulary.
    #[must_use]
    pub fn into_char_map(self) -> Option<CharMap> {
        self.char_map
    }

    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.config.word_len
    }

    #[must_use]
    pub fn sent_len(&self) -> usize {
        self.config.sent_len
    }
}
