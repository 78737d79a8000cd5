//! Diagnostics gathered during one vectorization pass.

use std::collections::BTreeMap;

use serde::Serialize;

/// What the encoder skipped, dropped, or cut while vectorizing.
///
/// None of these are errors; the report lets callers decide whether the
/// vocabulary or dimensions need adjusting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    /// Paragraphs consumed from the input.
    pub paragraphs: usize,
    /// Occurrences of each character that had no code.
    pub unmapped: BTreeMap<char, usize>,
    /// Word tokens that encoded to nothing and took no row.
    pub dropped_words: usize,
    /// Words longer than `word_len`.
    pub truncated_words: usize,
    /// Paragraphs with more than `sent_len` words.
    pub truncated_sentences: usize,
    /// Paragraphs with fewer than `sent_len` words.
    pub padded_sentences: usize,
}

impl EncodeReport {
    /// Count one occurrence of a character missing from the map.
    pub fn record_unmapped(&mut self, c: char) {
        *self.unmapped.entry(c).or_insert(0) += 1;
    }

    /// Total skipped character occurrences.
    #[must_use]
    pub fn unmapped_total(&self) -> usize {
        self.unmapped.values().sum()
    }

    /// True if no characters were skipped and no words were dropped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty() && self.dropped_words == 0
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &EncodeReport) {
        self.paragraphs += other.paragraphs;
        for (&c, &count) in &other.unmapped {
            *self.unmapped.entry(c).or_insert(0) += count;
        }
        self.dropped_words += other.dropped_words;
        self.truncated_words += other.truncated_words;
        self.truncated_sentences += other.truncated_sentences;
        self.padded_sentences += other.padded_sentences;
    }
}
