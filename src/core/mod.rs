//! Core encoding transform.
//!
//! A pure function over `(text, vocabulary, dimensions) → array`:
//! - Words are split on literal spaces and trimmed
//! - Characters are mapped through a [`CharMap`]; unknown ones are skipped
//! - Word vectors are padded/truncated to `word_len`
//! - Sentences are padded/truncated to `sent_len` word rows
//!
//! ## Shapes
//!
//! ```text
//! word      : [word_len]
//! sentence  : [sent_len, word_len]
//! corpus    : [N, sent_len, word_len]
//! ```
//!
//! Nothing here holds state between calls. Diagnostics flow out through the
//! [`EncodeReport`] argument and `tracing` events.

mod error;

pub use error::{EncodeError, EncodeResult};

use ndarray::{Array1, Array2, Array3, Axis};
use tracing::{debug, debug_span};

use crate::data::{CharMap, EncodeReport};
use crate::EncoderConfig;

/// Code written into every padding slot.
pub const PAD_CODE: u32 = 0;

/// Separator used to split a paragraph into word tokens.
const WORD_SEPARATOR: char = ' ';

/// Fit a word's codes to exactly `word_len` entries.
///
/// Keeps the first `word_len` codes if there are more, otherwise right-pads
/// with [`PAD_CODE`].
///
/// # Example
///
/// ```
/// use charnum::spawn_word_vec;
///
/// assert_eq!(spawn_word_vec(&[4, 5], 4), vec![4, 5, 0, 0]);
/// assert_eq!(spawn_word_vec(&[1, 2, 3, 4, 5], 3), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn spawn_word_vec(codes: &[u32], word_len: usize) -> Vec<u32> {
    let mut word = Vec::with_capacity(word_len);
    word.extend(codes.iter().take(word_len).copied());
    word.resize(word_len, PAD_CODE);
    word
}

/// Map one word token to its raw character codes.
///
/// The token is trimmed of surrounding whitespace first. Characters missing
/// from `char_map` are skipped and recorded in `report`; the result may be
/// empty. No padding is applied.
pub fn encode_word(word: &str, char_map: &CharMap, report: &mut EncodeReport) -> Vec<u32> {
    word.trim()
        .chars()
        .filter_map(|c| match char_map.code(c) {
            Some(code) => Some(code),
            None => {
                debug!(ch = %c, "character not in char map, skipping");
                report.record_unmapped(c);
                None
            }
        })
        .collect()
}

/// Encode one paragraph into a `(sent_len, word_len)` matrix.
///
/// Words that encode to nothing are dropped without taking a row. The first
/// `sent_len` surviving words fill the rows in order; remaining rows stay
/// zero. Words past `sent_len` are still encoded so their unmapped
/// characters show up in `report`.
pub fn encode_sentence(
    paragraph: &str,
    char_map: &CharMap,
    config: &EncoderConfig,
    report: &mut EncodeReport,
) -> Array2<u32> {
    let mut sentence = Array2::zeros((config.sent_len, config.word_len));
    let mut n_words = 0;
    let mut overflowed = false;

    for token in paragraph.split(WORD_SEPARATOR) {
        let codes = encode_word(token, char_map, report);
        if codes.is_empty() {
            report.dropped_words += 1;
            continue;
        }
        if n_words == config.sent_len {
            overflowed = true;
            continue;
        }
        if codes.len() > config.word_len {
            report.truncated_words += 1;
        }
        let word = Array1::from(spawn_word_vec(&codes, config.word_len));
        sentence.row_mut(n_words).assign(&word);
        n_words += 1;
    }

    if overflowed {
        report.truncated_sentences += 1;
    } else if n_words < config.sent_len {
        report.padded_sentences += 1;
    }

    sentence
}

/// Encode every paragraph into a `(N, sent_len, word_len)` array.
///
/// Consumes `paragraphs` exactly once. Returns the stacked array together with
/// the diagnostics gathered along the way.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidConfig`] if `config` has a zero dimension.
pub fn vectorize<I, T>(
    paragraphs: I,
    char_map: &CharMap,
    config: &EncoderConfig,
) -> EncodeResult<(Array3<u32>, EncodeReport)>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    config.validate()?;

    let mut report = EncodeReport::default();
    let mut sentences = Vec::new();
    for (index, paragraph) in paragraphs.into_iter().enumerate() {
        let _span = debug_span!("paragraph", index).entered();
        sentences.push(encode_sentence(
            paragraph.as_ref(),
            char_map,
            config,
            &mut report,
        ));
    }
    report.paragraphs = sentences.len();

    let mut corpus = Array3::zeros((sentences.len(), config.sent_len, config.word_len));
    for (mut slot, sentence) in corpus.axis_iter_mut(Axis(0)).zip(&sentences) {
        slot.assign(sentence);
    }

    debug!(
        paragraphs = report.paragraphs,
        unmapped = report.unmapped_total(),
        dropped_words = report.dropped_words,
        truncated_sentences = report.truncated_sentences,
        "Vectorization complete"
    );
    Ok((corpus, report))
}

/// Float view of an encoded corpus for frameworks that expect `f32` input.
#[must_use]
pub fn to_f32(codes: &Array3<u32>) -> Array3<f32> {
    codes.mapv(|c| c as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_map() -> CharMap {
        [(' ', 0u32), ('a', 1), ('b', 2), ('c', 3)].into_iter().collect()
    }

    #[test]
    fn test_spawn_word_vec_pads() {
        assert_eq!(spawn_word_vec(&[1, 2], 5), vec![1, 2, 0, 0, 0]);
    }

    #[test]
    fn test_spawn_word_vec_truncates() {
        assert_eq!(spawn_word_vec(&[1, 2, 3, 4], 2), vec![1, 2]);
    }

    #[test]
    fn test_spawn_word_vec_exact() {
        assert_eq!(spawn_word_vec(&[7, 8, 9], 3), vec![7, 8, 9]);
    }

    #[test]
    fn test_encode_word_trims_and_maps() {
        let mut report = EncodeReport::default();
        assert_eq!(encode_word("\tcab\n", &abc_map(), &mut report), vec![3, 1, 2]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_encode_word_skips_unmapped() {
        let mut report = EncodeReport::default();
        let codes = encode_word("cde", &abc_map(), &mut report);
        assert_eq!(codes, vec![3]);
        assert_eq!(report.unmapped.get(&'d'), Some(&1));
        assert_eq!(report.unmapped.get(&'e'), Some(&1));
    }

    #[test]
    fn test_encode_sentence_scenario() {
        let config = EncoderConfig::new(3, 2).expect("valid dims");
        let mut report = EncodeReport::default();
        let sentence = encode_sentence("ab cde", &abc_map(), &config, &mut report);
        assert_eq!(sentence, ndarray::arr2(&[[1u32, 2, 0], [3, 0, 0]]));
        assert_eq!(report.padded_sentences, 0);
        assert_eq!(report.truncated_sentences, 0);
    }

    #[test]
    fn test_encode_sentence_drops_empty_words() {
        let config = EncoderConfig::new(2, 3).expect("valid dims");
        let mut report = EncodeReport::default();
        // Double space yields an empty token; "xyz" has no mapped characters.
        let sentence = encode_sentence("a  xyz b", &abc_map(), &config, &mut report);
        assert_eq!(sentence, ndarray::arr2(&[[1u32, 0], [2, 0], [0, 0]]));
        assert_eq!(report.dropped_words, 2);
        assert_eq!(report.padded_sentences, 1);
    }

    #[test]
    fn test_encode_sentence_truncates_sentence() {
        let config = EncoderConfig::new(2, 2).expect("valid dims");
        let mut report = EncodeReport::default();
        let sentence = encode_sentence("a b c", &abc_map(), &config, &mut report);
        assert_eq!(sentence, ndarray::arr2(&[[1u32, 0], [2, 0]]));
        assert_eq!(report.truncated_sentences, 1);
    }

    #[test]
    fn test_encode_sentence_reports_unmapped_past_limit() {
        let config = EncoderConfig::new(2, 1).expect("valid dims");
        let mut report = EncodeReport::default();
        encode_sentence("a bz", &abc_map(), &config, &mut report);
        assert_eq!(report.unmapped.get(&'z'), Some(&1));
    }

    #[test]
    fn test_vectorize_empty_paragraph() {
        let config = EncoderConfig::new(4, 3).expect("valid dims");
        let (corpus, report) = vectorize([""], &abc_map(), &config).expect("vectorize");
        assert_eq!(corpus.shape(), &[1, 3, 4]);
        assert!(corpus.iter().all(|&c| c == PAD_CODE));
        assert_eq!(report.dropped_words, 1);
    }

    #[test]
    fn test_vectorize_no_paragraphs() {
        let config = EncoderConfig::new(4, 3).expect("valid dims");
        let empty: [&str; 0] = [];
        let (corpus, report) = vectorize(empty, &abc_map(), &config).expect("vectorize");
        assert_eq!(corpus.shape(), &[0, 3, 4]);
        assert_eq!(report.paragraphs, 0);
    }

    #[test]
    fn test_vectorize_rejects_zero_dims() {
        let config = EncoderConfig {
            word_len: 0,
            sent_len: 3,
        };
        assert!(vectorize(["ab"], &abc_map(), &config).is_err());
    }

    #[test]
    fn test_to_f32() {
        let config = EncoderConfig::new(2, 1).expect("valid dims");
        let (corpus, _) = vectorize(["cb"], &abc_map(), &config).expect("vectorize");
        let floats = to_f32(&corpus);
        assert_eq!(floats[[0, 0, 0]], 3.0);
        assert_eq!(floats[[0, 0, 1]], 2.0);
    }
}
