//! Character vocabulary for numeric encoding.
//!
//! Maps characters to integer codes. Built vocabularies pin the space
//! character to `0` and number every other character from `1` upward in
//! order of first occurrence, so rebuilding over the same text always yields
//! the same map.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::{EncodeError, EncodeResult, PAD_CODE};

/// The only character whose code is fixed in a built vocabulary.
const SPACE: char = ' ';

/// Character-to-code vocabulary.
///
/// Built maps satisfy: `' '` → 0 when present, all other characters map to
/// distinct positive codes. Maps assembled from caller-supplied pairs are
/// taken as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharMap {
    codes: HashMap<char, u32>,
}

impl CharMap {
    /// Build a vocabulary from every character of every paragraph.
    ///
    /// Consumes `paragraphs` once. Codes are assigned in first-occurrence
    /// order: paragraph order, then character order within a paragraph.
    ///
    /// # Example
    ///
    /// ```
    /// use charnum::CharMap;
    ///
    /// let map = CharMap::build(["ba b", "c"]);
    /// assert_eq!(map.code('b'), Some(1));
    /// assert_eq!(map.code('a'), Some(2));
    /// assert_eq!(map.code(' '), Some(0));
    /// assert_eq!(map.code('c'), Some(3));
    /// ```
    pub fn build<I, T>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut codes = HashMap::new();
        let mut next_code = 1u32;
        let mut n_paragraphs = 0usize;

        for paragraph in paragraphs {
            n_paragraphs += 1;
            for c in paragraph.as_ref().chars() {
                if let Entry::Vacant(slot) = codes.entry(c) {
                    if c == SPACE {
                        slot.insert(PAD_CODE);
                    } else {
                        slot.insert(next_code);
                        next_code += 1;
                    }
                }
            }
        }

        debug!(
            paragraphs = n_paragraphs,
            vocab_size = codes.len(),
            "Character map built"
        );
        Self { codes }
    }

    /// Assemble a map from explicit `(char, code)` pairs, rejecting repeats.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidCharMap`] if a character appears twice.
    pub fn try_from_pairs<I>(pairs: I) -> EncodeResult<Self>
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let mut codes = HashMap::new();
        for (c, code) in pairs {
            if codes.insert(c, code).is_some() {
                return Err(EncodeError::InvalidCharMap(format!(
                    "character {c:?} is mapped more than once"
                )));
            }
        }
        Ok(Self { codes })
    }

    /// Number of characters in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no characters are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `c` has a code.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.codes.contains_key(&c)
    }

    /// Get the code for a character, or `None` if it is not mapped.
    #[must_use]
    pub fn code(&self, c: char) -> Option<u32> {
        self.codes.get(&c).copied()
    }

    /// Get the character for a code, or `None` if no character has it.
    ///
    /// When a caller-supplied map shares a code between characters, the
    /// smallest character wins.
    #[must_use]
    pub fn char_for(&self, code: u32) -> Option<char> {
        self.codes
            .iter()
            .filter_map(|(&c, &v)| (v == code).then_some(c))
            .min()
    }

    /// Entries ordered by code, ties broken by character.
    #[must_use]
    pub fn iter(&self) -> std::vec::IntoIter<(char, u32)> {
        let mut entries: Vec<(char, u32)> = self.codes.iter().map(|(&c, &v)| (c, v)).collect();
        entries.sort_by_key(|&(c, v)| (v, c));
        entries.into_iter()
    }

    /// Largest code in use, or `None` for an empty map.
    ///
    /// A model's embedding table needs `max_code + 1` rows.
    #[must_use]
    pub fn max_code(&self) -> Option<u32> {
        self.codes.values().copied().max()
    }

    /// Decode one word row back to text, dropping padding and unknown codes.
    ///
    /// Intended for inspection; the space character cannot occur inside a
    /// word, so every `0` is treated as padding.
    #[must_use]
    pub fn decode_word(&self, codes: &[u32]) -> String {
        let reverse: HashMap<u32, char> = self
            .iter()
            .rev()
            .map(|(c, v)| (v, c))
            .collect();
        codes
            .iter()
            .filter(|&&code| code != PAD_CODE)
            .filter_map(|code| reverse.get(code).copied())
            .collect()
    }

    /// Codes that more than one character shares. Always empty for built maps.
    #[must_use]
    pub fn shared_codes(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut shared: Vec<u32> = self
            .codes
            .values()
            .filter(|&&v| !seen.insert(v))
            .copied()
            .collect();
        shared.sort_unstable();
        shared.dedup();
        shared
    }
}

impl FromIterator<(char, u32)> for CharMap {
    /// Later pairs override earlier ones for the same character.
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<char, u32>> for CharMap {
    fn from(codes: HashMap<char, u32>) -> Self {
        Self { codes }
    }
}
