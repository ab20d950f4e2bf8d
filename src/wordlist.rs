//! The 2048-word lookup table candidate phrases are built from

use crate::error::{Result, WordlistError};
use crate::WORDLIST_LEN;
use bip39::Language;
use std::collections::HashMap;

/// Fixed ordered list of 2048 mnemonic words, read-only after load
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    word_to_index: HashMap<String, u16>,
}

impl Wordlist {
    /// The standard English mnemonic wordlist bundled with the `bip39`
    /// crate.
    pub fn english() -> Self {
        let words = Language::English
            .word_list()
            .iter()
            .map(|w| (*w).to_string())
            .collect();
        // Bundled list is always 2048 words
        Self::from_words(words).expect("bundled wordlist has 2048 words")
    }

    /// Load a wordlist from a file with one word per line
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(WordlistError::Io)?;
        let words = content.lines().map(|l| l.trim().to_string()).collect();
        Self::from_words(words)
    }

    /// Build from an ordered word vector, rejecting anything that is
    /// not exactly 2048 entries.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.len() != WORDLIST_LEN {
            return Err(WordlistError::WrongLength(words.len()).into());
        }

        let word_to_index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();

        Ok(Self {
            words,
            word_to_index,
        })
    }

    /// Word at the given position.
    ///
    /// Callers guarantee `index < 2048` by masking indices modulo the
    /// wordlist length before lookup.
    pub fn word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    /// Position of a word, if present
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.word_to_index.get(word).copied()
    }

    /// Number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty (never true for a constructed list)
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_wordlist() {
        let wordlist = Wordlist::english();
        assert_eq!(wordlist.len(), 2048);
        assert_eq!(wordlist.word(0), "abandon");
        assert_eq!(wordlist.word(3), "about");
        assert_eq!(wordlist.word(2047), "zoo");
    }

    #[test]
    fn test_index_of() {
        let wordlist = Wordlist::english();
        assert_eq!(wordlist.index_of("abandon"), Some(0));
        assert_eq!(wordlist.index_of("about"), Some(3));
        assert_eq!(wordlist.index_of("notaword"), None);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let words: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();
        assert!(Wordlist::from_words(words).is_err());
    }
}
