//! Mnemonic checksum validation and phrase construction
//!
//! A 12-word window packs into 132 bits: 128 bits of entropy followed
//! by a 4-bit checksum that must equal the top four bits of the
//! SHA-256 hash of the 16 entropy bytes. The overwhelming majority of
//! windows fail this check; rejection is the expected outcome and is
//! modeled as a boolean, never an error.

use crate::wordlist::Wordlist;
use crate::PHRASE_WORDS;
use sha2::{Digest, Sha256};

/// Entropy bytes implied by a 12-word phrase
pub const ENTROPY_BYTES: usize = 16;

/// Checksum bits for a 12-word phrase
pub const CHECKSUM_BITS: u32 = 4;

/// Pack a 12-index window into its 16 entropy bytes and 4-bit checksum.
///
/// Each index is an 11-bit group; the 132-bit stream is split after
/// bit 128. Indices must already be in `[0, 2048)`.
pub fn split_entropy(indices: &[u16]) -> ([u8; ENTROPY_BYTES], u8) {
    debug_assert_eq!(indices.len(), PHRASE_WORDS);

    let mut stream = [0u8; ENTROPY_BYTES + 1];
    let mut bit = 0usize;
    for &idx in indices {
        for b in (0..11).rev() {
            if (idx >> b) & 1 == 1 {
                stream[bit / 8] |= 1 << (7 - bit % 8);
            }
            bit += 1;
        }
    }

    let mut entropy = [0u8; ENTROPY_BYTES];
    entropy.copy_from_slice(&stream[..ENTROPY_BYTES]);
    let checksum = stream[ENTROPY_BYTES] >> 4;
    (entropy, checksum)
}

/// Whether a 12-index window passes the mnemonic checksum
pub fn checksum_valid(indices: &[u16]) -> bool {
    let (entropy, checksum) = split_entropy(indices);
    let hash = Sha256::digest(entropy);
    hash[0] >> (8 - CHECKSUM_BITS) == checksum
}

/// Validator binding the checksum rule to a wordlist
#[derive(Debug)]
pub struct PhraseValidator<'a> {
    wordlist: &'a Wordlist,
}

impl<'a> PhraseValidator<'a> {
    pub fn new(wordlist: &'a Wordlist) -> Self {
        Self { wordlist }
    }

    /// Build the space-joined phrase for a window
    pub fn phrase(&self, indices: &[u16]) -> String {
        let words: Vec<&str> = indices.iter().map(|&idx| self.wordlist.word(idx)).collect();
        words.join(" ")
    }

    /// Validate a window, returning its phrase only when the checksum
    /// passes.
    pub fn validate(&self, indices: &[u16]) -> Option<String> {
        if checksum_valid(indices) {
            Some(self.phrase(indices))
        } else {
            None
        }
    }

    /// Map a known-good phrase back to its indices, for tests and
    /// cross-checks.
    pub fn indices_of(&self, phrase: &str) -> Option<Vec<u16>> {
        phrase
            .split_whitespace()
            .map(|word| self.wordlist.index_of(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bip39::{Language, Mnemonic};

    fn wordlist() -> Wordlist {
        Wordlist::english()
    }

    fn indices_for(phrase: &str, wordlist: &Wordlist) -> Vec<u16> {
        PhraseValidator::new(wordlist).indices_of(phrase).unwrap()
    }

    #[test]
    fn test_all_zero_entropy_vector() {
        // "abandon" x11 + "about": entropy is sixteen zero bytes and
        // SHA-256(0^16) starts 0x37, so the checksum nibble is 3, which
        // is exactly the index of "about".
        let indices = [0u16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3];
        let (entropy, checksum) = split_entropy(&indices);
        assert_eq!(entropy, [0u8; ENTROPY_BYTES]);
        assert_eq!(checksum, 3);
        assert!(checksum_valid(&indices));
    }

    #[test]
    fn test_wrong_checksum_rejected() {
        // Same entropy, checksum nibble off by one.
        let indices = [0u16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2];
        assert!(!checksum_valid(&indices));
    }

    #[test]
    fn test_known_valid_phrases_accepted() {
        let wordlist = wordlist();
        let validator = PhraseValidator::new(&wordlist);

        let phrases = [
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        ];

        for phrase in phrases {
            let indices = indices_for(phrase, &wordlist);
            let validated = validator.validate(&indices);
            assert_eq!(validated.as_deref(), Some(phrase));
        }
    }

    #[test]
    fn test_phrase_construction() {
        let wordlist = wordlist();
        let validator = PhraseValidator::new(&wordlist);
        let indices = [0u16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3];
        assert_eq!(
            validator.phrase(&indices),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }

    #[test]
    fn test_agrees_with_bip39_crate_on_single_index_flips() {
        // Nudging any single index must leave the validator in
        // agreement with the reference parser, accepted or not.
        let wordlist = wordlist();
        let validator = PhraseValidator::new(&wordlist);
        let base = [0u16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3];

        for position in 0..PHRASE_WORDS {
            let mut flipped = base;
            flipped[position] = (flipped[position] + 1) % 2048;

            let phrase = validator.phrase(&flipped);
            let reference_ok = Mnemonic::parse_in(Language::English, &phrase).is_ok();
            assert_eq!(
                checksum_valid(&flipped),
                reference_ok,
                "disagreement at position {position}: {phrase}"
            );
        }
    }

    #[test]
    fn test_validation_is_deterministic() {
        let indices = [100u16, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200];
        let first = checksum_valid(&indices);
        for _ in 0..10 {
            assert_eq!(checksum_valid(&indices), first);
        }
    }
}
