//! Candidate window generation from the masked index sequence

use crate::{PHRASE_WORDS, WORDLIST_LEN};

/// Index sequence after applying one XOR mask.
///
/// `masked[k] = (raw[k] ^ mask) % 2048`, recomputed per mask rather
/// than cached; one of these exists only for the duration of a single
/// mask sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedSequence {
    mask: u16,
    indices: Vec<u16>,
}

impl MaskedSequence {
    /// Apply `mask` uniformly to every element of the raw sequence
    pub fn new(raw: &[u16], mask: u16) -> Self {
        let indices = raw
            .iter()
            .map(|&idx| (idx ^ mask) % WORDLIST_LEN as u16)
            .collect();
        Self { mask, indices }
    }

    /// The mask this sequence was derived with
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Masked indices, all in `[0, 2048)`
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of 12-word windows.
    ///
    /// Offsets run over `0..len - 12` exclusive, so for a sequence of
    /// length L there are L - 12 windows, the last starting at L - 13.
    pub fn window_count(&self) -> usize {
        self.indices.len().saturating_sub(PHRASE_WORDS)
    }

    /// The 12-element window starting at `offset`
    pub fn window(&self, offset: usize) -> &[u16] {
        &self.indices[offset..offset + PHRASE_WORDS]
    }

    /// All windows in ascending offset order, paired with their offset
    pub fn windows(&self) -> impl Iterator<Item = (usize, &[u16])> {
        (0..self.window_count()).map(move |offset| (offset, self.window(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mask_is_identity() {
        let raw = vec![0u16, 1, 2, 3, 2047, 1024, 512, 7, 8, 9, 10, 11, 12];
        let seq = MaskedSequence::new(&raw, 0);
        assert_eq!(seq.indices(), raw.as_slice());
    }

    #[test]
    fn test_masking_is_deterministic() {
        let raw: Vec<u16> = (0..20).map(|i| (i * 131) % 2048).collect();
        let a = MaskedSequence::new(&raw, 0x2A5);
        let b = MaskedSequence::new(&raw, 0x2A5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_masked_indices_stay_in_range() {
        // XOR of two 11-bit values never leaves 11 bits, but the modulo
        // reduction is part of the contract; sweep the full space.
        for raw in 0..2048u16 {
            for mask in 0..2048u16 {
                let masked = (raw ^ mask) % 2048;
                assert!(masked < 2048);
            }
        }
    }

    #[test]
    fn test_window_completeness() {
        // A 237-element sequence yields exactly 225 windows covering
        // offsets 0..=224, none skipped, none repeated.
        let raw: Vec<u16> = (0..237).map(|i| i % 2048).collect();
        let seq = MaskedSequence::new(&raw, 0);

        assert_eq!(seq.window_count(), 225);

        let offsets: Vec<usize> = seq.windows().map(|(offset, _)| offset).collect();
        assert_eq!(offsets, (0..225).collect::<Vec<_>>());

        for (_, window) in seq.windows() {
            assert_eq!(window.len(), PHRASE_WORDS);
        }
    }

    #[test]
    fn test_last_window_start() {
        let raw: Vec<u16> = vec![7; 237];
        let seq = MaskedSequence::new(&raw, 0);
        let last = seq.windows().last().unwrap().0;
        assert_eq!(last, 224);
    }

    #[test]
    fn test_window_contents_follow_mask() {
        let raw = vec![204u16, 768, 1071, 45, 32, 1558, 1, 546, 1111, 0, 512, 1781, 256];
        let mask = 0x155;
        let seq = MaskedSequence::new(&raw, mask);

        let (offset, window) = seq.windows().next().unwrap();
        assert_eq!(offset, 0);
        for (k, &idx) in window.iter().enumerate() {
            assert_eq!(idx, (raw[k] ^ mask) % 2048);
        }
    }
}
