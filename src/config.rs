//! Configuration types and parsing for the search

use crate::error::{ConfigError, Result};
use crate::{MASK_SPACE, PHRASE_WORDS, WORDLIST_LEN};
use serde::{Deserialize, Serialize};

/// The scrambled wordlist-index sequence the search runs over, as
/// extracted from the encrypted seed container.
pub const RAW_INDICES: &[u16] = &[
    204, 768, 1071, 45, 32, 1558, 1, 546, 1111, 0, 512, 1781,
    256, 1, 0, 771, 298, 1487, 1798, 1128, 1022, 512, 632, 41,
    528, 479, 512, 768, 1, 1, 1136, 0, 910, 1581, 32, 1,
    649, 768, 1528, 1571, 1536, 109, 150, 0, 1144, 1942, 32, 803,
    33, 256, 655, 1536, 1428, 0, 911, 31, 258, 83, 1280, 680,
    768, 371, 0, 1379, 29, 735, 159, 256, 1, 32, 0, 644,
    290, 1024, 1226, 1792, 1511, 512, 1604, 270, 1996, 1025, 1652, 933,
    1290, 1792, 1031, 495, 1792, 0, 32, 1, 578, 0, 1501, 984,
    1024, 1072, 73, 1492, 0, 512, 935, 0, 876, 1280, 1316, 0,
    650, 1024, 1628, 272, 256, 51, 0, 937, 244, 1, 707, 761,
    0, 1024, 68, 32, 1150, 1978, 0, 1536, 1317, 1950, 167, 1024,
    108, 1164, 0, 1016, 512, 1897, 125, 1560, 0, 1024, 532, 1308,
    708, 768, 1284, 614, 32, 1, 0, 421, 1024, 1250, 1796, 32,
    1, 1, 3, 0, 1041, 456, 32, 1169, 327, 1280, 386, 512,
    1980, 1536, 0, 775, 69, 448, 0, 1611, 390, 408, 32, 0,
    1474, 231, 1590, 0, 630, 135, 1280, 0, 1294, 768, 214, 1024,
    15, 793, 1280, 1, 32, 722, 94, 1555, 1821, 446, 1013, 265,
    1525, 0, 0, 651, 153, 1571, 1452, 93, 1879, 321, 768, 1060,
    0, 1863, 32, 0, 1, 208, 77, 1686, 0, 1511, 1280, 1,
    461, 512, 423, 1792, 389, 1796, 1451, 183, 1024, 861, 852, 1792,
    32, 32, 1908, 179, 1024, 79, 714, 32, 0, 745, 1278, 1873,
    1686, 90, 1280, 1899, 1536, 72, 644, 0, 1995, 0, 168, 852,
];

/// Target address for the embedded search
pub const TARGET_ADDRESS: &str = "oct7rAAiRhdRvKChDQrTJEAUqM9M9sfTBGQsacqME18xe1V";

/// Textual prefix prepended to the base58 public key
pub const ADDRESS_PREFIX: &str = "oct7r";

/// Main configuration structure for a search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Raw, possibly scrambled wordlist-index sequence
    pub raw_indices: Vec<u16>,

    /// Target address to match
    pub target_address: String,

    /// Prefix prepended to the base58-encoded public key
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,

    /// First XOR mask to try (inclusive)
    #[serde(default)]
    pub mask_start: u16,

    /// One past the last XOR mask to try
    #[serde(default = "default_mask_end")]
    pub mask_end: u16,

    /// Optional passphrase for seed derivation
    #[serde(default)]
    pub passphrase: String,

    /// Number of worker threads for the parallel driver
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,

    /// Report progress every this many masks
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u16,
}

fn default_address_prefix() -> String {
    ADDRESS_PREFIX.to_string()
}

fn default_mask_end() -> u16 {
    MASK_SPACE
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_progress_interval() -> u16 {
    200
}

impl SearchConfig {
    /// The built-in configuration: the fixed index sequence and target
    /// from the bounty puzzle, full mask space.
    pub fn embedded() -> Self {
        Self {
            raw_indices: RAW_INDICES.to_vec(),
            target_address: TARGET_ADDRESS.to_string(),
            address_prefix: default_address_prefix(),
            mask_start: 0,
            mask_end: default_mask_end(),
            passphrase: String::new(),
            num_threads: default_num_threads(),
            progress_interval: default_progress_interval(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.raw_indices.len() <= PHRASE_WORDS {
            return Err(ConfigError::SequenceTooShort(self.raw_indices.len()).into());
        }

        for (position, &value) in self.raw_indices.iter().enumerate() {
            if value as usize >= WORDLIST_LEN {
                return Err(ConfigError::IndexOutOfRange { position, value }.into());
            }
        }

        if self.target_address.is_empty() {
            return Err(ConfigError::EmptyTarget.into());
        }

        if !self.target_address.starts_with(&self.address_prefix) {
            return Err(ConfigError::TargetPrefixMismatch(self.address_prefix.clone()).into());
        }

        if self.mask_start >= self.mask_end || self.mask_end > MASK_SPACE {
            return Err(ConfigError::InvalidMaskRange {
                start: self.mask_start,
                end: self.mask_end,
            }
            .into());
        }

        if self.progress_interval == 0 {
            return Err(ConfigError::ZeroProgressInterval.into());
        }

        if self.num_threads == 0 {
            return Err(ConfigError::ZeroThreads.into());
        }

        Ok(())
    }

    /// Masks covered by this configuration, ascending
    pub fn masks(&self) -> std::ops::Range<u16> {
        self.mask_start..self.mask_end
    }

    /// Number of masks in the configured range
    pub fn mask_count(&self) -> u64 {
        u64::from(self.mask_end - self.mask_start)
    }

    /// Number of window offsets per mask
    pub fn window_count(&self) -> u64 {
        (self.raw_indices.len() - PHRASE_WORDS) as u64
    }

    /// Total size of the search space in (mask, offset) pairs
    pub fn search_space(&self) -> u64 {
        self.mask_count() * self.window_count()
    }
}
