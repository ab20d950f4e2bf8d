//! XOR-mask mnemonic window search
//!
//! Brute-forces the space of 12-word mnemonic phrases reachable by
//! XOR-masking a fixed sequence of wordlist indices and sliding a
//! 12-word window over the result. Checksum-valid candidates are run
//! through seed derivation and Ed25519 key generation, and the
//! base58-encoded public key is compared against a single target
//! address.

pub mod address;
pub mod config;
pub mod error;
pub mod generator;
pub mod keys;
pub mod mnemonic;
pub mod monitor;
pub mod search;
pub mod wordlist;

pub use address::AddressFormatter;
pub use config::SearchConfig;
pub use error::*;
pub use generator::MaskedSequence;
pub use keys::{KeyDeriver, Seed};
pub use mnemonic::PhraseValidator;
pub use monitor::{MonitorConfig, ScanMonitor};
pub use search::{MatchRecord, SearchDriver, SearchOutcome};
pub use wordlist::Wordlist;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::address::AddressFormatter;
    pub use crate::config::SearchConfig;
    pub use crate::error::*;
    pub use crate::generator::MaskedSequence;
    pub use crate::keys::{KeyDeriver, Seed};
    pub use crate::mnemonic::PhraseValidator;
    pub use crate::monitor::{MonitorConfig, ScanMonitor};
    pub use crate::search::{MatchRecord, SearchDriver, SearchOutcome};
    pub use crate::wordlist::Wordlist;
}

#[cfg(test)]
mod tests;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of words in the mnemonic wordlist
pub const WORDLIST_LEN: usize = 2048;

/// Words per candidate phrase
pub const PHRASE_WORDS: usize = 12;

/// Number of XOR masks in the full search space
pub const MASK_SPACE: u16 = 2048;
