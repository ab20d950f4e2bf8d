//! Error types for the XOR-mask mnemonic search tool

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Wordlist error: {0}")]
    Wordlist(#[from] WordlistError),

    #[error("Cryptographic error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Raw index sequence has {0} entries, need at least 13 for one 12-word window")]
    SequenceTooShort(usize),

    #[error("Raw index {value} at position {position} is outside [0, 2048)")]
    IndexOutOfRange { position: usize, value: u16 },

    #[error("Target address is empty")]
    EmptyTarget,

    #[error("Target address does not start with the address prefix {0:?}")]
    TargetPrefixMismatch(String),

    #[error("Invalid mask range {start}..{end}, must satisfy start < end <= 2048")]
    InvalidMaskRange { start: u16, end: u16 },

    #[error("Progress interval must be greater than 0")]
    ZeroProgressInterval,

    #[error("Thread count must be greater than 0")]
    ZeroThreads,
}

/// Wordlist loading errors, fatal at startup
#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist has {0} words, expected 2048")]
    WrongLength(usize),

    #[error("Failed to read wordlist file: {0}")]
    Io(#[from] std::io::Error),
}

/// Cryptographic operation errors
///
/// These never occur for internally generated, checksum-valid phrases;
/// they surface as fatal rather than per-candidate failures.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("PBKDF2 error: {0}")]
    Pbkdf2(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

/// Search driver errors
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Thread pool construction failed: {0}")]
    ThreadPool(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SolverError>;

/// Convert anyhow::Error to SolverError
impl From<anyhow::Error> for SolverError {
    fn from(err: anyhow::Error) -> Self {
        SolverError::Internal(err.to_string())
    }
}
