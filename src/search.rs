//! Search driver orchestrating the mask/offset sweep
//!
//! The driver walks the Cartesian product of (mask, offset) pairs in
//! ascending order, short-circuiting both loops on the first match.
//! Each pair is independent, so the parallel driver partitions the
//! mask range across rayon workers with a shared atomic found flag as
//! the only coordination.

use crate::address::AddressFormatter;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError, SolverError};
use crate::generator::MaskedSequence;
use crate::keys::KeyDeriver;
use crate::mnemonic::PhraseValidator;
use crate::wordlist::Wordlist;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

/// The winning (mask, offset) pair and everything derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// XOR mask applied to the raw sequence
    pub mask: u16,
    /// Window offset into the masked sequence
    pub offset: usize,
    /// The recovered mnemonic phrase
    pub phrase: String,
    /// Ed25519 public key derived from the phrase
    pub public_key: [u8; 32],
    /// The derived address that matched the target
    pub address: String,
}

/// Terminal state of a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A (mask, offset) pair produced the target address
    Found(MatchRecord),
    /// The whole configured space was examined without a match
    Exhausted {
        /// Number of windows checksum-tested
        windows_examined: u64,
    },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Result of sweeping all windows under one mask
struct MaskScan {
    windows: u64,
    hit: Option<MatchRecord>,
}

/// Runs the three-stage pipeline over the configured search space
pub struct SearchDriver {
    config: SearchConfig,
    wordlist: Wordlist,
    deriver: KeyDeriver,
    formatter: AddressFormatter,
}

impl SearchDriver {
    /// Build a driver from a validated configuration and wordlist
    pub fn new(config: SearchConfig, wordlist: Wordlist) -> Result<Self> {
        config.validate()?;
        let deriver = KeyDeriver::new(&config.passphrase);
        let formatter = AddressFormatter::new(&config.address_prefix);
        Ok(Self {
            config,
            wordlist,
            deriver,
            formatter,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sweep every window offset under one mask, ascending.
    ///
    /// Checksum rejection just advances the offset; a key-derivation
    /// failure on a checksum-valid phrase is fatal and propagates.
    fn scan_mask(&self, mask: u16) -> Result<MaskScan> {
        let validator = PhraseValidator::new(&self.wordlist);
        let sequence = MaskedSequence::new(&self.config.raw_indices, mask);

        let mut windows = 0u64;
        for (offset, window) in sequence.windows() {
            windows += 1;

            let Some(phrase) = validator.validate(window) else {
                continue;
            };

            let public_key = self.deriver.public_key(&phrase)?;
            let address = self.formatter.format(&public_key);
            if address == self.config.target_address {
                return Ok(MaskScan {
                    windows,
                    hit: Some(MatchRecord {
                        mask,
                        offset,
                        phrase,
                        public_key,
                        address,
                    }),
                });
            }

            debug!(mask, offset, %address, "checksum-valid phrase, address mismatch");
        }

        Ok(MaskScan {
            windows,
            hit: None,
        })
    }

    /// Single-threaded exhaustive sweep in strict ascending
    /// (mask, offset) order.
    pub fn run(&self) -> Result<SearchOutcome> {
        self.run_with_observer(|_| {})
    }

    /// Serial sweep invoking `observer` with the number of masks
    /// completed, once every `progress_interval` masks. The observer
    /// has no influence on iteration order or outcome.
    pub fn run_with_observer<F>(&self, mut observer: F) -> Result<SearchOutcome>
    where
        F: FnMut(u64),
    {
        let interval = u64::from(self.config.progress_interval);
        let mut windows_examined = 0u64;
        let mut masks_done = 0u64;

        for mask in self.config.masks() {
            let scan = self.scan_mask(mask)?;
            windows_examined += scan.windows;

            if let Some(record) = scan.hit {
                info!(mask = record.mask, offset = record.offset, "match found");
                return Ok(SearchOutcome::Found(record));
            }

            masks_done += 1;
            if masks_done % interval == 0 {
                observer(masks_done);
            }
        }

        Ok(SearchOutcome::Exhausted { windows_examined })
    }

    /// Mask-partitioned parallel sweep.
    ///
    /// Workers check the shared found flag between masks and stop as
    /// soon as any worker records a hit or a fatal error. At most one
    /// (mask, offset) pair can match, so the winner is reported exactly
    /// once regardless of which worker finds it.
    pub fn run_parallel<F>(&self, observer: F) -> Result<SearchOutcome>
    where
        F: Fn(u64) + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()
            .map_err(|e| SearchError::ThreadPool(e.to_string()))?;

        let interval = u64::from(self.config.progress_interval);
        let stop = AtomicBool::new(false);
        let windows_examined = AtomicU64::new(0);
        let masks_done = AtomicU64::new(0);
        let hit: Mutex<Option<MatchRecord>> = Mutex::new(None);
        let failure: Mutex<Option<SolverError>> = Mutex::new(None);

        pool.install(|| {
            self.config.masks().into_par_iter().for_each(|mask| {
                if stop.load(Ordering::SeqCst) {
                    return;
                }

                match self.scan_mask(mask) {
                    Ok(scan) => {
                        windows_examined.fetch_add(scan.windows, Ordering::SeqCst);
                        if let Some(record) = scan.hit {
                            stop.store(true, Ordering::SeqCst);
                            let mut slot = hit.lock().unwrap();
                            if slot.is_none() {
                                *slot = Some(record);
                            }
                            return;
                        }

                        let done = masks_done.fetch_add(1, Ordering::SeqCst) + 1;
                        if done % interval == 0 {
                            observer(done);
                        }
                    }
                    Err(e) => {
                        stop.store(true, Ordering::SeqCst);
                        let mut slot = failure.lock().unwrap();
                        if slot.is_none() {
                            *slot = Some(e);
                        }
                    }
                }
            });
        });

        if let Some(err) = failure.into_inner().unwrap() {
            return Err(err);
        }

        match hit.into_inner().unwrap() {
            Some(record) => {
                info!(mask = record.mask, offset = record.offset, "match found");
                Ok(SearchOutcome::Found(record))
            }
            None => Ok(SearchOutcome::Exhausted {
                windows_examined: windows_examined.into_inner(),
            }),
        }
    }

    /// Re-run the full pipeline for a reported match
    pub fn verify(&self, record: &MatchRecord) -> Result<bool> {
        let sequence = MaskedSequence::new(&self.config.raw_indices, record.mask);
        if record.offset >= sequence.window_count() {
            return Ok(false);
        }

        let validator = PhraseValidator::new(&self.wordlist);
        let Some(phrase) = validator.validate(sequence.window(record.offset)) else {
            return Ok(false);
        };
        if phrase != record.phrase {
            return Ok(false);
        }

        let public_key = self.deriver.public_key(&phrase)?;
        Ok(self.formatter.format(&public_key) == self.config.target_address)
    }
}
