//! Seed and keypair derivation from a checksum-valid phrase

use crate::error::{CryptoError, Result};
use ed25519_dalek::SigningKey;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;

/// PBKDF2 iteration count for mnemonic seed derivation
const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix for mnemonic seed derivation
const SALT_PREFIX: &str = "mnemonic";

/// 64-byte seed derived from a phrase
#[derive(Debug, Clone)]
pub struct Seed {
    bytes: [u8; 64],
}

impl Seed {
    /// Get the seed as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// First 32 bytes, used as the signing-key seed
    pub fn signing_key_seed(&self) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&self.bytes[..32]);
        seed
    }

    /// Get the seed as a hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

/// Derives seeds and Ed25519 public keys from candidate phrases
#[derive(Debug, Clone)]
pub struct KeyDeriver {
    passphrase: String,
}

impl KeyDeriver {
    pub fn new(passphrase: &str) -> Self {
        Self {
            passphrase: passphrase.to_string(),
        }
    }

    /// Derive the 64-byte seed for a phrase using
    /// PBKDF2-HMAC-SHA512 over the `"mnemonic" + passphrase` salt.
    ///
    /// This is by far the most expensive step per candidate; it only
    /// runs for phrases that already passed the checksum.
    pub fn seed(&self, phrase: &str) -> Result<Seed> {
        let salt = format!("{}{}", SALT_PREFIX, self.passphrase);
        let mut bytes = [0u8; 64];
        pbkdf2::<Hmac<Sha512>>(
            phrase.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut bytes,
        )
        .map_err(|_| CryptoError::Pbkdf2("PBKDF2 operation failed".to_string()))?;

        Ok(Seed { bytes })
    }

    /// Complete pipeline: phrase -> seed -> Ed25519 public key bytes
    pub fn public_key(&self, phrase: &str) -> Result<[u8; 32]> {
        let seed = self.seed(phrase)?;
        let signing_key = SigningKey::from_bytes(&seed.signing_key_seed());
        Ok(signing_key.verifying_key().to_bytes())
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new("")
    }
}
