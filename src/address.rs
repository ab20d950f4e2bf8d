//! Address formatting from a public key

/// Formats 32-byte public keys as prefixed base58 addresses
#[derive(Debug, Clone)]
pub struct AddressFormatter {
    prefix: String,
}

impl AddressFormatter {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// The configured prefix literal
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefix + base58 (Bitcoin alphabet) encoding of the key bytes
    pub fn format(&self, public_key: &[u8; 32]) -> String {
        format!("{}{}", self.prefix, bs58::encode(public_key).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_key_encoding() {
        // 32 zero bytes encode as 32 '1' characters in the Bitcoin
        // alphabet.
        let formatter = AddressFormatter::new("oct7r");
        let address = formatter.format(&[0u8; 32]);
        assert_eq!(address, format!("oct7r{}", "1".repeat(32)));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let formatter = AddressFormatter::new("oct7r");
        let key = [0x5Au8; 32];
        assert_eq!(formatter.format(&key), formatter.format(&key));
    }

    #[test]
    fn test_prefix_is_prepended() {
        let formatter = AddressFormatter::new("pre");
        let address = formatter.format(&[7u8; 32]);
        assert!(address.starts_with("pre"));
        assert!(address.len() > 3);
    }

    #[test]
    fn test_distinct_keys_give_distinct_addresses() {
        let formatter = AddressFormatter::new("oct7r");
        assert_ne!(formatter.format(&[1u8; 32]), formatter.format(&[2u8; 32]));
    }
}
