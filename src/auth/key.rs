//! Token key generation.

use rand::{RngCore, rngs::OsRng};

/// Number of random bytes behind a token key.
const TOKEN_KEY_BYTES: usize = 20;

/// Generate an opaque token key: 20 random bytes, hex-encoded.
#[must_use]
pub(crate) fn generate_token_key() -> String {
    let mut bytes = [0_u8; TOKEN_KEY_BYTES];

    OsRng.fill_bytes(&mut bytes);

    encode_hex(&bytes)
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_forty_lowercase_hex_chars() {
        let key = generate_token_key();

        assert_eq!(key.len(), 40);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn keys_are_unique() {
        assert_ne!(generate_token_key(), generate_token_key());
    }

    #[test]
    fn encode_hex_matches_known_value() {
        assert_eq!(encode_hex(&[0x00, 0xab, 0xff]), "00abff");
    }
}
