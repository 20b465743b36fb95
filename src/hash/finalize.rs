// Finalization module
// Expands the 64-bit chaining value into a 256-bit digest

use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

/// Digest size in bytes (256 bits)
pub const DIGEST_SIZE: usize = 32;

/// Final 32-byte output of hashing a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Lowercase hex encoding, no separators
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Compute the digest of a chaining value
///
/// SHA-256 over the big-endian bytes of the chaining value. This only widens
/// the output; it adds no mixing of the input content, so two streams that end
/// in the same chaining value always share a digest.
pub fn finalize(chaining_value: u64) -> Digest {
    let out = Sha256::digest(chaining_value.to_be_bytes());
    Digest(out.into())
}

/// Convert bytes to hexadecimal string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
