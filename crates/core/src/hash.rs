//! BLAKE3 hashing primitives for fingerprints and cache keys

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A BLAKE3 hash (32 bytes)
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Blake3Hash([u8; 32]);

impl Blake3Hash {
    /// Create a new Blake3Hash from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the hash as a byte slice
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() != 64 {
            anyhow::bail!("Invalid hex length: expected 64 characters, got {}", hex.len());
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex, &mut bytes)
            .with_context(|| format!("Invalid hex hash: {}", hex))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Debug for Blake3Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blake3Hash({})", self.to_hex())
    }
}

impl std::fmt::Display for Blake3Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash bytes using BLAKE3
pub fn hash_bytes(data: &[u8]) -> Blake3Hash {
    let hash = blake3::hash(data);
    Blake3Hash::from_bytes(*hash.as_bytes())
}

/// Incremental hasher the caller folds fingerprints and other key material into
///
/// Variable-length values are length-prefixed, so `put_str("ab"); put_str("c")`
/// and `put_str("a"); put_str("bc")` produce different hashes.
pub struct IncrementalHasher {
    inner: blake3::Hasher,
}

impl IncrementalHasher {
    /// Create a new incremental hasher
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update the hash with raw bytes
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Append a single byte
    pub fn put_u8(&mut self, value: u8) {
        self.inner.update(&[value]);
    }

    /// Append another hash
    pub fn put_hash(&mut self, hash: &Blake3Hash) {
        self.inner.update(hash.as_bytes());
    }

    /// Append a length-prefixed UTF-8 string
    pub fn put_str(&mut self, value: &str) {
        self.inner.update(&(value.len() as u64).to_le_bytes());
        self.inner.update(value.as_bytes());
    }

    /// Finalize and return the hash
    pub fn finalize(self) -> Blake3Hash {
        let hash = self.inner.finalize();
        Blake3Hash::from_bytes(*hash.as_bytes())
    }
}

impl Default for IncrementalHasher {
    fn default() -> Self {
        Self::new()
    }
}
