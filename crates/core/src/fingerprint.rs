//! Per-file fingerprints and fingerprint collections

use crate::hash::{Blake3Hash, IncrementalHasher};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Type of file system location a fingerprint describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// Regular file
    RegularFile,
    /// Directory
    Directory,
    /// Nothing exists at the location
    Missing,
}

impl FileType {
    /// Stable tag fed into hashes
    pub const fn tag(self) -> u8 {
        match self {
            FileType::RegularFile => 0,
            FileType::Directory => 1,
            FileType::Missing => 2,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileType::RegularFile => "regular file",
            FileType::Directory => "directory",
            FileType::Missing => "missing",
        };
        f.write_str(name)
    }
}

/// One file's identity for comparison purposes
///
/// Equality covers all three fields. The ordering sorts by content hash, then
/// normalized path, then file type. It exists so collections can be hashed
/// independently of iteration order and says nothing about the files
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Position-independent path (e.g. relative to the property root)
    pub normalized_path: String,
    /// Kind of location
    pub file_type: FileType,
    /// Hash of the normalized content
    pub content_hash: Blake3Hash,
}

impl Fingerprint {
    /// Create a new fingerprint
    pub fn new(
        normalized_path: impl Into<String>,
        file_type: FileType,
        content_hash: Blake3Hash,
    ) -> Self {
        Self {
            normalized_path: normalized_path.into(),
            file_type,
            content_hash,
        }
    }

    /// Create a regular file fingerprint
    pub fn file(normalized_path: impl Into<String>, content_hash: Blake3Hash) -> Self {
        Self::new(normalized_path, FileType::RegularFile, content_hash)
    }

    /// Create a directory fingerprint
    pub fn directory(normalized_path: impl Into<String>, content_hash: Blake3Hash) -> Self {
        Self::new(normalized_path, FileType::Directory, content_hash)
    }

    /// Create a fingerprint for a location that does not exist
    pub fn missing(normalized_path: impl Into<String>, content_hash: Blake3Hash) -> Self {
        Self::new(normalized_path, FileType::Missing, content_hash)
    }

    /// Append content hash, file type and normalized path, in that order
    pub fn append_to_hasher(&self, hasher: &mut IncrementalHasher) {
        hasher.put_hash(&self.content_hash);
        hasher.put_u8(self.file_type.tag());
        hasher.put_str(&self.normalized_path);
    }
}

impl Ord for Fingerprint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.content_hash
            .cmp(&other.content_hash)
            .then_with(|| self.normalized_path.cmp(&other.normalized_path))
            .then_with(|| self.file_type.cmp(&other.file_type))
    }
}

impl PartialOrd for Fingerprint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Absolute path -> fingerprint, in insertion order
pub type FingerprintMap = IndexMap<String, Fingerprint, ahash::RandomState>;
