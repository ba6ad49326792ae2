//! Fingerprint Core - data model for incremental-execution change detection
//!
//! This crate provides:
//! - BLAKE3 hashes and the incremental hasher used for cache keys
//! - Fingerprints and fingerprint collections
//! - Changes and the visitor contract that receives them

pub mod change;
pub mod fingerprint;
pub mod hash;

// Re-export main types for convenience
pub use change::{
    Change, ChangeDetectorVisitor, ChangeType, ChangeVisitor, CollectingChangeVisitor,
    LimitingChangeVisitor,
};
pub use fingerprint::{FileType, Fingerprint, FingerprintMap};
pub use hash::{hash_bytes, Blake3Hash, IncrementalHasher};
