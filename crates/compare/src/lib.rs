//! Fingerprint comparison engine
//!
//! Decides whether a build step property changed since its last execution:
//! - Trivial equal-size fast path
//! - Absolute, normalized and ignored-path identity strategies
//! - Order-independent collection hashing for cache keys
//! - Property snapshots and capped change reports
//!
//! Every comparison is a pure function of its two borrowed collections. All
//! working state is local to the call, so comparisons for different
//! properties can run on different threads without coordination.

mod absolute;
mod ignored;
mod normalized;

pub mod collection_hash;
pub mod config;
pub mod report;
pub mod snapshot;
pub mod strategy;
pub mod trivial;

// Re-exports
pub use collection_hash::{append_to_hasher, hash_fingerprints};
pub use config::{ChangeReportConfig, ConfigError};
pub use report::{has_changes, ChangeReport};
pub use snapshot::PropertySnapshot;
pub use strategy::{CompareStrategy, StrategyParseError};

pub use fingerprint_core::{
    hash_bytes, Blake3Hash, Change, ChangeDetectorVisitor, ChangeType, ChangeVisitor,
    CollectingChangeVisitor, FileType, Fingerprint, FingerprintMap, IncrementalHasher,
    LimitingChangeVisitor,
};
