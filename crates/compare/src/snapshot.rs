//! Fingerprinted state of one build step property

use crate::strategy::CompareStrategy;
use fingerprint_core::{Blake3Hash, ChangeVisitor, Fingerprint, FingerprintMap, IncrementalHasher};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A property's fingerprints together with the policy used to compare them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    /// Title used in change messages (e.g. "Input property 'sources'")
    pub title: String,
    /// Path-identity policy
    pub strategy: CompareStrategy,
    /// Absolute path -> fingerprint
    pub fingerprints: FingerprintMap,
}

impl PropertySnapshot {
    pub fn new(
        title: impl Into<String>,
        strategy: CompareStrategy,
        fingerprints: FingerprintMap,
    ) -> Self {
        Self {
            title: title.into(),
            strategy,
            fingerprints,
        }
    }

    /// Snapshot with no fingerprints
    pub fn empty(title: impl Into<String>, strategy: CompareStrategy) -> Self {
        Self::new(title, strategy, FingerprintMap::default())
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    pub fn fingerprints(&self) -> impl Iterator<Item = &Fingerprint> {
        self.fingerprints.values()
    }

    /// Cache key for this property's state
    ///
    /// Covers the strategy and what it compares: the fingerprint multiset,
    /// or only the contents for ignored-path comparison. Absolute paths and
    /// entry order never contribute.
    pub fn hash(&self) -> Blake3Hash {
        let mut hasher = IncrementalHasher::new();
        self.append_to_hasher(&mut hasher);
        hasher.finalize()
    }

    /// Fold this property into a caller-owned task-level hasher
    pub fn append_to_hasher(&self, hasher: &mut IncrementalHasher) {
        hasher.put_str(self.strategy.identifier());
        self.strategy.append_to_hasher(hasher, self.fingerprints.values());
    }

    /// Report changes from `previous` to this snapshot using this snapshot's strategy
    pub fn visit_changes_since<V>(
        &self,
        previous: &PropertySnapshot,
        visitor: &mut V,
        include_added: bool,
    ) -> bool
    where
        V: ChangeVisitor + ?Sized,
    {
        if previous.strategy != self.strategy {
            debug!(
                property = %self.title,
                previous = %previous.strategy,
                current = %self.strategy,
                "compare strategy changed since previous execution"
            );
        }
        self.strategy.visit_changes_since(
            visitor,
            &self.fingerprints,
            &previous.fingerprints,
            &self.title,
            include_added,
        )
    }
}
