//! Path-identity policies for comparing fingerprint collections

use crate::{absolute, collection_hash, ignored, normalized};
use fingerprint_core::{ChangeVisitor, FileType, Fingerprint, FingerprintMap, IncrementalHasher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Absolute path of a file together with its type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathWithType<'a> {
    pub path: &'a str,
    pub file_type: FileType,
}

/// Decides which entries of two collections describe "the same file"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareStrategy {
    /// The absolute path is the identity
    Absolute,
    /// The normalized path plus content is the identity
    #[default]
    Normalized,
    /// Content alone is the identity
    IgnoredPath,
}

impl CompareStrategy {
    pub const ALL: [CompareStrategy; 3] = [
        CompareStrategy::Absolute,
        CompareStrategy::Normalized,
        CompareStrategy::IgnoredPath,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            CompareStrategy::Absolute => "absolute",
            CompareStrategy::Normalized => "normalized",
            CompareStrategy::IgnoredPath => "ignored_path",
        }
    }

    /// Report every change from `previous` to `current` to the visitor
    ///
    /// Returns `true` if the full change set was delivered and `false` if the
    /// visitor stopped the comparison early. Added entries are only reported
    /// when `include_added` is set. The order of changes depends only on the
    /// contents of the two collections.
    pub fn visit_changes_since<V>(
        self,
        visitor: &mut V,
        current: &FingerprintMap,
        previous: &FingerprintMap,
        property_title: &str,
        include_added: bool,
    ) -> bool
    where
        V: ChangeVisitor + ?Sized,
    {
        match self {
            CompareStrategy::Absolute => absolute::visit_changes_since(
                visitor,
                current,
                previous,
                property_title,
                include_added,
            ),
            CompareStrategy::Normalized => normalized::visit_changes_since(
                visitor,
                current,
                previous,
                property_title,
                include_added,
            ),
            CompareStrategy::IgnoredPath => ignored::visit_changes_since(
                visitor,
                current,
                previous,
                property_title,
                include_added,
            ),
        }
    }

    /// Append the order-independent hash of `fingerprints`
    ///
    /// Only what this strategy compares is hashed: collections reported as
    /// unchanged append identical bytes. Ignored-path hashing leaves out the
    /// normalized paths.
    pub fn append_to_hasher<'a, I>(self, hasher: &mut IncrementalHasher, fingerprints: I)
    where
        I: IntoIterator<Item = &'a Fingerprint>,
    {
        match self {
            CompareStrategy::Absolute | CompareStrategy::Normalized => {
                collection_hash::append_to_hasher(hasher, fingerprints)
            }
            CompareStrategy::IgnoredPath => {
                collection_hash::append_contents_to_hasher(hasher, fingerprints)
            }
        }
    }
}

impl fmt::Display for CompareStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Unknown compare strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compare strategy '{0}' (expected absolute, normalized or ignored_path)")]
pub struct StrategyParseError(pub String);

impl FromStr for CompareStrategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.identifier() == s)
            .ok_or_else(|| StrategyParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers() {
        for strategy in CompareStrategy::ALL {
            assert_eq!(strategy.identifier().parse::<CompareStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "relative".parse::<CompareStrategy>().unwrap_err();
        assert!(err.to_string().contains("relative"));
    }

    #[test]
    fn test_default_is_normalized() {
        assert_eq!(CompareStrategy::default(), CompareStrategy::Normalized);
    }

    #[test]
    fn test_ignored_path_hash_skips_names() {
        let hash = |strategy: CompareStrategy, name: &str| {
            let fingerprint = Fingerprint::file(name, fingerprint_core::hash_bytes(b"same"));
            let mut hasher = IncrementalHasher::new();
            strategy.append_to_hasher(&mut hasher, [&fingerprint]);
            hasher.finalize()
        };
        let ignored = CompareStrategy::IgnoredPath;
        let normalized = CompareStrategy::Normalized;
        assert_eq!(hash(ignored, "x"), hash(ignored, "y"));
        assert_ne!(hash(normalized, "x"), hash(normalized, "y"));
    }

    #[test]
    fn test_serde_names_match_identifiers() {
        for strategy in CompareStrategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.identifier()));
        }
    }
}
