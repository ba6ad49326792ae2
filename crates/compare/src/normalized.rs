//! Comparison by normalized path and content
//!
//! Files are the same if their fingerprints are equal, wherever the property
//! root lives. Leftover previous entries become modified when some unmatched
//! current entry shares their normalized path and removed otherwise; the
//! remaining current entries are added.

use crate::strategy::PathWithType;
use crate::trivial;
use fingerprint_core::{Change, ChangeVisitor, Fingerprint, FingerprintMap};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use tracing::trace;

/// Previous absolute paths grouped by fingerprint, each bucket sorted by path descending
type MissingPrevious<'a> = BTreeMap<&'a Fingerprint, SmallVec<[&'a str; 1]>>;

/// Unmatched current entries by normalized path, buckets sorted by path descending
type AddedByNormalizedPath<'a> = BTreeMap<&'a str, SmallVec<[PathWithType<'a>; 1]>>;

pub(crate) fn visit_changes_since<V>(
    visitor: &mut V,
    current: &FingerprintMap,
    previous: &FingerprintMap,
    property_title: &str,
    include_added: bool,
) -> bool
where
    V: ChangeVisitor + ?Sized,
{
    if trivial::is_identical(current, previous) {
        trace!(entries = current.len(), "normalized comparison: identical");
        return true;
    }

    let mut missing_previous = missing_previous_fingerprints(current, previous);
    let mut added_by_normalized_path =
        added_by_normalized_path(current, previous, &mut missing_previous);

    for (previous_fingerprint, previous_paths) in &missing_previous {
        let normalized_path = previous_fingerprint.normalized_path.as_str();
        for previous_path in previous_paths.iter().rev() {
            // Several files may share a normalized path; pair with the next candidate
            let candidate = added_by_normalized_path
                .get_mut(normalized_path)
                .and_then(|candidates| candidates.pop());
            let change = match candidate {
                Some(added) => Change::modified(
                    property_title,
                    added.path,
                    previous_fingerprint.file_type,
                    added.file_type,
                    normalized_path,
                ),
                None => Change::removed(
                    property_title,
                    previous_path,
                    previous_fingerprint.file_type,
                    normalized_path,
                ),
            };
            if !visitor.visit_change(change) {
                return false;
            }
        }
    }

    if include_added {
        for (normalized_path, candidates) in &added_by_normalized_path {
            for added in candidates.iter().rev() {
                let change =
                    Change::added(property_title, added.path, added.file_type, normalized_path);
                if !visitor.visit_change(change) {
                    return false;
                }
            }
        }
    }
    true
}

/// Previous entries not reproduced by an equal fingerprint at their own path
fn missing_previous_fingerprints<'a>(
    current: &FingerprintMap,
    previous: &'a FingerprintMap,
) -> MissingPrevious<'a> {
    let mut results: MissingPrevious<'a> = BTreeMap::new();
    for (path, fingerprint) in previous {
        if current.get(path) == Some(fingerprint) {
            continue;
        }
        results.entry(fingerprint).or_default().push(path.as_str());
    }
    for paths in results.values_mut() {
        paths.sort_unstable_by(|a, b| b.cmp(a));
    }
    results
}

/// Account for every current entry that reproduces a previous one
///
/// An entry at the same absolute path is matched first. Entries left over
/// after that may still absorb a previous entry with an equal fingerprint at
/// another absolute path (the property root moved). Whatever stays unmatched
/// is returned grouped by normalized path.
fn added_by_normalized_path<'a>(
    current: &'a FingerprintMap,
    previous: &FingerprintMap,
    missing_previous: &mut MissingPrevious<'_>,
) -> AddedByNormalizedPath<'a> {
    let mut unaccounted: Vec<(&'a str, &'a Fingerprint)> = current
        .iter()
        .filter(|(path, fingerprint)| previous.get(path.as_str()) != Some(*fingerprint))
        .map(|(path, fingerprint)| (path.as_str(), fingerprint))
        .collect();
    unaccounted.sort_unstable_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    let mut results: AddedByNormalizedPath<'a> = BTreeMap::new();
    for (path, fingerprint) in unaccounted {
        // Buckets are sorted descending, so this takes the smallest path
        let relocated = missing_previous
            .get_mut(fingerprint)
            .and_then(|paths| paths.pop())
            .is_some();
        if relocated {
            continue;
        }
        results
            .entry(fingerprint.normalized_path.as_str())
            .or_default()
            .push(PathWithType {
                path,
                file_type: fingerprint.file_type,
            });
    }
    for candidates in results.values_mut() {
        candidates.sort_unstable_by(|a, b| b.path.cmp(a.path));
    }
    results
}
