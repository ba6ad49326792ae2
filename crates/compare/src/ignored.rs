//! Comparison by content only
//!
//! Both collections are treated as multisets of content. Paths play no part
//! in matching, so content can only appear or disappear and nothing is ever
//! reported as modified.

use crate::trivial;
use fingerprint_core::{
    Blake3Hash, Change, ChangeVisitor, FileType, Fingerprint, FingerprintMap, IncrementalHasher,
};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use tracing::trace;

/// Identity of a file when its location is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ContentKey {
    content_hash: Blake3Hash,
    file_type: FileType,
}

impl ContentKey {
    pub(crate) fn append_to_hasher(&self, hasher: &mut IncrementalHasher) {
        hasher.put_hash(&self.content_hash);
        hasher.put_u8(self.file_type.tag());
    }
}

impl From<&Fingerprint> for ContentKey {
    fn from(fingerprint: &Fingerprint) -> Self {
        Self {
            content_hash: fingerprint.content_hash,
            file_type: fingerprint.file_type,
        }
    }
}

type Entry<'a> = (&'a str, &'a Fingerprint);

/// Previous entries by content, each bucket sorted by path descending
type UnaccountedPrevious<'a> = BTreeMap<ContentKey, SmallVec<[Entry<'a>; 1]>>;

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
        trace!(entries = current.len(), "ignored-path comparison: identical");
        return true;
    }

    // Occurrences at the same path are consumed first so the leftovers do not
    // depend on the order current entries are visited in
    let mut unaccounted_previous = unaccounted_previous(current, previous);
    let mut unmatched: Vec<Entry<'_>> = current
        .iter()
        .filter(|(path, fingerprint)| !same_content_at(previous, path, fingerprint))
        .map(|(path, fingerprint)| (path.as_str(), fingerprint))
        .collect();
    unmatched.sort_unstable_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    for (path, fingerprint) in unmatched {
        let consumed = unaccounted_previous
            .get_mut(&ContentKey::from(fingerprint))
            .and_then(|entries| entries.pop())
            .is_some();
        if consumed || !include_added {
            continue;
        }
        let change = Change::added(
            property_title,
            path,
            fingerprint.file_type,
            &fingerprint.normalized_path,
        );
        if !visitor.visit_change(change) {
            return false;
        }
    }

    for entries in unaccounted_previous.values() {
        for (path, fingerprint) in entries.iter().rev() {
            let change = Change::removed(
                property_title,
                path,
                fingerprint.file_type,
                &fingerprint.normalized_path,
            );
            if !visitor.visit_change(change) {
                return false;
            }
        }
    }
    true
}

/// Previous entries not reproduced with equal content at their own path
fn unaccounted_previous<'a>(
    current: &FingerprintMap,
    previous: &'a FingerprintMap,
) -> UnaccountedPrevious<'a> {
    let mut results: UnaccountedPrevious<'a> = BTreeMap::new();
    for (path, fingerprint) in previous {
        if same_content_at(current, path, fingerprint) {
            continue;
        }
        results
            .entry(ContentKey::from(fingerprint))
            .or_default()
            .push((path.as_str(), fingerprint));
    }
    for entries in results.values_mut() {
        entries.sort_unstable_by(|a, b| b.0.cmp(a.0));
    }
    results
}

fn same_content_at(other: &FingerprintMap, path: &str, fingerprint: &Fingerprint) -> bool {
    other
        .get(path)
        .is_some_and(|found| ContentKey::from(found) == ContentKey::from(fingerprint))
}
