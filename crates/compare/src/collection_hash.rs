//! Order-independent hashing of fingerprint collections

use crate::ignored::ContentKey;
use fingerprint_core::{Blake3Hash, Fingerprint, FingerprintMap, IncrementalHasher};

/// Append `fingerprints` to `hasher` in sorted order
///
/// Equal multisets of fingerprints append identical bytes, whatever order
/// they arrive in and whichever absolute paths they were stored under.
pub fn append_to_hasher<'a, I>(hasher: &mut IncrementalHasher, fingerprints: I)
where
    I: IntoIterator<Item = &'a Fingerprint>,
{
    let mut sorted: Vec<&Fingerprint> = fingerprints.into_iter().collect();
    sorted.sort_unstable();
    for fingerprint in sorted {
        fingerprint.append_to_hasher(hasher);
    }
}

/// Append only the content hash and type of `fingerprints` in sorted order
///
/// Normalized paths are left out, so collections that differ only in where
/// their content lives append identical bytes.
pub fn append_contents_to_hasher<'a, I>(hasher: &mut IncrementalHasher, fingerprints: I)
where
    I: IntoIterator<Item = &'a Fingerprint>,
{
    let mut sorted: Vec<ContentKey> = fingerprints.into_iter().map(ContentKey::from).collect();
    sorted.sort_unstable();
    for key in sorted {
        key.append_to_hasher(hasher);
    }
}

/// Hash the fingerprints of a collection on their own
pub fn hash_fingerprints(fingerprints: &FingerprintMap) -> Blake3Hash {
    let mut hasher = IncrementalHasher::new();
    append_to_hasher(&mut hasher, fingerprints.values());
    hasher.finalize()
}
