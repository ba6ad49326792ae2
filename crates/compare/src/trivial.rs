//! Equal-cardinality fast path

use fingerprint_core::{Change, ChangeVisitor, Fingerprint, FingerprintMap};
use smallvec::SmallVec;
use tracing::trace;

/// Try to resolve a comparison without building any multimap
///
/// Only valid for strategies that join on the absolute path. Returns `None`
/// when the inputs differ in size or when some current path has no entry in
/// `previous`; in both cases nothing has been sent to the visitor and the
/// caller must run full reconciliation. Otherwise every path whose
/// fingerprint differs is reported as modified, in path order, and the
/// result says whether the visitor consumed all of them.
pub fn try_compare<V>(
    visitor: &mut V,
    current: &FingerprintMap,
    previous: &FingerprintMap,
    property_title: &str,
    _include_added: bool,
) -> Option<bool>
where
    V: ChangeVisitor + ?Sized,
{
    if current.len() != previous.len() {
        return None;
    }

    // Resolve every key before emitting so an ambiguous input emits nothing
    let mut modified: SmallVec<[(&str, &Fingerprint, &Fingerprint); 4]> = SmallVec::new();
    for (path, current_fingerprint) in current {
        let previous_fingerprint = previous.get(path)?;
        if previous_fingerprint != current_fingerprint {
            modified.push((path.as_str(), previous_fingerprint, current_fingerprint));
        }
    }

    trace!(
        entries = current.len(),
        modified = modified.len(),
        "trivial comparison resolved"
    );

    modified.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (path, previous_fingerprint, current_fingerprint) in modified {
        let change = Change::modified(
            property_title,
            path,
            previous_fingerprint.file_type,
            current_fingerprint.file_type,
            &current_fingerprint.normalized_path,
        );
        if !visitor.visit_change(change) {
            return Some(false);
        }
    }
    Some(true)
}

/// True if both collections hold the same fingerprints at the same paths
///
/// An identical pair has no changes under any identity policy, so every
/// strategy may use this as its no-change short-circuit.
pub fn is_identical(current: &FingerprintMap, previous: &FingerprintMap) -> bool {
    current.len() == previous.len()
        && current
            .iter()
            .all(|(path, fingerprint)| previous.get(path) == Some(fingerprint))
}
