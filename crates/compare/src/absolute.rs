//! Comparison by absolute path
//!
//! The absolute path is the identity: a path only in `current` is added, a
//! path only in `previous` is removed, and a path in both is modified when
//! its fingerprint differs.

use crate::trivial;
use fingerprint_core::{Change, ChangeVisitor, Fingerprint, FingerprintMap};
use tracing::trace;

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
    let trivial_result =
        trivial::try_compare(visitor, current, previous, property_title, include_added);
    if let Some(result) = trivial_result {
        return result;
    }
    trace!(
        current = current.len(),
        previous = previous.len(),
        "absolute comparison: full reconciliation"
    );

    let mut current_entries: Vec<(&str, &Fingerprint)> = current
        .iter()
        .map(|(path, fingerprint)| (path.as_str(), fingerprint))
        .collect();
    current_entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (path, current_fingerprint) in current_entries {
        let change = match previous.get(path) {
            None if include_added => Change::added(
                property_title,
                path,
                current_fingerprint.file_type,
                &current_fingerprint.normalized_path,
            ),
            Some(previous_fingerprint) if previous_fingerprint != current_fingerprint => {
                Change::modified(
                    property_title,
                    path,
                    previous_fingerprint.file_type,
                    current_fingerprint.file_type,
                    &current_fingerprint.normalized_path,
                )
            }
            _ => continue,
        };
        if !visitor.visit_change(change) {
            return false;
        }
    }

    let mut removed: Vec<(&str, &Fingerprint)> = previous
        .iter()
        .filter(|(path, _)| !current.contains_key(path.as_str()))
        .map(|(path, fingerprint)| (path.as_str(), fingerprint))
        .collect();
    removed.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (path, previous_fingerprint) in removed {
        let change = Change::removed(
            property_title,
            path,
            previous_fingerprint.file_type,
            &previous_fingerprint.normalized_path,
        );
        if !visitor.visit_change(change) {
            return false;
        }
    }
    true
}
