//! Reported differences between two fingerprint collections

use crate::fingerprint::FileType;
use std::fmt;

/// Kind of a reported change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

impl ChangeType {
    /// Message suffix used in human-readable reports
    pub fn describe(self) -> &'static str {
        match self {
            ChangeType::Added => "has been added",
            ChangeType::Removed => "has been removed",
            ChangeType::Modified => "has changed",
        }
    }
}

/// One difference between the previous and current state of a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Change {
    /// Present now, absent before
    Added {
        property_title: String,
        path: String,
        file_type: FileType,
        normalized_path: String,
    },
    /// Present before, absent now
    Removed {
        property_title: String,
        path: String,
        file_type: FileType,
        normalized_path: String,
    },
    /// Present in both under the same identity, with a different fingerprint
    Modified {
        property_title: String,
        path: String,
        previous_file_type: FileType,
        current_file_type: FileType,
        normalized_path: String,
    },
}

impl Change {
    pub fn added(
        property_title: &str,
        path: &str,
        file_type: FileType,
        normalized_path: &str,
    ) -> Self {
        Change::Added {
            property_title: property_title.to_owned(),
            path: path.to_owned(),
            file_type,
            normalized_path: normalized_path.to_owned(),
        }
    }

    pub fn removed(
        property_title: &str,
        path: &str,
        file_type: FileType,
        normalized_path: &str,
    ) -> Self {
        Change::Removed {
            property_title: property_title.to_owned(),
            path: path.to_owned(),
            file_type,
            normalized_path: normalized_path.to_owned(),
        }
    }

    pub fn modified(
        property_title: &str,
        path: &str,
        previous_file_type: FileType,
        current_file_type: FileType,
        normalized_path: &str,
    ) -> Self {
        Change::Modified {
            property_title: property_title.to_owned(),
            path: path.to_owned(),
            previous_file_type,
            current_file_type,
            normalized_path: normalized_path.to_owned(),
        }
    }

    pub fn change_type(&self) -> ChangeType {
        match self {
            Change::Added { .. } => ChangeType::Added,
            Change::Removed { .. } => ChangeType::Removed,
            Change::Modified { .. } => ChangeType::Modified,
        }
    }

    /// Absolute path the change is reported against
    pub fn path(&self) -> &str {
        match self {
            Change::Added { path, .. }
            | Change::Removed { path, .. }
            | Change::Modified { path, .. } => path,
        }
    }

    pub fn normalized_path(&self) -> &str {
        match self {
            Change::Added { normalized_path, .. }
            | Change::Removed { normalized_path, .. }
            | Change::Modified { normalized_path, .. } => normalized_path,
        }
    }

    pub fn property_title(&self) -> &str {
        match self {
            Change::Added { property_title, .. }
            | Change::Removed { property_title, .. }
            | Change::Modified { property_title, .. } => property_title,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file {} {}.",
            self.property_title(),
            self.path(),
            self.change_type().describe()
        )
    }
}

/// Receives changes from a comparison
///
/// Returning `false` asks the comparison to stop (saturation). The visitor is
/// called synchronously, once per change, on the comparing thread.
pub trait ChangeVisitor {
    fn visit_change(&mut self, change: Change) -> bool;
}

impl<F> ChangeVisitor for F
where
    F: FnMut(Change) -> bool,
{
    fn visit_change(&mut self, change: Change) -> bool {
        self(change)
    }
}

/// Collects every change it is given
#[derive(Debug, Default)]
pub struct CollectingChangeVisitor {
    changes: Vec<Change>,
}

impl CollectingChangeVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

impl ChangeVisitor for CollectingChangeVisitor {
    fn visit_change(&mut self, change: Change) -> bool {
        self.changes.push(change);
        true
    }
}

/// Forwards at most `max` changes to an inner visitor
///
/// Once the cap is reached the visitor reports saturation and the comparison
/// stops.
#[derive(Debug)]
pub struct LimitingChangeVisitor<V> {
    inner: V,
    remaining: usize,
    saturated: bool,
}

impl<V: ChangeVisitor> LimitingChangeVisitor<V> {
    pub fn new(inner: V, max: usize) -> Self {
        Self {
            inner,
            remaining: max,
            saturated: false,
        }
    }

    /// True if at least one change was dropped or the cap was hit
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: ChangeVisitor> ChangeVisitor for LimitingChangeVisitor<V> {
    fn visit_change(&mut self, change: Change) -> bool {
        if self.remaining == 0 {
            self.saturated = true;
            return false;
        }
        self.remaining -= 1;
        if !self.inner.visit_change(change) {
            return false;
        }
        if self.remaining == 0 {
            self.saturated = true;
            return false;
        }
        true
    }
}

/// Records whether anything changed, stopping at the first change
#[derive(Debug, Default)]
pub struct ChangeDetectorVisitor {
    any_change: bool,
}

impl ChangeDetectorVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found_any_change(&self) -> bool {
        self.any_change
    }
}

impl ChangeVisitor for ChangeDetectorVisitor {
    fn visit_change(&mut self, _change: Change) -> bool {
        self.any_change = true;
        false
    }
}
