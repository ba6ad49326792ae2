//! Human-readable change summaries

use crate::config::ChangeReportConfig;
use crate::strategy::CompareStrategy;
use fingerprint_core::{Change, ChangeDetectorVisitor, FingerprintMap, LimitingChangeVisitor};
use tracing::debug;

/// True if anything changed between `previous` and `current`
///
/// Added entries count as changes. Stops at the first change found.
pub fn has_changes(
    strategy: CompareStrategy,
    current: &FingerprintMap,
    previous: &FingerprintMap,
) -> bool {
    let mut detector = ChangeDetectorVisitor::new();
    strategy.visit_changes_since(&mut detector, current, previous, "", true);
    detector.found_any_change()
}

/// Capped list of change messages for one property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    /// One message per reported change, in comparison order
    pub messages: Vec<String>,
    /// True if the cap was reached, so more changes may exist
    pub saturated: bool,
}

impl ChangeReport {
    /// Compare and collect at most `config.max_reported_changes` messages
    pub fn collect(
        config: &ChangeReportConfig,
        property_title: &str,
        current: &FingerprintMap,
        previous: &FingerprintMap,
    ) -> Self {
        let mut messages = Vec::new();
        let collector = |change: Change| {
            messages.push(change.to_string());
            true
        };
        let mut visitor = LimitingChangeVisitor::new(collector, config.max_reported_changes);
        let completed = config.strategy.visit_changes_since(
            &mut visitor,
            current,
            previous,
            property_title,
            config.include_added,
        );
        let saturated = !completed || visitor.is_saturated();
        drop(visitor);

        debug!(
            property = property_title,
            strategy = %config.strategy,
            reported = messages.len(),
            saturated,
            "collected change report"
        );
        Self { messages, saturated }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerprint_core::{hash_bytes, Fingerprint};

    fn map(entries: &[(&str, &str)]) -> FingerprintMap {
        entries
            .iter()
            .map(|(path, content)| {
                let name = path.trim_start_matches('/');
                (path.to_string(), Fingerprint::file(name, hash_bytes(content.as_bytes())))
            })
            .collect()
    }

    #[test]
    fn test_has_changes() {
        let previous = map(&[("/a", "1")]);
        for strategy in CompareStrategy::ALL {
            assert!(!has_changes(strategy, &previous, &previous));
            assert!(has_changes(strategy, &map(&[("/a", "2")]), &previous));
            assert!(has_changes(strategy, &map(&[("/a", "1"), ("/b", "1")]), &previous));
        }
    }

    #[test]
    fn test_report_is_capped() {
        let config = ChangeReportConfig {
            strategy: CompareStrategy::Absolute,
            include_added: true,
            max_reported_changes: 2,
        };
        let current = map(&[("/a", "1"), ("/b", "1"), ("/c", "1")]);
        let previous = FingerprintMap::default();

        let title = "Output property 'classes'";
        let report = ChangeReport::collect(&config, title, &current, &previous);
        assert!(report.saturated);
        assert_eq!(
            report.messages,
            vec![
                "Output property 'classes' file /a has been added.".to_string(),
                "Output property 'classes' file /b has been added.".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_below_cap() {
        let config = ChangeReportConfig::default();
        let previous = map(&[("/a", "1")]);
        let current = map(&[("/a", "2")]);

        let report = ChangeReport::collect(&config, "Input", &current, &previous);
        assert!(!report.saturated);
        assert_eq!(report.messages, vec!["Input file /a has changed.".to_string()]);
    }

    #[test]
    fn test_report_empty_when_unchanged() {
        let previous = map(&[("/a", "1")]);
        let config = ChangeReportConfig::default();
        let report = ChangeReport::collect(&config, "Input", &previous, &previous);
        assert!(report.is_empty());
        assert!(!report.saturated);
    }
}
