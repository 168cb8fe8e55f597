//! Change aggregation and code assignment.

use super::result::{Change, ChangeType};

/// Collects changes from the section differs and assigns stable codes.
///
/// One `ChangeLog` is threaded by mutable reference through every differ of
/// a single diff invocation. Three independent counters (one per change
/// type) produce codes like `BREAK-001`, `ADD-002`, `CORR-001`; codes are
/// monotone within their prefix and follow differ run order, not section
/// order.
#[derive(Debug, Default)]
pub struct ChangeLog {
    changes: Vec<Change>,
    breaking_seq: u32,
    additive_seq: u32,
    corrective_seq: u32,
}

impl ChangeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change, assigning its code.
    pub fn push(&mut self, mut change: Change) {
        let seq = match change.change_type {
            ChangeType::Breaking => {
                self.breaking_seq += 1;
                self.breaking_seq
            }
            ChangeType::Additive => {
                self.additive_seq += 1;
                self.additive_seq
            }
            ChangeType::Corrective => {
                self.corrective_seq += 1;
                self.corrective_seq
            }
        };
        change.code = format!("{}-{seq:03}", change.change_type.prefix());
        self.changes.push(change);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Consume the log, yielding the changes in recording order.
    #[must_use]
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_sequential_per_type() {
        let mut log = ChangeLog::new();
        log.push(Change::breaking("a", "first removal"));
        log.push(Change::additive("b", "first addition"));
        log.push(Change::breaking("c", "second removal"));
        log.push(Change::corrective("d", "first fix"));
        log.push(Change::additive("e", "second addition"));

        let codes: Vec<String> = log.into_changes().into_iter().map(|c| c.code).collect();
        assert_eq!(
            codes,
            ["BREAK-001", "ADD-001", "BREAK-002", "CORR-001", "ADD-002"]
        );
    }

    #[test]
    fn test_codes_zero_padded() {
        let mut log = ChangeLog::new();
        for i in 0..12 {
            log.push(Change::corrective("s", format!("fix {i}")));
        }
        let changes = log.into_changes();
        assert_eq!(changes[0].code, "CORR-001");
        assert_eq!(changes[9].code, "CORR-010");
        assert_eq!(changes[11].code, "CORR-012");
    }

    #[test]
    fn test_recording_order_preserved() {
        let mut log = ChangeLog::new();
        log.push(Change::additive("states.a", "x"));
        log.push(Change::breaking("vocabulary.b", "y"));
        let changes = log.into_changes();
        assert_eq!(changes[0].section, "states.a");
        assert_eq!(changes[1].section, "vocabulary.b");
    }
}
