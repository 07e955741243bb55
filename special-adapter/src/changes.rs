use alloc::vec::Vec;

use crate::Change;

/// Builds the ordered notification list for one mutation.
///
/// It tracks the row count a list view would hold after applying each change, and enforces the
/// contract a virtualized list relies on:
/// - Zero-length ranges are dropped.
/// - Out-of-bounds ranges are dropped (and debug-asserted).
pub(crate) struct ChangeSet {
    changes: Vec<Change>,
    count: Option<usize>,
}

impl ChangeSet {
    /// `count` is the virtual row count before the mutation.
    pub(crate) fn new(count: usize) -> Self {
        Self {
            changes: Vec::new(),
            count: Some(count),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.changes.clear();
        self.changes.push(Change::Reset);
        self.count = None;
    }

    pub(crate) fn inserted(&mut self, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        if !self.check(start, 0, "inserted") {
            return;
        }
        self.push(Change::Inserted { start, count });
    }

    pub(crate) fn removed(&mut self, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        if !self.check(start, count, "removed") {
            return;
        }
        self.push(Change::Removed { start, count });
    }

    pub(crate) fn changed(&mut self, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        if !self.check(start, count, "changed") {
            return;
        }
        self.push(Change::Changed { start, count });
    }

    pub(crate) fn moved(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        if !self.check(from.max(to), 1, "moved") {
            return;
        }
        self.push(Change::Moved { from, to });
    }

    fn push(&mut self, change: Change) {
        if let Some(count) = self.count {
            self.count = change.apply_to_count(count);
        }
        self.changes.push(change);
    }

    fn check(&self, start: usize, len: usize, what: &'static str) -> bool {
        let Some(count) = self.count else {
            // After a reset the list re-queries everything; incremental changes are redundant.
            return false;
        };
        let end = start.saturating_add(len);
        if end > count {
            swarn!(start, len, count, what, "ChangeSet: out-of-bounds range");
            debug_assert!(
                end <= count,
                "ChangeSet: out-of-bounds {what} range (start={start}, len={len}, count={count})"
            );
            return false;
        }
        true
    }

    /// Consumes the builder. `count` is the virtual row count after the mutation.
    pub(crate) fn finish(self, count: usize) -> Vec<Change> {
        if let Some(applied) = self.count {
            debug_assert_eq!(
                applied, count,
                "ChangeSet: notifications leave the list at {applied} rows, adapter has {count}"
            );
        }
        self.changes
    }
}
