use crate::selection::{ScaleSnapshot, TransformSelection};

#[derive(Clone, Debug)]
struct ScaleEditRecord {
    merge_group: String,
    before: ScaleSnapshot,
    after: ScaleSnapshot,
}

/// Undo log for scale edits.
///
/// Records sharing a merge group fold into one step, so every move of a
/// drag lands in a single undoable operation. A record carries all three
/// channels, so undoing a step discards partial per-axis writes wholesale.
#[derive(Debug, Default)]
pub struct UndoLog {
    history: Vec<ScaleEditRecord>,
    redo: Vec<ScaleEditRecord>,
}

impl UndoLog {
    pub fn record(&mut self, merge_group: &str, before: ScaleSnapshot, after: ScaleSnapshot) {
        self.redo.clear();
        if let Some(last) = self.history.last_mut() {
            if last.merge_group == merge_group {
                last.after = after;
                return;
            }
        }
        self.history.push(ScaleEditRecord { merge_group: merge_group.to_string(), before, after });
    }

    pub fn undo(&mut self, selection: &mut TransformSelection) -> bool {
        if let Some(record) = self.history.pop() {
            selection.restore_scale(&record.before);
            self.redo.push(record);
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self, selection: &mut TransformSelection) -> bool {
        if let Some(record) = self.redo.pop() {
            selection.restore_scale(&record.after);
            self.history.push(record);
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undoable steps currently in the log.
    pub fn step_count(&self) -> usize {
        self.history.len()
    }
}
