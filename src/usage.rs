/// Counters over manipulator interactions, cheap to copy and registered
/// one event at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsageSnapshot {
    pub drag_begin_count: u64,
    pub drag_move_count: u64,
    pub drag_end_count: u64,
    pub programmatic_apply_count: u64,
    pub skipped_axis_writes: u64,
    pub undo_count: u64,
    pub redo_count: u64,
}

#[derive(Clone, Copy, Debug)]
pub enum UsageEvent {
    DragBegun,
    DragMoved { skipped_axes: u32 },
    DragEnded,
    AppliedProgrammatically { skipped_axes: u32 },
    Undo,
    Redo,
}

impl UsageSnapshot {
    pub fn register(&mut self, event: &UsageEvent) {
        match event {
            UsageEvent::DragBegun => self.drag_begin_count += 1,
            UsageEvent::DragMoved { skipped_axes } => {
                self.drag_move_count += 1;
                self.skipped_axis_writes += u64::from(*skipped_axes);
            }
            UsageEvent::DragEnded => self.drag_end_count += 1,
            UsageEvent::AppliedProgrammatically { skipped_axes } => {
                self.programmatic_apply_count += 1;
                self.skipped_axis_writes += u64::from(*skipped_axes);
            }
            UsageEvent::Undo => self.undo_count += 1,
            UsageEvent::Redo => self.redo_count += 1,
        }
    }
}
