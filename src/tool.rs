use crate::axis::AxisMask;
use crate::config::ManipulatorConfig;
use crate::drag::ScaleDrag;
use crate::events::{DragEvent, DragResponse};
use crate::handles::{compute_handle_frame, HandleFrame};
use crate::selection::TransformSelection;
use crate::undo::UndoLog;
use crate::usage::{UsageEvent, UsageSnapshot};
use glam::Vec3;

/// Upstream change a host reports to decide whether handles need a
/// recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangedInput {
    Transform,
    Pivot,
    TransformSpace,
    EvaluationTime,
    Other,
}

/// Capability surface a host drives on any manipulator kind; replaces
/// virtual-dispatch overrides with an explicit interface.
pub trait Manipulator {
    /// True when a change to `input` must trigger a handle-frame recompute.
    fn affects_handle_refresh(&self, input: ChangedInput) -> bool;
    fn update_handles(&mut self, raster_scale: f32);
    fn handle_frame(&self) -> &HandleFrame;
    fn drag_begin(&mut self, mask: AxisMask) -> DragResponse;
    fn drag_move(&mut self, factor: Vec3);
    fn drag_end(&mut self);
}

/// Interactive scaling manipulator: owns the selection it edits, the
/// seven-handle frame, the undo log and the active drag session.
pub struct ScaleTool {
    selection: TransformSelection,
    config: ManipulatorConfig,
    undo: UndoLog,
    frame: HandleFrame,
    drag: Option<ScaleDrag>,
    merge_counter: u64,
    usage: UsageSnapshot,
}

impl ScaleTool {
    pub fn new(selection: TransformSelection, config: ManipulatorConfig) -> Self {
        let frame = compute_handle_frame(&selection, config.raster_scale);
        Self {
            selection,
            config,
            undo: UndoLog::default(),
            frame,
            drag: None,
            merge_counter: 0,
            usage: UsageSnapshot::default(),
        }
    }

    pub fn selection(&self) -> &TransformSelection {
        &self.selection
    }

    /// Mutable selection access; after touching an input named by
    /// `affects_handle_refresh`, the host must call `update_handles`.
    pub fn selection_mut(&mut self) -> &mut TransformSelection {
        &mut self.selection
    }

    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo
    }

    pub fn usage(&self) -> UsageSnapshot {
        self.usage
    }

    pub fn handle_frame(&self) -> &HandleFrame {
        &self.frame
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn affects_handle_refresh(&self, input: ChangedInput) -> bool {
        matches!(
            input,
            ChangedInput::Transform | ChangedInput::Pivot | ChangedInput::TransformSpace
        )
    }

    pub fn update_handles(&mut self, raster_scale: f32) {
        self.frame = compute_handle_frame(&self.selection, raster_scale);
    }

    /// False iff any axis selected by `mask` is not settable-or-keyable.
    pub fn can_apply(&self, mask: AxisMask) -> bool {
        ScaleDrag::begin(&self.selection, mask).can_apply(&self.selection, mask)
    }

    /// Starts a drag over the axes of `mask`, discarding any prior
    /// session. Returns `Unhandled` so the originating handle proceeds
    /// with its own drag handling.
    pub fn drag_begin(&mut self, mask: AxisMask) -> DragResponse {
        self.drag = Some(ScaleDrag::begin(&self.selection, mask));
        self.usage.register(&UsageEvent::DragBegun);
        DragResponse::Unhandled
    }

    /// Applies one pointer-move factor through the active session, inside
    /// the drag's merged undo step.
    ///
    /// Panics without an active drag: move-before-begin is a contract
    /// violation, not a recoverable state.
    pub fn drag_move(&mut self, factor: Vec3) {
        let drag = match self.drag {
            Some(drag) => drag,
            None => panic!("ScaleTool::drag_move called without an active drag"),
        };
        let merge_group = self.merge_group();
        let before = self.selection.scale_snapshot();
        let written = drag.apply(&mut self.selection, factor);
        let after = self.selection.scale_snapshot();
        self.undo.record(&merge_group, before, after);
        self.usage.register(&UsageEvent::DragMoved {
            skipped_axes: drag.mask().axis_count() - written.len() as u32,
        });
    }

    /// Ends the drag; later edits start a fresh undo step. Rollback of an
    /// aborted drag is the undo log's concern, not handled here.
    pub fn drag_end(&mut self) {
        assert!(self.drag.is_some(), "ScaleTool::drag_end called without an active drag");
        self.drag = None;
        self.merge_counter += 1;
        self.usage.register(&UsageEvent::DragEnded);
    }

    /// Routes one input event into the lifecycle. A move is fully handled
    /// here; begin and end pass through so the originating handle keeps
    /// its own drag bookkeeping.
    pub fn handle_drag_event(&mut self, event: &DragEvent) -> DragResponse {
        match event {
            DragEvent::Begin { mask } => self.drag_begin(*mask),
            DragEvent::Move { factor } => {
                self.drag_move(*factor);
                DragResponse::Handled
            }
            DragEvent::End => {
                self.drag_end();
                DragResponse::Unhandled
            }
        }
    }

    /// Programmatic equivalent of a full drag cycle over all axes,
    /// recorded as one undo step.
    pub fn apply_scale(&mut self, factor: Vec3) {
        let drag = ScaleDrag::begin(&self.selection, AxisMask::XYZ);
        let merge_group = self.merge_group();
        self.merge_counter += 1;
        let before = self.selection.scale_snapshot();
        let written = drag.apply(&mut self.selection, factor);
        let after = self.selection.scale_snapshot();
        self.undo.record(&merge_group, before, after);
        self.usage.register(&UsageEvent::AppliedProgrammatically {
            skipped_axes: AxisMask::XYZ.axis_count() - written.len() as u32,
        });
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.undo.undo(&mut self.selection);
        if undone {
            self.usage.register(&UsageEvent::Undo);
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.undo.redo(&mut self.selection);
        if redone {
            self.usage.register(&UsageEvent::Redo);
        }
        redone
    }

    /// Identifies the undo step the current drag's writes coalesce into.
    fn merge_group(&self) -> String {
        format!("scale_tool:{}", self.merge_counter)
    }
}

impl Manipulator for ScaleTool {
    fn affects_handle_refresh(&self, input: ChangedInput) -> bool {
        ScaleTool::affects_handle_refresh(self, input)
    }

    fn update_handles(&mut self, raster_scale: f32) {
        ScaleTool::update_handles(self, raster_scale);
    }

    fn handle_frame(&self) -> &HandleFrame {
        ScaleTool::handle_frame(self)
    }

    fn drag_begin(&mut self, mask: AxisMask) -> DragResponse {
        ScaleTool::drag_begin(self, mask)
    }

    fn drag_move(&mut self, factor: Vec3) {
        ScaleTool::drag_move(self, factor);
    }

    fn drag_end(&mut self) {
        ScaleTool::drag_end(self);
    }
}
