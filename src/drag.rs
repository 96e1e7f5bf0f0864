use crate::axis::{AxisMask, AXIS_COUNT};
use crate::selection::TransformSelection;
use glam::Vec3;
use smallvec::SmallVec;

/// One scale drag from baseline capture to the final applied factor.
///
/// The baseline is read exactly once at `begin`; every `apply` recomputes
/// from it, so repeated or out-of-order factors never compound.
#[derive(Clone, Copy, Debug)]
pub struct ScaleDrag {
    mask: AxisMask,
    baseline: Vec3,
    time: f32,
}

impl ScaleDrag {
    /// Captures the baseline scale values and the evaluation time for a
    /// drag over the axes in `mask`.
    pub fn begin(selection: &TransformSelection, mask: AxisMask) -> Self {
        Self { mask, baseline: selection.scale(), time: selection.time }
    }

    pub fn mask(&self) -> AxisMask {
        self.mask
    }

    pub fn baseline(&self) -> Vec3 {
        self.baseline
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// False iff any axis selected by `mask` cannot currently accept a
    /// write or a key insertion.
    pub fn can_apply(&self, selection: &TransformSelection, mask: AxisMask) -> bool {
        (0..AXIS_COUNT)
            .all(|axis| !mask.contains_axis(axis) || selection.channel(axis).can_set_or_key())
    }

    /// Writes `baseline * factor` for each axis in the session mask.
    ///
    /// An axis whose channel is not settable-or-keyable is skipped
    /// silently; `can_apply` already gates whole handles at a coarser
    /// granularity, so the per-axis check here is a second line of
    /// defence, not an error. Returns the axes actually written.
    pub fn apply(
        &self,
        selection: &mut TransformSelection,
        factor: Vec3,
    ) -> SmallVec<[usize; AXIS_COUNT]> {
        let mut written = SmallVec::new();
        for axis in 0..AXIS_COUNT {
            if !self.mask.contains_axis(axis) {
                continue;
            }
            let value = self.baseline[axis] * factor[axis];
            if selection.channel_mut(axis).set_or_add_key(self.time, value) {
                written.push(axis);
            }
        }
        written
    }
}
