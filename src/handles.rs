use crate::axis::AxisMask;
use crate::config::ManipulatorConfig;
use crate::drag::ScaleDrag;
use crate::math::sign_only_scaling;
use crate::selection::TransformSelection;
use glam::{Mat4, Vec3};

pub const DEFAULT_RASTER_SCALE: f32 = 75.0;
pub const SCALE_MIN_RATIO: f32 = 0.05;
pub const SCALE_MAX_RATIO: f32 = 20.0;
pub const SCALE_SNAP_STEP: f32 = 0.1;

#[derive(Clone, Copy, Debug)]
pub struct HandleState {
    pub mask: AxisMask,
    pub enabled: bool,
    pub raster_scale: f32,
}

/// Display transform and per-handle state, derived fresh from the current
/// selection — never updated incrementally.
#[derive(Clone, Debug)]
pub struct HandleFrame {
    pub matrix: Mat4,
    pub handles: [HandleState; 7],
}

impl HandleFrame {
    pub fn handle(&self, mask: AxisMask) -> Option<&HandleState> {
        self.handles.iter().find(|handle| handle.mask == mask)
    }
}

/// Places the seven handles for `selection`: the pivot translation applies
/// first, then the object's transform, then the scene-to-transform-space
/// inverse re-expresses the result in the space the handles are drawn in.
pub fn compute_handle_frame(selection: &TransformSelection, raster_scale: f32) -> HandleFrame {
    let pivot = Mat4::from_translation(selection.pivot);
    let composed = selection.scene_to_transform_space.inverse() * selection.matrix() * pivot;
    // The sign of the scaling keeps the handles pointing the right way on
    // a mirrored selection. The magnitude is dropped: a non-uniform handle
    // scale breaks the xy/xz/yz handles.
    let matrix = sign_only_scaling(&composed);

    let probe = ScaleDrag::begin(selection, AxisMask::XYZ);
    let mut handles = [HandleState { mask: AxisMask::X, enabled: false, raster_scale }; 7];
    for (state, &mask) in handles.iter_mut().zip(AxisMask::HANDLES.iter()) {
        state.mask = mask;
        // One non-writable axis disables the whole handle.
        state.enabled = probe.can_apply(selection, mask);
    }

    HandleFrame { matrix, handles }
}

/// Clamps a drag ratio into the configured range, snapping to the
/// configured step when `snap` is held.
pub fn clamp_ratio(config: &ManipulatorConfig, ratio: f32, snap: bool) -> f32 {
    let clamped = ratio.clamp(config.min_ratio, config.max_ratio);
    if snap {
        let snapped = (clamped / config.snap_step).round() * config.snap_step;
        snapped.clamp(config.min_ratio, config.max_ratio)
    } else {
        clamped
    }
}

/// Spreads one scalar ratio across the axes of `mask`, 1.0 elsewhere —
/// the factor shape `ScaleDrag::apply` expects from a handle.
pub fn factor_for_mask(mask: AxisMask, ratio: f32) -> Vec3 {
    Vec3::new(
        if mask.contains_axis(0) { ratio } else { 1.0 },
        if mask.contains_axis(1) { ratio } else { 1.0 },
        if mask.contains_axis(2) { ratio } else { 1.0 },
    )
}
