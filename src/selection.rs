use crate::axis::AXIS_COUNT;
use crate::channel::ScaleChannel;
use glam::{EulerRot, Mat4, Vec3};

/// Scale state of the three channels, captured for undo records.
pub type ScaleSnapshot = [ScaleChannel; AXIS_COUNT];

/// The selected transformable object as the manipulator sees it: the
/// editable scale channels plus the context needed to place handles.
#[derive(Clone, Debug)]
pub struct TransformSelection {
    pub translate: Vec3,
    /// XYZ Euler angles in radians.
    pub rotate: Vec3,
    /// Point the scaling is anchored about, in the parent frame.
    pub pivot: Vec3,
    /// Conversion from scene space into the space the handles are drawn in.
    pub scene_to_transform_space: Mat4,
    /// Evaluation time for animated channels.
    pub time: f32,
    channels: ScaleSnapshot,
}

impl TransformSelection {
    pub fn new(channels: ScaleSnapshot) -> Self {
        Self {
            translate: Vec3::ZERO,
            rotate: Vec3::ZERO,
            pivot: Vec3::ZERO,
            scene_to_transform_space: Mat4::IDENTITY,
            time: 0.0,
            channels,
        }
    }

    /// Selection with three plain channels holding `scale`.
    pub fn with_scale(scale: Vec3) -> Self {
        Self::new([
            ScaleChannel::Value(scale.x),
            ScaleChannel::Value(scale.y),
            ScaleChannel::Value(scale.z),
        ])
    }

    pub fn channel(&self, axis: usize) -> &ScaleChannel {
        &self.channels[axis]
    }

    pub fn channel_mut(&mut self, axis: usize) -> &mut ScaleChannel {
        &mut self.channels[axis]
    }

    /// Current scale values at the evaluation time.
    pub fn scale(&self) -> Vec3 {
        Vec3::new(
            self.channels[0].value_at(self.time),
            self.channels[1].value_at(self.time),
            self.channels[2].value_at(self.time),
        )
    }

    pub fn scale_snapshot(&self) -> ScaleSnapshot {
        self.channels.clone()
    }

    pub fn restore_scale(&mut self, snapshot: &ScaleSnapshot) {
        self.channels = snapshot.clone();
    }

    /// Local transform of the selection: translate, with rotation and the
    /// current scale anchored about the pivot.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translate)
            * Mat4::from_translation(self.pivot)
            * Mat4::from_euler(EulerRot::XYZ, self.rotate.x, self.rotate.y, self.rotate.z)
            * Mat4::from_scale(self.scale())
            * Mat4::from_translation(-self.pivot)
    }
}
