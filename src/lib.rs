pub mod axis;
pub mod channel;
pub mod config;
pub mod curve;
pub mod drag;
pub mod events;
pub mod handles;
pub mod math;
pub mod registry;
pub mod selection;
pub mod tool;
pub mod undo;
pub mod usage;

pub use axis::{AxisMask, AXIS_COUNT};
pub use channel::ScaleChannel;
pub use config::ManipulatorConfig;
pub use curve::{Keyframe, ScalarCurve};
pub use drag::ScaleDrag;
pub use events::{DragEvent, DragResponse, OrderedSignal};
pub use handles::{compute_handle_frame, HandleFrame, HandleState, DEFAULT_RASTER_SCALE};
pub use math::{decompose, recompose, sign_only_scaling, TransformParts};
pub use registry::{HostKind, ManipulatorKind, ManipulatorRegistry};
pub use selection::{ScaleSnapshot, TransformSelection};
pub use tool::{ChangedInput, Manipulator, ScaleTool};
pub use undo::UndoLog;
pub use usage::{UsageEvent, UsageSnapshot};
