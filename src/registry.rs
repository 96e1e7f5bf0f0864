use crate::config::ManipulatorConfig;
use crate::selection::TransformSelection;
use crate::tool::{Manipulator, ScaleTool};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ManipulatorKind {
    Translate,
    Rotate,
    Scale,
}

/// Viewport flavour a manipulator can be registered against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostKind {
    Perspective3d,
    Ortho2d,
}

pub type ManipulatorFactory =
    Box<dyn Fn(TransformSelection, ManipulatorConfig) -> Box<dyn Manipulator>>;

/// Explicit mapping from (manipulator kind, host kind) to a factory,
/// populated at process start and queried by the host.
#[derive(Default)]
pub struct ManipulatorRegistry {
    factories: HashMap<(ManipulatorKind, HostKind), ManipulatorFactory>,
}

impl ManipulatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in scale manipulator available in both
    /// viewport kinds. Translate and rotate live in their own crates.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for host in [HostKind::Perspective3d, HostKind::Ortho2d] {
            registry.register(ManipulatorKind::Scale, host, |selection, config| {
                Box::new(ScaleTool::new(selection, config))
            });
        }
        registry
    }

    pub fn register(
        &mut self,
        kind: ManipulatorKind,
        host: HostKind,
        factory: impl Fn(TransformSelection, ManipulatorConfig) -> Box<dyn Manipulator> + 'static,
    ) {
        self.factories.insert((kind, host), Box::new(factory));
    }

    pub fn create(
        &self,
        kind: ManipulatorKind,
        host: HostKind,
        selection: TransformSelection,
        config: ManipulatorConfig,
    ) -> Option<Box<dyn Manipulator>> {
        self.factories.get(&(kind, host)).map(|factory| factory(selection, config))
    }

    pub fn is_registered(&self, kind: ManipulatorKind, host: HostKind) -> bool {
        self.factories.contains_key(&(kind, host))
    }
}
