use crate::axis::AxisMask;
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug)]
pub enum DragEvent {
    Begin { mask: AxisMask },
    Move { factor: Vec3 },
    End,
}

impl fmt::Display for DragEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragEvent::Begin { mask } => write!(f, "DragBegin mask={}", mask.label()),
            DragEvent::Move { factor } => {
                write!(f, "DragMove factor=({:.3}, {:.3}, {:.3})", factor.x, factor.y, factor.z)
            }
            DragEvent::End => write!(f, "DragEnd"),
        }
    }
}

/// Outcome of a subscriber: `Handled` stops propagation, `Unhandled` lets
/// later subscribers (the handle's own default behaviour) run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragResponse {
    Unhandled,
    Handled,
}

struct Subscriber<E> {
    priority: i32,
    callback: Box<dyn FnMut(&E) -> DragResponse>,
}

/// Subscriber list with an explicit invocation order: ascending priority,
/// insertion order within one priority. The manipulator connects at
/// priority 0 so it runs before the originating handle's own handler.
pub struct OrderedSignal<E> {
    subscribers: Vec<Subscriber<E>>,
}

impl<E> Default for OrderedSignal<E> {
    fn default() -> Self {
        Self { subscribers: Vec::new() }
    }
}

impl<E> OrderedSignal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, priority: i32, callback: impl FnMut(&E) -> DragResponse + 'static) {
        let index = self.subscribers.partition_point(|s| s.priority <= priority);
        self.subscribers.insert(index, Subscriber { priority, callback: Box::new(callback) });
    }

    /// Invokes subscribers in order until one reports `Handled`.
    pub fn emit(&mut self, event: &E) -> DragResponse {
        for subscriber in self.subscribers.iter_mut() {
            if (subscriber.callback)(event) == DragResponse::Handled {
                return DragResponse::Handled;
            }
        }
        DragResponse::Unhandled
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
