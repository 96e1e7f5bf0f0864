use anyhow::{anyhow, Result};
use std::cmp::Ordering;

/// Keys closer together than this are treated as the same key.
pub const KEY_TIME_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

/// Scalar animation curve with linearly interpolated keyframes.
///
/// Always holds at least one key; times are strictly ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarCurve {
    keyframes: Vec<Keyframe>,
}

impl ScalarCurve {
    pub fn new(raw: Vec<Keyframe>) -> Result<Self> {
        if raw.is_empty() {
            return Err(anyhow!("Scale curve must contain at least one keyframe"));
        }
        let mut frames: Vec<(usize, Keyframe)> = Vec::with_capacity(raw.len());
        for (index, frame) in raw.into_iter().enumerate() {
            if !frame.time.is_finite() || !frame.value.is_finite() {
                return Err(anyhow!("Scale curve keyframe must have finite time and value"));
            }
            if frame.time < 0.0 {
                return Err(anyhow!("Scale curve keyframe time cannot be negative"));
            }
            frames.push((index, frame));
        }
        frames.sort_by(|a, b| {
            let time_order = a.1.time.partial_cmp(&b.1.time).unwrap_or(Ordering::Equal);
            if time_order == Ordering::Equal {
                a.0.cmp(&b.0)
            } else {
                time_order
            }
        });
        let mut keyframes: Vec<Keyframe> = Vec::with_capacity(frames.len());
        for (_, frame) in frames {
            if let Some(last) = keyframes.last_mut() {
                if (frame.time - last.time).abs() <= KEY_TIME_EPSILON {
                    *last = frame;
                    continue;
                }
            }
            keyframes.push(frame);
        }
        Ok(Self { keyframes })
    }

    pub fn constant(value: f32) -> Self {
        Self { keyframes: vec![Keyframe { time: 0.0, value }] }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Samples the curve at `time`, clamping outside the keyed range.
    pub fn sample(&self, time: f32) -> f32 {
        let frames = &self.keyframes;
        if time <= frames[0].time {
            return frames[0].value;
        }
        let last = frames[frames.len() - 1];
        if time >= last.time {
            return last.value;
        }
        let next = frames.partition_point(|kf| kf.time <= time);
        let a = frames[next - 1];
        let b = frames[next];
        let span = b.time - a.time;
        if span <= f32::EPSILON {
            return b.value;
        }
        a.value + (b.value - a.value) * ((time - a.time) / span)
    }

    /// Inserts a key at `time`, or updates the value of an existing key
    /// whose time matches within epsilon. No other key moves.
    pub fn set_key(&mut self, time: f32, value: f32) {
        let index = self.keyframes.partition_point(|kf| kf.time < time - KEY_TIME_EPSILON);
        if let Some(frame) = self.keyframes.get_mut(index) {
            if (frame.time - time).abs() <= KEY_TIME_EPSILON {
                frame.value = value;
                return;
            }
        }
        self.keyframes.insert(index, Keyframe { time, value });
    }
}
