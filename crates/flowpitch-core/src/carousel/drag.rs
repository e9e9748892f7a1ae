//! Pointer drag tracking for the slide track

use std::time::Instant;

/// Identifier of the pointer that owns a drag
pub type PointerId = u64;

/// What a pointer-down landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The slide stage itself; drags start here
    Stage,
    /// A button, dot or other interactive control; never starts a drag
    Control,
}

/// An in-progress drag, alive from pointer-down to pointer-up/cancel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Track offset when the pointer went down
    pub start_offset: f64,
    pub start_x: f64,
    /// Most recent sample, for release velocity
    pub last_x: f64,
    pub last_t: Instant,
}

impl DragSession {
    pub fn new(pointer_id: PointerId, offset: f64, client_x: f64, now: Instant) -> Self {
        Self {
            pointer_id,
            start_offset: offset,
            start_x: client_x,
            last_x: client_x,
            last_t: now,
        }
    }

    /// Offset implied by the pointer position, before any resistance
    #[inline]
    pub fn raw_offset(&self, client_x: f64) -> f64 {
        self.start_offset + (client_x - self.start_x)
    }

    /// Velocity in px/s since the previous sample, then record this sample
    ///
    /// Sample gaps shorter than 1 ms count as 1 ms.
    pub fn sample_velocity(&mut self, client_x: f64, now: Instant) -> f64 {
        let dt_ms = (now.saturating_duration_since(self.last_t).as_secs_f64() * 1000.0).max(1.0);
        let velocity = (client_x - self.last_x) / dt_ms * 1000.0;
        self.last_x = client_x;
        self.last_t = now;
        velocity
    }
}

/// Damp the part of `offset` that lies outside `[min, max]` by `factor`
#[inline]
pub fn apply_edge_resistance(offset: f64, min: f64, max: f64, factor: f64) -> f64 {
    if offset > max {
        max + (offset - max) * factor
    } else if offset < min {
        min + (offset - min) * factor
    } else {
        offset
    }
}
