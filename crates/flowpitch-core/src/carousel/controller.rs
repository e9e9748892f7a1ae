//! Carousel controller combining navigation, drag input and the spring

use std::time::Instant;

use tracing::{debug, trace};

use super::drag::{apply_edge_resistance, DragSession, PointerId, PointerTarget};
use super::spring::{self, SpringState};
use crate::config::CarouselConfig;

/// A successful slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: usize,
    pub index: usize,
    pub total: usize,
}

impl Navigation {
    /// Transient notice text, e.g. "Slide 2/7"
    pub fn message(&self) -> String {
        format!("Slide {}/{}", self.index + 1, self.total)
    }
}

/// Slide navigation state machine
///
/// Owns the active slide index and the animated horizontal offset of the
/// slide track. Input handlers (`go_to`, `next`, drag callbacks, `on_resize`)
/// change the target; `tick` moves the offset toward it.
///
/// Offsets are in the same unit as the viewport width (terminal columns in
/// the TUI). Slide `i` is fully in view at offset
/// `-i * viewport_width`.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    slide_count: usize,
    viewport_width: f64,
    current_index: usize,
    motion: SpringState,
    target_offset: f64,
    drag: Option<DragSession>,
    last_frame: Option<Instant>,
}

impl Carousel {
    /// Create a carousel resting on the first slide
    ///
    /// A deck always has at least one slide; a count of zero is treated as one.
    pub fn new(slide_count: usize, viewport_width: f64, config: CarouselConfig) -> Self {
        Self {
            config,
            slide_count: slide_count.max(1),
            viewport_width: viewport_width.max(0.0),
            current_index: 0,
            motion: SpringState {
                position: 0.0,
                velocity: 0.0,
            },
            target_offset: 0.0,
            drag: None,
            last_frame: None,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.motion.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.motion.velocity
    }

    #[inline]
    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True for exactly one slide: the current one
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_index
    }

    /// Fraction of the deck reached, `(index + 1) / N`
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.slide_count as f64
    }

    pub fn can_prev(&self) -> bool {
        self.config.loop_at_end || self.current_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.config.loop_at_end || self.current_index + 1 < self.slide_count
    }

    /// Resting on the target with no drag in progress
    pub fn is_settled(&self) -> bool {
        self.drag.is_none()
            && self.motion.position == self.target_offset
            && self.motion.velocity == 0.0
    }

    /// Screen-reader style label, e.g. "Slide 2 of 7"
    pub fn status_label(&self) -> String {
        format!("Slide {} of {}", self.current_index + 1, self.slide_count)
    }

    /// Map a requested index onto a valid one, clamping or wrapping
    fn resolve_index(&self, index: isize) -> usize {
        let last = self.slide_count as isize - 1;
        let resolved = if self.config.loop_at_end {
            if index < 0 {
                last
            } else if index > last {
                0
            } else {
                index
            }
        } else {
            index.clamp(0, last)
        };
        resolved as usize
    }

    fn update_target(&mut self) {
        self.target_offset = -(self.current_index as f64) * self.viewport_width;
    }

    /// Navigate to `index`, returning `None` when the resolved slide is already current
    pub fn go_to(&mut self, index: isize) -> Option<Navigation> {
        let next = self.resolve_index(index);
        if next == self.current_index {
            return None;
        }

        let nav = Navigation {
            from: self.current_index,
            index: next,
            total: self.slide_count,
        };
        self.current_index = next;
        self.update_target();
        debug!("Navigate {} -> {} of {}", nav.from, nav.index, nav.total);
        Some(nav)
    }

    pub fn next(&mut self) -> Option<Navigation> {
        if !self.config.loop_at_end && self.current_index + 1 >= self.slide_count {
            return None;
        }
        self.go_to(self.current_index as isize + 1)
    }

    pub fn prev(&mut self) -> Option<Navigation> {
        if !self.config.loop_at_end && self.current_index == 0 {
            return None;
        }
        self.go_to(self.current_index as isize - 1)
    }

    pub fn first(&mut self) -> Option<Navigation> {
        self.go_to(0)
    }

    pub fn last(&mut self) -> Option<Navigation> {
        self.go_to(self.slide_count as isize - 1)
    }

    /// Place the track on `index` immediately, without animation or notice
    pub fn jump_to(&mut self, index: isize) {
        self.current_index = self.resolve_index(index);
        self.update_target();
        self.motion = SpringState {
            position: self.target_offset,
            velocity: 0.0,
        };
    }

    /// Begin a drag; refused when the pointer landed on a control
    ///
    /// A new pointer-down replaces any drag already in progress.
    pub fn on_drag_start(
        &mut self,
        pointer_id: PointerId,
        client_x: f64,
        target: PointerTarget,
        now: Instant,
    ) -> bool {
        if target == PointerTarget::Control {
            return false;
        }
        self.drag = Some(DragSession::new(pointer_id, self.motion.position, client_x, now));
        trace!("Drag start pointer={} x={}", pointer_id, client_x);
        true
    }

    pub fn on_drag_move(&mut self, pointer_id: PointerId, client_x: f64, now: Instant) {
        let Some(session) = self.drag.as_mut().filter(|s| s.pointer_id == pointer_id) else {
            return;
        };

        let mut offset = session.raw_offset(client_x);
        if !self.config.loop_at_end {
            let min = -((self.slide_count - 1) as f64) * self.viewport_width;
            offset = apply_edge_resistance(offset, min, 0.0, self.config.edge_resistance);
        }

        self.motion.velocity = session.sample_velocity(client_x, now);
        self.motion.position = offset;
    }

    /// Finish a drag and pick the slide the release projects onto
    ///
    /// The release velocity is converted to slides (`velocity /
    /// flick_velocity_scale`) and projected `flick_projection` viewport widths
    /// forward, so a quick flick can advance even after a short drag.
    pub fn on_drag_end(&mut self, pointer_id: PointerId, viewport_width: f64) -> Option<Navigation> {
        if self.drag.map(|s| s.pointer_id) != Some(pointer_id) {
            return None;
        }
        self.drag = None;

        if viewport_width > 0.0 {
            self.viewport_width = viewport_width;
        }
        let w = self.viewport_width;
        if w <= 0.0 {
            return None;
        }

        let velocity_slides = self.motion.velocity / self.config.flick_velocity_scale;
        let projected = self.motion.position + velocity_slides * w * self.config.flick_projection;
        let raw = (-projected / w).round();
        debug!(
            "Drag end offset={:.1} velocity={:.1} projected={:.1} -> {}",
            self.motion.position, self.motion.velocity, projected, raw
        );

        if !raw.is_finite() {
            return None;
        }
        // Re-align in case the width changed without a resize event
        self.update_target();
        self.go_to(raw as isize)
    }

    /// Drop the drag without navigating; the spring returns the track
    pub fn on_drag_cancel(&mut self, pointer_id: PointerId) {
        if self.drag.map(|s| s.pointer_id) == Some(pointer_id) {
            self.drag = None;
            trace!("Drag cancelled pointer={}", pointer_id);
        }
    }

    /// Advance the spring by one frame
    ///
    /// The step is capped at `max_frame_dt` so a stalled frame loop does not
    /// fling the track. The first call only records the frame time. Nothing
    /// moves while a drag is in progress.
    pub fn tick(&mut self, now: Instant) {
        let dt = match self.last_frame {
            Some(prev) => now
                .saturating_duration_since(prev)
                .as_secs_f64()
                .min(self.config.max_frame_dt),
            None => 0.0,
        };
        self.last_frame = Some(now);

        if self.drag.is_some() || self.is_settled() {
            return;
        }

        let displacement = spring::step(&mut self.motion, self.target_offset, dt, &self.config.spring);
        if spring::should_snap(
            displacement,
            self.motion.velocity,
            self.config.snap_distance,
            self.config.snap_velocity,
        ) {
            self.motion = SpringState {
                position: self.target_offset,
                velocity: 0.0,
            };
        }
    }

    /// Re-align to the current slide for a new viewport width, without animation
    ///
    /// Any drag in progress is abandoned.
    pub fn on_resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
        self.drag = None;
        self.update_target();
        self.motion = SpringState {
            position: self.target_offset,
            velocity: 0.0,
        };
    }
}
