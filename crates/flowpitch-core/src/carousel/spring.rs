//! Damped spring integration over a single scalar position
//!
//! `F = -k(x - target) - c*v`, integrated with semi-implicit Euler.

use crate::config::SpringConfig;

/// Position and velocity of the animated value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position: f64,
    /// Units per second
    pub velocity: f64,
}

/// Advance `state` toward `target` by `dt` seconds
///
/// Returns the displacement from the target measured before the step, which
/// callers use for the settle check.
#[inline]
pub fn step(state: &mut SpringState, target: f64, dt: f64, spring: &SpringConfig) -> f64 {
    let displacement = state.position - target;
    let force = -spring.stiffness * displacement - spring.damping * state.velocity;
    let acceleration = force / spring.mass;

    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;

    displacement
}

/// Whether a spring is close and slow enough to be snapped onto its target
#[inline]
pub fn should_snap(displacement: f64, velocity: f64, snap_distance: f64, snap_velocity: f64) -> bool {
    displacement.abs() < snap_distance && velocity.abs() < snap_velocity
}
