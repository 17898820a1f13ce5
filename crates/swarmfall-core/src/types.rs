//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space (pixels), stored as the
/// top-left corner plus size. +x is right, +y is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

/// Simulation time tracking.
///
/// Time is driven by the embedder: each tick reports how many wall-clock
/// milliseconds elapsed since the previous one. Movement does not scale with
/// it; only timers (cooldowns, immunity windows, durations) read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each running tick).
    pub tick: u64,
    /// Elapsed session time in milliseconds.
    pub elapsed_ms: u64,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

impl SimTime {
    /// Advance by one tick that took `delta_ms` of wall-clock time.
    pub fn advance(&mut self, delta_ms: u64) {
        self.tick += 1;
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    /// Current timestamp, in milliseconds since session start.
    pub fn now_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

/// Rotate `v` counter-clockwise (in a y-up frame) by `radians`.
pub fn rotated(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide.
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}
