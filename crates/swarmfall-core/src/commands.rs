//! Player commands and per-tick input sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Tick input is
//! sampled once per tick and never queued.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pause the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Add the named weapon to the player's loadout.
    GrantWeapon { name: String },
}

/// Held movement keys. Each pressed axis contributes the player's full move
/// speed, so diagonals are faster than cardinals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the frontend reports for one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickInput {
    pub movement: MoveIntent,
    /// Fire button held.
    pub fire: bool,
    /// Weapon cycle direction: -1, 0 or +1.
    pub cycle_weapon: i32,
    /// Pointer position in world space.
    pub aim_target: Vec2,
    /// Top-left of the viewport in world space.
    pub camera_offset: Vec2,
    /// Wall-clock milliseconds since the previous tick.
    pub delta_ms: u64,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            movement: MoveIntent::default(),
            fire: false,
            cycle_weapon: 0,
            aim_target: Vec2::ZERO,
            camera_offset: Vec2::ZERO,
            delta_ms: crate::constants::TICK_MS,
        }
    }
}

impl MoveIntent {
    /// Per-axis displacement for one tick at `speed`.
    pub fn displacement(&self, speed: f32) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.left {
            d.x -= speed;
        }
        if self.right {
            d.x += speed;
        }
        if self.up {
            d.y -= speed;
        }
        if self.down {
            d.y += speed;
        }
        d
    }
}
