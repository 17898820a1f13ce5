//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine state they touch. They do not own state; all state
//! lives in components, the player, or the wave director.

pub mod cleanup;
pub mod contact;
pub mod declump;
pub mod movement;
pub mod projectile_hits;
pub mod snapshot;
pub mod wave_spawner;

use glam::Vec2;

use swarmfall_core::config::Rules;
use swarmfall_core::types::Aabb;

/// Visible play area in world space for the given camera offset.
pub fn viewport(camera_offset: Vec2, rules: &Rules) -> Aabb {
    Aabb::new(
        camera_offset,
        Vec2::new(rules.viewport_width, rules.viewport_height),
    )
}
