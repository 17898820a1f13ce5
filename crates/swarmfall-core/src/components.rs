//! ECS components for hecs entities.
//!
//! Components are plain data structs with few methods.
//! Game logic lives in systems, not components.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Aabb;

/// Top-left corner of an entity's box in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Width and height of an entity's box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent(pub Vec2);

/// Hit points. `max` is the scaled maximum at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// A pursuing enemy, stats already scaled by the wave multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub tier: EnemyTier,
    /// Template key this enemy was built from.
    pub template: String,
    /// Pixels per tick. Never scaled by waves.
    pub move_speed: f32,
    pub contact_damage: f32,
    /// Stat multiplier applied at spawn.
    pub multiplier: f32,
}

/// Per-projectile immunity: projectile id -> timestamp of its last
/// applying hit on this enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImmunityLedger {
    pub hits: HashMap<u64, u64>,
}

/// Cosmetic hit flash. Does not gate damage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HitFlash {
    pub last_hit_ms: Option<u64>,
}

/// A live projectile. Owned by the weapon in loadout slot `weapon_slot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit direction.
    pub velocity: Vec2,
    /// Pixels per tick.
    pub speed: f32,
    pub damage: f32,
    pub pierce: bool,
    pub chain: bool,
    pub bounce: bool,
    pub created_ms: u64,
    pub duration_ms: u64,
    pub weapon_slot: usize,
}

/// Floating damage/heal number, removed once `expires_ms` passes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageNumber {
    pub value: f32,
    pub kind: NumberKind,
    pub expires_ms: u64,
}

impl ImmunityLedger {
    /// Whether `projectile_id` may damage this enemy at `now_ms`.
    pub fn can_hit(&self, projectile_id: u64, now_ms: u64, window_ms: u64) -> bool {
        match self.hits.get(&projectile_id) {
            Some(&last) => now_ms.saturating_sub(last) > window_ms,
            None => true,
        }
    }

    pub fn record(&mut self, projectile_id: u64, now_ms: u64) {
        self.hits.insert(projectile_id, now_ms);
    }
}

impl Projectile {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_ms) > self.duration_ms
    }
}

/// Box of an entity from its position and extent.
pub fn aabb(pos: &Position, extent: &Extent) -> Aabb {
    Aabb::new(pos.0, extent.0)
}
