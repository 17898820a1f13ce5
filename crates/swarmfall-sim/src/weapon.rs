//! Weapons: fire-rate gating, spread sampling and projectile spawning.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use swarmfall_core::components::Projectile;
use swarmfall_core::config::WeaponTemplate;
use swarmfall_core::constants::MUZZLE_DISTANCE;
use swarmfall_core::types::{direction_to, rotated};

use crate::world_setup;

/// A weapon in the player's loadout.
///
/// The projectiles it fired live in the ECS world tagged with its loadout
/// slot; see [`live_projectiles`].
#[derive(Debug, Clone)]
pub struct Weapon {
    pub name: String,
    pub template: WeaponTemplate,
    /// `None` until the first shot, so a fresh weapon fires immediately.
    pub last_shoot_ms: Option<u64>,
    /// Unit aim direction, kept when the pointer sits on the player center.
    pub aim: Vec2,
}

impl Weapon {
    pub fn new(name: impl Into<String>, template: WeaponTemplate) -> Self {
        Self {
            name: name.into(),
            template,
            last_shoot_ms: None,
            aim: Vec2::X,
        }
    }

    /// Point at `target` from `origin`. A zero-length aim keeps the previous
    /// direction.
    pub fn aim_at(&mut self, origin: Vec2, target: Vec2) {
        if let Some(dir) = direction_to(origin, target) {
            self.aim = dir;
        }
    }

    pub fn is_ready(&self, now_ms: u64) -> bool {
        match self.last_shoot_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.template.cooldown_ms,
            None => true,
        }
    }

    pub fn muzzle(&self, origin: Vec2) -> Vec2 {
        origin + self.aim * MUZZLE_DISTANCE
    }

    /// Draw a fire direction inside the spread cone.
    ///
    /// The two cone edges are blended with independent uniform weights, so
    /// directions cluster around the aim rather than spreading evenly.
    pub fn sample_direction<R: Rng>(&self, rng: &mut R) -> Vec2 {
        let spread = self.template.spread_radians;
        let left = rotated(self.aim, spread);
        let right = rotated(self.aim, -spread);
        let r1: f32 = rng.gen();
        let r2: f32 = rng.gen();
        (left * r1 + right * r2).try_normalize().unwrap_or(self.aim)
    }

    /// Fire one projectile from `origin` (the player center) if the cooldown
    /// has elapsed.
    pub fn fire<R: Rng>(
        &mut self,
        world: &mut World,
        rng: &mut R,
        slot: usize,
        origin: Vec2,
        now_ms: u64,
    ) -> Option<Entity> {
        if !self.is_ready(now_ms) {
            return None;
        }
        let direction = self.sample_direction(rng);
        self.last_shoot_ms = Some(now_ms);
        Some(world_setup::spawn_projectile(
            world,
            self.muzzle(origin),
            direction,
            &self.template,
            slot,
            now_ms,
        ))
    }
}

/// Live projectiles owned by the weapon in `slot`, in id order.
pub fn live_projectiles(world: &World, slot: usize) -> Vec<Entity> {
    let mut owned: Vec<Entity> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, projectile)| projectile.weapon_slot == slot)
        .map(|(entity, _)| entity)
        .collect();
    owned.sort_by_key(|e| e.id());
    owned
}
