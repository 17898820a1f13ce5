//! Entity spawn factories.
//!
//! Creates enemies, projectiles and damage numbers with the appropriate
//! component bundles.

use glam::Vec2;
use hecs::{Entity, World};

use swarmfall_core::components::*;
use swarmfall_core::config::{EnemyTemplate, WeaponTemplate};
use swarmfall_core::constants::{BULLET_SIZE, DAMAGE_NUMBER_LIFETIME_MS};
use swarmfall_core::enums::{EnemyTier, NumberKind};

/// Spawn an enemy from a template, scaling hp and contact damage (never
/// speed) by `multiplier`.
pub fn spawn_enemy(
    world: &mut World,
    name: &str,
    template: &EnemyTemplate,
    tier: EnemyTier,
    multiplier: f32,
    position: Vec2,
) -> Entity {
    let max_hp = template.hp * multiplier;
    world.spawn((
        Enemy {
            tier,
            template: name.to_string(),
            move_speed: template.move_speed,
            contact_damage: template.damage * multiplier,
            multiplier,
        },
        Position(position),
        Extent(Vec2::new(template.width, template.height)),
        Health {
            current: max_hp,
            max: max_hp,
        },
        ImmunityLedger::default(),
        HitFlash::default(),
    ))
}

/// Spawn a projectile with its top-left at `position`.
pub fn spawn_projectile(
    world: &mut World,
    position: Vec2,
    direction: Vec2,
    template: &WeaponTemplate,
    weapon_slot: usize,
    now_ms: u64,
) -> Entity {
    world.spawn((
        Projectile {
            velocity: direction,
            speed: template.bullet_speed,
            damage: template.damage,
            pierce: template.pierce,
            chain: template.chain,
            bounce: template.bounce,
            created_ms: now_ms,
            duration_ms: template.bullet_duration_ms,
            weapon_slot,
        },
        Position(position),
        Extent(Vec2::splat(BULLET_SIZE)),
    ))
}

/// Spawn a floating number that expires after a fixed lifetime.
pub fn spawn_damage_number(
    world: &mut World,
    position: Vec2,
    value: f32,
    kind: NumberKind,
    now_ms: u64,
) -> Entity {
    world.spawn((
        DamageNumber {
            value,
            kind,
            expires_ms: now_ms.saturating_add(DAMAGE_NUMBER_LIFETIME_MS),
        },
        Position(position),
    ))
}
