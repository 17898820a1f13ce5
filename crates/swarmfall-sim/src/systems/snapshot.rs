//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use swarmfall_core::components::*;
use swarmfall_core::constants::HIT_FLASH_MS;
use swarmfall_core::enums::GamePhase;
use swarmfall_core::events::SimEvent;
use swarmfall_core::state::*;
use swarmfall_core::types::SimTime;

use crate::player::Player;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    player: &Player,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let now_ms = time.now_ms();
    GameStateSnapshot {
        time: *time,
        phase,
        wave,
        kills: player.kills,
        player: build_player(player),
        enemies: build_enemies(world, now_ms),
        projectiles: build_projectiles(world),
        damage_numbers: build_damage_numbers(world),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        size: player.size,
        current_hp: player.current_hp,
        max_hp: player.max_hp,
        current_weapon: player.current_weapon,
        weapons: player.weapons.iter().map(|w| w.name.clone()).collect(),
    }
}

fn build_enemies(world: &World, now_ms: u64) -> Vec<EnemyView> {
    let mut views: Vec<(u32, EnemyView)> = world
        .query::<(&Enemy, &Position, &Extent, &Health, &HitFlash)>()
        .iter()
        .map(|(entity, (enemy, pos, extent, health, flash))| {
            let flashing = flash
                .last_hit_ms
                .is_some_and(|hit| now_ms.saturating_sub(hit) < HIT_FLASH_MS);
            (
                entity.id(),
                EnemyView {
                    id: entity.to_bits().get(),
                    tier: enemy.tier,
                    template: enemy.template.clone(),
                    position: pos.0,
                    size: extent.0,
                    hp: health.current,
                    max_hp: health.max,
                    flashing,
                },
            )
        })
        .collect();
    views.sort_by_key(|(index, _)| *index);
    views.into_iter().map(|(_, view)| view).collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<(u32, ProjectileView)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| {
            (
                entity.id(),
                ProjectileView {
                    id: entity.to_bits().get(),
                    position: pos.0,
                    velocity: projectile.velocity,
                    weapon_slot: projectile.weapon_slot,
                },
            )
        })
        .collect();
    views.sort_by_key(|(index, _)| *index);
    views.into_iter().map(|(_, view)| view).collect()
}

fn build_damage_numbers(world: &World) -> Vec<DamageNumberView> {
    let mut views: Vec<(u32, DamageNumberView)> = world
        .query::<(&DamageNumber, &Position)>()
        .iter()
        .map(|(entity, (number, pos))| {
            (
                entity.id(),
                DamageNumberView {
                    position: pos.0,
                    value: number.value,
                    kind: number.kind,
                },
            )
        })
        .collect();
    views.sort_by_key(|(index, _)| *index);
    views.into_iter().map(|(_, view)| view).collect()
}
