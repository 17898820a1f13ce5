//! Projectile-enemy collision resolution.
//!
//! Every projectile is tested against every enemy in id order. Removals are
//! buffered and applied once the pass is over, so dead enemies and consumed
//! projectiles are simply skipped for the rest of the pass.

use hecs::{Entity, World};

use swarmfall_core::components::*;
use swarmfall_core::config::Rules;
use swarmfall_core::enums::{EnemyTier, NumberKind};
use swarmfall_core::events::SimEvent;
use swarmfall_core::types::Aabb;

use crate::player::Player;
use crate::world_setup;

pub fn run(
    world: &mut World,
    player: &mut Player,
    rules: &Rules,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut projectiles: Vec<(Entity, Aabb)> = world
        .query::<(&Position, &Extent, &Projectile)>()
        .iter()
        .map(|(entity, (pos, extent, _))| (entity, aabb(pos, extent)))
        .collect();
    projectiles.sort_by_key(|(entity, _)| entity.id());

    let mut enemies: Vec<(Entity, Aabb, EnemyTier)> = world
        .query::<(&Position, &Extent, &Enemy)>()
        .iter()
        .map(|(entity, (pos, extent, enemy))| (entity, aabb(pos, extent), enemy.tier))
        .collect();
    enemies.sort_by_key(|(entity, _, _)| entity.id());
    let mut dead = vec![false; enemies.len()];

    for (projectile_entity, projectile_box) in projectiles {
        let projectile_id = projectile_entity.to_bits().get();

        for (i, (enemy_entity, enemy_box, tier)) in enemies.iter().enumerate() {
            if dead[i] || !projectile_box.overlaps(enemy_box) {
                continue;
            }

            let (damage, pierce, chain, slot) = match world.get::<&Projectile>(projectile_entity) {
                Ok(p) => (p.damage, p.pierce, p.chain, p.weapon_slot),
                Err(_) => break,
            };

            let killed = {
                let Ok((health, ledger, flash)) = world
                    .query_one_mut::<(&mut Health, &mut ImmunityLedger, &mut HitFlash)>(*enemy_entity)
                else {
                    continue;
                };
                if !ledger.can_hit(projectile_id, now_ms, rules.enemy_immunity_ms) {
                    continue;
                }
                ledger.record(projectile_id, now_ms);
                flash.last_hit_ms = Some(now_ms);
                health.current -= damage;
                health.current <= 0.0
            };

            events.push(SimEvent::DamageDealt {
                enemy_id: enemy_entity.to_bits().get(),
                amount: damage,
                position: projectile_box.min,
            });
            world_setup::spawn_damage_number(
                world,
                projectile_box.min,
                damage,
                NumberKind::Damage,
                now_ms,
            );

            apply_lifesteal(world, player, slot, now_ms, events);

            if killed {
                dead[i] = true;
                despawn_buffer.push(*enemy_entity);
                player.kills += 1;
                events.push(SimEvent::EnemyDied {
                    enemy_id: enemy_entity.to_bits().get(),
                    tier: *tier,
                    position: enemy_box.min,
                });
            }

            if chain {
                if let Ok(mut p) = world.get::<&mut Projectile>(projectile_entity) {
                    p.velocity = -p.velocity;
                }
            } else if !pierce {
                despawn_buffer.push(projectile_entity);
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Heal the player by the firing weapon's lifesteal share of its damage.
fn apply_lifesteal(
    world: &mut World,
    player: &mut Player,
    slot: usize,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
) {
    let Some(weapon) = player.weapons.get(slot) else {
        return;
    };
    let Some(fraction) = weapon.template.lifesteal_fraction else {
        return;
    };
    let healed = player.heal(weapon.template.damage * fraction);
    if healed > 0.0 {
        events.push(SimEvent::Healed {
            amount: healed,
            current_hp: player.current_hp,
        });
        world_setup::spawn_damage_number(
            world,
            player.position,
            healed,
            NumberKind::Heal,
            now_ms,
        );
    }
}
