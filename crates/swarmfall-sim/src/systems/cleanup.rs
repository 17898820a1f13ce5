//! Expiration sweep: removes expired and out-of-bounds projectiles, expired
//! damage numbers, and stale immunity ledger entries.

use std::collections::HashSet;

use hecs::{Entity, World};

use swarmfall_core::components::*;
use swarmfall_core::config::Rules;
use swarmfall_core::types::Aabb;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
///
/// Out-of-bounds deletion only runs when the cleanup interval has elapsed
/// since `last_oob_sweep_ms`, which is then reset.
pub fn run(
    world: &mut World,
    viewport: &Aabb,
    rules: &Rules,
    now_ms: u64,
    last_oob_sweep_ms: &mut u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let sweep_bounds = now_ms.saturating_sub(*last_oob_sweep_ms) >= rules.bullet_cleanup_interval_ms;
    if sweep_bounds {
        *last_oob_sweep_ms = now_ms;
    }
    let margin = rules.deletion_offset;

    for (entity, (pos, extent, projectile)) in world.query_mut::<(&Position, &Extent, &Projectile)>() {
        if projectile.is_expired(now_ms) {
            despawn_buffer.push(entity);
            continue;
        }
        if sweep_bounds && !projectile.bounce && beyond(&aabb(pos, extent), viewport, margin) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, number) in world.query_mut::<&DamageNumber>() {
        if now_ms >= number.expires_ms {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let live: HashSet<u64> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, _)| entity.to_bits().get())
        .collect();
    for (_entity, ledger) in world.query_mut::<&mut ImmunityLedger>() {
        ledger.hits.retain(|id, _| live.contains(id));
    }
}

/// Whether any side of `body` reaches more than `margin` past the matching
/// viewport edge.
fn beyond(body: &Aabb, viewport: &Aabb, margin: f32) -> bool {
    let (min, max) = (body.min, body.max());
    let (edge_min, edge_max) = (viewport.min, viewport.max());
    min.x < edge_min.x - margin
        || max.x > edge_max.x + margin
        || min.y < edge_min.y - margin
        || max.y > edge_max.y + margin
}
