//! Enemy-enemy declumping and the off-screen leash.
//!
//! Pairs are resolved in id order against positions already moved by
//! earlier pairs this tick, then written back in one pass.

use glam::Vec2;
use hecs::{Entity, World};

use swarmfall_core::components::{Enemy, Extent, Position};
use swarmfall_core::config::Rules;
use swarmfall_core::constants::{DECLUMP_EPSILON, DECLUMP_NUDGE, LEASH_FRACTION, LEASH_PULL};
use swarmfall_core::types::{direction_to, Aabb};

pub fn run(world: &mut World, player_center: Vec2, rules: &Rules) {
    let mut bodies: Vec<(Entity, Vec2, Vec2)> = world
        .query::<(&Position, &Extent, &Enemy)>()
        .iter()
        .map(|(entity, (pos, extent, _))| (entity, pos.0, extent.0))
        .collect();
    bodies.sort_by_key(|(entity, _, _)| entity.id());

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let a = Aabb::new(bodies[i].1, bodies[i].2);
            let b = Aabb::new(bodies[j].1, bodies[j].2);
            if !a.overlaps(&b) {
                continue;
            }
            let d = separation(bodies[i].1, bodies[j].1);
            // Asymmetric: i takes a full step, j only a nudge.
            bodies[i].1 -= d;
            bodies[j].1 += d * DECLUMP_NUDGE;
        }
    }

    let leash = Vec2::new(rules.viewport_width, rules.viewport_height) * LEASH_FRACTION;
    for (_, pos, size) in bodies.iter_mut() {
        let center = *pos + *size * 0.5;
        let offset = player_center - center;
        if offset.x.abs() > leash.x || offset.y.abs() > leash.y {
            if let Some(dir) = direction_to(center, player_center) {
                *pos += dir * LEASH_PULL;
            }
        }
    }

    for (entity, pos, _) in bodies {
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            position.0 = pos;
        }
    }
}

/// Unit vector from `a` to `b`, or a fixed tiny vector when they are
/// aligned on an axis.
pub fn separation(a: Vec2, b: Vec2) -> Vec2 {
    let d = b - a;
    if d.x != 0.0 && d.y != 0.0 {
        d.normalize()
    } else {
        Vec2::from(DECLUMP_EPSILON)
    }
}
