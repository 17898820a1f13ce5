//! Kinematic integration system.
//!
//! Advances the player, enemies and projectiles once per tick. Speeds are
//! per tick, not per second; wall-clock delta is deliberately ignored.

use glam::Vec2;
use hecs::World;

use swarmfall_core::commands::MoveIntent;
use swarmfall_core::components::{aabb, Enemy, Extent, Position, Projectile};
use swarmfall_core::types::{direction_to, Aabb};

use crate::player::Player;

/// Apply held movement keys to the player.
pub fn run_player(player: &mut Player, intent: &MoveIntent) {
    player.position += intent.displacement(player.move_speed);
}

/// Move every enemy straight toward the player center.
pub fn run_enemies(world: &mut World, player_center: Vec2) {
    for (_entity, (pos, extent, enemy)) in world.query_mut::<(&mut Position, &Extent, &Enemy)>() {
        let center = aabb(pos, extent).center();
        if let Some(dir) = direction_to(center, player_center) {
            pos.0 += dir * enemy.move_speed;
        }
    }
}

/// Move every projectile, reflecting bounce projectiles off the viewport.
pub fn run_projectiles(world: &mut World, viewport: &Aabb) {
    for (_entity, (pos, extent, projectile)) in
        world.query_mut::<(&mut Position, &Extent, &mut Projectile)>()
    {
        if projectile.bounce {
            projectile.velocity = reflect_off_edges(aabb(pos, extent), projectile.velocity, viewport);
        }
        pos.0 += projectile.velocity * projectile.speed;
    }
}

/// Flip a velocity component when the box touches an edge it is moving into.
pub fn reflect_off_edges(body: Aabb, velocity: Vec2, viewport: &Aabb) -> Vec2 {
    let mut v = velocity;
    let (min, max) = (body.min, body.max());
    let (edge_min, edge_max) = (viewport.min, viewport.max());

    if (max.x >= edge_max.x && v.x > 0.0) || (min.x <= edge_min.x && v.x < 0.0) {
        v.x = -v.x;
    }
    if (max.y >= edge_max.y && v.y > 0.0) || (min.y <= edge_min.y && v.y < 0.0) {
        v.y = -v.y;
    }
    v
}
