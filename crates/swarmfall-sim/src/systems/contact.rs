//! Player-enemy contact damage behind the player's immunity gate.

use hecs::{Entity, World};

use swarmfall_core::components::{aabb, Enemy, Extent, Position};
use swarmfall_core::config::Rules;
use swarmfall_core::events::SimEvent;

use crate::player::Player;

/// Once the gate opens it closes again immediately, and every enemy
/// overlapping the player at that instant deals its contact damage.
pub fn run(
    world: &World,
    player: &mut Player,
    rules: &Rules,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
) {
    if !player.damage_gate_open(now_ms, rules.player_immunity_ms) {
        return;
    }
    player.last_damage_taken_ms = Some(now_ms);

    let player_box = player.aabb();
    let mut touching: Vec<(Entity, f32)> = world
        .query::<(&Position, &Extent, &Enemy)>()
        .iter()
        .filter(|(_, (pos, extent, _))| aabb(pos, extent).overlaps(&player_box))
        .map(|(entity, (_, _, enemy))| (entity, enemy.contact_damage))
        .collect();
    if touching.is_empty() {
        return;
    }
    touching.sort_by_key(|(entity, _)| entity.id());

    let mut total = 0.0;
    for (_, damage) in touching {
        player.current_hp -= damage;
        total += damage;
    }
    player.current_hp = player.current_hp.max(0.0);
    events.push(SimEvent::PlayerDamaged {
        amount: total,
        current_hp: player.current_hp,
    });
}
