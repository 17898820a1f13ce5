//! Game state snapshot: the complete visible state handed to the frontend each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub kills: u32,
    pub player: PlayerView,
    /// Sorted by id.
    pub enemies: Vec<EnemyView>,
    /// Sorted by id.
    pub projectiles: Vec<ProjectileView>,
    pub damage_numbers: Vec<DamageNumberView>,
    /// Events emitted during this tick.
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub current_hp: f32,
    pub max_hp: f32,
    pub current_weapon: usize,
    /// Weapon template names in loadout order.
    pub weapons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub tier: EnemyTier,
    pub template: String,
    pub position: Vec2,
    pub size: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    /// Recently hit.
    pub flashing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub weapon_slot: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageNumberView {
    pub position: Vec2,
    pub value: f32,
    pub kind: NumberKind,
}
