//! Transient events emitted by the simulation for presentation feedback.
//!
//! Events are collected during a tick and handed out with that tick's
//! snapshot; they are never replayed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A projectile damaged an enemy.
    DamageDealt {
        enemy_id: u64,
        amount: f32,
        position: Vec2,
    },
    /// Lifesteal restored player health.
    Healed { amount: f32, current_hp: f32 },
    /// Enemies touching the player dealt contact damage.
    PlayerDamaged { amount: f32, current_hp: f32 },
    /// An enemy reached zero hp and was removed.
    EnemyDied {
        enemy_id: u64,
        tier: EnemyTier,
        position: Vec2,
    },
    /// The director spawned an enemy.
    EnemySpawned {
        enemy_id: u64,
        tier: EnemyTier,
        template: String,
        band: SpawnBand,
    },
    /// Difficulty moved up one wave.
    WaveAdvanced { wave: u32 },
    /// Active weapon changed.
    WeaponSwitched { slot: usize, name: String },
    /// A weapon was added to the loadout.
    WeaponGranted { slot: usize, name: String },
    /// A value left its valid range and was clamped back.
    InvariantClamped { what: String, value: f32 },
    /// Session ended.
    GameOver {
        reason: GameOverReason,
        wave: u32,
        kills: u32,
    },
}
