//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing every tick.
    #[default]
    Running,
    /// Frozen; time does not advance.
    Paused,
    /// Terminal. Nothing advances any more.
    GameOver,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Player health reached zero.
    PlayerDied,
    /// The director reached the final wave.
    FinalWaveReached,
}

/// Enemy tier: regular spawns or wave-transition bosses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    #[default]
    Regular,
    Boss,
}

/// Off-screen border band an enemy is spawned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnBand {
    Top,
    Left,
    Right,
    Bottom,
}

impl SpawnBand {
    pub const ALL: [SpawnBand; 4] = [
        SpawnBand::Top,
        SpawnBand::Left,
        SpawnBand::Right,
        SpawnBand::Bottom,
    ];
}

/// Floating number shown above a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberKind {
    Damage,
    Heal,
}
