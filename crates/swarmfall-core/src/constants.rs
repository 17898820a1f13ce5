//! Simulation constants and tuning defaults.
//!
//! Values that a configuration may override are mirrored in
//! [`crate::config::Rules`]; these are its defaults.

/// Nominal simulation tick rate (Hz). Movement is per tick, so running at a
/// different cadence changes game speed.
pub const TICK_RATE: u32 = 60;

/// Default wall-clock milliseconds per tick.
pub const TICK_MS: u64 = 1000 / TICK_RATE as u64;

// --- Viewport ---

pub const VIEWPORT_WIDTH: f32 = 1000.0;
pub const VIEWPORT_HEIGHT: f32 = 600.0;

// --- Player ---

pub const PLAYER_WIDTH: f32 = 35.0;
pub const PLAYER_HEIGHT: f32 = 35.0;

/// Contact damage gate (ms).
pub const PLAYER_IMMUNITY_MS: u64 = 500;

// --- Enemies ---

pub const ENEMY_SIZE: f32 = 20.0;

/// Per-projectile immunity window on enemies (ms).
pub const ENEMY_IMMUNITY_MS: u64 = 1000;

/// How long an enemy reports `flashing` after a hit (ms).
pub const HIT_FLASH_MS: u64 = 100;

/// Substitute separation vector when two overlapping enemies are aligned
/// on an axis.
pub const DECLUMP_EPSILON: (f32, f32) = (0.01, 0.0);

/// Fraction of the separation vector applied to the second enemy of a pair.
pub const DECLUMP_NUDGE: f32 = 0.01;

/// Enemies further than this fraction of the viewport from the player, on
/// either axis, are leashed back.
pub const LEASH_FRACTION: f32 = 0.8;

/// Extra pull (pixels per tick) applied to leashed enemies.
pub const LEASH_PULL: f32 = 2.0;

// --- Projectiles ---

pub const BULLET_SIZE: f32 = 3.0;

/// Distance from the player center to the muzzle.
pub const MUZZLE_DISTANCE: f32 = 15.0;

/// Non-bounce projectiles this far past a viewport edge are removed.
pub const DELETION_OFFSET: f32 = 300.0;

/// Out-of-bounds projectile cleanup period (ms).
pub const BULLET_CLEANUP_INTERVAL_MS: u64 = 5000;

/// Lifetime of a floating damage number (ms).
pub const DAMAGE_NUMBER_LIFETIME_MS: u64 = 600;

// --- Director ---

pub const SPAWN_INTERVAL_MS: u64 = 1000;
pub const POPULATION_CAP: usize = 30;

/// Spawn bands sit between these distances beyond the viewport edge.
pub const SPAWN_BOX_OFFSET: f32 = 50.0;
pub const SPAWN_BOX_SIZE: f32 = 300.0;

pub const WAVE_DURATION_MS: u64 = 60_000;

/// Reaching this wave ends the session.
pub const FINAL_WAVE: u32 = 10;

/// Stat increase per wave for regular enemies.
pub const WAVE_SCALING: f32 = 0.3;

/// Bosses scale at half the regular rate.
pub const BOSS_SCALING_DIVISOR: f32 = 2.0;
