//! Wave director: timed spawning, population cap, wave escalation and boss
//! injection.

use std::collections::BTreeMap;

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmfall_core::components::Enemy;
use swarmfall_core::config::{EnemyTemplate, GameConfig, Rules};
use swarmfall_core::constants::{BOSS_SCALING_DIVISOR, WAVE_SCALING};
use swarmfall_core::enums::{EnemyTier, SpawnBand};
use swarmfall_core::events::SimEvent;

use crate::world_setup;

/// Spawn and wave bookkeeping. `current_wave` only increases.
#[derive(Debug, Clone, Default)]
pub struct WaveDirector {
    pub current_wave: u32,
    /// Session time of the last spawn; the session start counts as one.
    pub last_spawn_ms: u64,
}

impl WaveDirector {
    /// Stat multiplier for a regular enemy spawned during `wave`.
    pub fn regular_multiplier(wave: u32) -> f32 {
        1.0 + WAVE_SCALING * wave as f32
    }

    /// Stat multiplier for the boss that opens `wave`.
    pub fn boss_multiplier(wave: u32) -> f32 {
        1.0 + WAVE_SCALING * wave as f32 / BOSS_SCALING_DIVISOR
    }

    fn spawn_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_spawn_ms) > interval_ms
    }

    /// Whether elapsed session time has moved past the current wave.
    fn wave_due(&self, now_ms: u64, wave_duration_ms: u64) -> bool {
        now_ms / wave_duration_ms > self.current_wave as u64
    }
}

/// Random point in a border band around the viewport at `camera_offset`.
pub fn band_point(
    rng: &mut ChaCha8Rng,
    band: SpawnBand,
    camera_offset: Vec2,
    rules: &Rules,
) -> Vec2 {
    let (w, h) = (rules.viewport_width, rules.viewport_height);
    let (near, far) = (rules.spawn_box_offset, rules.spawn_box_size);
    let local = match band {
        SpawnBand::Top => Vec2::new(rng.gen_range(0.0..=w), rng.gen_range(-far..=-near)),
        SpawnBand::Left => Vec2::new(rng.gen_range(-far..=-near), rng.gen_range(0.0..=h)),
        SpawnBand::Right => Vec2::new(rng.gen_range(w + near..=w + far), rng.gen_range(0.0..=h)),
        SpawnBand::Bottom => Vec2::new(rng.gen_range(0.0..=w), rng.gen_range(h + near..=h + far)),
    };
    local + camera_offset
}

/// Uniform choice from a template table.
fn pick<'a>(
    rng: &mut ChaCha8Rng,
    table: &'a BTreeMap<String, EnemyTemplate>,
) -> Option<(&'a String, &'a EnemyTemplate)> {
    if table.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..table.len());
    table.iter().nth(index)
}

/// Spawn at most one enemy or boss this tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    config: &GameConfig,
    camera_offset: Vec2,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
) {
    let rules = &config.rules;
    if !director.spawn_due(now_ms, rules.spawn_interval_ms) {
        return;
    }
    let population = world.query::<&Enemy>().iter().count();
    if population >= rules.population_cap {
        return;
    }
    director.last_spawn_ms = now_ms;

    let band = SpawnBand::ALL[rng.gen_range(0..SpawnBand::ALL.len())];
    let position = band_point(rng, band, camera_offset, rules);

    let (tier, table, multiplier) = if director.wave_due(now_ms, rules.wave_duration_ms) {
        director.current_wave += 1;
        log::info!("wave {} begins at {now_ms} ms", director.current_wave);
        events.push(SimEvent::WaveAdvanced {
            wave: director.current_wave,
        });
        (
            EnemyTier::Boss,
            &config.bosses,
            WaveDirector::boss_multiplier(director.current_wave),
        )
    } else {
        (
            EnemyTier::Regular,
            &config.enemies,
            WaveDirector::regular_multiplier(director.current_wave),
        )
    };

    let Some((name, template)) = pick(rng, table) else {
        return;
    };
    let entity = world_setup::spawn_enemy(world, name, template, tier, multiplier, position);
    match tier {
        EnemyTier::Boss => log::info!("boss `{name}` spawned x{multiplier:.2} at {band:?}"),
        EnemyTier::Regular => log::debug!("enemy `{name}` spawned x{multiplier:.2} at {band:?}"),
    }
    events.push(SimEvent::EnemySpawned {
        enemy_id: entity.to_bits().get(),
        tier,
        template: name.clone(),
        band,
    });
}
