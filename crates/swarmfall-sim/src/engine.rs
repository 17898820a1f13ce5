//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player and the wave
//! director, processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use swarmfall_core::commands::{PlayerCommand, TickInput};
use swarmfall_core::config::{ConfigError, GameConfig};
use swarmfall_core::constants::{PLAYER_HEIGHT, PLAYER_WIDTH};
use swarmfall_core::enums::{GameOverReason, GamePhase};
use swarmfall_core::events::SimEvent;
use swarmfall_core::state::GameStateSnapshot;
use swarmfall_core::types::SimTime;

use crate::player::Player;
use crate::systems;
use crate::systems::wave_spawner::WaveDirector;
use crate::weapon::{self, Weapon};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a session config from JSON. Missing fields take their defaults;
    /// the game tables are validated by `SimulationEngine::new`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Player,
    director: WaveDirector,
    last_oob_sweep_ms: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine, validating the configuration first.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let game = config.game;
        game.validate()?;

        let mut weapons = Vec::with_capacity(game.starting_weapons.len());
        for name in &game.starting_weapons {
            weapons.push(Weapon::new(name.as_str(), game.weapon(name)?.clone()));
        }
        let start = Vec2::new(
            (game.rules.viewport_width - PLAYER_WIDTH) / 2.0,
            (game.rules.viewport_height - PLAYER_HEIGHT) / 2.0,
        );
        let player = Player::new(&game.player, start, weapons);

        Ok(Self {
            world: World::new(),
            config: game,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player,
            director: WaveDirector::default(),
            last_oob_sweep_ms: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Time only moves while running; a paused or finished session still
    /// processes commands and reports a snapshot.
    pub fn tick(&mut self, input: &TickInput) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.time.advance(input.delta_ms);
            self.run_systems(input);
            self.evaluate_game_over();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.player,
            &self.time,
            self.phase,
            self.director.current_wave,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn wave(&self) -> u32 {
        self.director.current_wave
    }

    pub fn kills(&self) -> u32 {
        self.player.kills
    }

    /// Live projectiles fired by the weapon in loadout `slot`.
    pub fn projectiles_of(&self, slot: usize) -> Vec<Entity> {
        weapon::live_projectiles(&self.world, slot)
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a regular enemy from the named template at `position`, unscaled.
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, name: &str, position: Vec2) -> Entity {
        let template = self.config.enemies[name].clone();
        crate::world_setup::spawn_enemy(
            &mut self.world,
            name,
            &template,
            swarmfall_core::enums::EnemyTier::Regular,
            1.0,
            position,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::GrantWeapon { name } => {
                let Ok(template) = self.config.weapon(&name) else {
                    log::warn!("ignoring grant of unknown weapon `{name}`");
                    return;
                };
                let weapon = Weapon::new(name.as_str(), template.clone());
                match self.player.grant_weapon(weapon) {
                    Some(slot) => {
                        log::debug!("weapon `{name}` granted in slot {slot}");
                        self.events.push(SimEvent::WeaponGranted { slot, name });
                    }
                    None => log::debug!("weapon `{name}` already owned"),
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &TickInput) {
        let now_ms = self.time.now_ms();
        let viewport = systems::viewport(input.camera_offset, &self.config.rules);

        // 1. Weapon cycle and aim
        if let Some(slot) = self.player.cycle_weapon(input.cycle_weapon) {
            let name = self.player.weapons[slot].name.clone();
            log::debug!("switched to weapon `{name}` in slot {slot}");
            self.events.push(SimEvent::WeaponSwitched { slot, name });
        }
        let origin = self.player.center();
        let slot = self.player.current_weapon;
        if let Some(active) = self.player.active_weapon_mut() {
            active.aim_at(origin, input.aim_target);
            // 2. Fire
            if input.fire {
                active.fire(&mut self.world, &mut self.rng, slot, origin, now_ms);
            }
        }

        // 3. Movement integration
        systems::movement::run_player(&mut self.player, &input.movement);
        let player_center = self.player.center();
        systems::movement::run_enemies(&mut self.world, player_center);
        systems::movement::run_projectiles(&mut self.world, &viewport);

        // 4. Collision resolution
        systems::declump::run(&mut self.world, player_center, &self.config.rules);
        systems::projectile_hits::run(
            &mut self.world,
            &mut self.player,
            &self.config.rules,
            now_ms,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::contact::run(
            &self.world,
            &mut self.player,
            &self.config.rules,
            now_ms,
            &mut self.events,
        );
        self.enforce_hp_bounds();

        // 5. Spawn director
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            &self.config,
            input.camera_offset,
            now_ms,
            &mut self.events,
        );

        // 6. Expiration sweep
        systems::cleanup::run(
            &mut self.world,
            &viewport,
            &self.config.rules,
            now_ms,
            &mut self.last_oob_sweep_ms,
            &mut self.despawn_buffer,
        );
    }

    fn enforce_hp_bounds(&mut self) {
        if let Some(raw) = self.player.clamp_hp() {
            log::warn!("player hp {raw} out of range, clamped to {}", self.player.current_hp);
            self.events.push(SimEvent::InvariantClamped {
                what: "player.current_hp".into(),
                value: raw,
            });
        }
    }

    /// End the session on player death or when the final wave is reached.
    fn evaluate_game_over(&mut self) {
        let reason = if !self.player.is_alive() {
            GameOverReason::PlayerDied
        } else if self.director.current_wave >= self.config.rules.final_wave {
            GameOverReason::FinalWaveReached
        } else {
            return;
        };

        self.phase = GamePhase::GameOver;
        let (wave, kills) = (self.director.current_wave, self.player.kills);
        log::info!("game over: {reason:?} at wave {wave} with {kills} kills");
        self.events.push(SimEvent::GameOver { reason, wave, kills });
    }
}
