//! Game configuration: player class, weapon and enemy templates, tunables.
//!
//! Loaded once by the embedder and validated before the engine starts. The
//! engine never re-reads configuration mid-session and never builds an
//! entity from a key that is not in these tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Stats of the player class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerClass {
    pub hp: f32,
    /// Pixels per tick per pressed axis.
    pub move_speed: f32,
}

/// Immutable weapon stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponTemplate {
    pub damage: f32,
    pub cooldown_ms: u64,
    #[serde(default)]
    pub pierce: bool,
    #[serde(default)]
    pub chain: bool,
    #[serde(default)]
    pub bounce: bool,
    /// Pixels per tick.
    pub bullet_speed: f32,
    pub bullet_duration_ms: u64,
    /// Half-angle of the spread cone. Must be below a quarter turn.
    #[serde(default)]
    pub spread_radians: f32,
    #[serde(default)]
    pub lifesteal_fraction: Option<f32>,
}

/// Base stats for a regular enemy or a boss, before wave scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub hp: f32,
    /// Pixels per tick.
    pub move_speed: f32,
    /// Contact damage.
    pub damage: f32,
    #[serde(default = "default_enemy_size")]
    pub width: f32,
    #[serde(default = "default_enemy_size")]
    pub height: f32,
}

fn default_enemy_size() -> f32 {
    ENEMY_SIZE
}

/// Tunables. Every field defaults to the matching constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub player_immunity_ms: u64,
    pub enemy_immunity_ms: u64,
    pub spawn_interval_ms: u64,
    pub population_cap: usize,
    pub wave_duration_ms: u64,
    pub final_wave: u32,
    pub bullet_cleanup_interval_ms: u64,
    pub deletion_offset: f32,
    pub spawn_box_offset: f32,
    pub spawn_box_size: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            player_immunity_ms: PLAYER_IMMUNITY_MS,
            enemy_immunity_ms: ENEMY_IMMUNITY_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            population_cap: POPULATION_CAP,
            wave_duration_ms: WAVE_DURATION_MS,
            final_wave: FINAL_WAVE,
            bullet_cleanup_interval_ms: BULLET_CLEANUP_INTERVAL_MS,
            deletion_offset: DELETION_OFFSET,
            spawn_box_offset: SPAWN_BOX_OFFSET,
            spawn_box_size: SPAWN_BOX_SIZE,
        }
    }
}

/// Complete configuration handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub player: PlayerClass,
    /// Weapon keys the player starts with; the first is active.
    pub starting_weapons: Vec<String>,
    pub weapons: BTreeMap<String, WeaponTemplate>,
    pub enemies: BTreeMap<String, EnemyTemplate>,
    pub bosses: BTreeMap<String, EnemyTemplate>,
    #[serde(default)]
    pub rules: Rules,
}

/// Configuration rejected at load time.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    EmptyTable(&'static str),
    EmptyLoadout,
    UnknownWeapon(String),
    InvalidValue {
        entry: String,
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::EmptyTable(table) => write!(f, "config table `{table}` is empty"),
            ConfigError::EmptyLoadout => write!(f, "starting loadout is empty"),
            ConfigError::UnknownWeapon(name) => write!(f, "unknown weapon template `{name}`"),
            ConfigError::InvalidValue {
                entry,
                field,
                reason,
            } => write!(f, "invalid `{field}` in `{entry}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a weapon template, failing on unknown keys.
    pub fn weapon(&self, name: &str) -> Result<&WeaponTemplate, ConfigError> {
        self.weapons
            .get(name)
            .ok_or_else(|| ConfigError::UnknownWeapon(name.to_string()))
    }

    /// Check every table and tunable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("player", "hp", self.player.hp)?;
        check_non_negative("player", "move_speed", self.player.move_speed)?;

        if self.weapons.is_empty() {
            return Err(ConfigError::EmptyTable("weapons"));
        }
        if self.enemies.is_empty() {
            return Err(ConfigError::EmptyTable("enemies"));
        }
        if self.bosses.is_empty() {
            return Err(ConfigError::EmptyTable("bosses"));
        }
        if self.starting_weapons.is_empty() {
            return Err(ConfigError::EmptyLoadout);
        }
        for name in &self.starting_weapons {
            self.weapon(name)?;
        }

        for (name, weapon) in &self.weapons {
            weapon.validate(name)?;
        }
        for (name, enemy) in self.enemies.iter().chain(self.bosses.iter()) {
            enemy.validate(name)?;
        }
        self.rules.validate()
    }
}

impl WeaponTemplate {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        check_positive(name, "damage", self.damage)?;
        check_positive(name, "bullet_speed", self.bullet_speed)?;
        check_non_negative(name, "spread_radians", self.spread_radians)?;
        if self.spread_radians >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::InvalidValue {
                entry: name.to_string(),
                field: "spread_radians",
                reason: "must be below a quarter turn",
            });
        }
        if let Some(fraction) = self.lifesteal_fraction {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ConfigError::InvalidValue {
                    entry: name.to_string(),
                    field: "lifesteal_fraction",
                    reason: "must be within 0..=1",
                });
            }
        }
        Ok(())
    }
}

impl EnemyTemplate {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        check_positive(name, "hp", self.hp)?;
        check_non_negative(name, "move_speed", self.move_speed)?;
        check_non_negative(name, "damage", self.damage)?;
        check_positive(name, "width", self.width)?;
        check_positive(name, "height", self.height)
    }
}

impl Rules {
    fn validate(&self) -> Result<(), ConfigError> {
        check_positive("rules", "viewport_width", self.viewport_width)?;
        check_positive("rules", "viewport_height", self.viewport_height)?;
        check_non_negative("rules", "deletion_offset", self.deletion_offset)?;
        check_non_negative("rules", "spawn_box_offset", self.spawn_box_offset)?;
        check_positive("rules", "spawn_box_size", self.spawn_box_size)?;
        if self.spawn_box_size <= self.spawn_box_offset {
            return Err(ConfigError::InvalidValue {
                entry: "rules".into(),
                field: "spawn_box_size",
                reason: "must exceed spawn_box_offset",
            });
        }
        if self.wave_duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                entry: "rules".into(),
                field: "wave_duration_ms",
                reason: "must be positive",
            });
        }
        if self.final_wave == 0 {
            return Err(ConfigError::InvalidValue {
                entry: "rules".into(),
                field: "final_wave",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn check_positive(entry: &str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            entry: entry.to_string(),
            field,
            reason: "must be a positive number",
        })
    }
}

fn check_non_negative(entry: &str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            entry: entry.to_string(),
            field,
            reason: "must be a non-negative number",
        })
    }
}

impl Default for GameConfig {
    /// Built-in tables: one starting gun, a few grantable ones, one enemy
    /// and one boss.
    fn default() -> Self {
        let mut weapons = BTreeMap::new();
        weapons.insert(
            "default".to_string(),
            WeaponTemplate {
                damage: 10.0,
                cooldown_ms: 500,
                pierce: false,
                chain: false,
                bounce: false,
                bullet_speed: 8.0,
                bullet_duration_ms: 2000,
                spread_radians: 0.1,
                lifesteal_fraction: None,
            },
        );
        weapons.insert(
            "lance".to_string(),
            WeaponTemplate {
                damage: 15.0,
                cooldown_ms: 900,
                pierce: true,
                chain: false,
                bounce: false,
                bullet_speed: 12.0,
                bullet_duration_ms: 1500,
                spread_radians: 0.0,
                lifesteal_fraction: None,
            },
        );
        weapons.insert(
            "ricochet".to_string(),
            WeaponTemplate {
                damage: 6.0,
                cooldown_ms: 300,
                pierce: false,
                chain: true,
                bounce: true,
                bullet_speed: 7.0,
                bullet_duration_ms: 4000,
                spread_radians: 0.3,
                lifesteal_fraction: None,
            },
        );
        weapons.insert(
            "leech".to_string(),
            WeaponTemplate {
                damage: 8.0,
                cooldown_ms: 400,
                pierce: false,
                chain: false,
                bounce: false,
                bullet_speed: 9.0,
                bullet_duration_ms: 2000,
                spread_radians: 0.15,
                lifesteal_fraction: Some(0.25),
            },
        );

        let mut enemies = BTreeMap::new();
        enemies.insert(
            "default".to_string(),
            EnemyTemplate {
                hp: 20.0,
                move_speed: 1.0,
                damage: 10.0,
                width: ENEMY_SIZE,
                height: ENEMY_SIZE,
            },
        );

        let mut bosses = BTreeMap::new();
        bosses.insert(
            "brute".to_string(),
            EnemyTemplate {
                hp: 200.0,
                move_speed: 1.0,
                damage: 25.0,
                width: ENEMY_SIZE * 2.0,
                height: ENEMY_SIZE * 2.0,
            },
        );

        Self {
            player: PlayerClass {
                hp: 100.0,
                move_speed: 5.0,
            },
            starting_weapons: vec!["default".to_string()],
            weapons,
            enemies,
            bosses,
            rules: Rules::default(),
        }
    }
}
