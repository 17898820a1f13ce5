//! Player data model: health, movement, kill count and the weapon loadout.
//!
//! Stored directly in `SimulationEngine`, NOT as an ECS entity. The player is
//! created once per session and never despawned.

use glam::Vec2;

use swarmfall_core::config::PlayerClass;
use swarmfall_core::constants::{PLAYER_HEIGHT, PLAYER_WIDTH};
use swarmfall_core::types::Aabb;

use crate::weapon::Weapon;

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left of the player box.
    pub position: Vec2,
    pub size: Vec2,
    pub max_hp: f32,
    pub current_hp: f32,
    /// Pixels per tick per pressed axis.
    pub move_speed: f32,
    pub kills: u32,
    /// Loadout in acquisition order. Never empty.
    pub weapons: Vec<Weapon>,
    pub current_weapon: usize,
    /// `None` until the first contact gate opens.
    pub last_damage_taken_ms: Option<u64>,
}

impl Player {
    pub fn new(class: &PlayerClass, position: Vec2, weapons: Vec<Weapon>) -> Self {
        Self {
            position,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            max_hp: class.hp,
            current_hp: class.hp,
            move_speed: class.move_speed,
            kills: 0,
            weapons,
            current_weapon: 0,
            last_damage_taken_ms: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.aabb().center()
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    pub fn active_weapon(&self) -> Option<&Weapon> {
        self.weapons.get(self.current_weapon)
    }

    pub fn active_weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.current_weapon)
    }

    /// Step the active weapon by `direction` slots, wrapping. Returns the new
    /// slot, or `None` if nothing changed.
    pub fn cycle_weapon(&mut self, direction: i32) -> Option<usize> {
        let len = self.weapons.len();
        if len < 2 || direction == 0 {
            return None;
        }
        let next = (self.current_weapon as i64 + direction.signum() as i64).rem_euclid(len as i64);
        self.current_weapon = next as usize;
        Some(self.current_weapon)
    }

    pub fn has_weapon(&self, name: &str) -> bool {
        self.weapons.iter().any(|w| w.name == name)
    }

    /// Append a weapon unless one with the same name is owned. Returns its slot.
    pub fn grant_weapon(&mut self, weapon: Weapon) -> Option<usize> {
        if self.has_weapon(&weapon.name) {
            return None;
        }
        self.weapons.push(weapon);
        Some(self.weapons.len() - 1)
    }

    /// Heal up to `max_hp`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount).min(self.max_hp);
        (self.current_hp - before).max(0.0)
    }

    /// Whether contact damage may apply at `now_ms`.
    pub fn damage_gate_open(&self, now_ms: u64, window_ms: u64) -> bool {
        match self.last_damage_taken_ms {
            Some(last) => now_ms.saturating_sub(last) > window_ms,
            None => true,
        }
    }

    /// Force `current_hp` back into `0..=max_hp`. Returns the offending value
    /// when a clamp happened.
    pub fn clamp_hp(&mut self) -> Option<f32> {
        let raw = self.current_hp;
        if raw.is_nan() {
            self.current_hp = 0.0;
            return Some(raw);
        }
        let clamped = raw.clamp(0.0, self.max_hp);
        if clamped != raw {
            self.current_hp = clamped;
            Some(raw)
        } else {
            None
        }
    }
}
