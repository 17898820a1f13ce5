#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{MoveIntent, PlayerCommand, TickInput};
    use crate::components::{ImmunityLedger, Projectile};
    use crate::config::{ConfigError, GameConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{rotated, Aabb, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let inside = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(5.0, 5.0));
        let far = Aabb::new(Vec2::new(50.0, 50.0), Vec2::new(5.0, 5.0));

        assert!(!a.overlaps(&touching), "Shared edge should not collide");
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a), "Overlap should be symmetric");
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_aabb_center() {
        let a = Aabb::new(Vec2::new(500.0, 300.0), Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        assert_eq!(a.center(), Vec2::new(517.5, 317.5));
        assert_eq!(a.max(), Vec2::new(535.0, 335.0));
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let v = rotated(Vec2::X, std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert!((rotated(Vec2::new(3.0, 4.0), 1.234).length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(TICK_MS);
        }
        assert_eq!(time.tick, 60);
        assert_eq!(time.now_ms(), 960);
    }

    #[test]
    fn test_sim_time_saturates_on_huge_delta() {
        let mut time = SimTime::default();
        time.advance(u64::MAX - 5);
        time.advance(u64::MAX);
        assert_eq!(time.now_ms(), u64::MAX);
        assert_eq!(time.tick, 2);
    }

    // ---- Input ----

    #[test]
    fn test_diagonal_movement_not_normalized() {
        let intent = MoveIntent {
            up: true,
            right: true,
            ..Default::default()
        };
        let d = intent.displacement(5.0);
        assert_eq!(d, Vec2::new(5.0, -5.0));
        assert!(d.length() > 5.0, "Diagonal should be faster than cardinal");

        let opposed = MoveIntent {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(opposed.displacement(5.0), Vec2::ZERO);
    }

    #[test]
    fn test_tick_input_default_delta() {
        let input = TickInput::default();
        assert_eq!(input.delta_ms, TICK_MS);
        assert!(!input.fire);
        assert_eq!(input.cycle_weapon, 0);
    }

    // ---- Components ----

    #[test]
    fn test_immunity_ledger_window() {
        let mut ledger = ImmunityLedger::default();
        assert!(ledger.can_hit(7, 0, ENEMY_IMMUNITY_MS));

        ledger.record(7, 100);
        assert!(!ledger.can_hit(7, 100, ENEMY_IMMUNITY_MS));
        assert!(!ledger.can_hit(7, 1100, ENEMY_IMMUNITY_MS), "Window is exclusive");
        assert!(ledger.can_hit(7, 1101, ENEMY_IMMUNITY_MS));
        assert!(ledger.can_hit(8, 100, ENEMY_IMMUNITY_MS), "Other projectiles unaffected");
    }

    #[test]
    fn test_projectile_expiry() {
        let p = Projectile {
            velocity: Vec2::X,
            speed: 5.0,
            damage: 1.0,
            pierce: false,
            chain: false,
            bounce: false,
            created_ms: 1000,
            duration_ms: 2000,
            weapon_slot: 0,
        };
        assert!(!p.is_expired(3000));
        assert!(p.is_expired(3001));
    }

    // ---- Configuration ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.rules.final_wave, FINAL_WAVE);
        assert_eq!(config.rules.population_cap, POPULATION_CAP);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(back.weapons, config.weapons);
        assert_eq!(back.enemies, config.enemies);
        assert_eq!(back.rules, config.rules);
    }

    #[test]
    fn test_config_rules_default_when_omitted() {
        let json = r#"{
            "player": { "hp": 100, "move_speed": 5 },
            "starting_weapons": ["pistol"],
            "weapons": {
                "pistol": { "damage": 5, "cooldown_ms": 250, "bullet_speed": 6, "bullet_duration_ms": 1000 }
            },
            "enemies": { "grunt": { "hp": 20, "move_speed": 1, "damage": 10 } },
            "bosses": { "king": { "hp": 300, "move_speed": 0.5, "damage": 30, "width": 50, "height": 50 } }
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();
        let pistol = config.weapon("pistol").unwrap();
        assert!(!pistol.pierce && !pistol.chain && !pistol.bounce);
        assert_eq!(pistol.spread_radians, 0.0);
        assert_eq!(pistol.lifesteal_fraction, None);
        assert_eq!(config.enemies["grunt"].width, ENEMY_SIZE);
        assert_eq!(config.bosses["king"].width, 50.0);
        assert_eq!(config.rules.viewport_width, VIEWPORT_WIDTH);
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_config_rejects_unknown_starting_weapon() {
        let mut config = GameConfig::default();
        config.starting_weapons = vec!["railgun".into()];
        match config.validate() {
            Err(ConfigError::UnknownWeapon(name)) => assert_eq!(name, "railgun"),
            other => panic!("Expected UnknownWeapon, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_empty_tables() {
        let mut config = GameConfig::default();
        config.bosses.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTable("bosses"))
        ));

        let mut config = GameConfig::default();
        config.starting_weapons.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyLoadout)));
    }

    #[test]
    fn test_config_rejects_out_of_range_values() {
        let mut config = GameConfig::default();
        config.weapons.get_mut("default").unwrap().spread_radians = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "spread_radians",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.weapons.get_mut("leech").unwrap().lifesteal_fraction = Some(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "lifesteal_fraction",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.enemies.get_mut("default").unwrap().hp = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "hp", .. })
        ));

        let mut config = GameConfig::default();
        config.rules.final_wave = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.weapons.get_mut("default").unwrap().damage = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "damage", .. })
        ));
    }

    #[test]
    fn test_config_rejects_non_finite_spawn_box() {
        let mut doc = serde_json::to_value(GameConfig::default()).unwrap();
        doc["rules"]["spawn_box_size"] = serde_json::json!(1e300);
        let err = GameConfig::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "spawn_box_size",
                ..
            }
        ));

        let mut config = GameConfig::default();
        config.rules.spawn_box_size = f32::NAN;
        assert!(config.validate().is_err());
    }

    // ---- Boundary types ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::GrantWeapon {
                name: "lance".into(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_sim_event_tagged() {
        let event = SimEvent::GameOver {
            reason: GameOverReason::FinalWaveReached,
            wave: 10,
            kills: 42,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"GameOver\""));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        assert_eq!(snapshot.phase, GamePhase::Running);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, snapshot.time);
        assert!(back.enemies.is_empty());
    }
}
