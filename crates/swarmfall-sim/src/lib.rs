//! Simulation engine for SWARMFALL.
//!
//! Owns the hecs ECS world, the player and the wave director, runs systems
//! once per fixed tick, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod player;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use swarmfall_core as core;
