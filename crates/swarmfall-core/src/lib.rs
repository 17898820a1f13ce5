//! Core types and definitions for the SWARMFALL simulation.
//!
//! This crate defines the vocabulary shared by the engine and its embedders:
//! components, commands and tick input, state snapshots, events, constants
//! and configuration templates. It has no dependency on the ECS or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
