//! Core types and definitions for the TANKRANGE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, tuning and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod math;
pub mod state;
pub mod types;
