//! Skirmish - Creature Combat Demo Library
//!
//! This module exposes the creature logic for testing and external use.

// Allow dead code in library - some items are only used by the binary
#![allow(dead_code)]

pub mod core;
pub mod creature;
pub mod scenario;

pub use creature::{CombatEvent, CombatLog, Creature, Enemy, Player, Vitals};
