//! Creature variants, shared vitals, and the combat event log.

pub mod log;
pub mod types;

pub use log::*;
pub use types::*;
