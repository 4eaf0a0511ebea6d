//! The fixed demo scenario.
//!
//! Runs headless against a [`CombatLog`] so tests can assert on the exact
//! transcript without capturing stdout; the binary prints the same log.

use crate::core::constants::{
    DEMO_DAMAGE_AMOUNT, DEMO_PLAYER_HEALTH, DEMO_PLAYER_NAME, DEMO_PLAYER_XP,
};
use crate::creature::{CombatLog, Creature, Player};

/// Runs the full demo sequence into `log`: status report, attack, one hit
/// taken, spell cast. The sequence is hardcoded and not configurable.
pub fn run_demo(log: &mut CombatLog) {
    let mut player = Player::new(
        DEMO_PLAYER_NAME.to_string(),
        DEMO_PLAYER_HEALTH,
        DEMO_PLAYER_XP,
    );
    player.report_status(log);
    player.perform_attack(log);
    player.apply_damage(DEMO_DAMAGE_AMOUNT, log);
    player.cast_spell(log);
}
