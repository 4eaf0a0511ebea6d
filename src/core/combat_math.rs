//! Shared combat math functions.
//!
//! These pure functions calculate combat outcomes without side effects,
//! so the damage arithmetic stays testable apart from event logging.

/// Apply damage to HP, returning remaining HP.
///
/// # Arguments
/// * `current_hp` - Current HP before damage
/// * `damage` - Damage to apply
///
/// # Returns
/// HP remaining after damage (minimum 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Check if entity is still alive.
pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}
