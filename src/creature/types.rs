use serde::{Deserialize, Serialize};

use crate::core::combat_math;
use crate::core::constants::ATTACK_XP_REWARD;

use super::log::{CombatEvent, CombatLog};

/// Name and health shared by every creature variant.
///
/// Variants own a `Vitals` instead of inheriting fields; the damage floor
/// lives here so no variant can drive health below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    name: String,
    health: u32,
}

impl Vitals {
    /// Constructor arguments are not validated: empty names are accepted.
    pub fn new(name: String, health: u32) -> Self {
        Self { name, health }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Applies damage with the zero floor, returning remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = combat_math::apply_damage(self.health, amount);
        self.health
    }
}

/// Shared capability set, polymorphic over [`Player`] and [`Enemy`].
pub trait Creature {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Variant-specific attack. Each variant logs its own event and applies
    /// its own side effects. Total: no failure modes.
    fn perform_attack(&mut self, log: &mut CombatLog);

    fn name(&self) -> &str {
        self.vitals().name()
    }

    fn current_health(&self) -> u32 {
        self.vitals().health()
    }

    /// Reduces health by `amount`, floored at zero, and logs the name,
    /// amount, and remaining health. Zero damage still logs.
    fn apply_damage(&mut self, amount: u32, log: &mut CombatLog) {
        let remaining = self.vitals_mut().take_damage(amount);
        log.push(CombatEvent::DamageTaken {
            name: self.name().to_string(),
            amount,
            remaining,
        });
    }
}

/// Player-controlled creature. Gains experience from attacking and knows
/// one spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    vitals: Vitals,
    experience: u64,
}

impl Player {
    pub fn new(name: String, health: u32, experience: u64) -> Self {
        Self {
            vitals: Vitals::new(name, health),
            experience,
        }
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Fixed flavor action; changes no state.
    pub fn cast_spell(&self, log: &mut CombatLog) {
        log.push(CombatEvent::SpellCast {
            name: self.name().to_string(),
        });
    }

    /// Logs name, health, and experience. Pure observer.
    pub fn report_status(&self, log: &mut CombatLog) {
        log.push(CombatEvent::StatusReport {
            name: self.name().to_string(),
            health: self.current_health(),
            experience: self.experience,
        });
    }
}

impl Creature for Player {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn perform_attack(&mut self, log: &mut CombatLog) {
        log.push(CombatEvent::PlayerAttack {
            name: self.name().to_string(),
        });
        self.experience += ATTACK_XP_REWARD;
    }
}

/// Hostile creature. Attacks are flavor only; no stat changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    vitals: Vitals,
}

impl Enemy {
    pub fn new(name: String, health: u32) -> Self {
        Self {
            vitals: Vitals::new(name, health),
        }
    }
}

impl Creature for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn perform_attack(&mut self, log: &mut CombatLog) {
        log.push(CombatEvent::EnemyAttack {
            name: self.name().to_string(),
        });
    }
}
