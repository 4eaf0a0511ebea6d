use serde::{Deserialize, Serialize};

/// A single observable combat action.
///
/// Events carry structured data; [`CombatEvent::message`] renders the
/// display line. Keeping the two apart lets tests assert on fields
/// instead of scraping printed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    StatusReport {
        name: String,
        health: u32,
        experience: u64,
    },
    PlayerAttack {
        name: String,
    },
    EnemyAttack {
        name: String,
    },
    DamageTaken {
        name: String,
        amount: u32,
        remaining: u32,
    },
    SpellCast {
        name: String,
    },
}

impl CombatEvent {
    /// Renders the display line for this event.
    pub fn message(&self) -> String {
        match self {
            CombatEvent::StatusReport {
                name,
                health,
                experience,
            } => format!("Player: {}, Health: {}, XP: {}", name, health, experience),
            CombatEvent::PlayerAttack { name } => format!("{} attacks with a sword!", name),
            CombatEvent::EnemyAttack { name } => format!("{} strikes viciously!", name),
            CombatEvent::DamageTaken {
                name,
                amount,
                remaining,
            } => format!("{} takes {} damage. Health = {}", name, amount, remaining),
            CombatEvent::SpellCast { name } => format!("{} casts a protective spell!", name),
        }
    }
}

/// Ordered sink for combat events.
///
/// Creature actions push here instead of printing, so the binary decides
/// where the text goes and tests never have to capture stdout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vec<CombatEvent>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CombatEvent) {
        self.entries.push(event);
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.entries
    }

    /// Renders every entry, one display line per event, in push order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(CombatEvent::message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_messages() {
        let status = CombatEvent::StatusReport {
            name: "Alex".to_string(),
            health: 100,
            experience: 5,
        };
        assert_eq!(status.message(), "Player: Alex, Health: 100, XP: 5");

        let attack = CombatEvent::PlayerAttack {
            name: "Alex".to_string(),
        };
        assert_eq!(attack.message(), "Alex attacks with a sword!");

        let strike = CombatEvent::EnemyAttack {
            name: "Orc".to_string(),
        };
        assert_eq!(strike.message(), "Orc strikes viciously!");

        let hit = CombatEvent::DamageTaken {
            name: "Alex".to_string(),
            amount: 20,
            remaining: 80,
        };
        assert_eq!(hit.message(), "Alex takes 20 damage. Health = 80");

        let spell = CombatEvent::SpellCast {
            name: "Alex".to_string(),
        };
        assert_eq!(spell.message(), "Alex casts a protective spell!");
    }

    #[test]
    fn test_log_preserves_push_order() {
        let mut log = CombatLog::new();
        log.push(CombatEvent::PlayerAttack {
            name: "A".to_string(),
        });
        log.push(CombatEvent::SpellCast {
            name: "B".to_string(),
        });

        assert_eq!(log.events().len(), 2);
        assert_eq!(
            log.messages(),
            vec!["A attacks with a sword!", "B casts a protective spell!"]
        );
    }
}
