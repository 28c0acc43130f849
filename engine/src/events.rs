use std::fmt;

use serde::Serialize;

/// Everything the engine reports, delivered to the caller's sink in the
/// order it happens. Rendering is up to the caller; `Display` gives the
/// bracket-tagged log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    Started {
        player: String,
        enemy: String,
    },
    Equipped {
        name: String,
        weapon: String,
        damage: u32,
    },
    RoundStarted {
        round: u32,
    },
    Attacked {
        attacker: String,
        target: String,
        weapon: String,
        damage: u32,
    },
    Damaged {
        name: String,
        amount: u32,
        before: u32,
        after: u32,
    },
    Healed {
        name: String,
        amount: u32,
        before: u32,
        after: u32,
    },
    Defeated {
        name: String,
        rounds: u32,
    },
    Undecided {
        rounds: u32,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Started { player, enemy } => {
                write!(f, "[START] {} vs {}", player, enemy)
            }
            BattleEvent::Equipped {
                name,
                weapon,
                damage,
            } => write!(f, "[EQUIP][{}] {} (damage {})", name, weapon, damage),
            BattleEvent::RoundStarted { round } => write!(f, "[ROUND] {}", round),
            BattleEvent::Attacked {
                attacker,
                target,
                weapon,
                damage,
            } => write!(
                f,
                "[ATTACK][{}] hits {} with {} for {}",
                attacker, target, weapon, damage
            ),
            BattleEvent::Damaged {
                name,
                amount,
                before,
                after,
            } => write!(f, "[DMG][{}] {} → {} (−{})", name, before, after, amount),
            BattleEvent::Healed {
                name,
                amount,
                before,
                after,
            } => write!(f, "[HEAL][{}] +{} HP ({} → {})", name, amount, before, after),
            BattleEvent::Defeated { name, rounds } => {
                write!(f, "[END] {} has been defeated after {} rounds", name, rounds)
            }
            BattleEvent::Undecided { rounds } => {
                write!(f, "[END] no winner after {} rounds", rounds)
            }
        }
    }
}
