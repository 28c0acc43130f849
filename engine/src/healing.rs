use tracing::debug;

use crate::{Combatant, RandomSource};

pub const HEAL_MIN: u32 = 1;
pub const HEAL_MAX: u32 = 20;

/// Between-round recovery for the player side only: one chance in three of
/// regaining `HEAL_MIN..=HEAL_MAX` health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealingPolicy;

impl HealingPolicy {
    /// Returns the amount healed, or `None` if the roll failed or the
    /// combatant is already dead.
    pub fn maybe_heal(
        &self,
        combatant: &mut Combatant<'_>,
        rng: &mut impl RandomSource,
    ) -> Option<u32> {
        if !rng.one_in_three() {
            return None;
        }
        let span = (HEAL_MAX - HEAL_MIN + 1) as usize;
        let amount = HEAL_MIN + rng.below(span) as u32;
        if !combatant.heal(amount) {
            return None;
        }
        debug!(name = combatant.name(), amount, health = combatant.health(), "heal");
        Some(amount)
    }
}
