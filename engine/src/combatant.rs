use tracing::debug;

use crate::{BattleEvent, Weapon};

/// A fighter with health, a strength multiplier and a borrowed weapon.
///
/// Health is unsigned and saturates at 0; once it is 0 the combatant is dead
/// for good and neither damage nor healing changes it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant<'w> {
    name: String,
    health: u32,
    strength: u32,
    weapon: Option<&'w Weapon>,
}

impl<'w> Combatant<'w> {
    pub fn new(name: impl Into<String>, health: u32, strength: u32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            weapon: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn weapon(&self) -> Option<&'w Weapon> {
        self.weapon
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Replaces whatever was equipped. Always legal, also mid-battle.
    pub fn equip(&mut self, weapon: &'w Weapon) {
        self.weapon = Some(weapon);
    }

    /// Hits `target` for `weapon damage × strength`, recomputed on every call.
    /// Without a weapon the turn is spent doing nothing: no event, `None`.
    pub fn attack(
        &self,
        target: &mut Combatant<'w>,
        mut emit: impl FnMut(BattleEvent),
    ) -> Option<u32> {
        let weapon = self.weapon?;
        let damage = weapon.damage_value().saturating_mul(self.strength);
        debug!(attacker = %self.name, target = %target.name, weapon = weapon.name(), damage, "attack");
        emit(BattleEvent::Attacked {
            attacker: self.name.clone(),
            target: target.name.clone(),
            weapon: weapon.name().to_string(),
            damage,
        });
        target.apply_damage(damage, &mut emit);
        Some(damage)
    }

    /// Subtracts `amount`, clamping at 0. Returns true if this call killed.
    pub fn apply_damage(&mut self, amount: u32, mut emit: impl FnMut(BattleEvent)) -> bool {
        if !self.is_alive() {
            return false;
        }
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        emit(BattleEvent::Damaged {
            name: self.name.clone(),
            amount,
            before,
            after: self.health,
        });
        self.health == 0
    }

    /// Adds `amount` if alive. No upper bound.
    pub fn heal(&mut self, amount: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health = self.health.saturating_add(amount);
        true
    }
}
