use crate::{BattleError, RandomSource, Weapon};

/// Owns every weapon a battle may draw from. Combatants only ever borrow
/// from it, so the pool must outlive the battle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaponPool {
    weapons: Vec<Weapon>,
}

impl WeaponPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn get(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    /// Uniform pick among the stored weapons.
    pub fn random_weapon(&self, rng: &mut impl RandomSource) -> Result<&Weapon, BattleError> {
        if self.weapons.is_empty() {
            return Err(BattleError::EmptyPool);
        }
        let index = rng.below(self.weapons.len());
        Ok(&self.weapons[index])
    }
}

impl From<Vec<Weapon>> for WeaponPool {
    fn from(weapons: Vec<Weapon>) -> Self {
        Self { weapons }
    }
}

impl FromIterator<Weapon> for WeaponPool {
    fn from_iter<I: IntoIterator<Item = Weapon>>(iter: I) -> Self {
        Self {
            weapons: iter.into_iter().collect(),
        }
    }
}
