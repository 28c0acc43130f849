use serde::{Deserialize, Serialize};

/// A named weapon with a fixed damage rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_value(&self) -> u32 {
        self.damage
    }
}
