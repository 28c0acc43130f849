use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{BattleError, BattleEvent, Combatant, HealingPolicy, RandomSource, Weapon, WeaponPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BattleOutcome {
    pub rounds: u32,
    /// `None` only when a round cap stopped the battle first.
    pub defeated: Option<Side>,
    pub player_health: u32,
    pub enemy_health: u32,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<Side> {
        self.defeated.map(Side::opponent)
    }
}

/// Runs one battle between two externally owned combatants.
///
/// Each round the player strikes first; the enemy only retaliates if it is
/// still alive, and the player may heal afterwards if it is still alive.
pub struct BattleController<'c, 'w, R> {
    player: &'c mut Combatant<'w>,
    enemy: &'c mut Combatant<'w>,
    pool: &'w WeaponPool,
    healing: HealingPolicy,
    rng: R,
    max_rounds: Option<u32>,
}

impl<'c, 'w, R: RandomSource> BattleController<'c, 'w, R> {
    pub fn new(
        player: &'c mut Combatant<'w>,
        enemy: &'c mut Combatant<'w>,
        pool: &'w WeaponPool,
        rng: R,
    ) -> Self {
        Self {
            player,
            enemy,
            pool,
            healing: HealingPolicy,
            rng,
            max_rounds: None,
        }
    }

    /// Stop after `rounds` rounds even if both sides still stand.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn player(&self) -> &Combatant<'w> {
        &*self.player
    }

    pub fn enemy(&self) -> &Combatant<'w> {
        &*self.enemy
    }

    /// Draws a weapon for one side and equips it.
    pub fn equip_random(&mut self, side: Side) -> Result<&'w Weapon, BattleError> {
        let pool = self.pool;
        let weapon = pool.random_weapon(&mut self.rng)?;
        match side {
            Side::Player => self.player.equip(weapon),
            Side::Enemy => self.enemy.equip(weapon),
        }
        Ok(weapon)
    }

    pub fn start_battle(
        &mut self,
        mut emit: impl FnMut(BattleEvent),
    ) -> Result<BattleOutcome, BattleError> {
        emit(BattleEvent::Started {
            player: self.player.name().to_string(),
            enemy: self.enemy.name().to_string(),
        });

        for side in [Side::Player, Side::Enemy] {
            let weapon = self.equip_random(side)?;
            let name = match side {
                Side::Player => self.player.name(),
                Side::Enemy => self.enemy.name(),
            };
            emit(BattleEvent::Equipped {
                name: name.to_string(),
                weapon: weapon.name().to_string(),
                damage: weapon.damage_value(),
            });
        }

        let mut rounds = 0u32;
        while self.player.is_alive() && self.enemy.is_alive() {
            if self.max_rounds.is_some_and(|cap| rounds >= cap) {
                break;
            }
            rounds += 1;
            debug!(round = rounds, player = self.player.health(), enemy = self.enemy.health(), "round");
            emit(BattleEvent::RoundStarted { round: rounds });

            self.player.attack(self.enemy, &mut emit);
            if !self.enemy.is_alive() {
                break;
            }

            self.enemy.attack(self.player, &mut emit);
            if !self.player.is_alive() {
                break;
            }

            let before = self.player.health();
            if let Some(amount) = self.healing.maybe_heal(self.player, &mut self.rng) {
                emit(BattleEvent::Healed {
                    name: self.player.name().to_string(),
                    amount,
                    before,
                    after: self.player.health(),
                });
            }
        }

        let defeated = if !self.player.is_alive() {
            Some(Side::Player)
        } else if !self.enemy.is_alive() {
            Some(Side::Enemy)
        } else {
            None
        };

        match defeated {
            Some(side) => {
                let name = match side {
                    Side::Player => self.player.name(),
                    Side::Enemy => self.enemy.name(),
                };
                info!(defeated = name, rounds, "battle over");
                emit(BattleEvent::Defeated {
                    name: name.to_string(),
                    rounds,
                });
            }
            None => {
                info!(rounds, "battle stopped at round cap");
                emit(BattleEvent::Undecided { rounds });
            }
        }

        Ok(BattleOutcome {
            rounds,
            defeated,
            player_health: self.player.health(),
            enemy_health: self.enemy.health(),
        })
    }
}
