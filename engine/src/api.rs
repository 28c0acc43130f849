use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::content::{builtin_battles, builtin_weapons};
use crate::{
    BattleController, BattleEvent, BattleOutcome, Combatant, Dice, Side, Weapon, WeaponPool,
};

const DEFAULT_WEAPONS_ID: &str = "basic";
const MAX_ROUNDS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CombatantConfig {
    pub name: String,
    pub health: u32,
    pub strength: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct BattleConfig {
    pub player: CombatantConfig,
    pub enemy: CombatantConfig,
    /// Built-in armory id; ignored when `weapons_path` is set.
    pub weapons_id: Option<String>,
    /// JSON weapon list, or YAML when the extension is `.yaml`/`.yml`.
    pub weapons_path: Option<String>,
    pub seed: u64,
    /// Round cap; `MAX_ROUNDS` when unset so zero-damage armories still end.
    pub max_rounds: Option<u32>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player: CombatantConfig {
                name: "Hero".to_string(),
                health: 300,
                strength: 2,
            },
            enemy: CombatantConfig {
                name: "Goblin".to_string(),
                health: 150,
                strength: 4,
            },
            weapons_id: None,
            weapons_path: None,
            seed: 0,
            max_rounds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BattleReport {
    pub winner: String,
    pub rounds: u32,
    pub player_hp_end: u32,
    pub enemy_hp_end: u32,
    pub player_weapon: Option<String>,
    pub enemy_weapon: Option<String>,
    pub events: Vec<BattleEvent>,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeaponStats {
    pub battles: u32,
    pub wins: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BattleSummary {
    pub samples: u32,
    pub player_wins: u32,
    pub enemy_wins: u32,
    pub undecided: u32,
    pub avg_rounds: f64,
    /// Keyed by the player's weapon, in the order weapons first came up.
    pub by_player_weapon: IndexMap<String, WeaponStats>,
}

pub fn simulate_battle(cfg: &BattleConfig) -> Result<BattleReport> {
    validate(cfg)?;
    let pool = load_weapon_pool(cfg)?;
    run_battle(cfg, &pool, cfg.seed)
}

/// Runs `samples` battles; trial `i` uses seed `cfg.seed + i`.
pub fn simulate_battle_many(cfg: &BattleConfig, samples: u32) -> Result<BattleSummary> {
    validate(cfg)?;
    let pool = load_weapon_pool(cfg)?;

    let mut summary = BattleSummary {
        samples,
        player_wins: 0,
        enemy_wins: 0,
        undecided: 0,
        avg_rounds: 0.0,
        by_player_weapon: IndexMap::new(),
    };
    let mut total_rounds = 0u64;

    for i in 0..samples {
        let report = run_battle(cfg, &pool, cfg.seed.wrapping_add(i as u64))?;
        total_rounds += report.rounds as u64;
        let player_won = report.winner == "player";
        match report.winner.as_str() {
            "player" => summary.player_wins += 1,
            "enemy" => summary.enemy_wins += 1,
            _ => summary.undecided += 1,
        }
        if let Some(weapon) = report.player_weapon {
            let stats = summary.by_player_weapon.entry(weapon).or_default();
            stats.battles += 1;
            if player_won {
                stats.wins += 1;
            }
        }
    }

    if samples > 0 {
        summary.avg_rounds = total_rounds as f64 / samples as f64;
    }
    Ok(summary)
}

pub fn load_builtin_battle(id: &str) -> Result<BattleConfig> {
    let battles = builtin_battles();
    let text = battles
        .get(id)
        .with_context(|| format!("unknown builtin battle id: {}", id))?;
    let cfg = serde_json::from_str(text)
        .with_context(|| format!("failed to parse builtin battle: {}", id))?;
    Ok(cfg)
}

pub fn load_weapon_pool(cfg: &BattleConfig) -> Result<WeaponPool> {
    let weapons = if let Some(path) = cfg.weapons_path.as_deref() {
        load_weapons_file(path)?
    } else {
        let id = cfg.weapons_id.as_deref().unwrap_or(DEFAULT_WEAPONS_ID);
        let builtins = builtin_weapons();
        let Some((text, is_yaml)) = builtins.get(id).copied() else {
            bail!("unknown builtin weapons id: {}", id);
        };
        parse_weapons(text, is_yaml)
            .with_context(|| format!("failed to parse builtin weapons: {}", id))?
    };
    Ok(WeaponPool::from(weapons))
}

fn load_weapons_file(path: &str) -> Result<Vec<Weapon>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read weapons file: {}", path))?;
    let is_yaml = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    parse_weapons(&text, is_yaml).with_context(|| format!("failed to parse weapons file: {}", path))
}

fn parse_weapons(text: &str, is_yaml: bool) -> Result<Vec<Weapon>> {
    let weapons = if is_yaml {
        serde_yaml::from_str(text)?
    } else {
        serde_json::from_str(text)?
    };
    Ok(weapons)
}

fn validate(cfg: &BattleConfig) -> Result<()> {
    for (role, c) in [("player", &cfg.player), ("enemy", &cfg.enemy)] {
        if c.health == 0 {
            bail!("{} '{}' must start with positive health", role, c.name);
        }
        if c.strength == 0 {
            bail!("{} '{}' must have positive strength", role, c.name);
        }
    }
    Ok(())
}

fn run_battle(cfg: &BattleConfig, pool: &WeaponPool, seed: u64) -> Result<BattleReport> {
    let mut player = Combatant::new(&cfg.player.name, cfg.player.health, cfg.player.strength);
    let mut enemy = Combatant::new(&cfg.enemy.name, cfg.enemy.health, cfg.enemy.strength);
    let mut events = Vec::new();

    let outcome: BattleOutcome =
        BattleController::new(&mut player, &mut enemy, pool, Dice::from_seed(seed))
            .with_max_rounds(cfg.max_rounds.unwrap_or(MAX_ROUNDS))
            .start_battle(|e| events.push(e))?;

    let log = events.iter().map(|e| e.to_string()).collect();
    Ok(BattleReport {
        winner: winner_label(outcome.winner()).to_string(),
        rounds: outcome.rounds,
        player_hp_end: outcome.player_health,
        enemy_hp_end: outcome.enemy_health,
        player_weapon: player.weapon().map(|w| w.name().to_string()),
        enemy_weapon: enemy.weapon().map(|w| w.name().to_string()),
        events,
        log,
    })
}

fn winner_label(winner: Option<Side>) -> &'static str {
    match winner {
        Some(Side::Player) => "player",
        Some(Side::Enemy) => "enemy",
        None => "undecided",
    }
}
