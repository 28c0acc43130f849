use anyhow::Context;
use clap::Parser;
use duel_engine::api::{simulate_battle_many, BattleConfig};
use std::path::PathBuf;

#[path = "../text.rs"]
mod text;
use text::read_text_auto;

#[derive(Parser)]
#[command(name = "simulate-many")]
#[command(about = "Monte Carlo sim: many battles of the same matchup")]
struct Args {
    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Optional battle config JSON (defaults to Hero vs Goblin)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Optional weapons file (JSON, or YAML by extension)
    #[arg(long)]
    weapons: Option<PathBuf>,

    /// Safety cap on rounds per trial
    #[arg(long)]
    max_rounds: Option<u32>,
}

fn pct(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = if let Some(path) = args.config.as_ref() {
        let text = read_text_auto(path)?;
        serde_json::from_str::<BattleConfig>(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?
    } else {
        BattleConfig::default()
    };
    cfg.seed = args.seed;
    if let Some(ref p) = args.weapons {
        cfg.weapons_path = Some(p.to_string_lossy().into_owned());
    }
    if args.max_rounds.is_some() {
        cfg.max_rounds = args.max_rounds;
    }

    let stats = simulate_battle_many(&cfg, args.trials)?;

    println!("simulate-many results");
    println!("---------------------");
    println!("trials:             {}", stats.samples);
    println!(
        "player:             {} (HP {}, STR {})",
        cfg.player.name, cfg.player.health, cfg.player.strength
    );
    println!(
        "enemy:              {} (HP {}, STR {})",
        cfg.enemy.name, cfg.enemy.health, cfg.enemy.strength
    );
    println!();
    println!("player win rate:    {:.1}%", pct(stats.player_wins, stats.samples));
    println!("enemy win rate:     {:.1}%", pct(stats.enemy_wins, stats.samples));
    println!("undecided:          {}", stats.undecided);
    println!("avg rounds:         {:.2}", stats.avg_rounds);
    println!();
    println!("by player weapon:");
    for (weapon, ws) in &stats.by_player_weapon {
        println!(
            "  {:<12} {:>6} battles  {:>5.1}% wins",
            weapon,
            ws.battles,
            pct(ws.wins, ws.battles)
        );
    }

    Ok(())
}
