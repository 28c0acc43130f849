use anyhow::Context;
use clap::{Parser, Subcommand};
use duel_engine::api::{load_builtin_battle, load_weapon_pool, simulate_battle, BattleConfig};
use std::path::PathBuf;
use tracing::Level;

mod text;
use text::read_text_auto;

#[derive(Subcommand)]
enum Cmd {
    /// Run one battle and print every event
    Battle {
        /// RNG seed; a random one is chosen (and printed) if omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Battle config JSON (player, enemy, weapons, seed, max_rounds)
        #[arg(long, conflicts_with = "battle")]
        config: Option<PathBuf>,
        /// Built-in battle id (e.g. hero_vs_goblin)
        #[arg(long)]
        battle: Option<String>,
        /// Weapons file (JSON, or YAML by extension); overrides the config
        #[arg(long)]
        weapons: Option<PathBuf>,
        /// Stop after this many rounds
        #[arg(long)]
        max_rounds: Option<u32>,
        /// Print the full report as JSON instead of log lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the weapons a battle would draw from
    Weapons {
        /// Weapons file (JSON, or YAML by extension); defaults to the built-in armory
        #[arg(long)]
        weapons: Option<PathBuf>,
        /// Built-in armory id
        #[arg(long, default_value = "basic")]
        id: String,
    },
    /// Print the default battle config as JSON (stdout)
    ConfigDump {
        /// Single-line JSON instead of pretty-printed
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
}

#[derive(Parser)]
#[command(name = "duel-cli")]
#[command(about = "Two-combatant battle simulator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Cmd::Battle {
            seed,
            config,
            battle,
            weapons,
            max_rounds,
            json,
        } => {
            let mut cfg = if let Some(path) = config.as_ref() {
                let text = read_text_auto(path)?;
                serde_json::from_str::<BattleConfig>(&text)
                    .with_context(|| format!("failed to parse config: {}", path.display()))?
            } else if let Some(id) = battle.as_deref() {
                load_builtin_battle(id)?
            } else {
                BattleConfig {
                    seed: rand::random(),
                    ..BattleConfig::default()
                }
            };
            if let Some(seed) = seed {
                cfg.seed = seed;
            }
            if let Some(path) = weapons {
                cfg.weapons_path = Some(path.to_string_lossy().into_owned());
            }
            if max_rounds.is_some() {
                cfg.max_rounds = max_rounds;
            }

            let report = simulate_battle(&cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("seed: {}", cfg.seed);
                for line in &report.log {
                    println!("{}", line);
                }
            }
        }
        Cmd::Weapons { weapons, id } => {
            let cfg = BattleConfig {
                weapons_id: Some(id),
                weapons_path: weapons.map(|p| p.to_string_lossy().into_owned()),
                ..BattleConfig::default()
            };
            let pool = load_weapon_pool(&cfg)?;
            for (i, w) in pool.iter().enumerate() {
                println!("{:>2}. {:<12} damage {}", i, w.name(), w.damage_value());
            }
        }
        Cmd::ConfigDump { compact } => {
            let cfg = BattleConfig::default();
            if compact {
                println!("{}", serde_json::to_string(&cfg)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            }
        }
    }
    Ok(())
}
