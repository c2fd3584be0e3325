//! maze — plays one built-in level with the decision policy and prints the
//! outcome.
//!
//! ```text
//! maze [classic|maze] [--bounded] [--seed N] [--ticks N]
//!      [--ghosts greedy|random] [--forager] [--policy FILE] [--out DIR]
//! ```
//!
//! `--policy` reads a JSON `PolicyConfig`; missing fields keep their
//! defaults.  `--out` writes `decisions.csv` and `tick_summaries.csv`.
//! Set `RUST_LOG=debug` to see power items and ghost captures.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing::info;

use gn_core::CellCode;
use gn_output::{CsvWriter, TraceObserver};
use gn_policy::{DecisionPolicy, PolicyConfig};
use gn_sim::{BUILTIN_LEVELS, Game, GameBuilder, GameConfig, GhostKind, Level, NoopObserver};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Play one built-in level with the decision policy.
#[derive(Parser)]
#[command(name = "maze")]
#[command(about = "Headless gridnav game runner", long_about = None)]
struct Args {
    /// Built-in level to play.
    #[arg(default_value = "classic", value_parser = PossibleValuesParser::new(BUILTIN_LEVELS))]
    level: String,

    /// Do not wrap at the level edges.
    #[arg(long)]
    bounded: bool,

    /// Seed for the ghosts' random streams.
    #[arg(long, default_value_t = GameConfig::default().seed)]
    seed: u64,

    /// Stop with a timeout after this many ticks.
    #[arg(long, default_value_t = GameConfig::default().max_ticks)]
    ticks: u64,

    /// Ghost movement rule: `greedy` or `random`.
    #[arg(long, default_value_t = GhostKind::default())]
    ghosts: GhostKind,

    /// Use the dot-first preset instead of the escape-first default.
    #[arg(long, conflicts_with = "policy")]
    forager: bool,

    /// JSON `PolicyConfig`; missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Directory for `decisions.csv` and `tick_summaries.csv`.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

impl Args {
    fn policy_config(&self) -> Result<PolicyConfig> {
        if let Some(path) = &self.policy {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(if self.forager { PolicyConfig::forager() } else { PolicyConfig::default() })
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Final board, top row first.  `P` agent, `G` dangerous ghost, `g`
/// vulnerable ghost.
fn render(game: &Game<DecisionPolicy>) -> String {
    let grid = game.grid();
    let (w, h) = grid.dims();
    let mut out = String::with_capacity(((w + 1) * h) as usize);
    for y in (0..h).rev() {
        for x in 0..w {
            let pos = gn_core::Position::new(x, y);
            let ghost = game.ghosts().iter().find(|g| g.pos == pos);
            let ch = if pos == game.agent() {
                'P'
            } else if let Some(g) = ghost {
                if g.is_vulnerable() { 'g' } else { 'G' }
            } else {
                match grid.get_at(pos) {
                    Ok(CellCode::WALL)  => '#',
                    Ok(CellCode::DOT)   => '.',
                    Ok(CellCode::POWER) => 'o',
                    _                   => ' ',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy = DecisionPolicy::new(args.policy_config()?)?;
    let level = Level::builtin(&args.level)?;
    info!(
        level  = level.name(),
        width  = level.grid().width(),
        height = level.grid().height(),
        consumables = level.consumables(),
        "level loaded"
    );

    let config = GameConfig { seed: args.seed, max_ticks: args.ticks, ..GameConfig::default() };
    let mut game = GameBuilder::new(level, policy)
        .config(config)
        .ghost_kind(args.ghosts)
        .cyclic(!args.bounded)
        .build()?;

    let t0 = Instant::now();
    let outcome = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = TraceObserver::new(CsvWriter::new(dir)?);
            let outcome = game.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            outcome
        }
        None => game.run(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    print!("{}", render(&game));
    println!();
    println!("Result : {}", outcome.status);
    println!("Score  : {}", outcome.score);
    println!("Ticks  : {}", outcome.ticks);
    println!("Left   : {}", outcome.dots_left);
    println!("Time   : {:.3} s", elapsed.as_secs_f64());
    if let Some(dir) = &args.out {
        println!("Trace  : {}", dir.display());
    }

    Ok(())
}
