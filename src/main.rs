//! Breakout headless runner
//!
//! Plays one session with the autopilot at the keys, logs progress and
//! prints the final state as JSON. Runs on simulated time unless
//! `--realtime` is given.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use breakout::audio::LogAudio;
use breakout::autopilot::Autopilot;
use breakout::render::LogRenderer;
use breakout::sim::{FixedCadence, GameState, WallClock};
use breakout::{Config, GameSession};

/// One simulated hour at the default cadence
const DEFAULT_MAX_TICKS: u64 = 211_765;

#[derive(Parser, Debug)]
#[command(name = "breakout")]
#[command(about = "Headless Breakout session driven by a seeded autopilot")]
struct Args {
    /// JSON config file; defaults are used when omitted
    config: Option<PathBuf>,
    /// Autopilot seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Give up after this many ticks
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,
    /// Tick on the wall clock at the configured cadence instead of simulated time
    #[arg(long, default_value_t = false)]
    realtime: bool,
    /// Cue volume (0.0 - 1.0)
    #[arg(long, default_value_t = 1.0)]
    volume: f32,
    /// Drop every cue
    #[arg(long, default_value_t = false)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("Breakout (headless) starting...");

    let state = run(&args)?;
    let json = serde_json::to_string_pretty(&state).context("serializing final state")?;
    println!("{json}");
    Ok(())
}

/// Play one session to its end or the tick limit and return the final state
fn run(args: &Args) -> Result<GameState> {
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    let interval_ms = config.tick_interval_ms;
    let mut pilot = Autopilot::new(args.seed, &config);
    let mut session = GameSession::new(
        config,
        LogRenderer::new(),
        LogAudio::new(args.volume, args.mute),
    )?;

    let times: Box<dyn Iterator<Item = f64>> = if args.realtime {
        let wall = WallClock::new();
        let pause = Duration::from_secs_f64(interval_ms / 1000.0);
        Box::new(std::iter::from_fn(move || {
            std::thread::sleep(pause);
            Some(wall.now())
        }))
    } else {
        Box::new(FixedCadence::new(interval_ms))
    };

    for now in times.take(args.max_ticks as usize) {
        for key in pilot.observe(session.state()) {
            session.handle_key(key);
        }
        if session.advance(now)?.is_terminal() {
            break;
        }
    }

    match session.phase().outcome() {
        Some(outcome) => log::info!(
            "Finished {:?} after {} ticks: score {}, {} frames, {} cues heard",
            outcome,
            session.state().tick_count,
            session.state().score,
            session.frames(),
            session.audio().heard()
        ),
        None => log::warn!("Tick limit {} reached without a result", args.max_ticks),
    }
    Ok(session.state().clone())
}
