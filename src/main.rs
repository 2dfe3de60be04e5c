//! Temple Runner entry point
//!
//! Headless runner: drives the simulation at a fixed frame rate, with the
//! demo AI at the controls, and reports each run.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;

use temple_runner::audio::AudioDirector;
use temple_runner::sim::{GameEvent, GamePhase, TickInput, demo_input};
use temple_runner::{Game, InputAggregator, Settings};

#[derive(Parser, Debug)]
#[command(name = "temple-runner", version, about = "Headless endless-runner simulation")]
struct Args {
    /// Run seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Longest run to simulate, in seconds of game time
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Number of consecutive runs (restarts after each game over)
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave the controls idle instead of using the demo AI
    #[arg(long)]
    no_autopilot: bool,

    /// Print run summaries as JSON lines
    #[arg(long)]
    json: bool,
}

/// Outcome of one run
#[derive(Debug, Serialize)]
struct RunSummary {
    run: u32,
    seed: u64,
    score: u32,
    speed: f32,
    elapsed_secs: f32,
    coins_collected: u32,
    coins_spawned: u32,
    obstacles_spawned: u32,
    obstacles_passed: u32,
    jumps: u32,
    game_over: bool,
}

fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x7E3F_1E00)
}

fn play_run(
    game: &mut Game,
    controls: &mut InputAggregator,
    director: &AudioDirector,
    args: &Args,
    run: u32,
    seed: u64,
) -> RunSummary {
    let dt = 1.0 / args.fps as f32;
    let max_frames = (args.seconds.max(0.0) * args.fps as f32).ceil() as u64;
    let mut input = TickInput::none();
    let mut jumps = 0;

    game.start();
    for _ in 0..max_frames {
        // Headless: the aggregator only sees what a host feeds it
        input = if args.no_autopilot {
            controls.intents()
        } else {
            demo_input(game.state(), &input)
        };
        game.set_input(input);
        game.tick(dt);

        let events = game.drain_events();
        jumps += events
            .iter()
            .filter(|e| **e == GameEvent::JumpStarted)
            .count() as u32;
        for cue in director.cues(&events) {
            log::trace!("cue {:?}", cue);
        }

        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    let stats = game.stats();
    RunSummary {
        run,
        seed,
        score: game.score(),
        speed: game.speed(),
        elapsed_secs: game.elapsed_secs(),
        coins_collected: stats.coins_collected,
        coins_spawned: stats.coins_spawned,
        obstacles_spawned: stats.obstacles_spawned,
        obstacles_passed: stats.obstacles_passed,
        jumps,
        game_over: game.phase() == GamePhase::GameOver,
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::load_or_default(args.config.as_deref());
    let seed = args.seed.or(settings.seed).unwrap_or_else(session_seed);
    let director = AudioDirector::from_settings(&settings);
    let mut controls = InputAggregator::from_settings(&settings);

    log::info!("Temple Runner (headless) starting, seed {}", seed);

    let mut game = Game::new(seed);
    for run in 1..=args.runs.max(1) {
        let summary = play_run(&mut game, &mut controls, &director, &args, run, seed);
        if args.json {
            match serde_json::to_string(&summary) {
                Ok(line) => println!("{}", line),
                Err(e) => log::error!("Failed to encode run summary: {}", e),
            }
        } else {
            println!(
                "run {}: score {} | speed {} | {:.1}s | coins {}/{} | obstacles passed {}/{}{}",
                summary.run,
                summary.score,
                summary.speed,
                summary.elapsed_secs,
                summary.coins_collected,
                summary.coins_spawned,
                summary.obstacles_passed,
                summary.obstacles_spawned,
                if summary.game_over { " | game over" } else { "" }
            );
        }
        // A run that survived the time limit is still in progress
        if !summary.game_over {
            break;
        }
    }
}
