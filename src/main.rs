//! Chunk Breakout headless host
//!
//! Runs an autopilot session against the simulation with a fixed-step
//! timer and reports the outcome.
//!
//! Usage: `chunk-breakout [TUNING_JSON] [--seed N] [--minutes M]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chunk_breakout::Tuning;
use chunk_breakout::consts::*;
use chunk_breakout::renderer::{ResourceError, Scene};
use chunk_breakout::sim::{Command, GameState, StepTimer, TickInput, tick};
use clap::Parser;

/// Host display refresh, distinct from the sim rate
const HOST_FRAME_DT: f32 = 1.0 / 50.0;
/// Bar stops steering when this close to its target
const AUTOPILOT_DEADZONE: f32 = 0.5;

/// Chunk Breakout - headless autopilot session
#[derive(Parser, Debug)]
#[command(name = "chunk-breakout")]
#[command(about = "Run an autopilot Breakout session and report the score", long_about = None)]
struct Options {
    /// Tuning JSON file (defaults are used if omitted or unreadable)
    tuning_path: Option<PathBuf>,

    /// Seed for powerup rolls (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated session length
    #[arg(long, default_value_t = 5.0)]
    minutes: f32,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Commands a simple player would give: launch, then chase the ball
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if !state.ball.launched_ball() {
        input.push(Command::LaunchBall);
    }

    let bar = state.bar.bar();
    // The hit zone is centered half a width right of the bar position
    let target = state.ball.ball().position().x - bar.width() / 2.0;
    let x = bar.position().x;
    if x < target - AUTOPILOT_DEADZONE {
        input.push(Command::MoveBarRight);
    } else if x > target + AUTOPILOT_DEADZONE {
        input.push(Command::MoveBarLeft);
    }
    input
}

fn run(options: Options) -> Result<(), ResourceError> {
    let tuning = match &options.tuning_path {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = options.seed.unwrap_or_else(clock_seed);

    let mut state = GameState::with_tuning(&tuning, seed);
    let mut timer = StepTimer::new(SIM_DT);
    let mut scene = Scene::new();
    scene.finish_loading(Ok(()))?;

    let host_frames = (options.minutes * 60.0 / HOST_FRAME_DT) as u64;
    let mut instances = 0usize;

    for _ in 0..host_frames {
        timer.tick(HOST_FRAME_DT, |dt| {
            let input = autopilot(&state);
            tick(&mut state, &input, dt);
        });

        if let Some(frame) = scene.render(&state) {
            instances = frame.instances.len();
        }

        if state.is_game_over() || state.chunks.is_empty() || state.quit_requested {
            break;
        }
    }

    if state.chunks.is_empty() {
        log::info!("Cleared every chunk");
    }
    log::info!(
        "Session over after {} frames ({} rendered, last frame {} instances)",
        timer.frame_count(),
        scene.frames_rendered(),
        instances
    );
    println!(
        "seed {}: score {} with {} chunks left ({})",
        seed,
        state.score.score(),
        state.chunks.len(),
        state.score.display_text()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Chunk Breakout (headless) starting...");

    if let Err(e) = run(Options::parse()) {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("chunk-breakout").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let options = args(&["tuning.json", "--seed", "7", "--minutes", "0.5"]).expect("valid args");
        assert_eq!(options.tuning_path, Some(PathBuf::from("tuning.json")));
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.minutes, 0.5);

        let options = args(&[]).expect("no args");
        assert!(options.tuning_path.is_none());
        assert!(options.seed.is_none());
        assert_eq!(options.minutes, 5.0);
    }

    #[test]
    fn test_bad_args_are_rejected() {
        assert!(args(&["--seed", "abc"]).is_err());
        assert!(args(&["--sed", "7"]).is_err());
        assert!(args(&["--minutes"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_autopilot_launches_then_steers() {
        let mut state = GameState::new(3);
        let input = autopilot(&state);
        assert!(input.launch);

        state.launch_ball();
        state.ball.ball_mut().set_position(glam::Vec2::new(-20.0, 0.0));
        let input = autopilot(&state);
        assert!(!input.launch);
        assert!(input.move_left && !input.move_right);
    }

    #[test]
    fn test_short_session_runs() {
        let options = Options {
            tuning_path: None,
            seed: Some(1),
            minutes: 0.1,
        };
        assert!(run(options).is_ok());
    }
}
