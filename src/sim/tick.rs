//! Fixed timestep simulation tick
//!
//! Advances the game by one frame in a fixed order: input, bar, chunks,
//! powerups, ball, score.

use super::ball::BallContext;
use super::hooks::ChunkHooks;
use super::state::GameState;

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveBarLeft,
    MoveBarRight,
    LaunchBall,
    Quit,
}

/// Input for a single tick. Each command counts at most once per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Launch the ball (ignored once launched)
    pub launch: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut input = Self::default();
        for command in commands {
            input.push(command);
        }
        input
    }

    pub fn push(&mut self, command: Command) {
        match command {
            Command::MoveBarLeft => self.move_left = true,
            Command::MoveBarRight => self.move_right = true,
            Command::LaunchBall => self.launch = true,
            Command::Quit => self.quit = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.quit {
        if !state.quit_requested {
            log::info!("Quit requested at frame {}", state.frame_count);
        }
        state.quit_requested = true;
        return;
    }

    // The bar only moves on frames where a direction is held
    if input.move_right {
        state.bar.move_right();
        state.bar.update(dt, &state.field);
    }
    if input.move_left {
        state.bar.move_left();
        state.bar.update(dt, &state.field);
    }

    if input.launch {
        state.launch_ball();
    }

    state.chunks.update(dt);
    state.powerups.update(dt, &mut state.bar, &mut state.ball);

    if !state.is_game_over() {
        update_ball(state, dt);
    }

    state.score.update();
    state.frame_count += 1;
}

fn update_ball(state: &mut GameState, dt: f32) {
    let mut ctx = BallContext {
        bar: &state.bar,
        chunks: &mut state.chunks,
        hooks: ChunkHooks {
            powerups: &mut state.powerups,
            score: &mut state.score,
        },
    };
    state.ball.update(dt, &state.field, &mut ctx);
}
