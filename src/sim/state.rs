//! Game state: the single owner of every manager

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::BallManager;
use super::bar::BarManager;
use super::chunk::ChunkManager;
use super::field::Field;
use super::powerup::{PowerupManager, RandomSource};
use super::score::ScoreManager;
use crate::tuning::Tuning;

/// Complete game state. Managers never reference each other; [`super::tick`]
/// lends them to one another for the duration of each call.
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield bounds, fixed for the session
    pub field: Field,
    pub score: ScoreManager,
    pub bar: BarManager,
    pub chunks: ChunkManager,
    pub powerups: PowerupManager,
    pub ball: BallManager,
    /// Simulation frames run so far
    pub frame_count: u64,
    /// Set by a quit command; the host decides when to stop
    pub quit_requested: bool,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(&Tuning::default(), seed)
    }

    /// Create a new game, drawing spawn rolls from PCG32 seeded with `seed`
    pub fn with_tuning(tuning: &Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, seed, Box::new(Pcg32::seed_from_u64(seed)))
    }

    /// Create a new game with an explicit random source
    pub fn with_rng(tuning: &Tuning, seed: u64, rng: Box<dyn RandomSource>) -> Self {
        let state = Self {
            seed,
            field: Field::default(),
            score: ScoreManager::new(),
            bar: BarManager::new(tuning),
            chunks: ChunkManager::new(tuning),
            powerups: PowerupManager::new(tuning, rng),
            ball: BallManager::new(tuning),
            frame_count: 0,
            quit_requested: false,
        };
        log::info!("New game with seed {} ({} chunks)", seed, state.chunks.len());
        state
    }

    pub fn is_game_over(&self) -> bool {
        self.score.is_game_over()
    }

    /// Launch the ball and latch it on the score. No-op once launched.
    pub fn launch_ball(&mut self) {
        if self.ball.launched_ball() {
            return;
        }
        self.ball.launch_ball();
        self.score.set_ball_launched();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(42);
        assert_eq!(state.seed, 42);
        assert_eq!(state.chunks.len(), CHUNK_COUNT as usize);
        assert!(state.powerups.is_empty());
        assert_eq!(state.bar.bar().position(), BAR_START_POSITION);
        assert_eq!(state.ball.ball().position(), BALL_START_POSITION);
        assert!(!state.ball.launched_ball());
        assert!(!state.is_game_over());
        assert_eq!(state.score.display_text(), "Space/A to launch ball");
    }

    #[test]
    fn test_launch_latches_both_managers() {
        let mut state = GameState::new(1);
        state.launch_ball();
        assert!(state.ball.launched_ball());
        assert!(state.score.ball_launched());
        assert_eq!(state.ball.ball().velocity(), BALL_LAUNCH_VELOCITY);
    }

    #[test]
    fn test_tuning_shapes_the_grid() {
        let tuning = Tuning {
            chunk_count: 12,
            chunk_columns: 4,
            ..Tuning::default()
        };
        let state = GameState::with_tuning(&tuning, 3);
        assert_eq!(state.chunks.len(), 12);
    }
}
