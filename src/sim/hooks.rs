//! Collaborator interfaces between managers
//!
//! These replace back-references: a manager that needs to notify or query
//! another receives it as a borrowed trait object for the duration of a call.

use glam::Vec2;

/// Receives chunk destructions that may spawn a powerup
pub trait PowerupSpawner {
    fn powerup_spawn_check(&mut self, origin: Vec2);
}

/// Owner of the score and the game-over latch
pub trait ScoreKeeper {
    fn increment_score(&mut self);
    fn set_game_over(&mut self);
}

/// Ball speed effects applied by powerups
pub trait BallSpeedControl {
    fn increase_ball_velocity(&mut self);
    fn decrease_ball_velocity(&mut self);
}

/// Paddle queries and effects used by the powerup pass
pub trait BarControl {
    /// True if a powerup at `position` with the given width overlaps the paddle
    fn handle_powerup_collision(&self, position: Vec2, width: f32) -> bool;
    fn bar_upper_y(&self) -> f32;
    fn increase_bar_velocity(&mut self);
    fn decrease_bar_velocity(&mut self);
}

/// Side-effect targets of a chunk being destroyed
pub struct ChunkHooks<'a> {
    pub powerups: &'a mut dyn PowerupSpawner,
    pub score: &'a mut dyn ScoreKeeper,
}
