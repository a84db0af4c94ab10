//! Chunk Breakout - simulation core of a Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, bar, chunks, powerups, score)
//! - `renderer`: Read-only boundary that turns game state into draw data
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// The collision thresholds below are tuned to the fixed layout of the
/// playfield. They do not derive from each other; keep them as they are.
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest real frame delta fed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field (center + full size): left -52, right 40, top 40, bottom -40
    pub const FIELD_POSITION: Vec2 = Vec2::new(-6.0, 0.0);
    pub const FIELD_SIZE: Vec2 = Vec2::new(92.0, 80.0);

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 1.5;
    pub const BALL_ROTATION: f32 = 0.5;
    /// Resting ball, five radii above the paddle rebound line
    pub const BALL_START_POSITION: Vec2 = Vec2::new(0.0, PADDLE_REBOUND_Y + 5.0 * BALL_RADIUS);
    pub const BALL_LAUNCH_VELOCITY: Vec2 = Vec2::new(17.0, 17.0);
    /// Per-component change applied by ball speed powerups
    pub const BALL_SPEED_STEP: f32 = 5.0;

    /// Ball lower extent at or below this tests the paddle
    pub const PADDLE_PLANE_Y: f32 = -40.0;
    /// Lowest ball lower extent still counted as touching the paddle
    pub const PADDLE_FLOOR_Y: f32 = -45.0;
    /// Ball y after a paddle bounce
    pub const PADDLE_REBOUND_Y: f32 = -38.0;
    /// Ball upper extent at or above this tests the chunks
    pub const CHUNK_PLANE_Y: f32 = 22.0;
    /// Ball lower extent at or below this ends the round
    pub const BALL_LOSS_Y: f32 = -60.0;

    /// Bar defaults (layout space)
    pub const BAR_START_POSITION: Vec2 = Vec2::new(0.0, BAR_Y);
    pub const BAR_Y: f32 = 15.0;
    /// Half extent used for clamping and hit tests
    pub const BAR_HALF_WIDTH: f32 = 4.0;
    pub const BAR_SPEED: f32 = 20.0;
    pub const BAR_SPEED_UP: f32 = 30.0;
    pub const BAR_SLOW_DOWN: f32 = 5.0;
    pub const BAR_MIN_SPEED: f32 = 5.0;

    /// Chunk grid (layout space)
    pub const CHUNK_COUNT: u32 = 60;
    pub const CHUNK_COLUMNS: u32 = 10;
    /// Largest grid a tuning file may ask for
    pub const MAX_CHUNK_COUNT: u32 = 240;
    pub const CHUNK_WIDTH: f32 = 9.0;
    pub const CHUNK_HEIGHT: f32 = 3.0;
    pub const CHUNK_ORIGIN: Vec2 = Vec2::new(-45.0, 97.0);
    /// Added to the ball's upper extent before comparing with a chunk bottom
    pub const CHUNK_HIT_OFFSET: f32 = 57.0;
    /// Subtracted from a chunk bottom to get the ball's rebound y
    pub const CHUNK_REBOUND_OFFSET: f32 = 58.0;

    /// Powerup defaults (layout space)
    pub const POWERUP_RADIUS: f32 = 1.5;
    pub const POWERUP_WIDTH: f32 = 3.0;
    pub const POWERUP_HEIGHT: f32 = 2.0;
    pub const POWERUP_FALL_SPEED: f32 = 10.0;
    /// Powerups at or below this y expire unused
    pub const POWERUP_EXPIRY_Y: f32 = 0.0;
    /// One spawn in this many chunk destructions (on average)
    pub const POWERUP_SPAWN_ONE_IN: u32 = 4;

    /// Vertical shift from layout space to the ball's world frame when drawing
    pub const LAYOUT_DRAW_OFFSET: Vec2 = Vec2::new(0.0, -60.0);
}
