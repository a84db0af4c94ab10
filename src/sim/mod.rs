//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (storage order of each manager)
//! - No rendering or platform dependencies
//!
//! Managers never hold references to each other. The orchestrator
//! ([`GameState`]) owns all of them and lends collaborators per call, either
//! as concrete borrows or through the small traits in [`hooks`].

pub mod ball;
pub mod bar;
pub mod chunk;
pub mod field;
pub mod hooks;
pub mod palette;
pub mod powerup;
pub mod score;
pub mod state;
pub mod tick;
pub mod timer;
pub mod transform;

pub use ball::{Ball, BallCollision, BallContext, BallManager, BallStep};
pub use bar::{Bar, BarManager};
pub use chunk::{Chunk, ChunkManager};
pub use field::Field;
pub use hooks::{BallSpeedControl, BarControl, ChunkHooks, PowerupSpawner, ScoreKeeper};
pub use palette::Rgba;
pub use powerup::{Powerup, PowerupKind, PowerupManager, RandomSource};
pub use score::ScoreManager;
pub use state::GameState;
pub use tick::{Command, TickInput, tick};
pub use timer::StepTimer;
pub use transform::Transform2D;
