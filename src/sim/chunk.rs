//! Destructible chunks (bricks) and the grid that owns them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hooks::{ChunkHooks, ScoreKeeper};
use super::palette::{self, Rgba};
use super::transform::Transform2D;
use crate::consts::*;
use crate::tuning::Tuning;

/// A single brick, positioned by its top-left corner in layout space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    transform: Transform2D,
    size: Vec2,
    color: Rgba,
    velocity: Vec2,
}

impl Chunk {
    pub fn new(position: Vec2, color: Rgba) -> Self {
        Self {
            transform: Transform2D::at(position),
            size: Vec2::new(CHUNK_WIDTH, CHUNK_HEIGHT),
            color,
            velocity: Vec2::ZERO,
        }
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Bottom edge of the brick in layout space
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.transform.position.y - self.size.y
    }

    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        let left = self.transform.position.x;
        left <= x && x <= left + self.size.x
    }

    pub fn update(&mut self, dt: f32) {
        self.transform.translate(self.velocity * dt);
    }
}

/// Owns the brick grid. Storage order is newest first, so a scan meets the
/// lowest row before the rows above it.
#[derive(Debug, Clone, Default)]
pub struct ChunkManager {
    chunks: Vec<Chunk>,
}

impl ChunkManager {
    /// Build the grid described by the tuning
    pub fn new(tuning: &Tuning) -> Self {
        let mut manager = Self::default();
        manager.initialize_chunks(tuning.chunk_count.min(MAX_CHUNK_COUNT), tuning.chunk_columns);
        manager
    }

    /// Lay out `count` chunks row-major from the grid origin, wrapping every
    /// `columns` chunks. Each row takes the next palette color.
    fn initialize_chunks(&mut self, count: u32, columns: u32) {
        if !self.chunks.is_empty() || columns == 0 {
            return;
        }

        self.chunks.reserve(count as usize);
        let mut position = CHUNK_ORIGIN;
        let mut row = 0usize;

        for i in 1..=count {
            let color = palette::CHUNK_ROWS[row % palette::CHUNK_ROWS.len()];
            self.chunks.push(Chunk::new(position, color));

            if i % columns == 0 {
                row += 1;
                position = Vec2::new(CHUNK_ORIGIN.x - CHUNK_WIDTH, position.y - CHUNK_HEIGHT);
            }
            position.x += CHUNK_WIDTH;
        }
        // Newest first
        self.chunks.reverse();

        log::debug!("Initialized {} chunks in {} rows", self.chunks.len(), row);
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn update(&mut self, dt: f32) {
        for chunk in &mut self.chunks {
            chunk.update(dt);
        }
    }

    /// Test the ball against the remaining chunks.
    ///
    /// The first chunk in storage order whose bottom the ball's upper extent
    /// has reached, and whose horizontal span contains the ball center, is
    /// destroyed. Returns the y the ball should be moved to, or `None` if
    /// nothing was hit. At most one chunk is destroyed per call.
    pub fn handle_ball_collision(
        &mut self,
        ball_position: Vec2,
        ball_radius: f32,
        hooks: &mut ChunkHooks<'_>,
    ) -> Option<f32> {
        let reach = ball_position.y + ball_radius + CHUNK_HIT_OFFSET;
        let index = self
            .chunks
            .iter()
            .position(|chunk| reach >= chunk.bottom() && chunk.spans_x(ball_position.x))?;

        let chunk = self.chunks.remove(index);
        let hit_y = chunk.bottom() - CHUNK_REBOUND_OFFSET;
        log::debug!(
            "Chunk at ({}, {}) destroyed, {} left",
            chunk.position().x,
            chunk.position().y,
            self.chunks.len()
        );

        hooks.score.increment_score();
        hooks.powerups.powerup_spawn_check(chunk.position());

        Some(hit_y)
    }

    /// Relay a lost ball to whoever owns the game-over latch
    pub fn game_over<S: ScoreKeeper + ?Sized>(&mut self, score: &mut S) {
        score.set_game_over();
    }
}
