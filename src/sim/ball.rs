//! The ball: motion and collision resolution

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bar::BarManager;
use super::chunk::ChunkManager;
use super::field::Field;
use super::hooks::{BallSpeedControl, ChunkHooks};
use super::palette::{self, Rgba};
use super::transform::Transform2D;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which surface a ball update resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallCollision {
    LeftWall,
    RightWall,
    Paddle,
    Chunk,
    TopWall,
}

/// Outcome of a single ball update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallStep {
    /// At most one collision resolves per update
    pub collision: Option<BallCollision>,
    /// Ball's lower extent is past the loss line
    pub offscreen: bool,
}

/// Collaborators the ball queries while resolving collisions
pub struct BallContext<'a> {
    pub bar: &'a BarManager,
    pub chunks: &'a mut ChunkManager,
    pub hooks: ChunkHooks<'a>,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    transform: Transform2D,
    radius: f32,
    velocity: Vec2,
    color: Rgba,
}

impl Ball {
    pub fn new(transform: Transform2D, radius: f32, velocity: Vec2) -> Self {
        Self {
            transform,
            radius,
            velocity,
            color: palette::PEACH_PUFF,
        }
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Integrate, then resolve at most one collision
    pub fn update(&mut self, dt: f32, field: &Field, ctx: &mut BallContext<'_>) -> BallStep {
        self.transform.translate(self.velocity * dt);
        self.check_for_field_collision(field, ctx)
    }

    /// Resolve walls, paddle and chunks in fixed priority; the first match
    /// wins. The loss check runs regardless of which branch resolved.
    fn check_for_field_collision(&mut self, field: &Field, ctx: &mut BallContext<'_>) -> BallStep {
        let position = self.transform.position;
        let radius = self.radius;
        let mut updated = position;

        let collision = if position.x - radius <= field.left() {
            self.velocity.x = -self.velocity.x;
            updated.x = field.left() + radius;
            Some(BallCollision::LeftWall)
        } else if position.x + radius >= field.right() {
            self.velocity.x = -self.velocity.x;
            updated.x = field.right() - radius;
            Some(BallCollision::RightWall)
        } else if position.y - radius <= PADDLE_PLANE_Y {
            ctx.bar
                .handle_ball_collision(position, radius, &mut self.velocity.x)
                .map(|hit_y| {
                    self.velocity.y = -self.velocity.y;
                    updated.y = hit_y;
                    BallCollision::Paddle
                })
        } else if position.y + radius >= CHUNK_PLANE_Y {
            if let Some(hit_y) = ctx.chunks.handle_ball_collision(position, radius, &mut ctx.hooks) {
                self.velocity.y = -self.velocity.y;
                updated.y = hit_y;
                Some(BallCollision::Chunk)
            } else if position.y + radius >= field.top() {
                self.velocity.y = -self.velocity.y;
                updated.y = field.top() - radius;
                Some(BallCollision::TopWall)
            } else {
                None
            }
        } else {
            None
        };

        if let Some(hit) = collision {
            log::trace!("Ball hit {:?} at ({}, {})", hit, position.x, position.y);
            self.transform.position = updated;
        }

        BallStep {
            collision,
            offscreen: position.y - radius <= BALL_LOSS_Y,
        }
    }
}

/// Owns the single ball, its launch latch and its speed effects
#[derive(Debug, Clone)]
pub struct BallManager {
    ball: Ball,
    launched: bool,
    offscreen: bool,
    launch_velocity: Vec2,
    speed_step: f32,
}

impl BallManager {
    pub fn new(tuning: &Tuning) -> Self {
        let transform = Transform2D::new(BALL_START_POSITION, BALL_ROTATION);
        Self {
            ball: Ball::new(transform, BALL_RADIUS, Vec2::ZERO),
            launched: false,
            offscreen: false,
            launch_velocity: tuning.launch_velocity,
            speed_step: tuning.ball_speed_step,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn launched_ball(&self) -> bool {
        self.launched
    }

    /// True once the ball has left the field through the bottom
    pub fn is_offscreen(&self) -> bool {
        self.offscreen
    }

    /// Give the ball its launch velocity. Only the first call has an effect.
    pub fn launch_ball(&mut self) {
        if self.launched {
            return;
        }
        self.ball.set_velocity(self.launch_velocity);
        self.launched = true;
        log::info!("Ball launched with velocity {}", self.launch_velocity);
    }

    pub fn update(&mut self, dt: f32, field: &Field, ctx: &mut BallContext<'_>) -> BallStep {
        let step = self.ball.update(dt, field, ctx);
        if step.offscreen {
            self.ball_offscreen(ctx);
        }
        step
    }

    /// Relay the loss once; later frames below the line stay quiet
    fn ball_offscreen(&mut self, ctx: &mut BallContext<'_>) {
        if self.offscreen {
            return;
        }
        self.offscreen = true;
        log::info!("Ball lost at y={}", self.ball.position().y);
        ctx.chunks.game_over(&mut *ctx.hooks.score);
    }
}

/// Move a non-zero component `step` further from zero (`grow`) or closer to
/// it. A shrink that would reach or cross zero leaves the component as is.
fn step_component(value: f32, step: f32, grow: bool) -> f32 {
    if value == 0.0 {
        return value;
    }
    let magnitude = value.abs();
    let magnitude = if grow {
        magnitude + step
    } else if magnitude > step {
        magnitude - step
    } else {
        magnitude
    };
    magnitude.copysign(value)
}

impl BallSpeedControl for BallManager {
    fn increase_ball_velocity(&mut self) {
        let v = self.ball.velocity();
        let step = self.speed_step;
        self.ball
            .set_velocity(Vec2::new(step_component(v.x, step, true), step_component(v.y, step, true)));
        log::debug!("Ball speed up: {}", self.ball.velocity());
    }

    fn decrease_ball_velocity(&mut self) {
        let v = self.ball.velocity();
        let step = self.speed_step;
        self.ball
            .set_velocity(Vec2::new(step_component(v.x, step, false), step_component(v.y, step, false)));
        log::debug!("Ball slow down: {}", self.ball.velocity());
    }
}
