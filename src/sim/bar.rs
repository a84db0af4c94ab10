//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::hooks::BarControl;
use super::palette::{self, Rgba};
use super::transform::Transform2D;
use crate::consts::*;
use crate::tuning::Tuning;

/// The paddle. `width` is the half extent used for clamping and hit tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    transform: Transform2D,
    velocity: Vec2,
    width: f32,
    color: Rgba,
}

impl Bar {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            transform: Transform2D::at(position),
            velocity,
            width: BAR_HALF_WIDTH,
            color: palette::CORNFLOWER_BLUE,
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

    pub fn width(&self) -> f32 {
        self.width
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

    /// Integrate velocity, then clamp inside the field
    pub fn update(&mut self, dt: f32, field: &Field) {
        self.transform.translate(self.velocity * dt);
        self.check_for_field_collision(field);
    }

    /// The paddle stops at the walls; its velocity is left alone so it keeps
    /// pushing while the direction is held.
    fn check_for_field_collision(&mut self, field: &Field) {
        let position = &mut self.transform.position;

        if position.x - self.width <= field.left() {
            position.x = field.left() + self.width;
        }

        if position.x + self.width >= field.right() {
            position.x = field.right() - self.width;
        }
    }
}

/// Owns the single paddle and answers collision queries against it
#[derive(Debug, Clone)]
pub struct BarManager {
    bar: Bar,
    speed_up: f32,
    slow_down: f32,
    min_speed: f32,
}

impl BarManager {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bar: Bar::new(BAR_START_POSITION, Vec2::new(tuning.bar_speed, 0.0)),
            speed_up: tuning.bar_speed_up,
            slow_down: tuning.bar_slow_down,
            min_speed: tuning.bar_min_speed,
        }
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut Bar {
        &mut self.bar
    }

    pub fn update(&mut self, dt: f32, field: &Field) {
        self.bar.update(dt, field);
    }

    /// Point the paddle right; no-op if it already is
    pub fn move_right(&mut self) {
        let mut velocity = self.bar.velocity();
        if velocity.x < 0.0 {
            velocity.x = -velocity.x;
            self.bar.set_velocity(velocity);
        }
    }

    /// Point the paddle left; no-op if it already is
    pub fn move_left(&mut self) {
        let mut velocity = self.bar.velocity();
        if velocity.x > 0.0 {
            velocity.x = -velocity.x;
            self.bar.set_velocity(velocity);
        }
    }

    /// Test the ball against the paddle.
    ///
    /// The hit zone spans one half width left of the paddle center and two
    /// to the right. On a hit the ball's horizontal velocity may be flipped
    /// so it leaves away from the side it struck, and the rebound y is
    /// returned. The ball's vertical direction is not considered.
    pub fn handle_ball_collision(
        &self,
        ball_position: Vec2,
        ball_radius: f32,
        ball_x_velocity: &mut f32,
    ) -> Option<f32> {
        let center = self.bar.position().x;
        let left = center - self.bar.width;
        let right = center + 2.0 * self.bar.width;

        let within_x = ball_position.x - ball_radius >= left && ball_position.x + ball_radius <= right;
        let lower = ball_position.y - ball_radius;
        let within_y = (PADDLE_FLOOR_Y..=PADDLE_PLANE_Y).contains(&lower);

        if !(within_x && within_y) {
            return None;
        }

        if ball_position.x < center && *ball_x_velocity > 0.0 {
            *ball_x_velocity = -*ball_x_velocity;
        } else if ball_position.x >= center && *ball_x_velocity < 0.0 {
            *ball_x_velocity = -*ball_x_velocity;
        }

        log::trace!("Paddle hit at x={} (paddle {})", ball_position.x, center);
        Some(PADDLE_REBOUND_Y)
    }

    fn adjust_speed(&mut self, delta: f32) {
        let mut velocity = self.bar.velocity();
        let direction = if velocity.x < 0.0 { -1.0 } else { 1.0 };
        let speed = (velocity.x.abs() + delta).max(self.min_speed);
        velocity.x = direction * speed;
        self.bar.set_velocity(velocity);
    }
}

impl BarControl for BarManager {
    fn handle_powerup_collision(&self, position: Vec2, width: f32) -> bool {
        let center = position.x + width / 2.0;
        let x = self.bar.position().x;
        x - self.bar.width <= center && center <= x + self.bar.width
    }

    fn bar_upper_y(&self) -> f32 {
        BAR_Y
    }

    fn increase_bar_velocity(&mut self) {
        self.adjust_speed(self.speed_up);
        log::debug!("Bar speed up: {}", self.bar.velocity().x.abs());
    }

    fn decrease_bar_velocity(&mut self) {
        self.adjust_speed(-self.slow_down);
        log::debug!("Bar slow down: {}", self.bar.velocity().x.abs());
    }
}
