//! 2D placement of an entity

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// Position and rotation (radians) of a single entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform2D {
    pub position: Vec2,
    pub rotation: f32,
}

impl Transform2D {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    pub fn at(position: Vec2) -> Self {
        Self::new(position, 0.0)
    }

    /// World placement: rotate about the local origin, then translate
    pub fn world_matrix(&self) -> Affine2 {
        Affine2::from_angle_translation(self.rotation, self.position)
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
