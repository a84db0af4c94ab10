//! Playfield boundary

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::palette::{self, Rgba};
use crate::consts::{FIELD_POSITION, FIELD_SIZE};

/// Static rectangular play area, described by its center and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    position: Vec2,
    size: Vec2,
    color: Rgba,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_POSITION, FIELD_SIZE)
    }
}

impl Field {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "field size must be positive");
        Self {
            position,
            size,
            color: palette::ANTIQUE_WHITE,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.size.y / 2.0
    }
}
