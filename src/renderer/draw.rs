//! Draw items produced from game state
//!
//! Rectangles are anchored at their top-left corner and extend right and
//! down. Circles are anchored at their center. Chunks, the bar and powerups
//! live in layout space and are shifted by [`LAYOUT_DRAW_OFFSET`] here; their
//! rectangles sit on top of the anchor, so a chunk's drawn bottom edge is the
//! surface the ball bounces off. The field and ball are already in world
//! space.

use glam::{Affine2, Vec2};

use crate::consts::LAYOUT_DRAW_OFFSET;
use crate::sim::palette::{self, Rgba};
use crate::sim::{BallManager, BarManager, ChunkManager, Field, PowerupManager, ScoreManager};

/// Drawn bar spans the full asymmetric hit zone: one half width left of
/// center, two to the right
const BAR_DRAW_SIZE: Vec2 = Vec2::new(12.0, 3.0);
const POWERUP_DRAW_SIZE: Vec2 = Vec2::new(4.5, 3.0);
/// HUD text anchor, inside the top-left corner of the field
const HUD_TEXT_POSITION: Vec2 = Vec2::new(-50.0, 38.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub shape: Shape,
    pub placement: Affine2,
    pub color: Rgba,
}

impl DrawItem {
    pub fn rect(top_left: Vec2, size: Vec2, color: Rgba) -> Self {
        Self {
            shape: Shape::Rect { size },
            placement: Affine2::from_translation(top_left),
            color,
        }
    }

    pub fn circle(placement: Affine2, radius: f32, color: Rgba) -> Self {
        Self {
            shape: Shape::Circle { radius },
            placement,
            color,
        }
    }

    /// Anchor point in world space
    pub fn origin(&self) -> Vec2 {
        self.placement.translation
    }
}

/// A line of text for the HUD
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub color: Rgba,
}

/// Everything to draw for one frame, in painter's order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    labels: Vec<Label>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    pub fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.labels.clear();
    }
}

/// Anything that can append itself to a [`DrawList`]. Implementations only
/// read state.
pub trait Drawable {
    fn draw(&self, list: &mut DrawList);
}

impl Drawable for Field {
    fn draw(&self, list: &mut DrawList) {
        let top_left = Vec2::new(self.left(), self.top());
        list.push(DrawItem::rect(top_left, self.size(), self.color()));
    }
}

/// Rectangle resting on a layout-space anchor
fn layout_rect(anchor: Vec2, size: Vec2, color: Rgba) -> DrawItem {
    let top_left = anchor + LAYOUT_DRAW_OFFSET + Vec2::new(0.0, size.y);
    DrawItem::rect(top_left, size, color)
}

impl Drawable for ChunkManager {
    fn draw(&self, list: &mut DrawList) {
        for chunk in self.chunks() {
            list.push(layout_rect(chunk.position(), chunk.size(), chunk.color()));
        }
    }
}

impl Drawable for PowerupManager {
    fn draw(&self, list: &mut DrawList) {
        for powerup in self.powerups() {
            list.push(layout_rect(powerup.position(), POWERUP_DRAW_SIZE, powerup.color()));
        }
    }
}

impl Drawable for BarManager {
    fn draw(&self, list: &mut DrawList) {
        let bar = self.bar();
        let anchor = Vec2::new(bar.position().x - bar.width(), bar.position().y);
        list.push(layout_rect(anchor, BAR_DRAW_SIZE, bar.color()));
    }
}

impl Drawable for BallManager {
    fn draw(&self, list: &mut DrawList) {
        let ball = self.ball();
        list.push(DrawItem::circle(
            ball.transform().world_matrix(),
            ball.radius(),
            ball.color(),
        ));
    }
}

impl Drawable for ScoreManager {
    fn draw(&self, list: &mut DrawList) {
        list.push_label(Label {
            text: self.display_text().to_string(),
            position: HUD_TEXT_POSITION,
            color: palette::WHITE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_chunks_shift_into_world_space() {
        let chunks = ChunkManager::new(&Tuning::default());
        let mut list = DrawList::new();
        chunks.draw(&mut list);

        assert_eq!(list.len(), 60);
        let first = list.items()[0];
        assert_eq!(first.origin(), Vec2::new(36.0, 25.0));
        assert_eq!(first.shape, Shape::Rect { size: Vec2::new(9.0, 3.0) });
    }

    #[test]
    fn test_lowest_chunks_rest_on_chunk_plane() {
        let chunks = ChunkManager::new(&Tuning::default());
        let mut list = DrawList::new();
        chunks.draw(&mut list);

        let lowest_bottom = list
            .items()
            .iter()
            .map(|item| item.origin().y - CHUNK_HEIGHT)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(lowest_bottom, CHUNK_PLANE_Y);

        // A ball bounced off a chunk is re-placed with its center below it
        let rebound_y = chunks.chunks()[0].bottom() - CHUNK_REBOUND_OFFSET;
        assert!(rebound_y < lowest_bottom);
    }

    #[test]
    fn test_bar_draws_hit_zone() {
        let bars = BarManager::new(&Tuning::default());
        let mut list = DrawList::new();
        bars.draw(&mut list);

        let item = list.items()[0];
        assert_eq!(item.origin(), Vec2::new(-BAR_HALF_WIDTH, -42.0));
        assert_eq!(item.shape, Shape::Rect { size: BAR_DRAW_SIZE });
        assert_eq!(item.color, palette::CORNFLOWER_BLUE);
    }

    #[test]
    fn test_bar_sits_in_paddle_band() {
        let bars = BarManager::new(&Tuning::default());
        let mut list = DrawList::new();
        bars.draw(&mut list);

        let top = list.items()[0].origin().y;
        let bottom = top - BAR_DRAW_SIZE.y;
        assert_eq!(bottom, PADDLE_FLOOR_Y);
        assert!(top <= PADDLE_PLANE_Y);
        // Rebound places the ball clear of the drawn bar
        assert!(PADDLE_REBOUND_Y - BALL_RADIUS >= top);
    }

    #[test]
    fn test_ball_is_a_rotated_circle() {
        let balls = BallManager::new(&Tuning::default());
        let mut list = DrawList::new();
        balls.draw(&mut list);

        let item = list.items()[0];
        assert_eq!(item.shape, Shape::Circle { radius: BALL_RADIUS });
        assert_eq!(item.origin(), BALL_START_POSITION);
        assert_eq!(item.placement, Affine2::from_angle_translation(BALL_ROTATION, BALL_START_POSITION));
    }

    #[test]
    fn test_score_is_a_label() {
        let score = ScoreManager::new();
        let mut list = DrawList::new();
        score.draw(&mut list);

        assert_eq!(list.len(), 0);
        assert!(!list.is_empty());
        assert_eq!(list.labels()[0].text, "Space/A to launch ball");

        list.clear();
        assert!(list.is_empty());
    }
}
