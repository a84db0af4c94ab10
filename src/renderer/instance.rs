//! GPU instance data for draw items

use bytemuck::{Pod, Zeroable};

use super::draw::{DrawItem, DrawList, Shape};

pub const SHAPE_RECT: u32 = 0;
pub const SHAPE_CIRCLE: u32 = 1;

/// One quad instance (must match shader layout, 64 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub x_axis: [f32; 2],      // offset 0
    pub y_axis: [f32; 2],      // offset 8
    pub translation: [f32; 2], // offset 16
    pub size: [f32; 2],        // offset 24 - rect size, or radius in both lanes
    pub color: [f32; 4],       // offset 32
    pub shape: u32,            // offset 48
    pub _pad: [u32; 3],        // pad to 64 bytes
}

impl InstanceRaw {
    pub fn from_item(item: &DrawItem) -> Self {
        let (shape, size) = match item.shape {
            Shape::Rect { size } => (SHAPE_RECT, size.to_array()),
            Shape::Circle { radius } => (SHAPE_CIRCLE, [radius, radius]),
        };
        Self {
            x_axis: item.placement.matrix2.x_axis.to_array(),
            y_axis: item.placement.matrix2.y_axis.to_array(),
            translation: item.placement.translation.to_array(),
            size,
            color: item.color,
            shape,
            _pad: [0; 3],
        }
    }

    /// Flatten a draw list in order. Labels are not instanced.
    pub fn from_list(list: &DrawList) -> Vec<Self> {
        list.items().iter().map(Self::from_item).collect()
    }
}

/// Raw bytes for uploading to an instance buffer
pub fn as_bytes(instances: &[InstanceRaw]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use glam::{Affine2, Vec2};

    use super::*;
    use crate::sim::palette;

    #[test]
    fn test_layout_is_64_bytes() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 64);
        let instances = [InstanceRaw::zeroed(); 3];
        assert_eq!(as_bytes(&instances).len(), 192);
    }

    #[test]
    fn test_rect_and_circle_encoding() {
        let mut list = DrawList::new();
        list.push(DrawItem::rect(Vec2::new(1.0, 2.0), Vec2::new(9.0, 3.0), palette::RED));
        list.push(DrawItem::circle(Affine2::from_translation(Vec2::ZERO), 1.5, palette::WHITE));

        let raw = InstanceRaw::from_list(&list);
        assert_eq!(raw.len(), 2);

        assert_eq!(raw[0].shape, SHAPE_RECT);
        assert_eq!(raw[0].translation, [1.0, 2.0]);
        assert_eq!(raw[0].size, [9.0, 3.0]);
        assert_eq!(raw[0].x_axis, [1.0, 0.0]);
        assert_eq!(raw[0].color, palette::RED);

        assert_eq!(raw[1].shape, SHAPE_CIRCLE);
        assert_eq!(raw[1].size, [1.5, 1.5]);
    }
}
