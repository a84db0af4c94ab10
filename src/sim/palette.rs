//! Named colors used by the game entities

/// Linear RGBA color
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const ANTIQUE_WHITE: Rgba = [0.980, 0.922, 0.843, 1.0];
pub const CORNFLOWER_BLUE: Rgba = [0.392, 0.584, 0.929, 1.0];
pub const PEACH_PUFF: Rgba = [1.0, 0.855, 0.725, 1.0];

pub const HOT_PINK: Rgba = [1.0, 0.412, 0.706, 1.0];
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const ORANGE: Rgba = [1.0, 0.647, 0.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const LAWN_GREEN: Rgba = [0.486, 0.988, 0.0, 1.0];
pub const LIGHT_SKY_BLUE: Rgba = [0.529, 0.808, 0.980, 1.0];

pub const MEDIUM_PURPLE: Rgba = [0.576, 0.439, 0.859, 1.0];
pub const MISTY_ROSE: Rgba = [1.0, 0.894, 0.882, 1.0];
pub const POWDER_BLUE: Rgba = [0.690, 0.878, 0.902, 1.0];
pub const PURPLE: Rgba = [0.502, 0.0, 0.502, 1.0];

/// One color per chunk row, top row first
pub const CHUNK_ROWS: [Rgba; 6] = [HOT_PINK, RED, ORANGE, YELLOW, LAWN_GREEN, LIGHT_SKY_BLUE];
