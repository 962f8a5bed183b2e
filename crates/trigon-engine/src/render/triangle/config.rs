use crate::paint::Color;

use super::AnimationParams;

/// Everything the host can tune about the triangle scene.
#[derive(Debug, Clone)]
pub struct TriangleConfig {
    /// Background the drawable is cleared to each frame.
    pub clear_color: Color,
    pub animation: AnimationParams,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::rgb(0.1, 0.1, 0.15),
            animation: AnimationParams::default(),
        }
    }
}
