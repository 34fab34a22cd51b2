//! Draw directives handed to the external renderer

use glam::Vec2;

/// Horizontal placement of a text overlay relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Left,
    /// Renderer measures the text and centers it on x
    Center,
}

/// One thing to draw this frame, in screen pixels (y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear { color: [f32; 4] },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Bird animation frame drawn with its top-left corner at `position`
    Sprite {
        position: Vec2,
        frame: u32,
        scale: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: u32,
        color: [f32; 4],
        anchor: TextAnchor,
    },
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.96, 0.96, 0.96, 1.0];
    pub const BIRD: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
    pub const PIPE: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const ACK: [f32; 4] = [0.0, 0.46, 0.17, 1.0];
}
