//! # Rendering System
//!
//! The canvas does not draw pixels. It outputs a display list of
//! `DrawCommand`s per frame; the host application (macroquad, egui, wgpu...)
//! interprets the commands and rasterizes them.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A drop shadow attached to a rect command.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Shadow {
    /// Offset from the rect in screen pixels.
    pub offset: Vec2,
    /// Shadow color (RGBA, 0.0 - 1.0).
    pub color: Vec4,
}

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (pixels).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled rounded rectangle with an optional stroke.
    Rect {
        /// Top-left position in screen pixels (before rotation).
        pos: Vec2,
        /// Size in screen pixels.
        size: Vec2,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Radius of the corners in pixels.
        corner_radius: f32,
        /// Width of the border stroke in pixels.
        stroke_width: f32,
        /// Color of the border stroke.
        stroke_color: Option<Vec4>,
        /// Rotation in radians about the rect's center. 0 for axis-aligned
        /// rects; device glyphs carry their intrinsic rotation here while
        /// their labels stay upright.
        rotation: f32,
        /// Optional drop shadow, drawn behind the rect.
        shadow: Option<Shadow>,
    },
    /// A filled circle with an optional stroke.
    Circle {
        /// Center in screen pixels.
        center: Vec2,
        /// Radius in screen pixels.
        radius: f32,
        /// Fill color.
        color: Vec4,
        /// Width of the border stroke in pixels.
        stroke_width: f32,
        /// Color of the border stroke.
        stroke_color: Option<Vec4>,
    },
    /// A straight line segment.
    Line {
        /// Start point in screen pixels.
        start: Vec2,
        /// End point in screen pixels.
        end: Vec2,
        /// Line color.
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// Text to be rendered, always upright.
    Text {
        /// Top-left position of the layout box in screen pixels.
        pos: Vec2,
        /// The styling and layout of text is handled by the consumer.
        text: String,
        /// Text color.
        color: Vec4,
        /// Font size in pixels (approximate).
        size: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
