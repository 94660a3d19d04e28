//! # Configuration
//!
//! Canvas tuning parameters and visual styling, including the per-device-type
//! color palette and label glyph table.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::model::DeviceKind;
use crate::render::Shadow;

/// Configuration parameters for the canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Multiplier for panning speed. Default: 1.0.
    pub pan_speed: f32,
    /// Zoom change per wheel notch. Default: 0.05.
    pub zoom_step: f32,
    /// Initial global scale factor, clamped to the legal range on
    /// construction. Default: 8000.
    pub scale_factor: f32,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: CanvasStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            pan_speed: 1.0,
            zoom_step: 0.05,
            scale_factor: 8000.0,
            style: CanvasStyle::default(),
        }
    }
}

/// Fill/stroke color pair for a device glyph.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DeviceStyle {
    pub fill: Vec4,
    pub stroke: Vec4,
}

/// Visual style for wires.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WireStyle {
    /// Stroke color.
    pub color: Vec4,
    /// Stroke width in pixels at zoom 1.
    pub width: f32,
}

impl Default for WireStyle {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.25, 0.27, 0.30, 1.0),
            width: 2.0,
        }
    }
}

/// Visual styling configuration for the canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasStyle {
    /// Checkerboard tile edge in pixels (fixed, not zoom-scaled).
    pub checker_tile: f32,
    /// Checkerboard fill for even tiles.
    pub checker_light: Vec4,
    /// Checkerboard fill for odd tiles.
    pub checker_dark: Vec4,
    /// Wire stroke style.
    #[serde(default)]
    pub wire: WireStyle,
    /// Glyph box size for non-junction devices, at zoom 1.
    pub device_size: Vec2,
    /// Corner radius of device boxes, at zoom 1.
    pub corner_radius: f32,
    /// Stroke width of device boxes, at zoom 1.
    pub device_stroke_width: f32,
    /// Junction dot radius, at zoom 1.
    pub junction_radius: f32,
    /// Label font size, at zoom 1.
    pub label_size: f32,
    /// Label text color.
    pub label_color: Vec4,
    /// Semi-transparent backing behind labels.
    pub label_backing: Vec4,
    /// Drop shadow offset for device boxes, at zoom 1.
    pub shadow_offset: Vec2,
    /// Drop shadow color.
    pub shadow_color: Vec4,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            checker_tile: 20.0,
            checker_light: Vec4::new(0.93, 0.93, 0.94, 1.0),
            checker_dark: Vec4::new(0.88, 0.88, 0.90, 1.0),
            wire: WireStyle::default(),
            device_size: Vec2::new(64.0, 40.0),
            corner_radius: 6.0,
            device_stroke_width: 1.5,
            junction_radius: 5.0,
            label_size: 12.0,
            label_color: Vec4::new(0.12, 0.12, 0.14, 1.0),
            label_backing: Vec4::new(1.0, 1.0, 1.0, 0.65),
            shadow_offset: Vec2::new(2.0, 3.0),
            shadow_color: Vec4::new(0.0, 0.0, 0.0, 0.30),
        }
    }
}

impl CanvasStyle {
    /// The fill/stroke pair for a device kind. Unrecognized kinds get the
    /// fallback pair; lookup never fails.
    pub fn device_style(&self, kind: DeviceKind) -> DeviceStyle {
        let (fill, stroke) = match kind {
            DeviceKind::Resistor => ((0.87, 0.64, 0.27), (0.56, 0.38, 0.10)),
            DeviceKind::Capacitor => ((0.38, 0.57, 0.86), (0.16, 0.31, 0.56)),
            DeviceKind::Inductor => ((0.42, 0.71, 0.47), (0.19, 0.43, 0.23)),
            DeviceKind::VoltageSource => ((0.82, 0.38, 0.37), (0.52, 0.16, 0.15)),
            DeviceKind::CurrentSource => ((0.66, 0.47, 0.81), (0.39, 0.23, 0.53)),
            DeviceKind::Ground => ((0.56, 0.59, 0.61), (0.31, 0.33, 0.36)),
            DeviceKind::Junction => ((0.25, 0.27, 0.30), (0.86, 0.86, 0.89)),
            DeviceKind::Other => ((0.46, 0.51, 0.56), (0.26, 0.29, 0.33)),
        };
        DeviceStyle {
            fill: Vec4::new(fill.0, fill.1, fill.2, 1.0),
            stroke: Vec4::new(stroke.0, stroke.1, stroke.2, 1.0),
        }
    }

    /// The label icon glyph for a device kind, with a defined fallback.
    pub fn device_glyph(&self, kind: DeviceKind) -> &'static str {
        match kind {
            DeviceKind::Resistor => "\u{03a9}",       // Ω
            DeviceKind::Capacitor => "\u{2016}",      // ‖
            DeviceKind::Inductor => "\u{223f}",       // ∿
            DeviceKind::VoltageSource => "\u{2393}",  // ⎓
            DeviceKind::CurrentSource => "\u{21af}",  // ↯
            DeviceKind::Ground => "\u{23da}",         // ⏚
            DeviceKind::Junction | DeviceKind::Other => "\u{25a1}", // □
        }
    }

    /// The device-box drop shadow at the given zoom.
    pub fn shadow(&self, zoom: f32) -> Shadow {
        Shadow {
            offset: self.shadow_offset * zoom,
            color: self.shadow_color,
        }
    }
}
