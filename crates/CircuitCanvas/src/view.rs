//! # Viewport System
//!
//! World <-> Screen mathematics for the circuit canvas.
//!
//! World coordinates come from the reconstruction pipeline in an arbitrary
//! unit-less space; the view maps them to pixels through a composable
//! transform: rotation (quadrant) -> scale -> pan, with a per-device local
//! scale folded into the scale term. All of it is pure functions over the
//! `View` fields, so projection is deterministic and independently testable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::model::Position;

/// Zoom clamp bounds.
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 10.0;

/// Global scale factor clamp bounds.
pub const SCALE_FACTOR_MIN: f32 = 1000.0;
pub const SCALE_FACTOR_MAX: f32 = 15000.0;

/// Nominal world extent the base scale normalizes to the viewport.
const NOMINAL_EXTENT: f32 = 1000.0;
/// Margin kept around the nominal extent.
const VIEW_MARGIN: f32 = 0.9;

/// One of the four legal 90-degree view rotations.
///
/// The whole scene rotates in exact quadrant steps; arbitrary angles are not
/// representable on purpose. Distinct from a device's own `rotation` field,
/// which rotates a single glyph about its screen position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Quadrant {
    /// The next quadrant clockwise, wrapping 270 -> 0.
    pub fn step(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    pub fn degrees(self) -> f32 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => 90.0,
            Self::Deg180 => 180.0,
            Self::Deg270 => 270.0,
        }
    }
}

/// The camera state: pan offset, zoom, view rotation, and the user-adjustable
/// global scale factor converting world units to pre-zoom pixel magnitudes.
///
/// Mutation goes through the clamped operations below; nothing else in the
/// crate writes these fields.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Transform {
    /// Translation offset of the canvas, in pixels.
    pub pan: Vec2,
    /// Zoom scale. 1.0 = 100%. Clamped to [`ZOOM_MIN`, `ZOOM_MAX`].
    pub zoom: f32,
    /// Whole-scene rotation.
    pub quadrant: Quadrant,
    /// World-to-pixel multiplier. Clamped to
    /// [`SCALE_FACTOR_MIN`, `SCALE_FACTOR_MAX`].
    pub scale_factor: f32,
}

impl Transform {
    /// A fresh transform with defaults and a caller-chosen scale factor.
    pub fn new(scale_factor: f32) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            quadrant: Quadrant::Deg0,
            scale_factor: scale_factor.clamp(SCALE_FACTOR_MIN, SCALE_FACTOR_MAX),
        }
    }

    /// Shifts the pan offset by `delta` pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Adjusts zoom by `delta`, clamping to the legal range.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Advances the view rotation by 90 degrees, wrapping 270 -> 0.
    pub fn rotate_step(&mut self) {
        self.quadrant = self.quadrant.step();
    }

    /// Sets the global scale factor, clamped. Returns the applied value.
    pub fn set_scale_factor(&mut self, value: f32) -> f32 {
        self.scale_factor = value.clamp(SCALE_FACTOR_MIN, SCALE_FACTOR_MAX);
        self.scale_factor
    }
}

/// The `Transform` combined with the viewport size.
///
/// Single source of truth for coordinate conversion. The base scale is
/// derived from `viewport_size` at projection time, so a resize changes it
/// before the next draw with no extra bookkeeping.
pub struct View {
    pub transform: Transform,
    /// Size of the visible area in pixels.
    pub viewport_size: Vec2,
}

impl View {
    pub fn new(transform: Transform, viewport_size: Vec2) -> Self {
        Self {
            transform,
            viewport_size,
        }
    }

    /// Normalizes the nominal 1000x1000 world extent to the viewport with a
    /// 10% margin, independent of zoom.
    pub fn base_scale(&self) -> f32 {
        (self.viewport_size.x / NOMINAL_EXTENT).min(self.viewport_size.y / NOMINAL_EXTENT)
            * VIEW_MARGIN
    }

    /// Projects a world position to screen pixels.
    ///
    /// `local_scale` is the per-entity scale override: pass
    /// `position.scale_factor` for devices and 1.0 for wire endpoints.
    ///
    /// The quadrant cases are spelled out rather than funneled through a
    /// rotation matrix: only these four rotations are legal, and the exact
    /// sign flips are load-bearing for hit-testing and tests.
    pub fn project(&self, position: &Position, local_scale: f32) -> Vec2 {
        let scaled_x = position.x * self.transform.scale_factor;
        let scaled_z = position.z * self.transform.scale_factor;
        let k = self.base_scale() * self.transform.zoom * local_scale;
        let pan = self.transform.pan;

        match self.transform.quadrant {
            Quadrant::Deg0 => Vec2::new(scaled_x * k + pan.x, scaled_z * k + pan.y),
            Quadrant::Deg90 => Vec2::new(-scaled_z * k + pan.x, scaled_x * k + pan.y),
            Quadrant::Deg180 => Vec2::new(-scaled_x * k + pan.x, -scaled_z * k + pan.y),
            Quadrant::Deg270 => Vec2::new(scaled_z * k + pan.x, -scaled_x * k + pan.y),
        }
    }
}
