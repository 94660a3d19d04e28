//! # Input Protocol
//!
//! The input state the host application passes to the canvas every frame.
//! The canvas consumes events synchronously; nothing is queued.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// State of mouse buttons.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MouseButtons {
    /// Left mouse button is pressed.
    pub left: bool,
    /// Right mouse button is pressed.
    pub right: bool,
    /// Middle mouse button is pressed.
    pub middle: bool,
}

/// Keyboard keys the canvas cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Rotate the view by one quadrant step.
    R,
}

/// The input state for a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputState {
    /// Current cursor position in Screen Space (pixels).
    pub mouse_pos: Vec2,
    /// State of mouse buttons.
    pub mouse_buttons: MouseButtons,
    /// Wheel notches this frame. Positive = zoom in; the host applies the
    /// natural-scroll inversion when mapping raw OS deltas.
    pub scroll_delta: f32,
    /// Keys pressed this frame.
    pub pressed_keys: Vec<Key>,
    /// Size of the canvas viewport in pixels.
    pub screen_size: Vec2,
    /// False once the pointer has left the interactive surface. An active
    /// drag ends immediately when this drops.
    pub pointer_inside: bool,
    /// If true, the canvas ignores click/drag events (but still tracks the
    /// cursor). Used when an overlaying host widget consumed the event.
    pub event_consumed_by_content: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            mouse_buttons: MouseButtons::default(),
            scroll_delta: 0.0,
            pressed_keys: Vec::new(),
            screen_size: Vec2::new(800.0, 600.0),
            pointer_inside: true,
            event_consumed_by_content: false,
        }
    }
}
