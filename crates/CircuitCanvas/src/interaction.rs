//! # Interaction Controller
//!
//! Translates raw pointer/wheel input into transform-parameter mutations:
//! wheel -> zoom step, drag -> pan, `R` -> rotate step. Each event updates
//! the view synchronously before the next render; there is no momentum and
//! no queuing.

use glam::Vec2;

use crate::config::CanvasConfig;
use crate::input::{InputState, Key};
use crate::view::{Transform, View};

/// Events emitted by the canvas logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicEvent {
    /// The global scale factor changed; carries the applied (clamped) value
    /// so dependent host views (e.g. a coordinates table) stay in sync.
    ScaleFactorChanged(f32),
    /// The visual state changed, requiring a repaint.
    RepaintNeeded,
}

/// The current state of user interaction.
#[derive(Clone, Debug)]
pub enum InteractionMode {
    /// No active interaction.
    Idle,
    /// User is dragging the canvas.
    Panning {
        /// Cursor position at press (Screen Space).
        start_drag: Vec2,
        /// Transform at press; pan accumulates from here.
        initial_transform: Transform,
    },
}

/// Processes one frame of input against the current interaction mode.
pub fn handle_interactions(
    mode: &mut InteractionMode,
    view: &mut View,
    config: &CanvasConfig,
    input: &InputState,
    events: &mut Vec<LogicEvent>,
) {
    // Zooming via wheel: fixed step per notch, clamped.
    if input.scroll_delta != 0.0 {
        let old_zoom = view.transform.zoom;
        view.transform.zoom_by(input.scroll_delta * config.zoom_step);
        if (view.transform.zoom - old_zoom).abs() > f32::EPSILON {
            events.push(LogicEvent::RepaintNeeded);
        }
    }

    // Keyboard shortcuts.
    if !input.event_consumed_by_content {
        for key in &input.pressed_keys {
            match key {
                Key::R => {
                    view.transform.rotate_step();
                    events.push(LogicEvent::RepaintNeeded);
                }
            }
        }
    }

    let next_mode = match mode {
        InteractionMode::Idle => handle_idle(view, input),
        InteractionMode::Panning {
            start_drag,
            initial_transform,
        } => handle_panning(view, config, input, *start_drag, *initial_transform, events),
    };

    if let Some(new_mode) = next_mode {
        *mode = new_mode;
    }
}

/// In `Idle`, a left press on the surface starts a drag.
fn handle_idle(view: &View, input: &InputState) -> Option<InteractionMode> {
    if input.mouse_buttons.left && input.pointer_inside && !input.event_consumed_by_content {
        return Some(InteractionMode::Panning {
            start_drag: input.mouse_pos,
            initial_transform: view.transform,
        });
    }
    None
}

/// In `Panning`, the pan offset tracks the cumulative displacement since the
/// press. Releasing the button or leaving the surface ends the drag.
fn handle_panning(
    view: &mut View,
    config: &CanvasConfig,
    input: &InputState,
    start_drag: Vec2,
    initial_transform: Transform,
    events: &mut Vec<LogicEvent>,
) -> Option<InteractionMode> {
    if !input.mouse_buttons.left || !input.pointer_inside {
        return Some(InteractionMode::Idle);
    }
    let delta = (input.mouse_pos - start_drag) * config.pan_speed;
    view.transform.pan = initial_transform.pan + delta;
    events.push(LogicEvent::RepaintNeeded);
    None
}
