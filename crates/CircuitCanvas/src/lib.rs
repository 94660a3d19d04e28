//! # CircuitCanvas
//!
//! `circuit_canvas` is a headless, retained-mode renderer for reconstructed
//! electrical circuits. It handles state, coordinate mathematics, and scene
//! composition, while delegating rasterization to the host application.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: the circuit graph in flat arenas (SlotMap).
//! - **Schema (`src/schema.rs`)**: validated JSON boundary for the graph.
//! - **View (`src/view.rs`)**: coordinate transformation (World <-> Screen).
//! - **Resolve (`src/resolve.rs`)**: node-id to junction-position mapping.
//! - **Painter (`src/painter.rs`)**: outputs a `RenderList` of screen-space
//!   `DrawCommand`s for the host to render.

pub mod config;
pub mod input;
pub mod interaction;
pub mod model;
pub mod painter;
pub mod render;
pub mod resolve;
pub mod schema;
pub mod view;

use glam::Vec2;
use input::InputState;
use model::CircuitGraph;
use render::RenderList;
use view::{Transform, View};

// Re-exports for convenience
pub use config::CanvasConfig;
pub use interaction::{InteractionMode, LogicEvent};
pub use schema::{SchemaError, parse_circuit};

/// The main entry point for the library.
///
/// The `Canvas` struct owns the transient view state (transform, interaction
/// mode) and configuration. It is instantiated once and reused; the circuit
/// graph itself is external and passed into every update.
pub struct Canvas {
    /// Configuration settings.
    pub config: CanvasConfig,
    /// The viewport system handling coordinate transforms.
    pub view: View,
    /// Current interaction mode.
    pub interaction_mode: InteractionMode,
    /// Events produced by out-of-band mutations, drained on the next update.
    pending_events: Vec<LogicEvent>,
}

impl Canvas {
    /// Creates a new canvas with the given configuration. The initial scale
    /// factor comes from the config and is clamped like every later set.
    pub fn new(config: CanvasConfig) -> Self {
        let transform = Transform::new(config.scale_factor);
        Self {
            config,
            view: View::new(transform, Vec2::new(800.0, 600.0)), // Default 800x600, host should update
            interaction_mode: InteractionMode::Idle,
            pending_events: Vec::new(),
        }
    }

    /// Updates the viewport size (e.g. on window resize). The base scale is
    /// derived from this, so the next draw picks the change up.
    pub fn update_viewport_size(&mut self, size: Vec2) {
        self.view.viewport_size = size;
    }

    /// The current global scale factor.
    pub fn scale_factor(&self) -> f32 {
        self.view.transform.scale_factor
    }

    /// Sets the global scale factor, clamped to the legal range, and returns
    /// the applied value. A change is surfaced to the host as
    /// `LogicEvent::ScaleFactorChanged` on the next update -- this is the one
    /// transform parameter external views depend on.
    pub fn set_scale_factor(&mut self, value: f32) -> f32 {
        let previous = self.view.transform.scale_factor;
        let applied = self.view.transform.set_scale_factor(value);
        if (applied - previous).abs() > f32::EPSILON {
            self.pending_events.push(LogicEvent::ScaleFactorChanged(applied));
            self.pending_events.push(LogicEvent::RepaintNeeded);
        }
        applied
    }

    /// Advances the view rotation by one quadrant step (90 degrees,
    /// wrapping 270 -> 0).
    pub fn rotate_view(&mut self) {
        self.view.transform.rotate_step();
        self.pending_events.push(LogicEvent::RepaintNeeded);
    }

    /// The core update loop: process input, resolve node positions, paint.
    ///
    /// Returns the full frame's draw commands plus any logic events. Every
    /// frame is a complete repaint; the graph is read-only here and replaced
    /// wholesale by the host when it changes.
    pub fn update(
        &mut self,
        input: &InputState,
        graph: &CircuitGraph,
    ) -> (RenderList, Vec<LogicEvent>) {
        let mut logic_events = std::mem::take(&mut self.pending_events);

        // 1. Interactions (pan, zoom, rotate)
        interaction::handle_interactions(
            &mut self.interaction_mode,
            &mut self.view,
            &self.config,
            input,
            &mut logic_events,
        );

        // 2. Node resolution
        let resolved = resolve::resolve_node_positions(graph);

        // 3. Render
        let draw_list = painter::Painter::draw_scene(
            &self.view,
            &self.config,
            graph,
            &resolved,
            input.screen_size,
        );

        (draw_list, logic_events)
    }
}
