//! # Scene Renderer
//!
//! Converts the circuit graph plus the resolved node positions into a
//! back-to-front display list: checkerboard background, then wires, then
//! devices. Components occlude wire ends at their anchors because wires
//! always render first.
//!
//! Rendering degrades per-entity: a dangling wire is skipped, an
//! unrecognized device type falls back to the default pair and glyph.
//! Nothing in this module errors or panics.

use glam::Vec2;
use std::collections::HashMap;
use tracing::debug;

use crate::config::{CanvasConfig, CanvasStyle};
use crate::model::{CircuitGraph, Device, DeviceKind, Position, Wire};
use crate::render::{DrawCommand, RenderList};
use crate::resolve;
use crate::view::View;

/// Approximate per-character advance as a fraction of the font size. Exact
/// text layout is the host's job; the backing rect only needs a stable
/// estimate of the extent.
const CHAR_ADVANCE: f32 = 0.62;
const LINE_HEIGHT: f32 = 1.35;

/// High-level renderer for the circuit canvas.
pub struct Painter;

impl Painter {
    /// Generates the full frame's draw commands.
    ///
    /// A degenerate viewport (nothing to draw onto) yields an empty list.
    pub fn draw_scene(
        view: &View,
        config: &CanvasConfig,
        graph: &CircuitGraph,
        resolved: &HashMap<String, Position>,
        screen_size: Vec2,
    ) -> RenderList {
        let mut draw_list = Vec::new();
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return draw_list;
        }
        let style = &config.style;

        // 1. Background
        Self::draw_checkerboard(style, screen_size, &mut draw_list);

        // 2. Wires (back layer)
        for (_id, wire) in &graph.wires {
            Self::draw_wire(view, style, graph, resolved, wire, &mut draw_list);
        }

        // 3. Devices (front layer), in document order
        for device in graph.devices_in_order() {
            Self::draw_device(view, style, device, &mut draw_list);
        }

        draw_list
    }

    /// Fixed-size checkerboard covering the viewport. Tile parity follows
    /// `(col + row) % 2`; tiles do not scale with zoom.
    fn draw_checkerboard(style: &CanvasStyle, screen_size: Vec2, draw_list: &mut RenderList) {
        let tile = style.checker_tile;
        let cols = (screen_size.x / tile).ceil() as i32;
        let rows = (screen_size.y / tile).ceil() as i32;

        for row in 0..rows {
            for col in 0..cols {
                let color = if (col + row) % 2 == 0 {
                    style.checker_light
                } else {
                    style.checker_dark
                };
                draw_list.push(DrawCommand::Rect {
                    pos: Vec2::new(col as f32 * tile, row as f32 * tile),
                    size: Vec2::splat(tile),
                    color,
                    corner_radius: 0.0,
                    stroke_width: 0.0,
                    stroke_color: None,
                    rotation: 0.0,
                    shadow: None,
                });
            }
        }
    }

    /// One wire as a straight segment between its two resolved endpoints.
    /// Either endpoint failing to resolve skips the wire.
    fn draw_wire(
        view: &View,
        style: &CanvasStyle,
        graph: &CircuitGraph,
        resolved: &HashMap<String, Position>,
        wire: &Wire,
        draw_list: &mut RenderList,
    ) {
        let start = resolve::endpoint_position(graph, resolved, &wire.nodes[0]);
        let end = resolve::endpoint_position(graph, resolved, &wire.nodes[1]);

        let (Some(start_world), Some(end_world)) = (start, end) else {
            debug!(wire_id = %wire.wire_id, "skipping wire with dangling endpoint");
            return;
        };

        // Local scale is a device concern; wire endpoints project at 1.
        draw_list.push(DrawCommand::Line {
            start: view.project(&start_world, 1.0),
            end: view.project(&end_world, 1.0),
            color: style.wire.color,
            width: style.wire.width * view.transform.zoom,
        });
    }

    /// One device glyph. Junctions are small dots; everything else is a
    /// rounded, shadowed box with an upright label.
    fn draw_device(view: &View, style: &CanvasStyle, device: &Device, draw_list: &mut RenderList) {
        let zoom = view.transform.zoom;
        let center = view.project(&device.position, device.position.scale_factor);
        let device_style = style.device_style(device.kind);

        if device.kind == DeviceKind::Junction {
            draw_list.push(DrawCommand::Circle {
                center,
                radius: style.junction_radius * zoom,
                color: device_style.fill,
                stroke_width: 1.0 * zoom,
                stroke_color: Some(device_style.stroke),
            });
            return;
        }

        let size = style.device_size * zoom;
        draw_list.push(DrawCommand::Rect {
            pos: center - size * 0.5,
            size,
            color: device_style.fill,
            corner_radius: style.corner_radius * zoom,
            stroke_width: style.device_stroke_width * zoom,
            stroke_color: Some(device_style.stroke),
            rotation: device.rotation.to_radians(),
            shadow: Some(style.shadow(zoom)),
        });

        // Label: icon glyph + type name, upright regardless of the glyph
        // box's rotation, over a semi-transparent backing.
        let text = format!("{} {}", style.device_glyph(device.kind), device.type_name);
        let font_size = style.label_size * zoom;
        let extent = Self::text_extent(&text, font_size);
        let padding = Vec2::splat(font_size * 0.25);

        draw_list.push(DrawCommand::Rect {
            pos: center - (extent + padding * 2.0) * 0.5,
            size: extent + padding * 2.0,
            color: style.label_backing,
            corner_radius: style.corner_radius * 0.5 * zoom,
            stroke_width: 0.0,
            stroke_color: None,
            rotation: 0.0,
            shadow: None,
        });
        draw_list.push(DrawCommand::Text {
            pos: center - extent * 0.5,
            text,
            color: style.label_color,
            size: font_size,
        });
    }

    /// Headless text-extent estimate used to size label backings.
    fn text_extent(text: &str, font_size: f32) -> Vec2 {
        Vec2::new(
            text.chars().count() as f32 * font_size * CHAR_ADVANCE,
            font_size * LINE_HEIGHT,
        )
    }
}
