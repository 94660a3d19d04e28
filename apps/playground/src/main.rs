use circuit_canvas::input::{InputState, Key, MouseButtons};
use circuit_canvas::render::DrawCommand;
use circuit_canvas::{Canvas, CanvasConfig, LogicEvent, parse_circuit};
use macroquad::prelude as mq;

/// A small reconstructed circuit: a source feeding a resistor/capacitor pair
/// through junction-anchored wires.
const SAMPLE_CIRCUIT: &str = r#"{
    "devices": [
        {
            "deviceId": "V1",
            "deviceType": "voltage_source",
            "position": { "x": 0.010, "z": 0.030 },
            "rotation": 90.0,
            "nodes": ["n1", "n2"]
        },
        {
            "deviceId": "R1",
            "deviceType": "resistor",
            "position": { "x": 0.040, "z": 0.030 },
            "rotation": 0.0,
            "nodes": ["n2", "n3"]
        },
        {
            "deviceId": "C1",
            "deviceType": "capacitor",
            "position": { "x": 0.070, "z": 0.030 },
            "rotation": 0.0,
            "nodes": ["n3", "n4"]
        },
        {
            "deviceId": "J1",
            "deviceType": "junction",
            "position": { "x": 0.040, "z": 0.010 },
            "nodes": ["n2"]
        },
        {
            "deviceId": "J2",
            "deviceType": "junction",
            "position": { "x": 0.070, "z": 0.010 },
            "nodes": ["n3"]
        },
        {
            "deviceId": "G1",
            "deviceType": "ground",
            "position": { "x": 0.040, "z": 0.060 },
            "rotation": 0.0,
            "nodes": ["n4"]
        }
    ],
    "wires": [
        { "wireId": "W1", "nodes": ["n1", "n2"] },
        { "wireId": "W2", "nodes": ["n2", "n3"] },
        { "wireId": "W3", "nodes": ["n3", "n4"] }
    ]
}"#;

fn to_color(c: glam::Vec4) -> mq::Color {
    mq::Color::new(c.x, c.y, c.z, c.w)
}

#[macroquad::main("Circuit Playground")]
async fn main() {
    let graph = match parse_circuit(SAMPLE_CIRCUIT) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to parse sample circuit: {e}");
            return;
        }
    };

    let mut canvas = Canvas::new(CanvasConfig::default());
    // Center the origin so the sample sits in view.
    canvas.view.transform.pan = glam::Vec2::new(200.0, 150.0);

    loop {
        let screen_w = mq::screen_width();
        let screen_h = mq::screen_height();
        canvas.update_viewport_size(glam::Vec2::new(screen_w, screen_h));

        // Map macroquad input to the canvas InputState.
        let (mx, my) = mq::mouse_position();
        let wheel = mq::mouse_wheel().1;

        let mut buttons = MouseButtons::default();
        if mq::is_mouse_button_down(mq::MouseButton::Left) {
            buttons.left = true;
        }
        if mq::is_mouse_button_down(mq::MouseButton::Right) {
            buttons.right = true;
        }
        if mq::is_mouse_button_down(mq::MouseButton::Middle) {
            buttons.middle = true;
        }

        let mut pressed_keys = Vec::new();
        if mq::is_key_pressed(mq::KeyCode::R) {
            pressed_keys.push(Key::R);
        }

        // Scale-factor control: arrow keys stand in for the slider.
        if mq::is_key_pressed(mq::KeyCode::Up) {
            canvas.set_scale_factor(canvas.scale_factor() + 500.0);
        }
        if mq::is_key_pressed(mq::KeyCode::Down) {
            canvas.set_scale_factor(canvas.scale_factor() - 500.0);
        }

        let input = InputState {
            mouse_pos: glam::Vec2::new(mx, my),
            mouse_buttons: buttons,
            // macroquad already reports wheel-up as positive, which is the
            // canvas's zoom-in direction; one notch per event.
            scroll_delta: if wheel == 0.0 { 0.0 } else { wheel.signum() },
            pressed_keys,
            screen_size: glam::Vec2::new(screen_w, screen_h),
            pointer_inside: true,
            event_consumed_by_content: false,
        };

        let (draw_list, events) = canvas.update(&input, &graph);

        for event in events {
            // Stand-in for the external coordinates table staying in sync.
            if let LogicEvent::ScaleFactorChanged(value) = event {
                println!("Scale factor: {value}");
            }
        }

        mq::clear_background(mq::WHITE);

        for cmd in draw_list {
            match cmd {
                DrawCommand::Rect {
                    pos,
                    size,
                    color,
                    stroke_width,
                    stroke_color,
                    rotation,
                    shadow,
                    ..
                } => {
                    if let Some(s) = shadow {
                        mq::draw_rectangle(
                            pos.x + s.offset.x,
                            pos.y + s.offset.y,
                            size.x,
                            size.y,
                            to_color(s.color),
                        );
                    }

                    // Rotated fill, about the rect center.
                    let center = pos + size * 0.5;
                    mq::draw_rectangle_ex(
                        center.x,
                        center.y,
                        size.x,
                        size.y,
                        mq::DrawRectangleParams {
                            offset: mq::vec2(0.5, 0.5),
                            rotation,
                            color: to_color(color),
                        },
                    );

                    // Stroke (axis-aligned approximation).
                    if let Some(sc) = stroke_color {
                        if stroke_width > 0.0 && rotation == 0.0 {
                            mq::draw_rectangle_lines(
                                pos.x,
                                pos.y,
                                size.x,
                                size.y,
                                stroke_width,
                                to_color(sc),
                            );
                        }
                    }
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    stroke_width,
                    stroke_color,
                } => {
                    mq::draw_circle(center.x, center.y, radius, to_color(color));
                    if let Some(sc) = stroke_color {
                        mq::draw_circle_lines(center.x, center.y, radius, stroke_width, to_color(sc));
                    }
                }
                DrawCommand::Line {
                    start,
                    end,
                    color,
                    width,
                } => {
                    mq::draw_line(start.x, start.y, end.x, end.y, width, to_color(color));
                }
                DrawCommand::Text {
                    pos,
                    text,
                    color,
                    size,
                } => {
                    // draw_text takes a baseline; the command carries a
                    // layout-box top-left.
                    mq::draw_text(&text, pos.x, pos.y + size, size, to_color(color));
                }
            }
        }

        mq::next_frame().await
    }
}
