use circuit_canvas::input::{InputState, Key, MouseButtons};
use circuit_canvas::{Canvas, CanvasConfig, parse_circuit};
use glam::Vec2;

const DEMO_CIRCUIT: &str = r#"{
    "devices": [
        {
            "deviceId": "V1",
            "deviceType": "voltage_source",
            "position": { "x": 0.01, "z": 0.03 },
            "rotation": 90.0,
            "nodes": ["n1", "n2"]
        },
        {
            "deviceId": "R1",
            "deviceType": "resistor",
            "position": { "x": 0.04, "z": 0.03 },
            "rotation": 0.0,
            "nodes": ["n2", "n3"]
        },
        {
            "deviceId": "J1",
            "deviceType": "junction",
            "position": { "x": 0.04, "z": 0.01 },
            "nodes": ["n3"]
        }
    ],
    "wires": [
        { "wireId": "W1", "nodes": ["n1", "n3"] }
    ]
}"#;

fn main() {
    println!("=== CircuitCanvas Headless Demo ===");

    // 1. Initialize Canvas
    let mut canvas = Canvas::new(CanvasConfig::default());
    // Explicitly set a viewport size (simulating a window)
    canvas.update_viewport_size(Vec2::new(1280.0, 720.0));

    // 2. Load the circuit document
    let graph = parse_circuit(DEMO_CIRCUIT).expect("demo circuit should parse");
    println!(
        "Loaded circuit: {} devices, {} wires",
        graph.devices.len(),
        graph.wires.len()
    );

    // 3. Simulate a few frames of interaction
    for frame in 0..6 {
        println!("\n--- Frame {} ---", frame);

        let mut input = InputState {
            screen_size: Vec2::new(1280.0, 720.0),
            ..Default::default()
        };

        match frame {
            1 => {
                println!(">> Pressing and dragging...");
                input.mouse_pos = Vec2::new(200.0, 200.0);
                input.mouse_buttons = MouseButtons {
                    left: true,
                    ..Default::default()
                };
            }
            2 => {
                println!(">> Dragging to (260, 230)...");
                input.mouse_pos = Vec2::new(260.0, 230.0);
                input.mouse_buttons = MouseButtons {
                    left: true,
                    ..Default::default()
                };
            }
            3 => {
                println!(">> Zooming in two notches...");
                input.scroll_delta = 2.0;
            }
            4 => {
                println!(">> Rotating the view...");
                input.pressed_keys.push(Key::R);
            }
            5 => {
                println!(">> Setting scale factor to 12000...");
                canvas.set_scale_factor(12000.0);
            }
            _ => {}
        }

        let (draw_list, events) = canvas.update(&input, &graph);

        println!(
            "  pan: {}, zoom: {:.2}, quadrant: {:?}, scale factor: {}",
            canvas.view.transform.pan,
            canvas.view.transform.zoom,
            canvas.view.transform.quadrant,
            canvas.scale_factor()
        );
        println!("  {} draw commands", draw_list.len());
        println!("  Logic Events: {:?}", events);
    }

    println!("\nDemo Complete.");
}
