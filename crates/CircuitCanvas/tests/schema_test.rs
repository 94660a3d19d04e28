use circuit_canvas::model::DeviceKind;
use circuit_canvas::{SchemaError, parse_circuit};

#[test]
fn test_parse_realistic_document() {
    let doc = r#"{
        "devices": [
            {
                "deviceId": "V1",
                "deviceType": "voltage_source",
                "position": { "x": 0.012, "y": 0.0, "z": 0.034 },
                "rotation": 90.0,
                "nodes": ["n1", "n2"]
            },
            {
                "deviceId": "R1",
                "deviceType": "resistor",
                "position": { "x": 0.05, "z": 0.034, "scaleFactor": 1.2 },
                "rotation": 0.0,
                "nodes": ["n2", "n3"]
            },
            {
                "deviceId": "J1",
                "deviceType": "junction",
                "position": { "x": 0.05, "z": 0.01 },
                "nodes": ["n3"]
            }
        ],
        "wires": [
            { "wireId": "W1", "nodes": ["n1", "n3"] }
        ]
    }"#;

    let graph = parse_circuit(doc).unwrap();
    assert_eq!(graph.devices.len(), 3);
    assert_eq!(graph.wires.len(), 1);

    let v1 = graph.device_by_id("V1").unwrap();
    assert_eq!(v1.kind, DeviceKind::VoltageSource);
    assert_eq!(v1.rotation, 90.0);
    assert_eq!(v1.nodes, vec!["n1", "n2"]);

    let r1 = graph.device_by_id("R1").unwrap();
    assert_eq!(r1.position.scale_factor, 1.2);

    // Defaults: y and rotation absent -> 0, scaleFactor absent -> 1.
    let j1 = graph.device_by_id("J1").unwrap();
    assert_eq!(j1.position.y, 0.0);
    assert_eq!(j1.rotation, 0.0);
    assert_eq!(j1.position.scale_factor, 1.0);
}

#[test]
fn test_unknown_device_type_is_accepted() {
    let doc = r#"{
        "devices": [
            {
                "deviceId": "X1",
                "deviceType": "Thermistor",
                "position": { "x": 0.0, "z": 0.0 },
                "nodes": []
            }
        ],
        "wires": []
    }"#;
    let graph = parse_circuit(doc).unwrap();
    let x1 = graph.device_by_id("X1").unwrap();
    assert_eq!(x1.kind, DeviceKind::Other);
    assert_eq!(x1.type_name, "Thermistor");
}

#[test]
fn test_missing_wires_is_rejected() {
    let doc = r#"{ "devices": [] }"#;
    match parse_circuit(doc) {
        Err(SchemaError::Json(_)) => {}
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn test_wire_arity_is_enforced() {
    let doc = r#"{
        "devices": [],
        "wires": [
            { "wireId": "W1", "nodes": ["n1"] }
        ]
    }"#;
    match parse_circuit(doc) {
        Err(SchemaError::WireEndpoints { wire_id, count }) => {
            assert_eq!(wire_id, "W1");
            assert_eq!(count, 1);
        }
        other => panic!("expected WireEndpoints error, got {other:?}"),
    }

    let doc = r#"{
        "devices": [],
        "wires": [
            { "wireId": "W1", "nodes": ["n1", "n2", "n3"] }
        ]
    }"#;
    assert!(matches!(
        parse_circuit(doc),
        Err(SchemaError::WireEndpoints { count: 3, .. })
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let doc = r#"{
        "devices": [
            { "deviceId": "R1", "deviceType": "resistor", "position": { "x": 0.0, "z": 0.0 }, "nodes": [] },
            { "deviceId": "R1", "deviceType": "resistor", "position": { "x": 1.0, "z": 1.0 }, "nodes": [] }
        ],
        "wires": []
    }"#;
    assert!(matches!(
        parse_circuit(doc),
        Err(SchemaError::DuplicateDevice(id)) if id == "R1"
    ));

    let doc = r#"{
        "devices": [],
        "wires": [
            { "wireId": "W1", "nodes": ["a", "b"] },
            { "wireId": "W1", "nodes": ["c", "d"] }
        ]
    }"#;
    assert!(matches!(
        parse_circuit(doc),
        Err(SchemaError::DuplicateWire(id)) if id == "W1"
    ));
}

#[test]
fn test_document_order_is_preserved() {
    let doc = r#"{
        "devices": [
            { "deviceId": "B", "deviceType": "resistor", "position": { "x": 0.0, "z": 0.0 }, "nodes": [] },
            { "deviceId": "A", "deviceType": "resistor", "position": { "x": 1.0, "z": 1.0 }, "nodes": [] },
            { "deviceId": "C", "deviceType": "resistor", "position": { "x": 2.0, "z": 2.0 }, "nodes": [] }
        ],
        "wires": []
    }"#;
    let graph = parse_circuit(doc).unwrap();
    let order: Vec<&str> = graph
        .devices_in_order()
        .map(|d| d.device_id.as_str())
        .collect();
    assert_eq!(order, vec!["B", "A", "C"]);
}
