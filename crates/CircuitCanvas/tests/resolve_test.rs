use circuit_canvas::model::Position;
use circuit_canvas::parse_circuit;
use circuit_canvas::resolve::{endpoint_position, resolve_node_positions};

const SHARED_NODE_DOC: &str = r#"{
    "devices": [
        {
            "deviceId": "R1",
            "deviceType": "resistor",
            "position": { "x": 1.0, "z": 0.0 },
            "rotation": 0.0,
            "nodes": ["n1", "n2"]
        },
        {
            "deviceId": "J1",
            "deviceType": "junction",
            "position": { "x": 0.25, "z": 0.75 },
            "rotation": 0.0,
            "nodes": ["n1"]
        }
    ],
    "wires": [
        { "wireId": "W1", "nodes": ["n1", "n2"] }
    ]
}"#;

#[test]
fn test_junction_position_wins() {
    let graph = parse_circuit(SHARED_NODE_DOC).unwrap();
    let resolved = resolve_node_positions(&graph);

    // "n1" is listed on both R1 and J1; the junction is authoritative.
    let n1 = resolved.get("n1").expect("n1 should resolve");
    assert_eq!((n1.x, n1.z), (0.25, 0.75));
}

#[test]
fn test_non_junction_nodes_stay_unresolved() {
    let graph = parse_circuit(SHARED_NODE_DOC).unwrap();
    let resolved = resolve_node_positions(&graph);

    // No junction claims "n2"; the map must not invent a position for it.
    assert!(!resolved.contains_key("n2"));
}

#[test]
fn test_junction_detection_is_case_insensitive() {
    let doc = r#"{
        "devices": [
            {
                "deviceId": "J1",
                "deviceType": "JUNCTION",
                "position": { "x": 3.0, "z": 4.0 },
                "nodes": ["n9"]
            }
        ],
        "wires": []
    }"#;
    let graph = parse_circuit(doc).unwrap();
    let resolved = resolve_node_positions(&graph);
    assert!(resolved.contains_key("n9"));
}

#[test]
fn test_endpoint_falls_back_to_first_owning_device() {
    let doc = r#"{
        "devices": [
            {
                "deviceId": "C1",
                "deviceType": "capacitor",
                "position": { "x": 5.0, "z": 5.0 },
                "nodes": ["shared"]
            },
            {
                "deviceId": "C2",
                "deviceType": "capacitor",
                "position": { "x": 9.0, "z": 9.0 },
                "nodes": ["shared"]
            }
        ],
        "wires": []
    }"#;
    let graph = parse_circuit(doc).unwrap();
    let resolved = resolve_node_positions(&graph);

    // Two non-junction devices share the node; document order decides.
    let p = endpoint_position(&graph, &resolved, "shared").unwrap();
    assert_eq!((p.x, p.z), (5.0, 5.0));
}

#[test]
fn test_endpoint_prefers_resolved_over_fallback() {
    let graph = parse_circuit(SHARED_NODE_DOC).unwrap();
    let resolved = resolve_node_positions(&graph);

    // "n1" -> junction position, not R1's anchor.
    let n1 = endpoint_position(&graph, &resolved, "n1").unwrap();
    assert_eq!((n1.x, n1.z), (0.25, 0.75));

    // "n2" -> falls back to R1's own position.
    let n2 = endpoint_position(&graph, &resolved, "n2").unwrap();
    assert_eq!((n2.x, n2.z), (1.0, 0.0));
}

#[test]
fn test_dangling_node_resolves_to_none() {
    let graph = parse_circuit(SHARED_NODE_DOC).unwrap();
    let resolved = resolve_node_positions(&graph);
    assert!(endpoint_position(&graph, &resolved, "ghost").is_none());
}

#[test]
fn test_per_entity_scale_factor_survives_resolution() {
    let doc = r#"{
        "devices": [
            {
                "deviceId": "J1",
                "deviceType": "junction",
                "position": { "x": 1.0, "z": 1.0, "scaleFactor": 2.5 },
                "nodes": ["n1"]
            }
        ],
        "wires": []
    }"#;
    let graph = parse_circuit(doc).unwrap();
    let resolved = resolve_node_positions(&graph);
    let n1: &Position = resolved.get("n1").unwrap();
    assert_eq!(n1.scale_factor, 2.5);
}
