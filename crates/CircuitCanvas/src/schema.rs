//! # Circuit Document Boundary
//!
//! Deserializes and validates the external circuit JSON (the payload the
//! fetch/edit collaborator supplies wholesale) into a `CircuitGraph`.
//!
//! All structural validation happens here, before the graph reaches the
//! rendering core: a document missing `devices` or `wires`, a wire that does
//! not reference exactly two nodes, or a duplicated id is rejected with a
//! `SchemaError`. Past this boundary the renderer assumes a valid shape and
//! never defends mid-pipeline.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{CircuitGraph, Device, DeviceId, DeviceKind, Position, Wire, WireId};

/// Structural problems in a circuit document.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid circuit JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("wire `{wire_id}` must reference exactly two nodes, got {count}")]
    WireEndpoints { wire_id: String, count: usize },
    #[error("duplicate device id `{0}`")]
    DuplicateDevice(String),
    #[error("duplicate wire id `{0}`")]
    DuplicateWire(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCircuit {
    devices: Vec<RawDevice>,
    wires: Vec<RawWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDevice {
    device_id: String,
    device_type: String,
    position: Position,
    #[serde(default)]
    rotation: f32,
    #[serde(default)]
    nodes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWire {
    wire_id: String,
    nodes: Vec<String>,
}

/// Parses and validates a circuit document.
pub fn parse_circuit(json: &str) -> Result<CircuitGraph, SchemaError> {
    let raw: RawCircuit = serde_json::from_str(json)?;
    build_graph(raw)
}

fn build_graph(raw: RawCircuit) -> Result<CircuitGraph, SchemaError> {
    let mut graph = CircuitGraph::default();

    for raw_device in raw.devices {
        if graph.id_index.contains_key(&raw_device.device_id) {
            return Err(SchemaError::DuplicateDevice(raw_device.device_id));
        }
        let kind = DeviceKind::parse(&raw_device.device_type);
        graph.insert_device(Device {
            id: DeviceId::default(),
            device_id: raw_device.device_id,
            kind,
            type_name: raw_device.device_type,
            position: raw_device.position,
            rotation: raw_device.rotation,
            nodes: raw_device.nodes,
        });
    }

    let mut seen_wires = std::collections::HashSet::new();
    for raw_wire in raw.wires {
        let [start, end]: [String; 2] =
            raw_wire
                .nodes
                .try_into()
                .map_err(|nodes: Vec<String>| SchemaError::WireEndpoints {
                    wire_id: raw_wire.wire_id.clone(),
                    count: nodes.len(),
                })?;
        if !seen_wires.insert(raw_wire.wire_id.clone()) {
            return Err(SchemaError::DuplicateWire(raw_wire.wire_id));
        }
        graph.insert_wire(Wire {
            id: WireId::default(),
            wire_id: raw_wire.wire_id,
            nodes: [start, end],
        });
    }

    debug!(
        devices = graph.devices.len(),
        wires = graph.wires.len(),
        "parsed circuit document"
    );
    Ok(graph)
}
