//! # Node Resolver
//!
//! Builds the mapping from node identifier to authoritative world position.
//!
//! Only junction devices provide authoritative positions: a junction is a
//! bare connection point, so every node id it lists anchors exactly where
//! the junction sits. Nodes never claimed by a junction stay unresolved and
//! callers fall back to the position of the first device (in document order)
//! whose node list contains the id. Resolution is best-effort; an unresolved
//! node is never an error.

use std::collections::HashMap;

use crate::model::{CircuitGraph, DeviceKind, Position};

/// Registers `node_id -> junction position` for every node listed on a
/// junction device. Devices of other kinds contribute nothing.
pub fn resolve_node_positions(graph: &CircuitGraph) -> HashMap<String, Position> {
    let mut resolved = HashMap::new();
    for device in graph.devices_in_order() {
        if device.kind != DeviceKind::Junction {
            continue;
        }
        for node_id in &device.nodes {
            resolved.insert(node_id.clone(), device.position);
        }
    }
    resolved
}

/// The full fallback chain for a wire endpoint: junction position if one
/// claimed the node, else the owning device's raw anchor, else `None`
/// (a dangling reference -- the caller skips the wire).
pub fn endpoint_position(
    graph: &CircuitGraph,
    resolved: &HashMap<String, Position>,
    node_id: &str,
) -> Option<Position> {
    if let Some(position) = resolved.get(node_id) {
        return Some(*position);
    }
    graph
        .device_owning_node(node_id)
        .map(|device| device.position)
}
