//! # Core Data Models
//!
//! This module defines the in-memory circuit graph the canvas renders.
//! Entities live in flat arenas (`SlotMap`) keyed by generated ids; the
//! document-level identity of a device or wire is its external id string.
//!
//! The graph is the sole external input of the renderer. It arrives wholesale
//! from the JSON boundary (`schema`) and is never mutated by the canvas.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use slotmap::new_key_type;
use std::collections::HashMap;

new_key_type! {
    /// Arena key for a Device.
    pub struct DeviceId;
    /// Arena key for a Wire.
    pub struct WireId;
}

fn default_scale() -> f32 {
    1.0
}

/// A position in the external world coordinate space.
///
/// The reconstruction pipeline works on the ground plane, so geometry lives
/// in `x`/`z`; `y` is carried through the document but never used for
/// projection. `scale_factor` is an optional per-entity override applied on
/// top of the global scale factor (default 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub z: f32,
    #[serde(default = "default_scale", rename = "scaleFactor")]
    pub scale_factor: f32,
}

impl Position {
    pub fn new(x: f32, z: f32) -> Self {
        Self {
            x,
            y: 0.0,
            z,
            scale_factor: 1.0,
        }
    }
}

/// The recognized device categories.
///
/// Parsed case-insensitively from the document's `deviceType` string.
/// Anything unrecognized maps to `Other` and still renders (with the
/// fallback style), so a new device type upstream can never break a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
    CurrentSource,
    Ground,
    Junction,
    Other,
}

impl DeviceKind {
    pub fn parse(device_type: &str) -> Self {
        match device_type.to_ascii_lowercase().as_str() {
            "resistor" => Self::Resistor,
            "capacitor" => Self::Capacitor,
            "inductor" => Self::Inductor,
            "voltage_source" => Self::VoltageSource,
            "current_source" => Self::CurrentSource,
            "ground" => Self::Ground,
            "junction" => Self::Junction,
            _ => Self::Other,
        }
    }
}

/// A discrete circuit component.
///
/// A device owns its position and intrinsic rotation. It does not own the
/// nodes it references: `nodes` holds shared identifiers that may appear on
/// any number of other devices and wire endpoints.
#[derive(Clone, Debug)]
pub struct Device {
    /// Arena self-reference.
    pub id: DeviceId,
    /// Unique document id (e.g. "R1").
    pub device_id: String,
    /// Parsed category, drives styling and junction detection.
    pub kind: DeviceKind,
    /// Raw `deviceType` string as it appeared in the document, used for labels.
    pub type_name: String,
    /// World-space anchor position.
    pub position: Position,
    /// Intrinsic glyph rotation in degrees, about the device's own screen position.
    pub rotation: f32,
    /// Ordered node ids this device connects to.
    pub nodes: Vec<String>,
}

/// A wire between two shared electrical nodes.
///
/// Wires have no position of their own; geometry is derived entirely by
/// resolving the two node ids (see `resolve`).
#[derive(Clone, Debug)]
pub struct Wire {
    /// Arena self-reference.
    pub id: WireId,
    /// Unique document id (e.g. "W1").
    pub wire_id: String,
    /// Start and end node ids.
    pub nodes: [String; 2],
}

/// The whole circuit graph.
///
/// Devices and wires live in flat arenas. `device_order` pins the iteration
/// order to insertion order: it is both the draw order and the order consulted
/// when a wire endpoint falls back to "first device listing this node".
#[derive(Clone, Debug, Default)]
pub struct CircuitGraph {
    /// Arena for devices.
    pub devices: SlotMap<DeviceId, Device>,
    /// Arena for wires.
    pub wires: SlotMap<WireId, Wire>,
    /// Insertion-order cache. Lower index = earlier in the document = drawn first.
    pub device_order: Vec<DeviceId>,
    /// Index for O(1) external-id to arena-key lookup.
    pub id_index: HashMap<String, DeviceId>,
}

impl CircuitGraph {
    /// Inserts a device, fixing up its self-reference and the indices.
    pub fn insert_device(&mut self, mut device: Device) -> DeviceId {
        let id = self.devices.insert_with_key(|key| {
            device.id = key;
            device
        });
        self.device_order.push(id);
        let external = self.devices[id].device_id.clone();
        self.id_index.insert(external, id);
        id
    }

    /// Inserts a wire, fixing up its self-reference.
    pub fn insert_wire(&mut self, mut wire: Wire) -> WireId {
        self.wires.insert_with_key(|key| {
            wire.id = key;
            wire
        })
    }

    /// Looks a device up by its external document id.
    pub fn device_by_id(&self, device_id: &str) -> Option<&Device> {
        self.id_index
            .get(device_id)
            .and_then(|&id| self.devices.get(id))
    }

    /// Iterates devices in document order.
    pub fn devices_in_order(&self) -> impl Iterator<Item = &Device> {
        self.device_order
            .iter()
            .filter_map(|&id| self.devices.get(id))
    }

    /// The first device in document order whose node list contains `node_id`.
    ///
    /// This is the fallback anchor for nodes no junction claims. The result is
    /// order-dependent by construction; `device_order` keeps it deterministic.
    pub fn device_owning_node(&self, node_id: &str) -> Option<&Device> {
        self.devices_in_order()
            .find(|device| device.nodes.iter().any(|n| n == node_id))
    }
}
