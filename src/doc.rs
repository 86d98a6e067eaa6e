//! Document model: typed process-diagram elements, swimlanes, and flows.
//!
//! This module defines the in-memory document shape exchanged with the host
//! layers (`ProcessDiagram` and its parts) plus read-only helpers used by
//! the repairer and the layout engine. A diagram value is immutable within
//! a single core invocation: repair consumes one snapshot and produces the
//! next, it never edits in place across calls.
//!
//! Stored element positions travel with the document but are not
//! authoritative for rendering — the lane layout engine recomputes render
//! anchors from lane membership order on every pass.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EVENT_SIZE, GATEWAY_SIZE, TASK_HEIGHT, TASK_WIDTH};
use crate::shape::Point;

/// The kind of a diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Circle marking a process entry point.
    StartEvent,
    /// Circle marking a process exit point.
    EndEvent,
    /// Rectangle holding a unit of work.
    Task,
    /// Diamond where the flow branches or joins.
    Gateway,
}

impl ElementKind {
    /// Footprint `(width, height)` the element occupies in a lane band.
    #[must_use]
    pub fn footprint(self) -> (f64, f64) {
        match self {
            Self::StartEvent | Self::EndEvent => (EVENT_SIZE, EVENT_SIZE),
            Self::Task => (TASK_WIDTH, TASK_HEIGHT),
            Self::Gateway => (GATEWAY_SIZE, GATEWAY_SIZE),
        }
    }
}

/// A single diagram node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, supplied by the host and treated as opaque.
    pub id: String,
    /// Shape and semantic kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Display label.
    pub label: String,
    /// Stored anchor. Kept for the host; ignored by layout.
    pub position: Point,
}

/// An ordered horizontal grouping of elements, doubling as a layout band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimlane {
    pub id: String,
    pub label: String,
    /// Member element ids. Order drives left-to-right packing.
    pub elements: Vec<String>,
}

/// A directed sequence flow between two elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The full diagram document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDiagram {
    pub process_name: String,
    pub swimlanes: Vec<Swimlane>,
    pub elements: Vec<Element>,
    pub connections: Vec<Connection>,
}

impl ProcessDiagram {
    /// Look up an element by id. First listed occurrence wins.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Whether the directed connection `source → target` already exists.
    #[must_use]
    pub fn has_connection(&self, source: &str, target: &str) -> bool {
        self.connections
            .iter()
            .any(|c| c.source == source && c.target == target)
    }
}
