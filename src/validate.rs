//! Structural validation of incoming candidate diagrams.
//!
//! The host runs this before handing a candidate to the repairer. It only
//! guards the shape of the document — ids present and unique, coordinates
//! finite. Graph-level damage (dangling references, disconnected parts) is
//! deliberately not a violation: the repairer recovers from it.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::HashSet;

use crate::doc::ProcessDiagram;

/// A candidate diagram that fails structural validation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaViolation {
    /// An element has an empty id.
    #[error("element id must not be empty")]
    EmptyElementId,
    /// Two elements share the same id.
    #[error("duplicate element id: {id}")]
    DuplicateElementId { id: String },
    /// A stored element coordinate is NaN or infinite.
    #[error("element {id} has a non-finite stored position")]
    NonFinitePosition { id: String },
    /// A swimlane has an empty id.
    #[error("swimlane id must not be empty")]
    EmptyLaneId,
    /// Two swimlanes share the same id.
    #[error("duplicate swimlane id: {id}")]
    DuplicateLaneId { id: String },
    /// A swimlane membership entry is an empty string.
    #[error("swimlane {lane} has an empty member id")]
    EmptyLaneMember { lane: String },
    /// A connection's source or target id is an empty string.
    #[error("connection has an empty source or target id")]
    EmptyConnectionEndpoint,
}

/// Check a candidate diagram for structural violations.
///
/// Returns the first violation found, scanning elements, then swimlanes,
/// then connections, each in listed order.
///
/// # Errors
///
/// Returns a [`SchemaViolation`] describing the first structural defect.
pub fn check(diagram: &ProcessDiagram) -> Result<(), SchemaViolation> {
    let mut element_ids = HashSet::new();
    for element in &diagram.elements {
        if element.id.is_empty() {
            return Err(SchemaViolation::EmptyElementId);
        }
        if !element_ids.insert(element.id.as_str()) {
            return Err(SchemaViolation::DuplicateElementId { id: element.id.clone() });
        }
        if !element.position.x.is_finite() || !element.position.y.is_finite() {
            return Err(SchemaViolation::NonFinitePosition { id: element.id.clone() });
        }
    }

    let mut lane_ids = HashSet::new();
    for lane in &diagram.swimlanes {
        if lane.id.is_empty() {
            return Err(SchemaViolation::EmptyLaneId);
        }
        if !lane_ids.insert(lane.id.as_str()) {
            return Err(SchemaViolation::DuplicateLaneId { id: lane.id.clone() });
        }
        if lane.elements.iter().any(String::is_empty) {
            return Err(SchemaViolation::EmptyLaneMember { lane: lane.id.clone() });
        }
    }

    for connection in &diagram.connections {
        if connection.source.is_empty() || connection.target.is_empty() {
            return Err(SchemaViolation::EmptyConnectionEndpoint);
        }
    }

    Ok(())
}
