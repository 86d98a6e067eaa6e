//! Render-plan assembly: everything a rendering surface needs to draw one
//! frame of a repaired diagram.
//!
//! The plan is flat, serializable data (lane bands, placed shapes, and
//! connector endpoints) computed from a fresh layout pass. The core never
//! draws; whichever surface consumes the plan gets identical geometry
//! because it all comes from here.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::{Deserialize, Serialize};

use crate::consts::LANE_HEIGHT;
use crate::doc::{ElementKind, ProcessDiagram};
use crate::layout;
use crate::shape::{self, Point};

/// Background band for one swimlane, spanning the full canvas width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneBand {
    pub id: String,
    pub label: String,
    pub y: f64,
    pub height: f64,
}

/// A placed element shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A connector path: one flow with both endpoints resolved onto the
/// source and target outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub from: Point,
    pub to: Point,
}

/// Drawing data for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub width: f64,
    pub height: f64,
    pub lanes: Vec<LaneBand>,
    pub shapes: Vec<PlacedShape>,
    pub connectors: Vec<Connector>,
}

/// Build the render plan for a repaired diagram.
///
/// Connector endpoints are resolved against current layout anchors, each
/// aimed at the other element's visual center. Flows whose endpoints have
/// no placement are skipped; on a repaired diagram every element is placed,
/// so nothing is skipped in practice.
#[must_use]
pub fn plan(diagram: &ProcessDiagram) -> RenderPlan {
    let layout = layout::compute(diagram);

    let lanes = diagram
        .swimlanes
        .iter()
        .enumerate()
        .map(|(i, lane)| LaneBand {
            id: lane.id.clone(),
            label: lane.label.clone(),
            y: layout::band_top(i),
            height: LANE_HEIGHT,
        })
        .collect();

    let shapes = diagram
        .elements
        .iter()
        .filter_map(|element| {
            let anchor = layout.position(&element.id)?;
            let (width, height) = element.kind.footprint();
            Some(PlacedShape {
                id: element.id.clone(),
                kind: element.kind,
                label: element.label.clone(),
                x: anchor.x,
                y: anchor.y,
                width,
                height,
            })
        })
        .collect();

    let connectors = diagram
        .connections
        .iter()
        .filter_map(|connection| {
            let source = diagram.element(&connection.source)?;
            let target = diagram.element(&connection.target)?;
            let source_anchor = layout.position(&source.id)?;
            let target_anchor = layout.position(&target.id)?;
            let source_center = shape::center(source.kind, source_anchor);
            let target_center = shape::center(target.kind, target_anchor);
            Some(Connector {
                source: connection.source.clone(),
                target: connection.target.clone(),
                label: connection.label.clone(),
                from: shape::boundary_toward(source.kind, source_anchor, target_center),
                to: shape::boundary_toward(target.kind, target_anchor, source_center),
            })
        })
        .collect();

    RenderPlan {
        width: layout.width(),
        height: layout.height(),
        lanes,
        shapes,
        connectors,
    }
}
