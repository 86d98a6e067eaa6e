//! Lane layout engine: deterministic render anchors from lane membership.
//!
//! Placement is a pure function of swimlane order, membership order, and
//! per-kind footprints. Stored element positions are never read and never
//! written — the computed anchors exist only for the current render pass.
//! Each lane packs its members left to right with a running cursor, and
//! every footprint is vertically centered inside its lane's band.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CANVAS_RIGHT_MARGIN, CANVAS_WIDTH, ELEMENT_GAP, LANE_GAP, LANE_HEIGHT, LANE_LEFT_MARGIN,
};
use crate::doc::ProcessDiagram;
use crate::shape::Point;

/// Render anchors for one layout pass, keyed by element id.
///
/// Iteration order is placement order: lane by lane in membership order,
/// then elements that belong to no lane, in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    positions: IndexMap<String, Point>,
    width: f64,
    height: f64,
}

impl Layout {
    /// Render anchor (footprint top-left) for an element, if it was placed.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// All placed anchors in placement order.
    #[must_use]
    pub fn positions(&self) -> &IndexMap<String, Point> {
        &self.positions
    }

    /// Canvas width handed to the rendering surface.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height: every lane band plus the gaps around them.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Top edge of the band reserved for the lane at `index`.
#[must_use]
pub fn band_top(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    LANE_GAP * (i + 1.0) + LANE_HEIGHT * i
}

/// Compute render anchors for every element of the diagram.
#[must_use]
pub fn compute(diagram: &ProcessDiagram) -> Layout {
    let mut positions = IndexMap::with_capacity(diagram.elements.len());

    for (lane_index, lane) in diagram.swimlanes.iter().enumerate() {
        let top = band_top(lane_index);
        let mut cursor = LANE_LEFT_MARGIN;
        for member in &lane.elements {
            // Memberships naming no element are skipped without moving the
            // cursor; an element claimed twice keeps its first placement.
            let Some(element) = diagram.element(member) else {
                continue;
            };
            if positions.contains_key(member) {
                continue;
            }
            let (w, h) = element.kind.footprint();
            let x = cursor
                .max(LANE_LEFT_MARGIN)
                .min(CANVAS_WIDTH - CANVAS_RIGHT_MARGIN - w);
            let y = top + (LANE_HEIGHT - h) / 2.0;
            positions.insert(member.clone(), Point::new(x, y));
            cursor = x + w + ELEMENT_GAP;
        }
    }

    // Elements outside every lane fall back to band 0 at the left margin.
    for element in &diagram.elements {
        if positions.contains_key(&element.id) {
            continue;
        }
        let (_, h) = element.kind.footprint();
        let y = band_top(0) + (LANE_HEIGHT - h) / 2.0;
        positions.insert(element.id.clone(), Point::new(LANE_LEFT_MARGIN, y));
    }

    #[allow(clippy::cast_precision_loss)]
    let lanes = diagram.swimlanes.len() as f64;
    Layout {
        positions,
        width: CANVAS_WIDTH,
        height: lanes * LANE_HEIGHT + (lanes + 1.0) * LANE_GAP,
    }
}
