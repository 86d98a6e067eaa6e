//! Boundary geometry: visual centers and the point where a connector
//! meets a shape's outline.
//!
//! Everything here is pure math over render anchors produced by the lane
//! layout engine — stored element positions never reach this module. The
//! outline projection depends only on the element kind: rectangle for
//! tasks, circle for events, diamond for gateways.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EVENT_RADIUS, GATEWAY_HALF_DIAGONAL, TASK_HALF_HEIGHT, TASK_HALF_WIDTH};
use crate::doc::ElementKind;

/// A point in diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_sq(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

/// Visual center of an element whose footprint is anchored at `anchor`
/// (top-left corner).
#[must_use]
pub fn center(kind: ElementKind, anchor: Point) -> Point {
    let (w, h) = kind.footprint();
    Point::new(anchor.x + w / 2.0, anchor.y + h / 2.0)
}

/// The point on the element's outline where a straight connector toward
/// `toward` leaves the shape.
///
/// If `toward` coincides with the element's own center the center is
/// returned unchanged — there is no direction to project along.
#[must_use]
pub fn boundary_toward(kind: ElementKind, anchor: Point, toward: Point) -> Point {
    let c = center(kind, anchor);
    let dx = toward.x - c.x;
    let dy = toward.y - c.y;
    if dx == 0.0 && dy == 0.0 {
        return c;
    }

    let (ox, oy) = match kind {
        // Rectangle: L∞ projection onto the nearest edge.
        ElementKind::Task => {
            let scale = 1.0 / f64::max(dx.abs() / TASK_HALF_WIDTH, dy.abs() / TASK_HALF_HEIGHT);
            (dx * scale, dy * scale)
        }
        // Circle: unit direction times the ring radius.
        ElementKind::StartEvent | ElementKind::EndEvent => {
            let len = dx.hypot(dy);
            (dx / len * EVENT_RADIUS, dy / len * EVENT_RADIUS)
        }
        // Diamond: L1 projection onto the nearest edge.
        ElementKind::Gateway => {
            let scale = GATEWAY_HALF_DIAGONAL / (dx.abs() + dy.abs());
            (dx * scale, dy * scale)
        }
    };

    Point::new(c.x + ox, c.y + oy)
}
