//! Shared layout and geometry constants for the diagram core.
//!
//! All values are in logical pixels. Stored element positions never feed
//! into these; rendering works purely off lane membership and footprints.

// ── Shape footprints ────────────────────────────────────────────

/// Width of a task rectangle.
pub const TASK_WIDTH: f64 = 160.0;

/// Height of a task rectangle.
pub const TASK_HEIGHT: f64 = 60.0;

/// Bounding-box side of a start/end event.
pub const EVENT_SIZE: f64 = 40.0;

/// Bounding-box side of a gateway diamond.
pub const GATEWAY_SIZE: f64 = 56.0;

// ── Shape outlines ──────────────────────────────────────────────

/// Half-width of the task rectangle, measured from its center.
pub const TASK_HALF_WIDTH: f64 = TASK_WIDTH / 2.0;

/// Half-height of the task rectangle, measured from its center.
pub const TASK_HALF_HEIGHT: f64 = TASK_HEIGHT / 2.0;

/// Radius of the event circle. Smaller than the footprint so the ring
/// leaves room for its label below.
pub const EVENT_RADIUS: f64 = 18.0;

/// Half-diagonal of the gateway diamond, center to vertex.
pub const GATEWAY_HALF_DIAGONAL: f64 = GATEWAY_SIZE / 2.0;

// ── Lane bands ──────────────────────────────────────────────────

/// Height of the horizontal band reserved for each swimlane.
pub const LANE_HEIGHT: f64 = 140.0;

/// Vertical gap above every lane band (and below the last one).
pub const LANE_GAP: f64 = 24.0;

/// Leftmost x for element placement; leaves room for the lane header strip.
pub const LANE_LEFT_MARGIN: f64 = 168.0;

/// Minimum horizontal gap between neighboring elements in a lane.
pub const ELEMENT_GAP: f64 = 32.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Fixed drawing width handed to the rendering surface.
pub const CANVAS_WIDTH: f64 = 1440.0;

/// Space kept free at the right canvas edge; placement is capped here.
pub const CANVAS_RIGHT_MARGIN: f64 = 48.0;
