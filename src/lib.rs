//! Process-diagram core for the collaborative swimlane editor.
//!
//! This crate owns the pure transformations between a candidate diagram
//! (produced upstream by the edit-instruction applier) and the data a
//! rendering surface draws. It guarantees that every diagram the product
//! ever displays is a single connected structure with no dangling flow
//! references, and that placement and connector geometry are deterministic
//! functions of the document alone. The host layers (HTTP API, version
//! store, instruction translation) live outside this crate and exchange
//! plain serializable documents with it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Document model: elements, swimlanes, connections |
//! | [`validate`] | Thin structural validation of candidate documents |
//! | [`repair`] | Dangling-flow pruning and connectivity repair |
//! | [`layout`] | Deterministic lane packing into render anchors |
//! | [`shape`] | Visual centers and outline boundary points |
//! | [`render`] | Per-frame render plan for the drawing surface |
//! | [`consts`] | Shared layout and geometry constants |

pub mod consts;
pub mod doc;
pub mod layout;
pub mod render;
pub mod repair;
pub mod shape;
pub mod validate;
