//! # Keiro - Journey Canvas Engine
//!
//! **Keiro** is the canvas core of a node-based journey/automation builder: an
//! owned, in-memory graph of flow steps plus a deterministic placement search
//! that keeps freshly dropped nodes clear of their neighbors. The crate holds
//! no rendering code; a presentation layer calls the mutation operations here
//! and re-renders from the returned state.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical canvas model of
//! flow nodes. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's payload format (e.g. JSON from a
//!     drag-and-drop frontend) into your own Rust structs, or use the bundled
//!     [`graph::RawCanvas`] shape.
//! 2.  **Convert to Keiro's Model**: Implement the [`graph::IntoJourney`] trait
//!     to translate your structs into a [`graph::JourneyGraph`].
//! 3.  **Mutate**: Forward user gestures to the graph store - `add_node` runs
//!     the placement search, `update_node` merges partial edits, `delete_node`
//!     removes a step from the canvas and from every condition branch, and
//!     `connect`/`disconnect` maintain the edge lists.
//! 4.  **Persist**: Snapshot a draft with [`journey::CanvasArchive`] or append
//!     a launched journey to the [`journey::JourneyVault`].
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let mut graph = JourneyGraph::new();
//!
//! // First drop lands exactly where requested.
//! let trigger = graph.add_node(NodeKind::Trigger, Point::new(100.0, 100.0));
//!
//! // A second drop on the same spot is pushed to the nearest free position.
//! let action = graph.add_node(NodeKind::Action, Point::new(100.0, 100.0));
//! graph.connect(&trigger, &action);
//!
//! let action_node = graph.node(&action).unwrap();
//! assert_ne!(action_node.position, Point::new(100.0, 100.0));
//! ```

pub mod error;
pub mod geometry;
pub mod graph;
pub mod journey;
pub mod placement;
pub mod prelude;
