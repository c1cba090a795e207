//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the keiro crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Parse an editor payload and convert it into a canvas graph
//! let canvas_json = std::fs::read_to_string("path/to/canvas.json")?;
//! let mut graph = RawCanvas::from_json(&canvas_json)?.into_journey()?;
//!
//! // Drop a new step; the placement search keeps it clear of its neighbors
//! let id = graph.add_node(NodeKind::Action, Point::new(240.0, 80.0));
//! graph.connect(&id, "node-1");
//!
//! // Snapshot the canvas for later
//! CanvasArchive::new(graph).save("draft.canvas")?;
//! # Ok(())
//! # }
//! ```

// Canvas graph and mutation operations
pub use crate::graph::{
    Branch, FlowNode, IntoJourney, JourneyGraph, NodeConfig, NodeId, NodeKind, NodePatch,
    RawCanvas, Successors,
};

// Geometry and placement
pub use crate::geometry::{NodeMetrics, Point};
pub use crate::placement::{find_position, grid_slot};

// Persistence
pub use crate::journey::{CanvasArchive, JourneyVault, SavedJourney};

// Error types
pub use crate::error::{ArchiveError, ImportError, VaultError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
