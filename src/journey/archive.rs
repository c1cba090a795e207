use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

use crate::error::ArchiveError;
use crate::graph::JourneyGraph;

/// A binary snapshot of a whole canvas, for fast save/restore of drafts.
#[derive(Serialize, Deserialize, Debug)]
pub struct CanvasArchive {
    pub graph: JourneyGraph,
}

impl CanvasArchive {
    pub fn new(graph: JourneyGraph) -> Self {
        Self { graph }
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArchiveError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArchiveError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArchiveError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArchiveError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, ArchiveError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArchiveError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArchiveError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        decode_from_slice(bytes, standard())
            .map(|(archive, _)| archive) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArchiveError::Generic(format!("Deserialization failed: {}", e)))
    }
}
