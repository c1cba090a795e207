use std::fs;
use std::path::{Path, PathBuf};

use super::definition::SavedJourney;
use crate::error::VaultError;

/// Fixed key the saved-journey list is stored under.
pub const STORAGE_KEY: &str = "saved_journeys";

/// File-backed key-value document holding the full saved-journey list.
///
/// The whole list is written as one JSON document under [`STORAGE_KEY`],
/// matching the single-key storage the dashboard uses. A missing file reads
/// back as an empty list; a present file with the wrong shape is an error.
#[derive(Debug, Clone)]
pub struct JourneyVault {
    path: PathBuf,
}

impl JourneyVault {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved-journey list back out of the vault.
    pub fn load(&self) -> Result<Vec<SavedJourney>, VaultError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        let mut document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&text).map_err(|e| VaultError::Malformed(e.to_string()))?;
        let entry = document
            .remove(STORAGE_KEY)
            .ok_or(VaultError::MissingKey(STORAGE_KEY))?;
        serde_json::from_value(entry).map_err(|e| VaultError::Malformed(e.to_string()))
    }

    /// Replaces the stored list wholesale.
    pub fn store(&self, journeys: &[SavedJourney]) -> Result<(), VaultError> {
        let mut document = serde_json::Map::new();
        document.insert(
            STORAGE_KEY.to_string(),
            serde_json::to_value(journeys).map_err(|e| VaultError::Malformed(e.to_string()))?,
        );
        let text = serde_json::to_string_pretty(&document)
            .map_err(|e| VaultError::Malformed(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }

    /// Appends one launched journey to the stored list.
    pub fn launch(&self, journey: SavedJourney) -> Result<(), VaultError> {
        let mut journeys = self.load()?;
        journeys.push(journey);
        self.store(&journeys)
    }

    fn io_error(&self, e: std::io::Error) -> VaultError {
        VaultError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}
