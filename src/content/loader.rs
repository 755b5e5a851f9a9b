//! Content catalog sources.

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::ContentCatalog;
use crate::error::ContentError;

pub const OPPONENTS_FILE: &str = "opponents.json";
pub const EVENT_BOSSES_FILE: &str = "event_bosses.json";
pub const BACKGROUNDS_FILE: &str = "backgrounds.json";
pub const ROSTER_FILE: &str = "roster.json";
pub const ITEMS_FILE: &str = "items.json";

/// Supplies the content catalog.
pub trait ContentLoader {
    fn load(&self) -> Result<ContentCatalog, ContentError>;
}

/// An already-loaded catalog serves itself.
impl ContentLoader for ContentCatalog {
    fn load(&self) -> Result<ContentCatalog, ContentError> {
        Ok(self.clone())
    }
}

/// Reads one JSON array file per catalog section from a directory.
///
/// `opponents.json` and `roster.json` are required; the other sections are
/// empty when their file is missing.
#[derive(Debug, Clone)]
pub struct JsonDirLoader {
    dir: PathBuf,
}

impl JsonDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_required<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, ContentError> {
        let path = self.dir.join(file);
        let json = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ContentError::Parse { path, source })
    }

    fn read_optional<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, ContentError> {
        match self.read_required(file) {
            Err(ContentError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

impl ContentLoader for JsonDirLoader {
    fn load(&self) -> Result<ContentCatalog, ContentError> {
        let catalog = ContentCatalog {
            battle_opponents: self.read_required(OPPONENTS_FILE)?,
            event_opponents: self.read_optional(EVENT_BOSSES_FILE)?,
            backgrounds: self.read_optional(BACKGROUNDS_FILE)?,
            roster: self.read_required(ROSTER_FILE)?,
            items: self.read_optional(ITEMS_FILE)?,
        };
        tracing::debug!(
            dir = %self.dir.display(),
            opponents = catalog.battle_opponents.len(),
            event_opponents = catalog.event_opponents.len(),
            roster = catalog.roster.len(),
            "content catalog loaded"
        );
        Ok(catalog)
    }
}
