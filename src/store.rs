//! JSON file persistence for the tournament state, keyed by a fixed storage key.

use crate::models::TournamentState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File stem of the saved tournament inside the data directory.
pub const STORAGE_KEY: &str = "pickleball-round-robin-v2";

/// Errors from loading or saving the tournament file.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {}", e),
            StoreError::Json(e) => write!(f, "invalid saved tournament: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// On-disk shape: the state's own fields plus when it was written.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedTournament {
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    state: TournamentState,
}

/// Reads and writes `<dir>/pickleball-round-robin-v2.json`.
#[derive(Clone, Debug)]
pub struct TournamentStore {
    path: PathBuf,
}

impl TournamentStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved state, `Ok(None)` if nothing has been saved yet.
    pub async fn try_load(&self) -> Result<Option<TournamentState>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let saved: SavedTournament = serde_json::from_slice(&bytes)?;
        if let Some(at) = saved.saved_at {
            log::debug!("Loaded tournament saved at {}", at.to_rfc3339());
        }
        for m in saved.state.matches.iter().filter(|m| !m.has_distinct_players()) {
            log::warn!("Saved match {} (round {}) repeats a player", m.id, m.round);
        }
        Ok(Some(saved.state))
    }

    /// Saved state, or the empty initial state if there is none or it cannot be read.
    pub async fn load(&self) -> TournamentState {
        match self.try_load().await {
            Ok(Some(state)) => state,
            Ok(None) => TournamentState::new(),
            Err(e) => {
                log::error!("Failed to load saved tournament from {}: {}", self.path.display(), e);
                TournamentState::new()
            }
        }
    }

    /// Write the state, creating the data directory if needed.
    pub async fn save(&self, state: &TournamentState) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let saved = SavedTournament {
            saved_at: Some(Utc::now()),
            state: state.clone(),
        };
        let json = serde_json::to_vec_pretty(&saved)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Remove the saved file. Missing file is not an error.
    pub async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
