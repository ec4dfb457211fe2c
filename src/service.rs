//! The live tournament: held in memory and kept in step with its saved file.

use crate::models::{TournamentError, TournamentState};
use crate::store::{StoreError, TournamentStore};
use tokio::sync::Mutex;

/// Why an update was not applied.
#[derive(Debug)]
pub enum UpdateError {
    /// The change itself was refused; nothing was saved.
    Tournament(TournamentError),
    /// The change could not be saved; memory keeps the previous state.
    Store(StoreError),
}

impl std::fmt::Display for UpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateError::Tournament(e) => write!(f, "{}", e),
            UpdateError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for UpdateError {}

impl From<TournamentError> for UpdateError {
    fn from(e: TournamentError) -> Self {
        UpdateError::Tournament(e)
    }
}

impl From<StoreError> for UpdateError {
    fn from(e: StoreError) -> Self {
        UpdateError::Store(e)
    }
}

/// One tournament shared by every request.
///
/// The lock is held across the save, so saves land in the same order as the
/// changes and memory only moves forward once the file has been written.
pub struct TournamentService {
    state: Mutex<TournamentState>,
    store: TournamentStore,
}

impl TournamentService {
    pub fn new(state: TournamentState, store: TournamentStore) -> Self {
        Self {
            state: Mutex::new(state),
            store,
        }
    }

    /// Start from whatever the store holds (empty if nothing readable).
    pub async fn open(store: TournamentStore) -> Self {
        let state = store.load().await;
        Self::new(state, store)
    }

    pub fn store(&self) -> &TournamentStore {
        &self.store
    }

    pub async fn snapshot(&self) -> TournamentState {
        self.state.lock().await.clone()
    }

    /// Run `f` against the current state without changing it.
    pub async fn read<T>(&self, f: impl FnOnce(&TournamentState) -> T) -> T {
        let guard = self.state.lock().await;
        f(&*guard)
    }

    /// Apply `f` to a copy of the state, save the copy, then make it current.
    /// On any error the current state is left as it was.
    pub async fn update<F>(&self, f: F) -> Result<TournamentState, UpdateError>
    where
        F: FnOnce(&mut TournamentState) -> Result<(), TournamentError>,
    {
        let mut guard = self.state.lock().await;
        let mut draft = guard.clone();
        f(&mut draft)?;
        self.store.save(&draft).await?;
        *guard = draft.clone();
        Ok(draft)
    }

    /// Delete the saved file, then clear memory. If the file cannot be removed
    /// the tournament is kept so the two do not disagree.
    pub async fn reset(&self) -> Result<TournamentState, UpdateError> {
        let mut guard = self.state.lock().await;
        self.store.clear().await?;
        guard.reset();
        Ok(guard.clone())
    }
}
