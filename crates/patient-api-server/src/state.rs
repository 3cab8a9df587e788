//! Shared handler state.

use std::sync::{Arc, Mutex, PoisonError};

use patient_api_core::{PatientStore, StoreResult};

use crate::error::ApiResult;

/// Thread-safe store handle shared by every handler.
///
/// The mutex serializes load-modify-save cycles across requests so two
/// concurrent inserts cannot overwrite each other's document.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Box<dyn PatientStore + Send>>>,
}

impl AppState {
    pub fn new<S: PatientStore + Send + 'static>(store: S) -> Self {
        Self::from_boxed(Box::new(store))
    }

    pub fn from_boxed(store: Box<dyn PatientStore + Send>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `op` against the store on the blocking pool while holding the lock.
    pub async fn with_store<T, F>(&self, op: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn PatientStore) -> StoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || -> ApiResult<T> {
            // Every operation reloads the document, so a panic elsewhere
            // leaves nothing stale behind the lock.
            let guard = store.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(op(&**guard)?)
        })
        .await?
    }
}
