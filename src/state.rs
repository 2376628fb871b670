use crate::database::DatabaseManager;

/// Shared router state. Cloned per request; the pool inside is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseManager,
}

impl AppState {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}
