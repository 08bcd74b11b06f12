use std::sync::Arc;

use curio::shared::Database;
use curio::CollectibleRepositoryImpl;

/// Fresh in-memory store per test: full isolation, no shared state.
pub fn test_db() -> Arc<Database> {
    Arc::new(Database::in_memory().expect("in-memory store should initialize"))
}

pub fn test_repository(db: &Arc<Database>) -> CollectibleRepositoryImpl {
    CollectibleRepositoryImpl::new(Arc::clone(db))
}
