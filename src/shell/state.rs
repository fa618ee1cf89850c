use std::sync::Arc;

use crate::modules::hotel::adapters::outbound::sqlite::SqliteHotelRepository;

/// Shared handle given to every inbound adapter. Adapters reach the
/// store exclusively through the repository port.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<SqliteHotelRepository>,
}

impl AppState {
    pub fn new(repository: SqliteHotelRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}
