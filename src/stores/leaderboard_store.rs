use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ApiError;
use crate::types::db::leaderboard::{self, Entity as Leaderboard};

/// Read-only access to the leaderboard rows maintained by the external
/// aggregation process. The standings are global by design, so this is the
/// one query in the system that is not tenant-scoped.
pub struct LeaderboardStore {
    db: DatabaseConnection,
}

impl LeaderboardStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn all_entries(&self) -> Result<Vec<leaderboard::Model>, ApiError> {
        Leaderboard::find()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }
}
