use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::errors::ApiError;
use crate::types::db::user;
use crate::types::db::waste_log::{self, Entity as WasteLog};

/// Validated fields for a new disposal event
#[derive(Debug, Clone)]
pub struct NewWasteLog {
    pub waste_type: String,
    pub weight: f64,
    pub location: String,
    pub trash_image_link: String,
}

/// WasteLogStore persists disposal events and reads them back for history
/// and admin reporting. Rows are append-only.
pub struct WasteLogStore {
    db: DatabaseConnection,
}

impl WasteLogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new waste log with a server-assigned creation timestamp
    ///
    /// The business_id must be the submitter's own; callers resolve it
    /// through the user store before getting here.
    pub async fn insert_log(
        &self,
        user_id: &str,
        business_id: &str,
        entry: NewWasteLog,
    ) -> Result<waste_log::Model, ApiError> {
        let new_log = waste_log::ActiveModel {
            log_id: ActiveValue::NotSet,
            user_id: Set(user_id.to_string()),
            business_id: Set(business_id.to_string()),
            waste_type: Set(entry.waste_type),
            weight: Set(entry.weight),
            location: Set(entry.location),
            trash_image_link: Set(entry.trash_image_link),
            created_at: Set(Utc::now().to_rfc3339()),
        };

        new_log
            .insert(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// A user's own logs, newest first, capped at `limit`, each paired with
    /// the submitting user's record
    pub async fn history_for_user(
        &self,
        user_id: &str,
        limit: u64,
    ) -> Result<Vec<(waste_log::Model, Option<user::Model>)>, ApiError> {
        WasteLog::find()
            .filter(waste_log::Column::UserId.eq(user_id))
            .order_by_desc(waste_log::Column::CreatedAt)
            .limit(limit)
            .find_also_related(user::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// All logs belonging to one business, newest first, joined with the
    /// submitting user
    pub async fn logs_for_business(
        &self,
        business_id: &str,
    ) -> Result<Vec<(waste_log::Model, Option<user::Model>)>, ApiError> {
        WasteLog::find()
            .filter(waste_log::Column::BusinessId.eq(business_id))
            .order_by_desc(waste_log::Column::CreatedAt)
            .find_also_related(user::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// Number of stored logs, used by tests to assert nothing was written
    #[cfg(test)]
    pub async fn count(&self) -> u64 {
        use sea_orm::PaginatorTrait;

        WasteLog::find()
            .count(&self.db)
            .await
            .expect("Failed to count waste logs")
    }
}
