use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::ApiError;
use crate::types::db::user::{self, Entity as User};
use crate::types::internal::Identity;

/// UserStore resolves identities to user records and lists employees
/// within a business.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user by primary key
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<user::Model>, ApiError> {
        User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// Look up a user by email
    ///
    /// Email is unique at the schema level; a query that still returns more
    /// than one row signals store corruption and surfaces as an internal
    /// error rather than silently picking a row.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ApiError> {
        let mut matches = User::find()
            .filter(user::Column::Email.eq(email))
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))?;

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => {
                tracing::error!(matches = n, "email resolves to more than one user");
                Err(ApiError::internal_error(
                    "email uniqueness violated in user store".to_string(),
                ))
            }
        }
    }

    /// Resolve an identity to its user record
    ///
    /// Resolution chain: email first when present, then user ID. The chain
    /// ends at this store; there is no further lookup against an external
    /// identity provider. No match on any supplied path is a not-found.
    pub async fn resolve_user(&self, identity: &Identity) -> Result<user::Model, ApiError> {
        if let Some(email) = &identity.email {
            if let Some(user) = self.find_by_email(email).await? {
                return Ok(user);
            }
        }

        if let Some(user_id) = &identity.user_id {
            if let Some(user) = self.find_by_id(user_id).await? {
                return Ok(user);
            }
        }

        Err(ApiError::user_not_found())
    }

    /// Resolve an identity to the business it belongs to
    pub async fn resolve_business(&self, identity: &Identity) -> Result<String, ApiError> {
        Ok(self.resolve_user(identity).await?.business_id)
    }

    /// All users affiliated with one business
    pub async fn employees_for_business(
        &self,
        business_id: &str,
    ) -> Result<Vec<user::Model>, ApiError> {
        User::find()
            .filter(user::Column::BusinessId.eq(business_id))
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }
}
