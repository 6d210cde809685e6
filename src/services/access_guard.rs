use std::sync::Arc;

use crate::errors::ApiError;
use crate::stores::UserStore;
use crate::types::db::user;
use crate::types::internal::Identity;

/// Request-level authorization checks.
///
/// Every endpoint passes through here before touching the store: identity
/// headers are required everywhere, and admin endpoints additionally verify
/// the caller's admin flag. The resolved user record carries the business_id
/// that scopes all downstream queries.
pub struct AccessGuard {
    user_store: Arc<UserStore>,
}

impl AccessGuard {
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }

    /// Require at least one identity header (User-ID or User-Email)
    pub fn require_identity(
        &self,
        user_id: Option<String>,
        email: Option<String>,
    ) -> Result<Identity, ApiError> {
        let identity = Identity::new(user_id, email);
        if identity.is_empty() {
            return Err(ApiError::missing_identity());
        }
        Ok(identity)
    }

    /// Require an Authorization header plus a User-ID resolving to a user
    /// whose admin flag is set
    ///
    /// A missing header is a 401; a missing user record or unset admin flag
    /// is a 403. The returned record carries the admin's business_id.
    pub async fn require_admin(
        &self,
        authorization: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<user::Model, ApiError> {
        if authorization.map_or(true, |v| v.trim().is_empty()) {
            return Err(ApiError::missing_auth_header());
        }

        let user_id = match user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(ApiError::missing_identity()),
        };

        match self.user_store.find_by_id(user_id).await? {
            Some(user) if user.is_admin => Ok(user),
            _ => Err(ApiError::admin_required()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_admin, seed_business, seed_employee, setup_test_db};

    async fn setup_guard() -> (sea_orm::DatabaseConnection, AccessGuard) {
        let db = setup_test_db().await;
        let guard = AccessGuard::new(Arc::new(UserStore::new(db.clone())));
        (db, guard)
    }

    #[tokio::test]
    async fn test_require_identity_rejects_when_both_headers_absent() {
        let (_db, guard) = setup_guard().await;

        let result = guard.require_identity(None, None);

        assert!(matches!(result, Err(ApiError::MissingIdentity(_))));
    }

    #[tokio::test]
    async fn test_require_identity_accepts_either_header() {
        let (_db, guard) = setup_guard().await;

        assert!(guard
            .require_identity(Some("user-1".to_string()), None)
            .is_ok());
        assert!(guard
            .require_identity(None, Some("a@b.com".to_string()))
            .is_ok());
    }

    #[tokio::test]
    async fn test_require_admin_rejects_missing_authorization_header() {
        let (db, guard) = setup_guard().await;
        seed_business(&db, "biz-1", "Acme").await;
        let admin = seed_admin(&db, "biz-1", "boss", "boss@acme.test").await;

        let result = guard.require_admin(None, Some(&admin.user_id)).await;

        assert!(matches!(result, Err(ApiError::MissingAuthHeader(_))));
    }

    #[tokio::test]
    async fn test_require_admin_rejects_missing_user_id() {
        let (_db, guard) = setup_guard().await;

        let result = guard.require_admin(Some("Bearer whatever"), None).await;

        assert!(matches!(result, Err(ApiError::MissingIdentity(_))));
    }

    #[tokio::test]
    async fn test_require_admin_rejects_non_admin_user() {
        let (db, guard) = setup_guard().await;
        seed_business(&db, "biz-1", "Acme").await;
        let employee = seed_employee(&db, "biz-1", "worker", "worker@acme.test").await;

        let result = guard
            .require_admin(Some("Bearer whatever"), Some(&employee.user_id))
            .await;

        assert!(matches!(result, Err(ApiError::AdminRequired(_))));
    }

    #[tokio::test]
    async fn test_require_admin_rejects_unknown_user() {
        let (_db, guard) = setup_guard().await;

        let result = guard
            .require_admin(Some("Bearer whatever"), Some("no-such-user"))
            .await;

        assert!(matches!(result, Err(ApiError::AdminRequired(_))));
    }

    #[tokio::test]
    async fn test_require_admin_returns_record_with_business_scope() {
        let (db, guard) = setup_guard().await;
        seed_business(&db, "biz-1", "Acme").await;
        let admin = seed_admin(&db, "biz-1", "boss", "boss@acme.test").await;

        let resolved = guard
            .require_admin(Some("Bearer whatever"), Some(&admin.user_id))
            .await
            .expect("admin should pass the guard");

        assert_eq!(resolved.business_id, "biz-1");
        assert!(resolved.is_admin);
    }
}
