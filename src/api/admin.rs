use std::sync::Arc;

use poem_openapi::{param::Header, payload::Json, OpenApi, Tags};

use crate::errors::ApiError;
use crate::services::AccessGuard;
use crate::stores::{UserStore, WasteLogStore};
use crate::types::dto::admin::{
    EmployeeManagementResponse, EmployeeSummaryDto, EmployeeTableResponse,
};
use crate::types::dto::employee::WasteLogDto;

/// Admin reporting API endpoints
///
/// Everything here sits behind the admin guard and is scoped to the
/// admin's own business.
pub struct AdminApi {
    guard: Arc<AccessGuard>,
    user_store: Arc<UserStore>,
    waste_log_store: Arc<WasteLogStore>,
}

impl AdminApi {
    pub fn new(
        guard: Arc<AccessGuard>,
        user_store: Arc<UserStore>,
        waste_log_store: Arc<WasteLogStore>,
    ) -> Self {
        Self {
            guard,
            user_store,
            waste_log_store,
        }
    }
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// Business-scoped reporting for admins
    Admin,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// All waste logs for the admin's business, with submitter names
    #[oai(path = "/employee-table", method = "get", tag = "AdminTags::Admin")]
    async fn employee_table(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        #[oai(name = "User-ID")] user_id: Header<Option<String>>,
    ) -> Result<Json<EmployeeTableResponse>, ApiError> {
        let admin = self
            .guard
            .require_admin(authorization.0.as_deref(), user_id.0.as_deref())
            .await?;

        let rows = self
            .waste_log_store
            .logs_for_business(&admin.business_id)
            .await?;

        let data = rows
            .into_iter()
            .map(|(log, submitter)| WasteLogDto::from_model(log, submitter))
            .collect();

        Ok(Json(EmployeeTableResponse {
            status: "success".to_string(),
            data,
        }))
    }

    /// Every employee record in the admin's business
    #[oai(
        path = "/employee-management",
        method = "get",
        tag = "AdminTags::Admin"
    )]
    async fn employee_management(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        #[oai(name = "User-ID")] user_id: Header<Option<String>>,
    ) -> Result<Json<EmployeeManagementResponse>, ApiError> {
        let admin = self
            .guard
            .require_admin(authorization.0.as_deref(), user_id.0.as_deref())
            .await?;

        let employees = self
            .user_store
            .employees_for_business(&admin.business_id)
            .await?;

        let data = employees.into_iter().map(EmployeeSummaryDto::from).collect();

        Ok(Json(EmployeeManagementResponse {
            status: "success".to_string(),
            data,
        }))
    }
}
