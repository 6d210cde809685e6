use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user;
use crate::types::dto::employee::WasteLogDto;

/// Employee summary as exposed to admins
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummaryDto {
    #[oai(rename = "userID")]
    #[serde(rename = "userID")]
    pub user_id: String,

    pub username: String,

    pub email: String,

    pub created_at: String,
}

impl From<user::Model> for EmployeeSummaryDto {
    fn from(u: user::Model) -> Self {
        Self {
            user_id: u.user_id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Response model for the business-wide waste log table
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EmployeeTableResponse {
    pub status: String,
    pub data: Vec<WasteLogDto>,
}

/// Response model for the employee management listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EmployeeManagementResponse {
    pub status: String,
    pub data: Vec<EmployeeSummaryDto>,
}
