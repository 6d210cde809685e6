use std::sync::Arc;

use poem_openapi::{param::Header, payload::Json, OpenApi, Tags};

use crate::errors::ApiError;
use crate::services::leaderboard::rank_standings;
use crate::services::AccessGuard;
use crate::stores::{LeaderboardStore, NewWasteLog, UserStore, WasteLogStore};
use crate::types::dto::employee::{
    HistoryResponse, LeaderboardResponse, SubmitWasteRequest, SubmitWasteResponse, WasteLogDto,
};

/// History responses return at most this many logs
const HISTORY_LIMIT: u64 = 20;

/// Employee-facing API endpoints
pub struct EmployeeApi {
    guard: Arc<AccessGuard>,
    user_store: Arc<UserStore>,
    waste_log_store: Arc<WasteLogStore>,
    leaderboard_store: Arc<LeaderboardStore>,
}

impl EmployeeApi {
    pub fn new(
        guard: Arc<AccessGuard>,
        user_store: Arc<UserStore>,
        waste_log_store: Arc<WasteLogStore>,
        leaderboard_store: Arc<LeaderboardStore>,
    ) -> Self {
        Self {
            guard,
            user_store,
            waste_log_store,
            leaderboard_store,
        }
    }
}

/// API tags for employee endpoints
#[derive(Tags)]
enum EmployeeTags {
    /// Waste logging and standings for employees
    Employee,
}

#[OpenApi(prefix_path = "/employee")]
impl EmployeeApi {
    /// Record a disposal event for the calling user
    #[oai(
        path = "/submit-waste",
        method = "post",
        tag = "EmployeeTags::Employee"
    )]
    async fn submit_waste(
        &self,
        #[oai(name = "User-ID")] user_id: Header<Option<String>>,
        body: Json<SubmitWasteRequest>,
    ) -> Result<Json<SubmitWasteResponse>, ApiError> {
        let identity = self.guard.require_identity(user_id.0, None)?;

        // Validate before any store access
        let request = body.0;
        let (waste_type, weight, location) =
            match (request.waste_type, request.weight, request.location) {
                (Some(t), Some(w), Some(l)) if !t.is_empty() && !l.is_empty() => (t, w, l),
                _ => return Err(ApiError::missing_fields()),
            };
        if !weight.is_finite() || weight < 0.0 {
            return Err(ApiError::validation_error(
                "weight must be a non-negative number".to_string(),
            ));
        }

        let user = self.user_store.resolve_user(&identity).await?;

        let log = self
            .waste_log_store
            .insert_log(
                &user.user_id,
                &user.business_id,
                NewWasteLog {
                    waste_type,
                    weight,
                    location,
                    trash_image_link: request.trash_image_link.unwrap_or_default(),
                },
            )
            .await?;

        Ok(Json(SubmitWasteResponse {
            status: "success".to_string(),
            data: WasteLogDto::from_model(log, None),
        }))
    }

    /// The calling user's own waste logs, newest first
    #[oai(path = "/history", method = "get", tag = "EmployeeTags::Employee")]
    async fn history(
        &self,
        #[oai(name = "User-ID")] user_id: Header<Option<String>>,
        #[oai(name = "User-Email")] user_email: Header<Option<String>>,
    ) -> Result<Json<HistoryResponse>, ApiError> {
        let identity = self.guard.require_identity(user_id.0, user_email.0)?;
        let user = self.user_store.resolve_user(&identity).await?;

        let rows = self
            .waste_log_store
            .history_for_user(&user.user_id, HISTORY_LIMIT)
            .await?;

        let data = rows
            .into_iter()
            .map(|(log, submitter)| WasteLogDto::from_model(log, submitter))
            .collect();

        Ok(Json(HistoryResponse {
            status: "success".to_string(),
            data,
        }))
    }

    /// Cross-business standings ranked by seasonal waste
    #[oai(path = "/leaderboard", method = "get", tag = "EmployeeTags::Employee")]
    async fn leaderboard(
        &self,
        #[oai(name = "User-ID")] user_id: Header<Option<String>>,
        #[oai(name = "User-Email")] user_email: Header<Option<String>>,
    ) -> Result<Json<LeaderboardResponse>, ApiError> {
        let identity = self.guard.require_identity(user_id.0, user_email.0)?;

        // The standings are global, but the caller still has to exist
        self.user_store.resolve_user(&identity).await?;

        let rows = self.leaderboard_store.all_entries().await?;

        Ok(Json(LeaderboardResponse {
            status: "success".to_string(),
            data: rank_standings(rows),
        }))
    }
}
