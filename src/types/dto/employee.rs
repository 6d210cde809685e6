use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::{user, waste_log};

/// Request model for submitting a waste log
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SubmitWasteRequest {
    /// Category of the disposed waste
    #[oai(rename = "wasteType")]
    #[serde(rename = "wasteType")]
    pub waste_type: Option<String>,

    /// Weight of the disposal (non-negative)
    pub weight: Option<f64>,

    /// Where the disposal happened
    pub location: Option<String>,

    /// Optional image reference
    #[oai(rename = "trashImageLink")]
    #[serde(rename = "trashImageLink")]
    pub trash_image_link: Option<String>,
}

/// A persisted waste log, optionally enriched with the submitter's name
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct WasteLogDto {
    #[oai(rename = "logID")]
    #[serde(rename = "logID")]
    pub log_id: i32,

    #[oai(rename = "userID")]
    #[serde(rename = "userID")]
    pub user_id: String,

    #[oai(rename = "businessID")]
    #[serde(rename = "businessID")]
    pub business_id: String,

    #[oai(rename = "wasteType")]
    #[serde(rename = "wasteType")]
    pub waste_type: String,

    pub weight: f64,

    pub location: String,

    #[oai(rename = "trashImageLink")]
    #[serde(rename = "trashImageLink")]
    pub trash_image_link: String,

    pub created_at: String,

    /// Display name of the submitting user, where the query joined it in
    pub username: Option<String>,
}

impl WasteLogDto {
    pub fn from_model(log: waste_log::Model, submitter: Option<user::Model>) -> Self {
        Self {
            log_id: log.log_id,
            user_id: log.user_id,
            business_id: log.business_id,
            waste_type: log.waste_type,
            weight: log.weight,
            location: log.location,
            trash_image_link: log.trash_image_link,
            created_at: log.created_at,
            username: submitter.map(|u| u.username),
        }
    }
}

/// Response model for submit-waste
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SubmitWasteResponse {
    pub status: String,
    pub data: WasteLogDto,
}

/// Response model for history
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub status: String,
    pub data: Vec<WasteLogDto>,
}

/// One ranked standings entry
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    #[oai(rename = "businessID")]
    #[serde(rename = "businessID")]
    pub business_id: String,

    /// Company display name; "Unknown" when the row carries none
    #[oai(rename = "companyName")]
    #[serde(rename = "companyName")]
    pub company_name: String,

    /// Cumulative seasonal total, coerced to a number
    #[oai(rename = "seasonalWaste")]
    #[serde(rename = "seasonalWaste")]
    pub seasonal_waste: f64,

    /// 1-based rank; tied totals share a rank
    pub rank: u32,

    /// Reserved for future use, always 0 in this version
    #[oai(rename = "rankChange")]
    #[serde(rename = "rankChange")]
    pub rank_change: i32,
}

/// Response model for leaderboard standings
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub status: String,
    pub data: Vec<LeaderboardEntryDto>,
}
