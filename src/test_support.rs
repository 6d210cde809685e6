// Shared helpers for unit tests

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DatabaseConnection, Set};
use uuid::Uuid;

use crate::services::crypto;
use crate::types::db::{business, leaderboard, user, waste_log};

/// In-memory SQLite database with the full schema applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn seed_business(
    db: &DatabaseConnection,
    business_id: &str,
    company_name: &str,
) -> business::Model {
    business::ActiveModel {
        business_id: Set(business_id.to_string()),
        company_name: Set(company_name.to_string()),
        employee_invite_code: Set(format!("{}-employee", business_id)),
        admin_invite_code: Set(format!("{}-admin", business_id)),
    }
    .insert(db)
    .await
    .expect("Failed to seed business")
}

async fn seed_user(
    db: &DatabaseConnection,
    business_id: &str,
    username: &str,
    email: &str,
    is_admin: bool,
) -> user::Model {
    let secret = crypto::generate_secret();
    user::ActiveModel {
        user_id: Set(Uuid::new_v4().to_string()),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        business_id: Set(business_id.to_string()),
        is_admin: Set(is_admin),
        is_owner: Set(false),
        password_hash: Set(crypto::hash_password("password", &secret)),
        secret: Set(secret),
        created_at: Set(Utc::now().to_rfc3339()),
    }
    .insert(db)
    .await
    .expect("Failed to seed user")
}

pub async fn seed_employee(
    db: &DatabaseConnection,
    business_id: &str,
    username: &str,
    email: &str,
) -> user::Model {
    seed_user(db, business_id, username, email, false).await
}

pub async fn seed_admin(
    db: &DatabaseConnection,
    business_id: &str,
    username: &str,
    email: &str,
) -> user::Model {
    seed_user(db, business_id, username, email, true).await
}

pub async fn seed_waste_log(
    db: &DatabaseConnection,
    submitter: &user::Model,
    waste_type: &str,
    weight: f64,
    created_at: &str,
) -> waste_log::Model {
    waste_log::ActiveModel {
        log_id: ActiveValue::NotSet,
        user_id: Set(submitter.user_id.clone()),
        business_id: Set(submitter.business_id.clone()),
        waste_type: Set(waste_type.to_string()),
        weight: Set(weight),
        location: Set("Test Site".to_string()),
        trash_image_link: Set(String::new()),
        created_at: Set(created_at.to_string()),
    }
    .insert(db)
    .await
    .expect("Failed to seed waste log")
}

pub async fn seed_leaderboard_entry(
    db: &DatabaseConnection,
    business_id: &str,
    company_name: Option<&str>,
    seasonal_waste: &str,
) -> leaderboard::Model {
    leaderboard::ActiveModel {
        business_id: Set(business_id.to_string()),
        company_name: Set(company_name.map(|n| n.to_string())),
        seasonal_waste: Set(seasonal_waste.to_string()),
        last_season_reset: Set("2025-06-01T00:00:00+00:00".to_string()),
    }
    .insert(db)
    .await
    .expect("Failed to seed leaderboard entry")
}
