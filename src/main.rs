use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use wastewise_backend::api::{AdminApi, AuthApi, EmployeeApi, HealthApi};
use wastewise_backend::config::{logging, Settings};
use wastewise_backend::services::AccessGuard;
use wastewise_backend::stores::{LeaderboardStore, UserStore, WasteLogStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    logging::init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env();

    // Connect to database
    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url);

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    // Stores share the single long-lived connection handle
    let user_store = Arc::new(UserStore::new(db.clone()));
    let waste_log_store = Arc::new(WasteLogStore::new(db.clone()));
    let leaderboard_store = Arc::new(LeaderboardStore::new(db.clone()));
    let guard = Arc::new(AccessGuard::new(user_store.clone()));

    let employee_api = EmployeeApi::new(
        guard.clone(),
        user_store.clone(),
        waste_log_store.clone(),
        leaderboard_store,
    );
    let admin_api = AdminApi::new(guard, user_store, waste_log_store);

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new(
        (HealthApi, AuthApi, employee_api, admin_api),
        "WasteWise API",
        "1.0.0",
    )
    .server(format!("http://{}/api", settings.bind_address));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.bind_address);

    Server::new(TcpListener::bind(settings.bind_address))
        .run(app)
        .await
}
