// Database entities - SeaORM models
pub mod business;
pub mod leaderboard;
pub mod user;
pub mod waste_log;
