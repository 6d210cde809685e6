// Stores layer - Data access
pub mod leaderboard_store;
pub mod user_store;
pub mod waste_log_store;

pub use leaderboard_store::LeaderboardStore;
pub use user_store::UserStore;
pub use waste_log_store::{NewWasteLog, WasteLogStore};
