// Services layer - Business logic
pub mod access_guard;
pub mod crypto;
pub mod leaderboard;

pub use access_guard::AccessGuard;
