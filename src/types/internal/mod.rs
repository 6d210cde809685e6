// Internal plain types shared across layers
pub mod identity;

pub use identity::Identity;
