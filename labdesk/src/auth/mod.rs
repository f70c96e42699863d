// Public API
pub mod models;
pub mod session;

// Re-export commonly used types
pub use models::Role;
pub use session::{CurrentUser, Session, can_manage_users};
