pub mod login;
pub mod user_management;

pub use login::Login;
pub use user_management::UserManagement;
