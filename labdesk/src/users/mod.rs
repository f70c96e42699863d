pub mod form;
pub mod models;
pub mod notice;
pub mod service;
pub mod state;

pub use form::{FormMode, UserForm};
pub use models::{User, UserPayload};
pub use notice::{Notice, NoticeLevel, UserOperation};
pub use service::UserAdmin;
pub use state::{Modal, Outcome, UserManagement, View, delete_confirmation};
