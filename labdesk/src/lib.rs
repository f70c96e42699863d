//! Domain layer of the LabDesk admin console: roles and sessions, the user
//! record, and the state behind the user-management page.

pub mod auth;
pub mod error;
pub mod ports;
pub mod users;

pub use error::{Error, Result};
