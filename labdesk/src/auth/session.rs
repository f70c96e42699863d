use super::models::Role;
use serde::{Deserialize, Serialize};

/// The account that is signed in to the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Session handed out by the backend on login
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: CurrentUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Only admins may view or change the user list.
pub fn can_manage_users(session: Option<&Session>) -> bool {
    session.is_some_and(Session::is_admin)
}
