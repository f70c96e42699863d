use labdesk::auth::{CurrentUser, Session};
use serde::Deserialize;

/// Response body for successful login
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the admin endpoints
    pub token: String,
    /// The authenticated account
    pub user: CurrentUser,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.token, response.user)
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// Error response
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use labdesk::auth::Role;

    #[test]
    fn test_error_response_tolerates_other_shapes() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message": "User not found", "code": 404}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("User not found"));

        let body: ErrorResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(body.message, None);
    }

    #[test]
    fn test_login_response_into_session() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token": "jwt.abc", "user": {"_id": "u1", "name": "Ada", "email": "ada@lab.test", "role": "Admin"}}"#,
        )
        .unwrap();
        let session = Session::from(response);
        assert_eq!(session.token, "jwt.abc");
        assert_eq!(session.user.role, Role::Admin);
        assert!(session.is_admin());
    }
}
