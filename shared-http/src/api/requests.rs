use serde::Serialize;

/// Request body for login endpoint
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Create and update bodies are `labdesk::users::UserPayload`
