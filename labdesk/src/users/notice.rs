use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast to show once a request has finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Notice for a failed request, falling back to the operation's own
    /// wording when the server gave no reason.
    pub fn failure(operation: UserOperation, err: &Error) -> Self {
        let message = match err {
            Error::Request(_) | Error::Decode(_) => operation.error_text().to_string(),
            Error::Status { .. } => match (operation, err.server_message()) {
                (UserOperation::Fetch, _) | (_, None) => operation.failed_text().to_string(),
                (_, Some(message)) => message.to_string(),
            },
            Error::MissingField(_) | Error::Forbidden => err.to_string(),
        };
        Self::error(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOperation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl UserOperation {
    /// Shown when the backend rejected the request
    pub fn failed_text(&self) -> &'static str {
        match self {
            UserOperation::Fetch => "Failed to fetch users",
            UserOperation::Create => "Failed to create user",
            UserOperation::Update => "Failed to update user",
            UserOperation::Delete => "Failed to delete user",
        }
    }

    /// Shown when no response could be read
    pub fn error_text(&self) -> &'static str {
        match self {
            UserOperation::Fetch => "Error fetching users",
            UserOperation::Create => "Error creating user",
            UserOperation::Update => "Error updating user",
            UserOperation::Delete => "Error deleting user",
        }
    }
}
