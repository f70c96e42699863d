use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("You don't have permission to access this page.")]
    Forbidden,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The request never produced a usable response (network failure or an
    /// unreadable body).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request(_) | Error::Decode(_))
    }

    /// Message the backend attached to a non-success response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}
