//! Client Errors
//!
//! Failure taxonomy for the fetch, submit and delete flows.

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Pre-flight form problems, caught before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("description is required")]
    MissingDescription,
    #[error("location is required")]
    MissingLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Form failed validation; nothing was sent
    #[error("validation error: {0}")]
    Validation(#[from] ValidationFailure),
    /// Server answered with an error; message is the server's own text
    #[error("{0}")]
    Backend(String),
    /// Request never completed
    #[error("network error: {0}")]
    Network(String),
    /// Listing could not be fetched or decoded
    #[error("load failed: {0}")]
    Load(String),
}

impl ClientError {
    /// Text shown to the user in a blocking alert
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(_) => crate::card::VALIDATION_MESSAGE.to_string(),
            ClientError::Backend(msg) => msg.clone(),
            ClientError::Network(_) => crate::card::NETWORK_ERROR_MESSAGE.to_string(),
            ClientError::Load(_) => crate::card::LOAD_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_verbatim() {
        let err = ClientError::Backend("Image too large".to_string());
        assert_eq!(err.user_message(), "Image too large");
        assert_eq!(err.to_string(), "Image too large");
    }

    #[test]
    fn test_network_message_is_generic() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), crate::card::NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_from() {
        let err: ClientError = ValidationFailure::MissingLocation.into();
        assert_eq!(err, ClientError::Validation(ValidationFailure::MissingLocation));
    }
}
