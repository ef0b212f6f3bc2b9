/// Errors returned by contact and contact list operations.
#[derive(Debug, Clone, PartialEq, uniffi::Error, thiserror::Error)]
pub enum ContactError {
    #[error("{argument} cannot be absent")]
    InvalidArgument { argument: String },
    #[error("No contact with address {address}")]
    InvalidContact { address: String },
    #[error("Could not create runtime")]
    CouldNotCreateRuntime,
    #[error("Event handlers can only be added from within a tokio runtime")]
    NoRuntime,
}

impl ContactError {
    pub(crate) fn invalid_argument(argument: &str) -> Self {
        ContactError::InvalidArgument {
            argument: argument.to_string(),
        }
    }
}
