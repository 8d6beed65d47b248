use crate::errors::GlanceError;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Window server capability is not available on this host")]
    CapabilityUnavailable,

    #[error("Window enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to serialize window snapshot: {message}")]
    SerializationFailed { message: String },
}

impl GlanceError for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            SnapshotError::CapabilityUnavailable => "CAPABILITY_UNAVAILABLE",
            SnapshotError::EnumerationFailed { .. } => "ENUMERATION_FAILED",
            SnapshotError::SerializationFailed { .. } => "SERIALIZATION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // A missing window server is a fact of the host environment,
        // not a bug worth paging over.
        matches!(self, SnapshotError::CapabilityUnavailable)
    }
}
