//! Helper functions for creating specific error types

use super::types::PermissionError;

/// Helper functions for creating specific errors
impl PermissionError {
    pub fn invalid_payload<S: Into<String>>(manager: &'static str, reason: S) -> Self {
        Self::InvalidPayload {
            manager,
            reason: reason.into(),
        }
    }

    pub fn unknown_manager<S: Into<String>>(key: S) -> Self {
        Self::UnknownManager(key.into())
    }

    pub fn unknown_field_type<S: Into<String>>(key: S) -> Self {
        Self::UnknownFieldType(key.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was caused by caller-supplied data rather than by the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPayload { .. }
                | Self::UnknownManager(_)
                | Self::UnknownFieldType(_)
                | Self::Parsing(_)
                | Self::Serialization(_)
        )
    }
}
