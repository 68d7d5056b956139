use crate::errors::GlanceError;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Window enumeration tool unavailable: {message}")]
    Unavailable { message: String },

    #[error("Permission denied by the system automation layer: {message}")]
    PermissionDenied { message: String },

    #[error("Window enumeration timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("IO error talking to enumeration tool: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl GlanceError for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Unavailable { .. } => "PROVIDER_UNAVAILABLE",
            ProviderError::PermissionDenied { .. } => "PROVIDER_PERMISSION_DENIED",
            ProviderError::Timeout { .. } => "PROVIDER_TIMEOUT",
            ProviderError::IoError { .. } => "PROVIDER_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProviderError::PermissionDenied { .. })
    }
}
