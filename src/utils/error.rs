use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {path}")]
    HttpStatusError { status: u16, path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Timestamp {millis}ms is out of range")]
    InvalidTimestamp { millis: i64 },
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ApiError(_) => ErrorCategory::Network,
            SyncError::HttpStatusError { .. } => ErrorCategory::Api,
            SyncError::SerializationError(_) | SyncError::InvalidTimestamp { .. } => {
                ErrorCategory::Data
            }
            SyncError::ConfigError { .. }
            | SyncError::ConfigValidationError { .. }
            | SyncError::InvalidConfigValueError { .. }
            | SyncError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SyncError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Api => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyncError::ApiError(_) => {
                "Make sure Joplin is running and the Web Clipper service is enabled"
            }
            SyncError::HttpStatusError { status: 403, .. } => {
                "Check the API token (Joplin > Options > Web Clipper > Advanced options)"
            }
            SyncError::HttpStatusError { status: 404, .. } => {
                "The note may have been deleted while the run was in progress; run again"
            }
            SyncError::HttpStatusError { .. } => "Check the Joplin application log for details",
            SyncError::SerializationError(_) => {
                "The API response did not have the expected shape; check the Joplin version"
            }
            SyncError::InvalidTimestamp { .. } => "Fix the note's created/updated time in Joplin",
            SyncError::ConfigError { .. }
            | SyncError::ConfigValidationError { .. }
            | SyncError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
            SyncError::MissingConfigError { .. } => {
                "Pass --token or set JOPLIN_TOKEN to the Web Clipper authorization token"
            }
            SyncError::IoError(_) => "Check file permissions and that stdout is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the Joplin API: {}", self),
            ErrorCategory::Api => format!("The Joplin API rejected a request: {}", self),
            ErrorCategory::Data => format!("Unexpected note data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_retryable_medium() {
        let err = SyncError::HttpStatusError {
            status: 500,
            path: "notes".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "API returned 500 for notes");
    }

    #[test]
    fn test_forbidden_points_at_token() {
        let err = SyncError::HttpStatusError {
            status: 403,
            path: "notes".to_string(),
        };
        assert!(err.recovery_suggestion().contains("token"));
    }

    #[test]
    fn test_config_errors_are_high() {
        let err = SyncError::MissingConfigError {
            field: "source.token".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = SyncError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
