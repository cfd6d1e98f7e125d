use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API responded with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Cannot {action} while at step {step}")]
    InvalidTransition { step: String, action: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Validation,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StudioError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn transition(step: impl std::fmt::Display, action: impl Into<String>) -> Self {
        Self::InvalidTransition {
            step: step.to_string(),
            action: action.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StudioError::Network(_) => ErrorCategory::Network,
            StudioError::HttpStatus { .. } => ErrorCategory::Http,
            StudioError::Validation { .. } => ErrorCategory::Validation,
            StudioError::Config { .. }
            | StudioError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            StudioError::Serialization(_)
            | StudioError::Io(_)
            | StudioError::InvalidTransition { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Http => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// True when the server answered with a 5xx status.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, StudioError::HttpStatus { status, .. } if *status >= 500)
    }

    /// Text safe to show a visitor. Never includes status codes or bodies.
    pub fn user_friendly_message(&self) -> String {
        match self {
            StudioError::Validation { message, .. } => message.clone(),
            StudioError::Network(_) | StudioError::HttpStatus { .. } => {
                "Something went wrong while talking to the studio. Please try again.".to_string()
            }
            StudioError::Config { .. } | StudioError::InvalidConfigValue { .. } => {
                "The application is not configured correctly.".to_string()
            }
            StudioError::InvalidTransition { .. } => {
                "That action is not available right now.".to_string()
            }
            StudioError::Serialization(_) | StudioError::Io(_) => {
                "An unexpected error occurred.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StudioError::Network(_) => {
                "Check that the API is reachable and the base URL is correct".to_string()
            }
            StudioError::HttpStatus { status, .. } if *status >= 500 => {
                "The server failed; try again later".to_string()
            }
            StudioError::HttpStatus { .. } => {
                "Review the submitted fields and try again".to_string()
            }
            StudioError::Validation { field, .. } => format!("Fix the `{}` field and resubmit", field),
            StudioError::Config { .. } | StudioError::InvalidConfigValue { .. } => {
                "Review the configuration file and environment variables".to_string()
            }
            StudioError::InvalidTransition { .. } => {
                "Go back to the expected step before retrying".to_string()
            }
            StudioError::Serialization(_) | StudioError::Io(_) => {
                "Run with --verbose and report the log output".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
