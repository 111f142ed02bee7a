use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

impl FormatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormatError::IoError(_) => ErrorCategory::Io,
            FormatError::SerializationError(_) => ErrorCategory::Input,
            FormatError::ConfigValidationError { .. }
            | FormatError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::IoError(e) => format!("Could not read file: {}", e),
            FormatError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            FormatError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            FormatError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormatError::IoError(_) => "Check that the file exists and is readable",
            FormatError::SerializationError(_) => {
                "Pass a JSON object such as {\"title\":\"...\",\"awarder\":\"...\"}"
            }
            FormatError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML"
            }
            FormatError::InvalidConfigValueError { .. } => {
                "Fix the reported value and run the command again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
