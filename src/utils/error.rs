use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderFlowError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error for '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Bad input or configuration; exit code 1.
    High,
    /// I/O failure such as an unreadable wiring file; exit code 3.
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl OrderFlowError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderFlowError::IoError(_) => ErrorCategory::System,
            OrderFlowError::ConfigValidationError { .. }
            | OrderFlowError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            OrderFlowError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OrderFlowError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            OrderFlowError::ConfigValidationError { .. } => {
                "Check the wiring file is valid TOML with [order], [invoice], [notifier] tables"
                    .to_string()
            }
            OrderFlowError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the wiring file", field)
            }
            OrderFlowError::ValidationError { field, .. } => {
                format!(
                    "Provide a valid '{}' or run without --strict to accept it as-is",
                    field
                )
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderFlowError::IoError(e) => format!("Could not read a file: {}", e),
            OrderFlowError::ConfigValidationError { field, message } => {
                format!("The configuration field '{}' is invalid: {}", field, message)
            }
            OrderFlowError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' has an invalid value '{}': {}", field, value, reason)
            }
            OrderFlowError::ValidationError { field, value, reason } => {
                format!("The order was rejected, '{}' = '{}': {}", field, value, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderFlowError>;
