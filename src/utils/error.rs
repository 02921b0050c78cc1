use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Division by zero: {vowels} vowel-class characters and no consonant-class characters")]
    DivisionByZero { vowels: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Computation,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UtilError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilError::DivisionByZero { .. } => ErrorCategory::Computation,
            UtilError::IoError(_) => ErrorCategory::Io,
            UtilError::SerializationError(_) => ErrorCategory::Serialization,
            UtilError::ConfigValidationError { .. } | UtilError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// The CLI derives its exit code from this.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Computation => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilError::DivisionByZero { vowels } => format!(
                "The ratio is undefined: the text has {} vowel(s) and no consonants",
                vowels
            ),
            UtilError::IoError(e) => format!("Could not read input: {}", e),
            UtilError::SerializationError(e) => format!("Could not format output: {}", e),
            UtilError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            UtilError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UtilError::DivisionByZero { .. } => {
                "Include at least one consonant-class character (anything except a, e, i, o, u, y)"
            }
            UtilError::IoError(_) => "Check that the file exists and is readable",
            UtilError::SerializationError(_) => "Retry with --format plain",
            UtilError::ConfigValidationError { .. } => {
                "Check the configuration file for TOML syntax errors"
            }
            UtilError::InvalidConfigValueError { .. } => {
                "Fix the listed value in the configuration file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_high_severity() {
        let err = UtilError::DivisionByZero { vowels: 5 };
        assert_eq!(err.category(), ErrorCategory::Computation);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("5 vowel-class"));
    }

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = UtilError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("xml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: UtilError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
