use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid CSS selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

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
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::IoError(_) => ErrorCategory::System,
            DomainError::CsvError(_) | DomainError::SelectorError { .. } => ErrorCategory::Input,
            DomainError::ConfigValidationError { .. }
            | DomainError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DomainError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                format!("Input or output file not found: {}", e)
            }
            DomainError::IoError(e) => format!("Could not read or write a file: {}", e),
            DomainError::CsvError(e) => format!("The CSV input could not be parsed: {}", e),
            DomainError::SelectorError { selector, .. } => {
                format!("'{}' is not a usable CSS selector", selector)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DomainError::IoError(_) => "Check that the input path exists and the output directory is writable",
            DomainError::CsvError(_) => "Export the table again or pass --format lines",
            DomainError::SelectorError { .. } => "Use a plain CSS selector such as 'table tbody td'",
            DomainError::ConfigValidationError { .. } => "Fix the TOML syntax in the configuration file",
            DomainError::InvalidConfigValueError { .. } => "Correct the value named above and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_system_critical() {
        let err = DomainError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "cells.txt"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("not found"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = DomainError::InvalidConfigValueError {
            field: "source.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Invalid value 'xml' for 'source.format': unsupported"
        );
    }
}
