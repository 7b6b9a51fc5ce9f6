use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed before an exit choice was read")]
    InputClosed,

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl IdeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IdeError::IoError(_) => ErrorCategory::Io,
            IdeError::InputClosed => ErrorCategory::Input,
            IdeError::ConfigError { .. }
            | IdeError::ConfigValidationError { .. }
            | IdeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IdeError::InputClosed => ErrorSeverity::Medium,
            IdeError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IdeError::IoError(_) => "Check that the terminal or pipe attached to the IDE is still open",
            IdeError::InputClosed => "Choose option 3 to leave the IDE instead of closing the input stream",
            IdeError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            IdeError::ConfigValidationError { .. } | IdeError::InvalidConfigValueError { .. } => {
                "Fix the highlighted setting in the config file or on the command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IdeError::IoError(e) => format!("Terminal I/O failed: {}", e),
            IdeError::InputClosed => "Input ended before 'Exit' was chosen".to_string(),
            IdeError::ConfigError { message } => format!("Could not load settings: {}", message),
            IdeError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            IdeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' = '{}' is invalid: {}", field, value, reason),
        }
    }

    /// 依錯誤嚴重程度決定的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium | ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdeError>;
