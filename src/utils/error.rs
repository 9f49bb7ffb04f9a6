use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Input must be positive, got {input}")]
    NonPositiveInput { input: i32 },

    #[error("Input {input} is not below {limit} for mode '{mode}'")]
    OutOfRange { mode: String, input: i32, limit: i32 },

    #[error("Unrecognized mode: '{mode}'")]
    UnrecognizedMode { mode: String },

    #[error("Input sequence is empty")]
    EmptyInput,

    #[error("Input sequence has {len} values, must be fewer than {max}")]
    TooManyValues { len: usize, max: usize },

    #[error("Value {value} at index {index} is not positive")]
    NonPositiveValue { index: usize, value: i32 },

    #[error("Value {value} is outside the accepted range")]
    ValueOutOfBounds { value: i32 },

    #[error("Store is full ({capacity} values)")]
    CapacityExceeded { capacity: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Capacity,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ProcessError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProcessError::NonPositiveInput { .. }
            | ProcessError::OutOfRange { .. }
            | ProcessError::UnrecognizedMode { .. }
            | ProcessError::EmptyInput
            | ProcessError::TooManyValues { .. }
            | ProcessError::NonPositiveValue { .. }
            | ProcessError::ValueOutOfBounds { .. } => ErrorCategory::Input,
            ProcessError::CapacityExceeded { .. } => ErrorCategory::Capacity,
            ProcessError::ConfigError { .. } | ProcessError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ProcessError::IoError(_) | ProcessError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Capacity => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProcessError::NonPositiveInput { .. } => "Pass an input greater than 0",
            ProcessError::OutOfRange { .. } => "Use a smaller input or switch to 'double'",
            ProcessError::UnrecognizedMode { .. } => "Use one of the modes: double, triple",
            ProcessError::EmptyInput => "Provide at least one value",
            ProcessError::TooManyValues { .. } => "Split the values into smaller batches",
            ProcessError::NonPositiveValue { .. } => "Remove zero and negative values",
            ProcessError::ValueOutOfBounds { .. } => "Values must be between 1 and 9999",
            ProcessError::CapacityExceeded { .. } => "Start a new store; existing values are kept",
            ProcessError::IoError(_) => "Check that the file exists and is readable",
            ProcessError::SerializationError(_) => "Report this as a bug",
            ProcessError::ConfigError { .. } | ProcessError::InvalidConfigValueError { .. } => {
                "Fix the job file and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Rejected input: {}", self),
            ErrorCategory::Capacity => format!("Store limit reached: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// Process exit code used by the CLI in strict mode.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProcessError>;
