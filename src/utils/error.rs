use thiserror::Error;

#[derive(Error, Debug)]
pub enum NobelError {
    #[error("Network error while fetching {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NobelError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::NetworkError {
            url: url.into(),
            source,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NetworkError { .. } => ErrorCategory::Network,
            Self::DecodeError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::CsvError(_) | Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Every startup failure is fatal; severity only picks the exit code.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::NetworkError { url, .. } => format!(
                "Check your network connection and that {} is reachable",
                url
            ),
            Self::DecodeError(_) => {
                "The API answered with an unexpected payload; verify the endpoint serves prize.json"
                    .to_string()
            }
            Self::CsvError(_) | Self::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            Self::ValidationError { .. } => {
                "Use --list-categories or --list-countries to see the accepted values".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download prize data: {}", self),
            ErrorCategory::Data => format!("Prize data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Invalid selection: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NobelError>;
