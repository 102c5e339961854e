use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("-a cannot be used when [application-name|application-id] is specified")]
    ConflictingSelectors,

    #[error("[application-name|application-id] not specified, use -a to view all applications")]
    MissingSelector,

    #[error("Response Status Code {code}, possible invalid ID")]
    UnexpectedStatus { code: u16 },

    #[error("request failed: {0}")]
    TransportFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to unmarshal response body: {message}")]
    MalformedResponse { message: String },

    #[error("application does not exist. Use `appctl app view --all` to see a list of applications")]
    NoMatch,

    #[error("output-format choice '{value}' invalid, use [json|yaml]")]
    InvalidFormat { value: String },

    #[error("identifier pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("failed to render json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("failed to convert json to yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<reqwest::Error> for ViewError {
    fn from(err: reqwest::Error) -> Self {
        ViewError::TransportFailure(Box::new(err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Response,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ViewError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ViewError::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewError::ConflictingSelectors
            | ViewError::MissingSelector
            | ViewError::InvalidFormat { .. } => ErrorCategory::Input,
            ViewError::TransportFailure(_) => ErrorCategory::Network,
            ViewError::UnexpectedStatus { .. }
            | ViewError::MalformedResponse { .. }
            | ViewError::NoMatch => ErrorCategory::Response,
            ViewError::JsonError(_) | ViewError::YamlError(_) => ErrorCategory::Output,
            ViewError::ConfigError { .. }
            | ViewError::MissingConfigError { .. }
            | ViewError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ViewError::PatternError(_) | ViewError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Response => match self {
                ViewError::NoMatch => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::Output | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Never zero: every error is terminal.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ViewError::TransportFailure(source) => {
                format!("Could not reach the server: {}", source)
            }
            ViewError::UnexpectedStatus { code } => format!(
                "The server answered with status {}; the identifier is probably invalid",
                code
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ViewError::ConflictingSelectors => "Drop --all or drop the identifier",
            ViewError::MissingSelector => "Pass an application name or id, or use --all",
            ViewError::UnexpectedStatus { .. } => {
                "Check the identifier with `appctl app view --all`"
            }
            ViewError::TransportFailure(_) => {
                "Check that the server is running and the base URL is correct"
            }
            ViewError::MalformedResponse { .. } => {
                "The server response does not match this client version; check the server version"
            }
            ViewError::NoMatch => "List applications with `appctl app view --all` to find a valid name",
            ViewError::InvalidFormat { .. } => "Use --output-format json or --output-format yaml",
            ViewError::ConfigError { .. }
            | ViewError::MissingConfigError { .. }
            | ViewError::InvalidConfigValueError { .. } => {
                "Check the config file and the APPCTL_* environment variables"
            }
            ViewError::JsonError(_) | ViewError::YamlError(_) => "Retry with the other output format",
            ViewError::PatternError(_) | ViewError::IoError(_) => "Retry the command",
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
