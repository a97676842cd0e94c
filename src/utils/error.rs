use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown route '{name}'")]
    UnknownRoute { name: String },

    #[error("Router has been dropped")]
    RouterClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Input,
    Routing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RouteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RouteError::IoError(_) => ErrorCategory::Io,
            RouteError::TomlError(_)
            | RouteError::InvalidConfigValueError { .. }
            | RouteError::MissingConfigError { .. } => ErrorCategory::Config,
            RouteError::SerializationError(_) | RouteError::UrlError(_) => ErrorCategory::Input,
            RouteError::UnknownRoute { .. } | RouteError::RouterClosed => ErrorCategory::Routing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RouteError::RouterClosed => ErrorSeverity::Low,
            RouteError::UrlError(_) | RouteError::UnknownRoute { .. } => ErrorSeverity::Medium,
            RouteError::TomlError(_)
            | RouteError::InvalidConfigValueError { .. }
            | RouteError::MissingConfigError { .. }
            | RouteError::SerializationError(_) => ErrorSeverity::High,
            RouteError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RouteError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RouteError::SerializationError(_) => {
                "Report this as a bug; route values should always serialize".to_string()
            }
            RouteError::TomlError(_) => "Fix the syntax of the configuration file".to_string(),
            RouteError::UrlError(_) => {
                "Pass an absolute URL (https://host/path) or a bare path starting with '/'"
                    .to_string()
            }
            RouteError::MissingConfigError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
            RouteError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            RouteError::UnknownRoute { .. } => {
                "Only routes built with get_package_route can be navigated to".to_string()
            }
            RouteError::RouterClosed => "No further route changes will arrive".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Routing => format!("Routing problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
