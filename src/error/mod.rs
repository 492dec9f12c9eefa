use std::fmt::Display;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for pulseboard's fallible surfaces
///
/// The aggregation transforms never fail; this type covers configuration,
/// the data source, the chat endpoint and exports.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Data source error: {message}")]
    DataSource {
        code: u16,
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Chat error: {message}")]
    Chat {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Export error: {message}")]
    Export {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DashboardError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a data source error with default code
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::data_source_with_code(ErrorCode::SOURCE_GENERIC, message)
    }

    /// Create a data source error with specific code
    pub fn data_source_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::DataSource {
            code,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create a data source error for a non-success HTTP status
    pub fn data_source_status(status: u16, message: impl Into<String>) -> Self {
        Self::DataSource {
            code: ErrorCode::SOURCE_HTTP_STATUS,
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a chat error with default code
    pub fn chat(message: impl Into<String>) -> Self {
        Self::chat_with_code(ErrorCode::CHAT_GENERIC, message)
    }

    /// Create a chat error with specific code
    pub fn chat_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Chat {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an export error with specific code
    pub fn export_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Export {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error with default code
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_GENERIC,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::DataSource { source: src, .. }
            | Self::Chat { source: src, .. }
            | Self::Export { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::DataSource { message, .. }
            | Self::Chat { message, .. }
            | Self::Export { message, .. }
            | Self::Validation { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::DataSource { .. } => 3,
            Self::Chat { .. } => 4,
            Self::Export { .. } => 5,
            Self::Validation { .. } => 8,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::DataSource { code, .. }
            | Self::Chat { code, .. }
            | Self::Export { code, .. }
            | Self::Validation { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::DataSource {
                message, status, ..
            } => match status {
                Some(status) => format!("Customer data unavailable (HTTP {}): {}", status, message),
                None => format!("Customer data unavailable: {}", message),
            },
            Self::Chat { message, .. } => {
                format!("Failed to connect to the chat server: {}", message)
            }
            Self::Export { message, .. } => format!("Export failed: {}", message),
            Self::Validation { message, field, .. } => {
                if let Some(f) = field {
                    format!("Validation error for '{}': {}", f, message)
                } else {
                    format!("Validation error: {}", message)
                }
            }
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::data_source_with_code(ErrorCode::SOURCE_IO_ERROR, "I/O operation failed")
            .with_source(err)
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::export_with_code(ErrorCode::EXPORT_CSV_FAILED, "CSV processing failed")
            .with_source(err)
    }
}
