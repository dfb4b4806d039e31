use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Invalid currency code '{code}': expected 3 ASCII letters")]
    InvalidCurrencyCode { code: String },

    #[error("Unexpected base currency: expected {expected}, got {actual}")]
    UnexpectedBaseCurrency { expected: String, actual: String },

    #[error("Currency not found in rates: {currency}")]
    CurrencyNotFound { currency: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse grouping used by callers to tell data problems from network problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Transport,
    Data,
    Input,
}

impl FxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FxError::Http(_) | FxError::Json(_) => ErrorCategory::Transport,
            FxError::UnexpectedBaseCurrency { .. } | FxError::CurrencyNotFound { .. } => {
                ErrorCategory::Data
            }
            FxError::InvalidDate { .. } | FxError::InvalidCurrencyCode { .. } => {
                ErrorCategory::Input
            }
            FxError::Url(_)
            | FxError::Io(_)
            | FxError::ConfigError { .. }
            | FxError::InvalidConfigValue { .. } => ErrorCategory::Config,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Transport => 2,
            ErrorCategory::Data | ErrorCategory::Input => 3,
        }
    }

    pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        FxError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
