use std::fmt;

use podio::DecodeError;

#[derive(Debug)]
pub enum AppError {
    ConfigError(config::ConfigError),
    IoError(std::io::Error),
    DecodeError(DecodeError),
    JsonError(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(err) => write!(f, "Configuration error: {}", err),
            AppError::IoError(err) => write!(f, "I/O error: {}", err),
            AppError::DecodeError(err) => write!(f, "Decode error: {}", err),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::ConfigError(err) => Some(err),
            AppError::IoError(err) => Some(err),
            AppError::DecodeError(err) => Some(err),
            AppError::JsonError(err) => Some(err),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::DecodeError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
