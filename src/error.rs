use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Malformed source file {path}: {message}")]
    FileFormat { path: PathBuf, message: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },
}

impl EtlError {
    pub fn file_format<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        EtlError::FileFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for EtlError {
    fn user_message(&self) -> String {
        match self {
            EtlError::FileFormat { path, message } => {
                format!("Malformed source file {}: {}", path.display(), message)
            }
            EtlError::Io(err) => {
                format!("File operation failed: {}", err)
            }
            EtlError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            EtlError::InvalidPath { path } => {
                format!("Invalid path: {}", path)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            EtlError::FileFormat { .. } => Some(
                "Every source file must carry exactly the name, height, and weight fields, with height and weight numeric. Fix or remove the offending file and re-run.".to_string()
            ),
            EtlError::Io(_) => Some(
                "Check that the working directory is readable and that the output and log files are writable.".to_string()
            ),
            EtlError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            EtlError::InvalidPath { .. } => Some(
                "Pass an existing directory to scan, or run from inside one.".to_string()
            ),
        }
    }
}

impl From<toml::de::Error> for EtlError {
    fn from(error: toml::de::Error) -> Self {
        EtlError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = EtlError::file_format("people.xml", "missing <weight> element");
        assert!(error.user_message().contains("people.xml"));
        assert!(error.user_message().contains("missing <weight> element"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let etl_error = EtlError::from(io_error);
        assert!(matches!(etl_error, EtlError::Io(_)));
        assert!(etl_error.suggestion().is_some());
    }

    #[test]
    fn test_config_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let etl_error = EtlError::from(toml_error);
        assert!(matches!(etl_error, EtlError::Config { .. }));
    }
}
