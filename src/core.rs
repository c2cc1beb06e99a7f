use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayheadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    TomlParse(String),

    #[error("Logging setup error: {0}")]
    Tracing(String),
}

pub type Result<T> = std::result::Result<T, PlayheadError>;

impl PlayheadError {
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                PlayheadError::TomlParse(format!(
                    "Failed to parse TOML at {:?}: {}",
                    clean_path, error
                ))
            }
            None => PlayheadError::TomlParse(format!("Failed to parse TOML: {}", error)),
        }
    }

    pub fn tracing(error: impl std::fmt::Display) -> Self {
        PlayheadError::Tracing(error.to_string())
    }
}
