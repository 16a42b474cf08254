// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjrunError {
    /// Raised before any subprocess is spawned: bad config file, missing
    /// working directory, unmapped branch, unknown project, empty command.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The rendered command could not be started or exited unsuccessfully.
    #[error("Subprocess error: `{command}` {failure}")]
    Subprocess {
        command: String,
        #[source]
        failure: SubprocessFailure,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Why a subprocess invocation failed.
#[derive(Error, Debug)]
pub enum SubprocessFailure {
    #[error("failed to start: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("exited with {}", describe_exit(.code))]
    Exit { code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status code {code}"),
        None => "no status code (terminated by signal)".to_string(),
    }
}

impl ProjrunError {
    pub fn config(msg: impl Into<String>) -> Self {
        ProjrunError::ConfigError(msg.into())
    }

    /// Exit code of the failed subprocess, if this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProjrunError::Subprocess {
                failure: SubprocessFailure::Exit { code },
                ..
            } => *code,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjrunError>;
