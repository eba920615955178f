//! Error types for skill installation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for install operations
pub type InstallResult<T> = Result<T, InstallError>;

/// Errors that can occur while installing or listing skills
#[derive(Debug, Error)]
pub enum InstallError {
    /// `add` was given without a skill name
    #[error("Please specify a skill name")]
    MissingSkillName,

    /// First positional argument is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Skill name cannot be used as a path component
    #[error("Invalid skill name: {0}")]
    InvalidSkillName(String),

    /// No directory for the skill in the package
    #[error("Skill \"{name}\" not found in this package")]
    SkillNotFound {
        name: String,
        available: Vec<String>,
    },

    /// skills.json is absent
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// skills.json could not be parsed
    #[error("Manifest parse error in {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    /// Global scope requested but no home directory is known
    #[error("Cannot determine home directory (HOME or USERPROFILE not set)")]
    HomeNotFound,

    /// Local scope requested but the working directory is unavailable
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// File I/O error
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the error code for CLI output and logs
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSkillName | Self::UnknownCommand(_) | Self::InvalidSkillName(_) => {
                "USAGE_ERROR"
            }
            Self::SkillNotFound { .. } => "SKILL_NOT_FOUND",
            Self::ManifestNotFound { .. } => "MANIFEST_NOT_FOUND",
            Self::ManifestParse { .. } => "PARSE_ERROR",
            Self::HomeNotFound | Self::CurrentDir(_) => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
        }
    }

    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }
}
