use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GetZoteroError {
    #[error("Unsupported architecture '{requested}'. Use one of: {supported}")]
    UnsupportedArchitecture { requested: String, supported: String },

    #[error("Invalid arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to extract archive {path}: {reason}")]
    Archive { path: PathBuf, reason: String },

    #[error("Failed to read version from {path}: {reason}")]
    VersionRead { path: PathBuf, reason: String },

    #[error("Packaging tool '{program}' failed with {status}")]
    PackagingTool { program: String, status: ExitStatus },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
