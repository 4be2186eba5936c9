use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Global error type for the scaffolder.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A skeleton directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The generated package manifest could not be rendered.
    #[error("Failed to render package.json: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The package manager could not be spawned.
    #[error("Failed to run `{command}`: {source}")]
    InstallSpawn {
        command: String,
        source: std::io::Error,
    },

    /// The package manager exited with a non-zero status.
    #[error("`{command}` exited with {status}")]
    InstallFailed { command: String, status: ExitStatus },
}

/// A specialized Result type for scaffolder operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
