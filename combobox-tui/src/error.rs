use std::path::PathBuf;

/// Errors that stop the program before the UI starts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("could not read options file {path}: {source}")]
    ReadOptions {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not create log file {path}: {source}")]
    CreateLog {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logger already initialized")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
