use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("System theme error: {0}")]
    SystemTheme(String),

    #[error("Pending file error: {0}")]
    PendingFile(String),

    #[error("UI error: {0}")]
    Ui(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
