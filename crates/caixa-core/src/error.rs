//! Error types for caixa

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// True when the durable medium itself failed (file locked, disk full,
    /// corrupted database), as opposed to a caller mistake.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Pool(_) | Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
