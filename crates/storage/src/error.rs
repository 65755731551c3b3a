use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Tour not found: {0}")]
    TourNotFound(i64),

    #[error("Competition not found: {0}")]
    CompetitionNotFound(i64),

    #[error("Point template not found: {0}")]
    PointTemplateNotFound(i64),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::TourNotFound(_)
                | StorageError::CompetitionNotFound(_)
                | StorageError::PointTemplateNotFound(_)
        )
    }
}
