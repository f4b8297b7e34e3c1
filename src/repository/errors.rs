use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness constraint was violated on `field`.
    #[error("duplicate value for {field}")]
    Conflict { field: String },
    /// A connection could not be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::Conflict {
                    field: conflict_field(info.message()),
                }
            }
            other => RepositoryError::Database(other),
        }
    }
}

/// Extract the column name from a SQLite unique-violation message such as
/// `UNIQUE constraint failed: categories.name`.
fn conflict_field(message: &str) -> String {
    match message.rsplit_once('.') {
        Some((_, field)) => field.trim().to_string(),
        None => "value".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_field_extracts_column_name() {
        assert_eq!(
            conflict_field("UNIQUE constraint failed: categories.name"),
            "name"
        );
    }

    #[test]
    fn conflict_field_falls_back_without_a_column() {
        assert_eq!(conflict_field("UNIQUE constraint failed"), "value");
    }
}
