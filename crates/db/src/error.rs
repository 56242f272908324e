use people_core::types::PersonId;

/// PostgreSQL SQLSTATE codes for payload-level rejections.
const NOT_NULL_VIOLATION: &str = "23502";
const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";

/// A failure reported by a [`PersonStore`](crate::PersonStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected the payload (missing required field, constraint).
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// An update or delete matched no record.
    #[error("No person record matched id {0}")]
    NoMatch(PersonId),

    /// Any other database failure (connection, protocol, decoding).
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let code = db_err.code();
            if matches!(
                code.as_deref(),
                Some(NOT_NULL_VIOLATION | UNIQUE_VIOLATION | CHECK_VIOLATION)
            ) {
                return StoreError::Constraint(db_err.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}
