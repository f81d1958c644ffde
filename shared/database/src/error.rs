use thiserror::Error;

/// Failures surfaced by an [`EmployeeStore`](crate::EmployeeStore).
///
/// "Not found" is not an error here: lookups return `Option` and deletes
/// return `bool`, leaving the HTTP mapping to the caller.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Classifies a write failure, turning unique-constraint violations on
    /// the `email` column into [`RepositoryError::DuplicateEmail`].
    pub(crate) fn from_write(error: sqlx::Error, email: &str) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                Self::DuplicateEmail {
                    email: email.to_string(),
                }
            }
            _ => Self::Database(error),
        }
    }
}
