use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store rejected the request ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        self.has_sql_state(UNIQUE_VIOLATION)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.has_sql_state(FOREIGN_KEY_VIOLATION)
    }

    /// Both backends report the Postgres SQLSTATE: sqlx directly, PostgREST in `code`.
    fn has_sql_state(&self, state: &str) -> bool {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => e.code().as_deref() == Some(state),
            StorageError::Rejected { code, .. } => code.as_deref() == Some(state),
            _ => false,
        }
    }
}
