use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source}")]
    Sqlx {
        #[source]
        source: sqlx::Error,
    },

    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Migration error: {message}")]
    Migration { message: String },

    #[error("Database initialization failed: {message}")]
    Initialization { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = source {
            if db.is_unique_violation() {
                // SQLite reports "UNIQUE constraint failed: <table>.<column>";
                // callers map that text onto a field-level error.
                return Self::UniqueViolation {
                    constraint: db.message().to_string(),
                };
            }
        }
        Self::Sqlx { source }
    }
}

impl DbError {
    /// The violated constraint text, when this is a uniqueness failure.
    pub fn unique_violation(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint } => Some(constraint),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
