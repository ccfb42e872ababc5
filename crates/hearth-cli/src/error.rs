use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Admission {
        #[from]
        source: hearth_admission::AdmissionError,
    },

    #[error("Database error: {source}")]
    Db {
        #[from]
        source: hearth_db::DbError,
    },

    #[error("No account with handle '{handle}'")]
    UnknownHandle { handle: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
