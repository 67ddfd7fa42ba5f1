//! Puzzle Prison — API error types.
//!
//! Turns never fail at the HTTP layer; the only errors here are the ones
//! that stop the server from starting or serving.

use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_the_problem() {
        let err = AppError::Config("PORT must be a valid number".into());

        assert_eq!(
            err.to_string(),
            "configuration error: PORT must be a valid number"
        );
    }

    #[test]
    fn test_io_errors_convert_to_server_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");

        let err = AppError::from(io);

        assert!(matches!(err, AppError::Server(_)));
        assert_eq!(err.to_string(), "server error: address in use");
    }

    #[test]
    fn test_sqlx_errors_convert_to_database_errors() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, AppError::Database(_)));
        assert!(err.to_string().starts_with("database error:"));
    }
}
