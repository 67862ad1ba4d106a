// ABOUTME: Error types for settings retrieval and report output
// ABOUTME: Separates recoverable undefined-object failures from fatal database errors

use thiserror::Error;

/// SQLSTATE raised when a function such as `postgis_full_version()` is missing
pub const UNDEFINED_FUNCTION: &str = "42883";

/// SQLSTATE raised for unknown objects, including unrecognized configuration parameters
pub const UNDEFINED_OBJECT: &str = "42704";

/// Whether a SQLSTATE marks a missing function or object
pub fn is_undefined_sqlstate(code: &str) -> bool {
    matches!(code, UNDEFINED_FUNCTION | UNDEFINED_OBJECT)
}

#[derive(Debug, Error)]
pub enum QueryError {
    /// The server does not know the referenced function or setting.
    #[error("{message}")]
    Undefined { code: String, message: String },

    /// Anything else: connection loss, authentication, syntax errors.
    #[error(transparent)]
    Fatal(sqlx::Error),
}

impl QueryError {
    pub fn undefined(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Undefined {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, QueryError::Undefined { .. })
    }
}

impl From<sqlx::Error> for QueryError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if let Some(code) = db_err.code() {
                if is_undefined_sqlstate(&code) {
                    return QueryError::Undefined {
                        code: code.into_owned(),
                        message: db_err.message().to_string(),
                    };
                }
            }
        }

        QueryError::Fatal(err)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read setting {setting}: {source}")]
    Query {
        setting: String,
        #[source]
        source: QueryError,
    },

    #[error("Failed to write report output: {0}")]
    Output(#[from] std::io::Error),
}
