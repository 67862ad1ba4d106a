use thiserror::Error;
use tileprobe_config::ConfigError;
use tileprobe_settings::ReportError;

/// Main application error type returned by every command
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid connection URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PostGIS 3 or newer is required (found: {found})")]
    PostgisV3Required { found: String },
}

/// Result type alias for command handlers
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::InvalidUrl(_) => 2,
            CliError::PostgisV3Required { .. } => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileprobe_settings::QueryError;

    #[test]
    fn test_config_error_exit_code() {
        let error = CliError::from(ConfigError::PortOutOfRange(0));
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_report_error_is_transparent() {
        let error = CliError::from(ReportError::Query {
            setting: "work_mem".to_string(),
            source: QueryError::Fatal(sqlx::Error::PoolClosed),
        });
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("work_mem"));
    }

    #[test]
    fn test_postgis_requirement_message() {
        let error = CliError::PostgisV3Required {
            found: "function postgis_full_version() does not exist".to_string(),
        };
        assert_eq!(error.exit_code(), 3);
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn test_connect_error_does_not_leak_password() {
        let error = CliError::Connect {
            target: "postgres://tiler:***@db:5432/osm".to_string(),
            source: sqlx::Error::PoolTimedOut,
        };
        let message = error.to_string();
        assert!(message.contains("db:5432"));
        assert!(message.contains("***"));
    }
}
