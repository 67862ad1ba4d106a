// ABOUTME: PostgreSQL connection setup from the resolved configuration
// ABOUTME: Builds sqlx connect options and a single-connection pool

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use tileprobe_config::{ConnectionTarget, DbConfig};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Application name reported to the server in `pg_stat_activity`
const APPLICATION_NAME: &str = "tileprobe";

/// Translate the configured target into sqlx connect options.
///
/// Command-line overrides stored alongside a URL target are applied over the
/// parsed URL, so unspecified parts keep the URL's values.
pub fn connect_options(config: &DbConfig) -> CliResult<PgConnectOptions> {
    let mut options = match &config.target {
        ConnectionTarget::Url(url) => {
            PgConnectOptions::from_str(url).map_err(CliError::InvalidUrl)?
        }
        ConnectionTarget::Parts(parts) => PgConnectOptions::new()
            .host(&parts.host)
            .port(parts.port)
            .database(&parts.database)
            .username(&parts.user)
            .password(&parts.password),
    };

    let overrides = &config.overrides;
    if let Some(host) = &overrides.host {
        options = options.host(host);
    }
    if let Some(port) = overrides.port {
        options = options.port(port);
    }
    if let Some(database) = &overrides.database {
        options = options.database(database);
    }
    if let Some(user) = &overrides.user {
        options = options.username(user);
    }
    if let Some(password) = &overrides.password {
        options = options.password(password);
    }

    Ok(options.application_name(APPLICATION_NAME))
}

/// Open a pool holding at most one connection; the report is sequential.
pub async fn connect(config: &DbConfig) -> CliResult<PgPool> {
    let options = connect_options(config)?;

    info!(
        db = %config.target,
        host_override = ?config.overrides.host,
        port_override = ?config.overrides.port,
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options)
        .await
        .map_err(|source| CliError::Connect {
            target: config.target.to_string(),
            source,
        })?;

    info!("Database connection established");
    Ok(pool)
}
