// ABOUTME: CLI command that reports PostgreSQL settings relevant to tile generation
// ABOUTME: Connects, runs the settings report, and optionally emits JSON

use clap::Args;
use tileprobe_cli::db;
use tileprobe_cli::{CliError, CliResult};
use tileprobe_config::DbConfig;
use tileprobe_settings::{report, SettingsReport};
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Also print the collected settings as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail when the server does not run PostGIS 3 or newer
    #[arg(long)]
    pub require_postgis_v3: bool,
}

pub async fn handle_settings_command(args: SettingsArgs, config: &DbConfig) -> CliResult<()> {
    let pool = db::connect(config).await?;

    let result = match pool.acquire().await {
        Ok(mut conn) => report(&mut *conn).await.map_err(CliError::from),
        Err(source) => Err(CliError::Connect {
            target: config.target.to_string(),
            source,
        }),
    };

    pool.close().await;
    info!("Database connection closed");

    let settings = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    }

    check_postgis_requirement(&args, &settings)
}

fn check_postgis_requirement(args: &SettingsArgs, settings: &SettingsReport) -> CliResult<()> {
    if args.require_postgis_v3 && !settings.is_postgis_v3 {
        let found = settings
            .get("postgis_full_version()")
            .unwrap_or_default()
            .to_string();
        return Err(CliError::PostgisV3Required { found });
    }
    Ok(())
}
