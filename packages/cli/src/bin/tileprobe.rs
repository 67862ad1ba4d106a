use clap::{Args, Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::settings::SettingsArgs;
use tileprobe_cli::logging::init_tracing;
use tileprobe_cli::CliResult;
use tileprobe_config::{DbConfig, PartOverrides};

#[derive(Parser)]
#[command(name = "tileprobe")]
#[command(about = "Inspect PostgreSQL settings before generating tiles")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[arg(long, global = true, help = "Disable highlighted output")]
    no_color: bool,

    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Connection flags; each overrides the matching environment variable
#[derive(Args, Debug, Default)]
struct ConnectionArgs {
    #[arg(long, global = true, help = "Full connection URL (overrides DATABASE_URL)")]
    url: Option<String>,
    #[arg(long, global = true, help = "Database host (overrides PGHOST)")]
    host: Option<String>,
    #[arg(long, global = true, help = "Database port (overrides PGPORT)")]
    port: Option<u16>,
    #[arg(long, global = true, help = "Database name (overrides PGDATABASE)")]
    database: Option<String>,
    #[arg(long, global = true, help = "Database user (overrides PGUSER)")]
    user: Option<String>,
    #[arg(long, global = true, help = "Database password (overrides PGPASSWORD)")]
    password: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Connect timeout in seconds (overrides TILEPROBE_CONNECT_TIMEOUT_SECS)"
    )]
    connect_timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report server version, memory and parallelism settings (default)
    Settings(SettingsArgs),
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = resolve_config(cli.connection)?;

    match cli.command.unwrap_or(Commands::Settings(SettingsArgs::default())) {
        Commands::Settings(args) => cli::settings::handle_settings_command(args, &config).await,
    }
}

/// Environment first, then command-line overrides
fn resolve_config(args: ConnectionArgs) -> CliResult<DbConfig> {
    let mut config = DbConfig::from_env()?;

    if let Some(url) = args.url.as_deref() {
        config = config.with_url(url)?;
    }

    config = config.with_overrides(PartOverrides {
        host: args.host,
        port: args.port,
        database: args.database,
        user: args.user,
        password: args.password,
    });

    if let Some(secs) = args.connect_timeout {
        config = config.with_connect_timeout(secs)?;
    }

    Ok(config)
}
