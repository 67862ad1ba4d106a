// ABOUTME: Configuration and environment variable management for tileprobe
// ABOUTME: Resolves the PostgreSQL connection target from the environment

pub mod config;
pub mod constants;

pub use config::{ConfigError, ConnectionParts, ConnectionTarget, DbConfig, PartOverrides};
