// ABOUTME: Library side of the tileprobe CLI
// ABOUTME: Connection setup, logging, and the application error type

pub mod db;
pub mod error;
pub mod logging;

pub use error::{CliError, CliResult};
