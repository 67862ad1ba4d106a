// ABOUTME: PostgreSQL runtime settings reporter
// ABOUTME: Queries a fixed list of server settings and flags values unsuited to tile generation

pub mod error;
pub mod reporter;
pub mod source;
pub mod types;
pub mod validation;

// Re-export main types
pub use error::{QueryError, ReportError};
pub use reporter::{report, report_to};
pub use source::SettingsSource;
pub use types::{QueryForm, ReportEntry, SettingDescriptor, SettingsReport, TILE_SETTINGS};
pub use validation::{parse_postgis_major, ReportContext, Validator, JIT_WARNING};
