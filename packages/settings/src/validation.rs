// ABOUTME: Validators applied to retrieved server settings
// ABOUTME: PostGIS version detection and JIT warning for complex tile queries

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Warning attached to `jit` when it is not switched off
pub const JIT_WARNING: &str = "disable JIT in PG 11-12 for complex queries";

/// Lowest PostGIS major version that counts as v3
const POSTGIS_V3_MAJOR: u32 = 3;

static POSTGIS_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^POSTGIS="([0-9]+)\."#).expect("PostGIS version pattern is valid")
});

/// Findings collected while validating a single report run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportContext {
    pub is_postgis_v3: bool,
}

/// Inspects a retrieved value, may record findings, and returns a warning
/// when the value is unsuitable.
pub type Validator = fn(&str, &mut ReportContext) -> Option<String>;

/// Extract the major version from `postgis_full_version()` output,
/// e.g. `POSTGIS="3.1.0 5e2af69" [EXTENSION] PGSQL="120" ...`.
///
/// A digit run too long for `u32` saturates to `u32::MAX`.
pub fn parse_postgis_major(value: &str) -> Option<u32> {
    POSTGIS_VERSION_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        // ASCII digits only, so overflow is the only parse failure
        .map(|major| major.as_str().parse::<u32>().unwrap_or(u32::MAX))
}

/// Records whether PostGIS is at least v3. Never warns.
pub fn check_postgis_version(value: &str, ctx: &mut ReportContext) -> Option<String> {
    let major = parse_postgis_major(value);
    ctx.is_postgis_v3 = major.is_some_and(|m| m >= POSTGIS_V3_MAJOR);
    debug!(?major, is_postgis_v3 = ctx.is_postgis_v3, "Parsed PostGIS version");
    None
}

pub fn check_jit(value: &str, _ctx: &mut ReportContext) -> Option<String> {
    if value == "off" {
        None
    } else {
        Some(JIT_WARNING.to_string())
    }
}
