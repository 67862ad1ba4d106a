// ABOUTME: Settings reporter that queries, validates, and prints each setting
// ABOUTME: Runs sequentially over the fixed descriptor list

use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::error::{QueryError, ReportError};
use crate::source::SettingsSource;
use crate::types::{ReportEntry, SettingDescriptor, SettingsReport, TILE_SETTINGS};
use crate::validation::ReportContext;

/// Column width the setting names are padded to
const NAME_WIDTH: usize = 32;

/// Report the tile-generation settings to stdout.
///
/// Undefined functions or parameters are captured as the entry value; any
/// other database failure aborts the report.
pub async fn report<S>(source: &mut S) -> Result<SettingsReport, ReportError>
where
    S: SettingsSource + ?Sized,
{
    let mut stdout = io::stdout();
    report_to(source, &mut stdout).await
}

/// Report the tile-generation settings to `out`.
pub async fn report_to<S, W>(source: &mut S, out: &mut W) -> Result<SettingsReport, ReportError>
where
    S: SettingsSource + ?Sized,
    W: Write,
{
    report_with(source, TILE_SETTINGS, out).await
}

pub(crate) async fn report_with<S, W>(
    source: &mut S,
    descriptors: &[SettingDescriptor],
    out: &mut W,
) -> Result<SettingsReport, ReportError>
where
    S: SettingsSource + ?Sized,
    W: Write,
{
    let mut ctx = ReportContext::default();
    let mut entries = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let entry = read_entry(source, descriptor, &mut ctx).await?;
        writeln!(out, "{}", render_line(&entry))?;
        entries.push(entry);
    }

    writeln!(out, "vv {}", ctx.is_postgis_v3)?;
    out.flush()?;

    Ok(SettingsReport {
        entries,
        is_postgis_v3: ctx.is_postgis_v3,
    })
}

async fn read_entry<S>(
    source: &mut S,
    descriptor: &SettingDescriptor,
    ctx: &mut ReportContext,
) -> Result<ReportEntry, ReportError>
where
    S: SettingsSource + ?Sized,
{
    let query = descriptor.query();
    debug!(setting = descriptor.name, %query, "Querying setting");

    match source.fetch_scalar(&query).await {
        Ok(value) => {
            let value = value.unwrap_or_default();
            let warning = descriptor
                .validator
                .and_then(|validate| validate(&value, ctx))
                .filter(|msg| !msg.is_empty());

            if let Some(msg) = &warning {
                warn!(setting = descriptor.name, value = %value, "{}", msg);
            }

            Ok(ReportEntry {
                name: descriptor.name.to_string(),
                value,
                highlighted: warning.is_some(),
                warning,
            })
        }
        Err(QueryError::Undefined { code, message }) => {
            warn!(setting = descriptor.name, sqlstate = %code, "{}", message);
            Ok(ReportEntry {
                name: descriptor.name.to_string(),
                value: message,
                warning: None,
                highlighted: true,
            })
        }
        Err(err) => Err(ReportError::Query {
            setting: descriptor.name.to_string(),
            source: err,
        }),
    }
}

/// The line without highlighting: `<name padded> = <value>[ <warning>]`
pub(crate) fn plain_line(entry: &ReportEntry) -> String {
    match &entry.warning {
        Some(msg) => format!(
            "{:width$} = {} {}",
            entry.name,
            entry.value,
            msg,
            width = NAME_WIDTH
        ),
        None => format!("{:width$} = {}", entry.name, entry.value, width = NAME_WIDTH),
    }
}

fn render_line(entry: &ReportEntry) -> String {
    let body = plain_line(entry);
    if entry.highlighted {
        format!("* {}", body.red())
    } else {
        format!("* {}", body)
    }
}
