// ABOUTME: Type definitions for the settings report
// ABOUTME: Setting descriptors, per-entry results, and the ordered report

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::validation::{check_jit, check_postgis_version, Validator};

/// How a setting is read from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryForm {
    /// `SELECT <expr>;` for callable expressions like `version()`
    Select,
    /// `SHOW <name>;` for configuration parameters
    Show,
}

impl QueryForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryForm::Select => "SELECT",
            QueryForm::Show => "SHOW",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SettingDescriptor {
    pub name: &'static str,
    pub validator: Option<Validator>,
}

impl SettingDescriptor {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            validator: None,
        }
    }

    pub const fn validated(name: &'static str, validator: Validator) -> Self {
        Self {
            name,
            validator: Some(validator),
        }
    }

    /// Names containing a parenthesis are function calls and need `SELECT`
    pub fn query_form(&self) -> QueryForm {
        if self.name.contains('(') {
            QueryForm::Select
        } else {
            QueryForm::Show
        }
    }

    pub fn query(&self) -> String {
        format!("{} {};", self.query_form().as_str(), self.name)
    }
}

/// Settings inspected before generating tiles, in report order.
pub const TILE_SETTINGS: &[SettingDescriptor] = &[
    SettingDescriptor::new("version()"),
    SettingDescriptor::validated("postgis_full_version()", check_postgis_version),
    SettingDescriptor::validated("jit", check_jit),
    SettingDescriptor::new("shared_buffers"),
    SettingDescriptor::new("work_mem"),
    SettingDescriptor::new("maintenance_work_mem"),
    SettingDescriptor::new("max_connections"),
    SettingDescriptor::new("max_worker_processes"),
    SettingDescriptor::new("max_parallel_workers"),
    SettingDescriptor::new("max_parallel_workers_per_gather"),
];

/// One reported setting.
///
/// `value` holds the server's error message when the setting could not be
/// read because the function or parameter does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub value: String,
    pub warning: Option<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsReport {
    pub entries: Vec<ReportEntry>,
    pub is_postgis_v3: bool,
}

impl SettingsReport {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    /// Setting names in report order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|entry| entry.highlighted)
    }

    /// Split into the ordered name/value mapping and the PostGIS v3 flag
    pub fn into_parts(self) -> (Vec<(String, String)>, bool) {
        let values = self
            .entries
            .into_iter()
            .map(|entry| (entry.name, entry.value))
            .collect();
        (values, self.is_postgis_v3)
    }
}

struct OrderedValues<'a>(&'a [ReportEntry]);

impl Serialize for OrderedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

impl Serialize for SettingsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SettingsReport", 2)?;
        state.serialize_field("settings", &OrderedValues(&self.entries))?;
        state.serialize_field("is_postgis_v3", &self.is_postgis_v3)?;
        state.end()
    }
}
