//! # Dump Module
//!
//! Renders every catalogue field of a [`ServerEnvironment`] as JSON, YAML or
//! aligned text, masking sensitive values according to a [`RedactionLevel`].
//!
//! Fields are always emitted in catalogue order. Absent values render as
//! `null` (JSON/YAML) or `(absent)` (text) and are never masked, so a dump
//! still shows *whether* a credential was supplied.

use crate::environment::{FieldValue, ServerEnvironment};
use crate::fields::{Field, Sensitivity};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Placeholder written in place of a masked value
pub const REDACTED: &str = "<REDACTED>";

/// Redaction level for sensitive fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RedactionLevel {
    /// No redaction (DANGEROUS - local debugging only)
    None,
    /// Redact credentials (passwords, digests)
    #[default]
    Credentials,
    /// Redact credentials + personal data (client address, user names)
    Full,
}

impl RedactionLevel {
    /// Case-insensitive; unknown names fall back to `Credentials`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" => RedactionLevel::None,
            "full" => RedactionLevel::Full,
            _ => RedactionLevel::Credentials, // Default to credentials
        }
    }

    /// Whether a field of the given sensitivity is masked at this level.
    #[must_use]
    pub fn masks(self, sensitivity: Sensitivity) -> bool {
        match self {
            RedactionLevel::None => false,
            RedactionLevel::Credentials => sensitivity == Sensitivity::Credential,
            RedactionLevel::Full => sensitivity >= Sensitivity::Personal,
        }
    }
}

/// Output format of a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Json,
    Yaml,
    /// `KEY = value` lines
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpOptions {
    pub format: DumpFormat,
    pub redaction: RedactionLevel,
    /// Skip fields whose key is missing from the map
    pub present_only: bool,
}

struct OrderedFields<'a>(&'a [(Field, FieldValue)]);

impl Serialize for OrderedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in self.0 {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

fn redact(field: Field, value: FieldValue, level: RedactionLevel) -> FieldValue {
    if level.masks(field.sensitivity()) && !value.is_absent() {
        FieldValue::Text(Some(REDACTED.to_string()))
    } else {
        value
    }
}

fn text_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(Some(s)) => s.clone(),
        FieldValue::Integer(Some(i)) => i.to_string(),
        FieldValue::Float(Some(x)) => x.to_string(),
        FieldValue::List(items) => serde_json::Value::Array(items.clone()).to_string(),
        FieldValue::Flag(b) => b.to_string(),
        FieldValue::Text(None) | FieldValue::Integer(None) | FieldValue::Float(None) => {
            "(absent)".to_string()
        }
    }
}

fn render_text(entries: &[(Field, FieldValue)]) -> String {
    let width = entries
        .iter()
        .map(|(field, _)| field.key().len())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|(field, value)| format!("{:<width$} = {}\n", field.key(), text_value(value)))
        .collect()
}

/// Collect the fields selected by `options`, masked per its redaction level.
#[must_use]
pub fn collect(env: &ServerEnvironment, options: &DumpOptions) -> Vec<(Field, FieldValue)> {
    env.snapshot()
        .into_iter()
        .filter(|(field, _)| !options.present_only || env.view().has(field.key()))
        .map(|(field, value)| (field, redact(field, value, options.redaction)))
        .collect()
}

/// Render the environment according to `options`.
///
/// # Errors
///
/// Returns an error if JSON or YAML serialization fails.
pub fn render(env: &ServerEnvironment, options: &DumpOptions) -> Result<String> {
    let entries = collect(env, options);
    let rendered = match options.format {
        DumpFormat::Json => {
            let mut out = serde_json::to_string_pretty(&OrderedFields(&entries))
                .context("failed to render JSON dump")?;
            out.push('\n');
            out
        }
        DumpFormat::Yaml => serde_yaml::to_string(&OrderedFields(&entries))
            .context("failed to render YAML dump")?,
        DumpFormat::Text => render_text(&entries),
    };
    Ok(rendered)
}
