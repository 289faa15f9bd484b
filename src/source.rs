//! # Source Module
//!
//! Helpers that populate an [`EnvView`] from outside the crate: the current
//! process environment, or a JSON/YAML fixture describing one request.
//!
//! Fixtures are flat mappings. Values may be `null`, scalars, or lists of
//! scalars:
//!
//! ```yaml
//! REQUEST_METHOD: GET
//! REQUEST_TIME: 1700000000
//! REQUEST_TIME_FLOAT: 1700000000.25
//! HTTPS: "on"
//! argv: [index.php, --verbose]
//! ```
//!
//! Nested mappings and nested lists are rejected.

use crate::value::RawValue;
use crate::view::EnvView;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use tracing::debug;

/// Snapshot of the process environment.
///
/// Every variable becomes a string entry (non-UTF-8 data is converted
/// lossily). `argv` holds the program arguments and `argc` their count, as a
/// CGI runtime exposes them to a command-line invocation.
#[must_use]
pub fn from_process_env() -> EnvView {
    let mut entries: HashMap<String, RawValue> = env::vars_os()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                RawValue::String(value.to_string_lossy().into_owned()),
            )
        })
        .collect();

    let args: Vec<RawValue> = env::args_os()
        .map(|arg| RawValue::String(arg.to_string_lossy().into_owned()))
        .collect();
    entries.insert("argc".to_string(), RawValue::from(args.len()));
    entries.insert("argv".to_string(), RawValue::Array(args));

    EnvView::from(entries)
}

/// Serialization format of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// `.yaml` / `.yml` are YAML, anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                FixtureFormat::Yaml
            }
            _ => FixtureFormat::Json,
        }
    }
}

fn ensure_flat(entries: &serde_json::Map<String, RawValue>) -> Result<()> {
    for (key, value) in entries {
        match value {
            RawValue::Object(_) => {
                bail!("fixture key '{key}' holds a mapping; only scalars and lists are supported")
            }
            RawValue::Array(items) if items.iter().any(|i| i.is_array() || i.is_object()) => {
                bail!("fixture key '{key}' holds a nested collection; list items must be scalars")
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parse fixture text into a view.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON/YAML, the top level is not
/// a mapping, or a value is a nested collection.
pub fn parse_fixture(content: &str, format: FixtureFormat) -> Result<EnvView> {
    let document: RawValue = match format {
        FixtureFormat::Json => serde_json::from_str(content).context("invalid JSON fixture")?,
        FixtureFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML fixture")?,
    };

    let RawValue::Object(entries) = document else {
        bail!("fixture must be a mapping of environment keys to values");
    };
    ensure_flat(&entries)?;

    Ok(EnvView::from(entries))
}

/// Read and parse a fixture file, picking the format by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_fixture`].
pub fn load_fixture(path: &Path) -> Result<EnvView> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let format = FixtureFormat::from_path(path);
    let view = parse_fixture(&content, format)
        .with_context(|| format!("failed to load fixture {}", path.display()))?;
    debug!(path = %path.display(), format = ?format, entries = view.len(), "Fixture loaded");
    Ok(view)
}
