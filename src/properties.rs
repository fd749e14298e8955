//! Persisted device property access.
//!
//! Properties are string key/value pairs describing the headset hardware.
//! This module handles loading them from disk and parsing them into floats
//! with defaulting: a missing, malformed, or wrong-arity value always
//! degrades to the caller-supplied default, never to an error. Malformed
//! input is indistinguishable from absent input by contract.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::PROP_VALUE_MAX;

/// Read access to a persisted property store.
///
/// Implementations are expected to be cheap to query; the metric factories
/// re-read every property on each call. Thread safety of the backing store
/// is the implementor's concern.
pub trait PropertySource {
    /// Returns the raw value for `key`, or `None` when the property is unset.
    fn get(&self, key: &str) -> Option<&str>;
}

/// Map-backed property store, persisted as a flat TOML table.
///
/// # File Location
///
/// - Linux: `~/.config/HMDMetrics/properties.toml`
/// - macOS: `~/Library/Application Support/HMDMetrics/properties.toml`
/// - Windows: `%APPDATA%\HMDMetrics\properties.toml`
///
/// Values are stored as strings; bare TOML integers, floats, and booleans
/// are accepted and stringified on load. A missing file yields an empty
/// store, so every metric resolves to its compiled-in default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyStore {
    values: BTreeMap<String, String>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific store directory path.
    pub fn store_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("HMDMetrics");

        Ok(dir)
    }

    /// Gets the full path to the property file.
    pub fn file_path() -> Result<PathBuf> {
        Ok(Self::store_dir()?.join("properties.toml"))
    }

    /// Loads the store from the platform property file.
    ///
    /// If the file doesn't exist, returns an empty store.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::file_path()?)
    }

    /// Loads the store from an explicit path.
    ///
    /// If the file doesn't exist, returns an empty store. Table and array
    /// values are ignored; properties are scalar text by definition.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read property file: {}", path.display()))?;

        let table: BTreeMap<String, toml::Value> = toml::from_str(&content)
            .context(format!("Failed to parse property file: {}", path.display()))?;

        let mut store = Self::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                _ => continue,
            };
            store.values.insert(key, text);
        }

        Ok(store)
    }

    /// Sets a property value, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Gets the number of set properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for PropertyStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Truncates a raw value to the bounded read size, respecting char boundaries.
fn bounded(raw: &str) -> &str {
    if raw.len() <= PROP_VALUE_MAX {
        return raw;
    }
    let mut end = PROP_VALUE_MAX;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}

/// Parses one token as a float. The entire trimmed token must be consumed;
/// trailing non-numeric data fails the parse rather than truncating.
fn parse_float(token: &str) -> Option<f32> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}

/// Reads a property as a single float.
///
/// Returns `default` when the property is unset or its value does not parse
/// in full as one number.
pub fn float_property<P: PropertySource + ?Sized>(props: &P, key: &str, default: f32) -> f32 {
    props
        .get(key)
        .map(bounded)
        .and_then(parse_float)
        .unwrap_or(default)
}

/// Reads a property as a comma-separated list of floats.
///
/// Segments that fail to parse are skipped. Returns `default` when the
/// property is unset or no segment parses. Callers that require a fixed
/// arity must check the length and substitute the default as a whole;
/// partial input is never partially applied.
pub fn vec_property<P: PropertySource + ?Sized>(props: &P, key: &str, default: &[f32]) -> Vec<f32> {
    let Some(raw) = props.get(key) else {
        return default.to_vec();
    };

    let values: Vec<f32> = bounded(raw).split(',').filter_map(parse_float).collect();
    if values.is_empty() {
        return default.to_vec();
    }
    values
}
