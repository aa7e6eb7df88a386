//! Layered report properties.
//!
//! Explicit values shadow defaults. Reports fill the defaults (title, date,
//! vendor metadata, computed counts) while callers supply the explicit layer,
//! either programmatically or from a TOML file.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{ReportError, Result};

/// Property bag with a fallback layer of defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
	values: IndexMap<String, String>,
	defaults: IndexMap<String, String>,
}

impl Properties {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Looks up `key` in the explicit values, then in the defaults.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.values
			.get(key)
			.or_else(|| self.defaults.get(key))
			.map(String::as_str)
	}

	/// Returns true if `key` resolves in either layer.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Returns true if `key` was set explicitly.
	pub fn is_explicit(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Sets an explicit value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.values.insert(key.into(), value.into());
	}

	/// Sets a default value.
	pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.defaults.insert(key.into(), value.into());
	}

	/// Copies every explicit value of `other` over this bag.
	pub fn extend(&mut self, other: &Properties) {
		for (k, v) in &other.values {
			self.values.insert(k.clone(), v.clone());
		}
	}

	/// Parses a `KEY=VALUE` assignment and stores it as an explicit value.
	pub fn set_assignment(&mut self, assignment: &str) -> Result<()> {
		let (key, value) = assignment
			.split_once('=')
			.ok_or_else(|| ReportError::Config(format!("expected KEY=VALUE, got {assignment:?}")))?;
		let key = key.trim();
		if key.is_empty() {
			return Err(ReportError::Config(format!("empty key in {assignment:?}")));
		}
		self.set(key, value);
		Ok(())
	}

	/// Parses explicit values from a TOML document.
	///
	/// Nested tables flatten into dotted keys, so `[PRODUCT] NAME = "x"`
	/// yields `PRODUCT.NAME`.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		let table: toml::Table = toml::from_str(text)?;
		let mut properties = Self::new();
		flatten(None, &table, &mut properties)?;
		Ok(properties)
	}

	/// Reads explicit values from a TOML file.
	pub fn from_toml_file(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ReportError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	/// Iterates over every resolvable key and its value, explicit first.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values
			.iter()
			.chain(self.defaults.iter().filter(|(k, _)| !self.values.contains_key(*k)))
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

fn flatten(prefix: Option<&str>, table: &toml::Table, out: &mut Properties) -> Result<()> {
	for (key, value) in table {
		let key = match prefix {
			Some(prefix) => format!("{prefix}.{key}"),
			None => key.clone(),
		};
		let text = match value {
			toml::Value::String(s) => s.clone(),
			toml::Value::Integer(i) => i.to_string(),
			toml::Value::Float(f) => f.to_string(),
			toml::Value::Boolean(b) => b.to_string(),
			toml::Value::Datetime(d) => d.to_string(),
			toml::Value::Table(t) => {
				flatten(Some(&key), t, out)?;
				continue;
			}
			toml::Value::Array(_) => {
				return Err(ReportError::Config(format!("property {key} cannot be an array")));
			}
		};
		out.set(key, text);
	}
	Ok(())
}
