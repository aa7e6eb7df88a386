//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
	/// Reading or writing a file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// The file being read or written.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Writing rendered output failed.
	#[error("write failed: {0}")]
	Write(#[from] std::io::Error),

	/// A placeholder names a key that neither the properties nor the report
	/// content can provide.
	#[error("undefined property: {0}")]
	MissingProperty(String),

	/// A template line opens a placeholder without closing it.
	#[error("${{ without }} at line {line} of {template}:\n{text}")]
	UnterminatedPlaceholder {
		/// Name of the template.
		template: String,
		/// One-based line number.
		line: usize,
		/// The offending line.
		text: String,
	},

	/// A property value opens a placeholder without closing it.
	#[error("${{ without }} for property \"{key}\":\n{value}")]
	UnterminatedInProperty {
		/// The property key.
		key: String,
		/// The property value.
		value: String,
	},

	/// Expanding a property led back to itself.
	#[error("property {0} expands recursively")]
	RecursiveProperty(String),

	/// No packaged resource has this name.
	#[error("resource not found: {0}")]
	ResourceNotFound(String),

	/// A TOML property file could not be parsed.
	#[error("invalid property file: {0}")]
	Toml(#[from] toml::de::Error),

	/// A property assignment or value is malformed.
	#[error("configuration error: {0}")]
	Config(String),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
