//! Behavior shared by every HTML report.
//!
//! # Role
//!
//! [`ReportBase`] owns the layered properties of one report, fills the
//! defaults common to all reports, derives vendor metadata from a
//! [`Citation`] and writes a packaged template through the [`Renderer`].
//! Concrete reports implement [`Report`] and provide the computed sections.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::identifier::Identifier;
use crate::progress::ProgressHandle;
use crate::properties::Properties;
use crate::resources;
use crate::template::{ContentHook, Renderer};

/// Base URL of the API documentation linked from the reports.
pub const JAVADOC_GEOAPI: &str = "http://www.geoapi.org/snapshot/javadoc";

/// Today's date as `yyyy-MM-dd`, computed once per process.
pub fn today() -> &'static str {
	static NOW: OnceLock<String> = OnceLock::new();
	NOW.get_or_init(|| chrono::Local::now().format("%Y-%m-%d").to_string())
}

/// A party responsible for a cited resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Party {
	pub name: Option<String>,
	/// Online linkage, typically a home page.
	pub linkage: Option<String>,
}

/// Citation of a product or authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Citation {
	pub title: Option<String>,
	pub identifiers: Vec<Identifier>,
	pub parties: Vec<Party>,
}

/// A report that renders itself to an HTML file.
pub trait Report {
	fn base(&self) -> &ReportBase;

	fn base_mut(&mut self) -> &mut ReportBase;

	/// Writes the report to `destination`, or into it if it is a directory.
	/// Returns the path of the written file.
	fn write(&mut self, destination: &Path) -> Result<PathBuf>;

	/// Routes progress notifications to `handle`.
	fn set_progress(&mut self, handle: ProgressHandle) {
		self.base_mut().progress = Some(handle);
	}
}

/// Properties and progress state of one report.
#[derive(Debug)]
pub struct ReportBase {
	properties: Properties,
	progress: Option<ProgressHandle>,
}

impl ReportBase {
	/// Creates the base of a report named `kind`, with `properties` layered
	/// over the common defaults.
	pub fn new(kind: &str, properties: &Properties) -> Self {
		let mut own = Properties::new();
		own.set_default("TITLE", kind);
		own.set_default("DATE", today());
		own.set_default("DESCRIPTION", "");
		own.set_default("PRODUCT.VERSION", today());
		own.set_default("FACTORY.VERSION", today());
		own.set_default("JAVADOC.GEOAPI", JAVADOC_GEOAPI);
		own.set_default("FILENAME", format!("{kind}.html"));
		own.extend(properties);
		Self {
			properties: own,
			progress: None,
		}
	}

	pub fn properties(&self) -> &Properties {
		&self.properties
	}

	/// Sets an explicit property.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.properties.set(key, value);
	}

	/// Sets a default, shadowed by any explicit value of the same key.
	pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.properties.set_default(key, value);
	}

	/// Fills `<prefix>.NAME`, `<prefix>.VERSION` and `<prefix>.URL` defaults
	/// from `vendor`.
	///
	/// The name falls back to the first identifier code, then to the first
	/// party name. Keys with nothing to derive from are left untouched.
	pub fn set_vendor(&mut self, prefix: &str, vendor: &Citation) {
		let mut title = vendor.title.clone();
		let mut version = None;
		for identifier in &vendor.identifiers {
			if title.is_none() {
				title = identifier.code().map(str::to_string);
			}
			if version.is_none() {
				version = identifier.version().map(str::to_string);
			}
			if title.is_some() && version.is_some() {
				break;
			}
		}
		let mut linkage = None;
		for party in &vendor.parties {
			if title.is_none() {
				title = party.name.clone();
			}
			if linkage.is_none() {
				linkage = party.linkage.clone();
			}
			if title.is_some() && linkage.is_some() {
				break;
			}
		}
		if let Some(title) = title {
			self.set_default(format!("{prefix}.NAME"), title);
		}
		if let Some(version) = version {
			self.set_default(format!("{prefix}.VERSION"), version);
		}
		if let Some(linkage) = linkage {
			self.set_default(format!("{prefix}.URL"), linkage);
		}
	}

	/// `destination` itself, or the `FILENAME` property inside it when it is
	/// a directory.
	pub fn to_file(&self, destination: &Path) -> PathBuf {
		if destination.is_dir() {
			destination.join(self.properties.get("FILENAME").unwrap_or("report.html"))
		} else {
			destination.to_path_buf()
		}
	}

	/// Notifies progress, if anyone listens.
	pub fn progress(&self, position: usize, count: usize) {
		if let Some(handle) = &self.progress {
			handle.progress(position, count);
		}
	}

	/// Renders the packaged `template` to `destination` and copies the
	/// stylesheet next to it. The parent directory must exist.
	pub fn filter(&self, template: &str, destination: &Path, hook: &mut dyn ContentHook) -> Result<()> {
		let directory = match destination.parent() {
			Some(p) if !p.as_os_str().is_empty() => p,
			_ => Path::new("."),
		};
		resources::copy_stylesheet(directory)?;
		let text = resources::resource(template)?;
		let io_error = |error| ReportError::Io {
			path: destination.to_path_buf(),
			error,
		};
		let mut out = BufWriter::new(File::create(destination).map_err(io_error)?);
		Renderer::new(&self.properties, hook).render(template, text, &mut out)?;
		out.flush().map_err(io_error)?;
		info!(path = %destination.display(), template, "wrote report");
		Ok(())
	}
}

#[cfg(test)]
mod tests;
