//! Table of the codes supported by an authority factory.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::html::{self, write_indentation};
use crate::identifier::IdentifiedObject;
use crate::properties::Properties;
use crate::report::{Citation, Report, ReportBase};
use crate::resources;
use crate::template::ContentHook;

/// One authority code and what creating it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
	pub code: String,
	pub name: Option<String>,
	pub remark: Option<String>,
	/// The object could not be created; `remark` holds the reason.
	pub has_error: bool,
	pub is_deprecated: bool,
	/// Marker shown before the code, such as `*` for a footnote.
	pub annotation: Option<char>,
}

impl Row {
	pub fn new(code: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			..Self::default()
		}
	}

	/// Row for an object created successfully.
	pub fn created(code: impl Into<String>, object: &IdentifiedObject) -> Self {
		Self {
			name: object.name.as_ref().and_then(|n| n.code()).map(str::to_string),
			remark: object.remarks.clone(),
			..Self::new(code)
		}
	}

	/// Row for a code whose object could not be created.
	pub fn failed(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			remark: Some(message.into()),
			has_error: true,
			..Self::new(code)
		}
	}

	fn write(&self, out: &mut dyn Write, highlight: bool) -> std::io::Result<()> {
		let text = |s: &Option<String>| s.as_deref().and_then(html::escape).unwrap_or_default();
		write!(out, "<tr{}>", if highlight { " class=\"HL\"" } else { "" })?;
		write!(out, "<td>")?;
		if let Some(c) = self.annotation {
			write!(out, "{c}")?;
		}
		write!(
			out,
			"</td><td><code>{}</code></td><td>{}</td><td{}>{}</td></tr>",
			html::escape(&self.code).unwrap_or_default(),
			text(&self.name),
			if self.has_error { " class=\"error\"" } else { "" },
			text(&self.remark),
		)
	}
}

/// One input entry: a code with either the created object or an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorityEntry {
	pub code: String,
	pub object: Option<IdentifiedObject>,
	pub error: Option<String>,
	pub annotation: Option<char>,
	pub deprecated: bool,
}

/// Kind of objects an authority factory creates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
	#[default]
	Generic,
	/// Coordinate reference systems; changes the default title and file name.
	#[serde(rename = "crs")]
	CoordinateReferenceSystem,
}

/// The codes of one authority, as read from a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorityCodes {
	pub kind: ObjectKind,
	/// Implementation that created the objects.
	pub vendor: Option<Citation>,
	/// Authority that defines the codes.
	pub authority: Option<Citation>,
	pub entries: Vec<AuthorityEntry>,
}

/// Report listing authority codes with their names and creation errors.
#[derive(Debug)]
pub struct AuthorityCodesReport {
	base: ReportBase,
	rows: Vec<Row>,
}

impl AuthorityCodesReport {
	pub fn new(properties: &Properties) -> Self {
		Self {
			base: ReportBase::new("AuthorityCodesReport", properties),
			rows: Vec::with_capacity(1024),
		}
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn add(&mut self, row: Row) {
		self.rows.push(row);
	}

	/// Adds every entry of `codes` and takes vendor metadata and kind defaults
/// from it.
	pub fn add_all(&mut self, codes: &AuthorityCodes) {
		if codes.kind == ObjectKind::CoordinateReferenceSystem {
			self.base
				.set_default("TITLE", "Authority codes for Coordinate Reference Systems");
			self.base.set_default("FILENAME", "CRSCodes.html");
		}
		if let Some(vendor) = &codes.vendor {
			self.base.set_vendor("PRODUCT", vendor);
		}
		if let Some(authority) = &codes.authority {
			self.base.set_vendor("FACTORY", authority);
		}
		let count = codes.entries.len();
		for (position, entry) in codes.entries.iter().enumerate() {
			self.base.progress(position, count);
			let mut row = match (&entry.object, &entry.error) {
				(_, Some(message)) => Row::failed(&entry.code, message),
				(Some(object), None) => Row::created(&entry.code, object),
				(None, None) => Row::new(&entry.code),
			};
			row.annotation = entry.annotation;
			row.is_deprecated = entry.deprecated;
			self.add(row);
		}
		self.base.progress(count, count);
	}

	/// Sets `NUM.ROWS`, `PERCENT.VALIDS` (rounded down) and
	/// `PERCENT.ANNOTATED` (rounded to nearest).
	fn compute_statistics(&mut self) {
		let rows = self.rows.len();
		let valids = self.rows.iter().filter(|r| !r.has_error).count();
		let annotated = self.rows.iter().filter(|r| r.annotation.is_some()).count();
		let (percent_valids, percent_annotated) = if rows == 0 {
			warn!("authority codes report has no rows");
			(0, 0)
		} else {
			(100 * valids / rows, (200 * annotated + rows) / (2 * rows))
		};
		self.base.set_default("NUM.ROWS", rows.to_string());
		self.base.set_default("PERCENT.VALIDS", percent_valids.to_string());
		self.base.set_default("PERCENT.ANNOTATED", percent_annotated.to_string());
	}
}

struct RowTable<'a> {
	rows: &'a [Row],
}

impl ContentHook for RowTable<'_> {
	fn write_content(&mut self, key: &str, out: &mut dyn Write) -> Result<bool> {
		if key != "CONTENT" {
			return Ok(false);
		}
		for (i, row) in self.rows.iter().enumerate() {
			if i != 0 {
				out.write_all(b"\n")?;
			}
			write_indentation(out, 6)?;
			row.write(out, (i & 2) != 0)?;
		}
		Ok(true)
	}
}

impl Report for AuthorityCodesReport {
	fn base(&self) -> &ReportBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ReportBase {
		&mut self.base
	}

	fn write(&mut self, destination: &Path) -> Result<PathBuf> {
		self.compute_statistics();
		let destination = self.base.to_file(destination);
		let mut table = RowTable { rows: &self.rows };
		self.base.filter(resources::AUTHORITY_CODES, &destination, &mut table)?;
		Ok(destination)
	}
}

#[cfg(test)]
mod tests;
