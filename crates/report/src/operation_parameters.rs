//! Table of operation methods and their parameter names in each code space.
//!
//! Each operation is a group row followed by one row per parameter. Columns
//! are the code spaces seen in the operation names, in order of appearance.
//! Primary names are emphasized; aliases are listed below them in the same
//! cell. Operations may be grouped into categories, which get an index list
//! and a section head.

use std::cmp::Ordering;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::compare;
use crate::error::Result;
use crate::html::{self, INDENT, anchor, write_class_attribute, write_indentation};
use crate::identifier::{self, IdentifiedObject, Identifier};
use crate::properties::Properties;
use crate::report::{Report, ReportBase};
use crate::resources;
use crate::template::ContentHook;

/// An operation method and its parameters, as read from a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Operation {
	#[serde(flatten)]
	pub object: IdentifiedObject,
	pub category: Option<String>,
	pub parameters: Vec<IdentifiedObject>,
}

/// An operation or parameter with its names grouped by code space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	pub category: Option<String>,
	name: Option<Identifier>,
	/// HTML-ready names per code space, primary name first.
	pub names: IndexMap<String, Vec<String>>,
	pub parameters: Vec<Row>,
}

impl Row {
	/// Collects the names of `object` in each of `code_spaces`.
	pub fn new(object: &IdentifiedObject, code_spaces: &IndexSet<String>) -> Self {
		let mut names = IndexMap::with_capacity(code_spaces.len());
		for cs in code_spaces {
			let found = identifier::name_and_aliases(object, Some(cs));
			if found.is_empty() {
				continue;
			}
			let cell = found
				.into_iter()
				.map(|(name, primary)| {
					let name = html::escape(&name).unwrap_or_default();
					if primary { format!("<em>{name}</em>") } else { name }
				})
				.collect();
			names.insert(cs.clone(), cell);
		}
		Self {
			category: None,
			name: object.name.clone(),
			names,
			parameters: Vec::new(),
		}
	}

	pub fn name(&self) -> Option<&Identifier> {
		self.name.as_ref()
	}

	/// Writes one `<tr>`; a run of code spaces without names merges into the
	/// preceding cell.
	fn write(
		&self,
		out: &mut dyn Write,
		code_spaces: &[&str],
		is_group: bool,
		is_head: bool,
		is_tail: bool,
	) -> std::io::Result<()> {
		out.write_all(b"<tr")?;
		write_class_attribute(
			out,
			&[
				is_group.then_some("groupName"),
				is_head.then_some("groupHead"),
				is_tail.then_some("groupTail"),
			],
		)?;
		out.write_all(b">")?;
		let mut i = 0;
		while i < code_spaces.len() {
			let codes = self.names.get(code_spaces[i]);
			let mut colspan = 1;
			i += 1;
			while i < code_spaces.len() && !self.names.contains_key(code_spaces[i]) {
				colspan += 1;
				i += 1;
			}
			out.write_all(b"<td")?;
			if colspan != 1 {
				write!(out, " colspan=\"{colspan}\"")?;
			}
			out.write_all(b">")?;
			if let Some(codes) = codes {
				if !is_group {
					out.write_all(b"<li>")?;
				}
				out.write_all(codes.join("<br>").as_bytes())?;
				if !is_group {
					out.write_all(b"</li>")?;
				}
			}
			out.write_all(b"</td>")?;
		}
		out.write_all(b"</tr>")
	}
}

impl PartialOrd for Row {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Row {
	/// By category, then by name.
	fn cmp(&self, other: &Self) -> Ordering {
		compare::compare(self.category.as_deref(), other.category.as_deref())
			.then_with(|| compare::compare_identifiers(self.name.as_ref(), other.name.as_ref()))
	}
}

/// Report listing operation methods with their parameters.
#[derive(Debug)]
pub struct OperationParametersReport {
	base: ReportBase,
	rows: Vec<Row>,
}

impl OperationParametersReport {
	pub fn new(properties: &Properties) -> Self {
		let mut base = ReportBase::new("OperationParametersReport", properties);
		base.set_default("TITLE", "Supported ${OBJECTS.KIND}");
		base.set_default("OBJECTS.KIND", "Coordinate Operations");
		base.set_default("FILENAME", "CoordinateOperations.html");
		Self {
			base,
			rows: Vec::new(),
		}
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Adds `operation` with one child row per parameter.
	pub fn add(&mut self, operation: &Operation) {
		let mut spaces = IndexMap::with_capacity(8);
		identifier::code_spaces(&operation.object, &mut spaces);
		let spaces: IndexSet<String> = spaces.into_keys().collect();
		let mut row = Row::new(&operation.object, &spaces);
		row.category = operation.category.clone();
		row.parameters = operation
			.parameters
			.iter()
			.map(|p| Row::new(p, &spaces))
			.collect();
		self.rows.push(row);
	}

	/// Adds every operation, notifying progress.
	pub fn add_all(&mut self, operations: &[Operation]) {
		let count = operations.len();
		for (position, operation) in operations.iter().enumerate() {
			self.base.progress(position, count);
			self.add(operation);
		}
		self.base.progress(count, count);
	}
}

struct ParameterTable<'a> {
	rows: &'a [Row],
	indentation: usize,
}

impl<'a> ParameterTable<'a> {
	/// Code spaces of every row, in order of first appearance.
	fn column_headers(&self) -> Vec<&'a str> {
		let mut headers = IndexSet::new();
		for row in self.rows {
			headers.extend(row.names.keys().map(String::as_str));
		}
		headers.into_iter().collect()
	}

	fn write_categories(&mut self, out: &mut dyn Write) -> std::io::Result<()> {
		let rows = self.rows;
		let mut previous: Option<&str> = None;
		for category in rows.iter().filter_map(|r| r.category.as_deref()) {
			if previous == Some(category) {
				continue;
			}
			if previous.is_none() {
				write_indentation(out, self.indentation)?;
				writeln!(out, "<p>Content:</p>")?;
				write_indentation(out, self.indentation)?;
				writeln!(out, "<ul>")?;
				self.indentation += INDENT;
			}
			write_indentation(out, self.indentation)?;
			writeln!(out, "<li><a href=\"#{}\">{category}</a></li>", anchor(category))?;
			previous = Some(category);
		}
		if previous.is_some() {
			self.indentation -= INDENT;
			write_indentation(out, self.indentation)?;
			writeln!(out, "</ul>")?;
		}
		Ok(())
	}

	fn write_table(&mut self, out: &mut dyn Write) -> std::io::Result<()> {
		write_indentation(out, self.indentation)?;
		writeln!(out, "<table cellspacing=\"0\" cellpadding=\"0\">")?;
		self.indentation += INDENT;
		let code_spaces = self.column_headers();
		let mut previous: Option<&str> = None;
		let mut write_header = true;
		let rows = self.rows;
		for row in rows {
			if let Some(category) = row.category.as_deref()
				&& previous != Some(category)
			{
				write_indentation(out, self.indentation)?;
				writeln!(
					out,
					"<tr class=\"sectionHead\"><th colspan=\"{}\" id=\"{}\">{category}</th></tr>",
					code_spaces.len(),
					anchor(category)
				)?;
				write_header = true;
				previous = Some(category);
			}
			if write_header {
				write_indentation(out, self.indentation)?;
				out.write_all(b"<tr class=\"sectionTail\">")?;
				for cs in &code_spaces {
					write!(out, "<th>{cs}</th>")?;
				}
				writeln!(out, "</tr>")?;
				write_header = false;
			}
			write_indentation(out, self.indentation)?;
			row.write(out, &code_spaces, true, false, false)?;
			writeln!(out)?;
			let last = row.parameters.len().saturating_sub(1);
			for (i, parameter) in row.parameters.iter().enumerate() {
				write_indentation(out, self.indentation + INDENT)?;
				parameter.write(out, &code_spaces, false, i == 0, i == last)?;
				writeln!(out)?;
			}
		}
		self.indentation -= INDENT;
		write_indentation(out, self.indentation)?;
		write!(out, "</table>")
	}
}

impl ContentHook for ParameterTable<'_> {
	fn write_content(&mut self, key: &str, out: &mut dyn Write) -> Result<bool> {
		if key != "CONTENT" {
			return Ok(false);
		}
		self.indentation = 4;
		self.write_categories(out)?;
		self.write_table(out)?;
		Ok(true)
	}
}

impl Report for OperationParametersReport {
	fn base(&self) -> &ReportBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ReportBase {
		&mut self.base
	}

	fn write(&mut self, destination: &Path) -> Result<PathBuf> {
		self.rows.sort();
		let destination = self.base.to_file(destination);
		let mut table = ParameterTable {
			rows: &self.rows,
			indentation: 0,
		};
		self.base.filter(resources::OPERATION_PARAMETERS, &destination, &mut table)?;
		Ok(destination)
	}
}
