//! Subcommand implementations, written against plain readers and writers.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geoapi_report::{
	AuthorityCodes, AuthorityCodesReport, LogProgress, Operation, OperationParametersReport, Properties, Report,
	ReportSet, compare, render_str,
};
use geoapi_vocab::{
	AxisDirection, CharacterSet, CodeList, CodeRegistry, PresentationForm, Role, VerticalDatumType,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::CodeListKind;

/// Layers the `--config` file and then each `--set` assignment.
pub fn load_properties(config: Option<&Path>, assignments: &[String]) -> Result<Properties> {
	let mut properties = match config {
		Some(path) => Properties::from_toml_file(path)?,
		None => Properties::new(),
	};
	for assignment in assignments {
		properties.set_assignment(assignment)?;
	}
	Ok(properties)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn render(properties: &Properties, template: &Path, out: &mut dyn Write) -> Result<()> {
	let text = fs::read_to_string(template).with_context(|| format!("reading {}", template.display()))?;
	let rendered = render_str(&text, properties).with_context(|| format!("rendering {}", template.display()))?;
	out.write_all(rendered.as_bytes())?;
	Ok(())
}

pub fn authority_codes(properties: &Properties, input: &Path, output: &Path) -> Result<PathBuf> {
	let codes: AuthorityCodes = read_json(input)?;
	let mut report = AuthorityCodesReport::new(properties);
	report.add_all(&codes);
	Ok(report.write(output)?)
}

pub fn parameters(properties: &Properties, input: &Path, output: &Path) -> Result<PathBuf> {
	let operations: Vec<Operation> = read_json(input)?;
	let mut report = OperationParametersReport::new(properties);
	report.add_all(&operations);
	Ok(report.write(output)?)
}

pub fn reports(
	properties: &Properties,
	authority_codes: &[PathBuf],
	parameters: &[PathBuf],
	output: &Path,
) -> Result<Vec<PathBuf>> {
	let mut set = ReportSet::new(LogProgress);
	for input in authority_codes {
		let codes: AuthorityCodes = read_json(input)?;
		let mut report = AuthorityCodesReport::new(properties);
		set.track(&mut report);
		report.add_all(&codes);
		set.push(report);
	}
	for input in parameters {
		let operations: Vec<Operation> = read_json(input)?;
		let mut report = OperationParametersReport::new(properties);
		set.track(&mut report);
		report.add_all(&operations);
		set.push(report);
	}
	Ok(set.write(output)?)
}

/// Prints the non-blank input lines in natural order.
pub fn sort(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
	let mut codes = Vec::new();
	for line in input.lines() {
		let line = line?;
		if !line.trim().is_empty() {
			codes.push(line);
		}
	}
	codes.sort_by(|a, b| compare::compare_compound(a, b));
	for code in codes {
		writeln!(out, "{code}")?;
	}
	Ok(())
}

pub fn codes(registry: &CodeRegistry, list: CodeListKind, names: &[String], out: &mut dyn Write) -> Result<()> {
	match list {
		CodeListKind::AxisDirection => list_codes::<AxisDirection>(registry, names, out),
		CodeListKind::VerticalDatumType => list_codes::<VerticalDatumType>(registry, names, out),
		CodeListKind::Role => list_codes::<Role>(registry, names, out),
		CodeListKind::PresentationForm => list_codes::<PresentationForm>(registry, names, out),
		CodeListKind::CharacterSet => list_codes::<CharacterSet>(registry, names, out),
	}
}

fn list_codes<C: CodeList>(registry: &CodeRegistry, names: &[String], out: &mut dyn Write) -> Result<()> {
	for name in names {
		let code: C = registry.value_of(name)?;
		debug!(code = %code.code(), "resolved");
	}
	writeln!(out, "# {}", C::IDENTIFIER.unwrap_or(C::TYPE_NAME))?;
	for code in registry.values::<C>() {
		writeln!(out, "{}\t{}\t{}", code.ordinal(), code.name(), code.identifier().unwrap_or("-"))?;
	}
	Ok(())
}
