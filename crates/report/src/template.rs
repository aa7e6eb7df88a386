//! `${KEY}` template substitution.
//!
//! # Role
//!
//! Templates are copied line by line. Every `${KEY}` is replaced by the value
//! of `KEY` in the [`Properties`], itself expanded recursively, or failing
//! that by computed content from a [`ContentHook`]. A key resolved by neither
//! aborts rendering with [`ReportError::MissingProperty`].
//!
//! # Invariants
//!
//! - A `${` without a closing `}` on the same line fails the whole render and
//!   names the line (see `test_unterminated_placeholder_names_line`).
//! - A property whose expansion reaches itself again is an error, not a
//!   stack overflow. Chains of distinct properties expand to any depth.

use std::io::Write;

use tracing::trace;

use crate::error::{ReportError, Result};
use crate::properties::Properties;

const KEY_PREFIX: &str = "${";
const KEY_SUFFIX: char = '}';

/// Source of computed sections, such as generated tables.
pub trait ContentHook {
	/// Writes the content for `key`, or returns `Ok(false)` if `key` is not
	/// computed by this hook.
	fn write_content(&mut self, key: &str, out: &mut dyn Write) -> Result<bool>;
}

/// Hook that computes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoContent;

impl ContentHook for NoContent {
	fn write_content(&mut self, _key: &str, _out: &mut dyn Write) -> Result<bool> {
		Ok(false)
	}
}

/// Renders templates against a property set and an optional content hook.
pub struct Renderer<'a> {
	properties: &'a Properties,
	hook: &'a mut dyn ContentHook,
	/// Keys whose values are being expanded, outermost first.
	expanding: Vec<String>,
}

impl<'a> Renderer<'a> {
	pub fn new(properties: &'a Properties, hook: &'a mut dyn ContentHook) -> Self {
		Self {
			properties,
			hook,
			expanding: Vec::new(),
		}
	}

	/// Copies `text` to `out`, substituting placeholders.
	///
	/// `name` only serves error messages.
	pub fn render(&mut self, name: &str, text: &str, out: &mut dyn Write) -> Result<()> {
		for (index, line) in text.lines().enumerate() {
			if !self.write_line(line, out)? {
				return Err(ReportError::UnterminatedPlaceholder {
					template: name.to_string(),
					line: index + 1,
					text: line.to_string(),
				});
			}
			out.write_all(b"\n")?;
		}
		Ok(())
	}

	/// Fully expanded value of `key`.
	pub fn property(&mut self, key: &str) -> Result<String> {
		let mut buffer = Vec::new();
		self.write_value(key, &mut buffer)?;
		String::from_utf8(buffer)
			.map_err(|_| ReportError::Config(format!("property {key} is not valid UTF-8")))
	}

	/// Writes `line` with placeholders replaced. Returns `false` on an
	/// unterminated placeholder.
	fn write_line(&mut self, line: &str, out: &mut dyn Write) -> Result<bool> {
		let mut rest = line;
		while let Some(start) = rest.find(KEY_PREFIX) {
			out.write_all(rest[..start].as_bytes())?;
			let after = &rest[start + KEY_PREFIX.len()..];
			let Some(stop) = after.find(KEY_SUFFIX) else {
				return Ok(false);
			};
			self.write_value(after[..stop].trim(), out)?;
			rest = &after[stop + 1..];
		}
		out.write_all(rest.as_bytes())?;
		Ok(true)
	}

	fn write_value(&mut self, key: &str, out: &mut dyn Write) -> Result<()> {
		let properties = self.properties;
		if let Some(value) = properties.get(key) {
			if self.expanding.iter().any(|k| k == key) {
				return Err(ReportError::RecursiveProperty(key.to_string()));
			}
			trace!(key, depth = self.expanding.len(), "expanding property");
			self.expanding.push(key.to_string());
			let terminated = self.write_line(value, out);
			self.expanding.pop();
			if !terminated? {
				return Err(ReportError::UnterminatedInProperty {
					key: key.to_string(),
					value: value.to_string(),
				});
			}
			return Ok(());
		}
		if self.hook.write_content(key, out)? {
			return Ok(());
		}
		Err(ReportError::MissingProperty(key.to_string()))
	}
}

/// Renders `text` with `properties` alone.
pub fn render_str(text: &str, properties: &Properties) -> Result<String> {
	let mut hook = NoContent;
	let mut out = Vec::with_capacity(text.len());
	Renderer::new(properties, &mut hook).render("<string>", text, &mut out)?;
	String::from_utf8(out).map_err(|_| ReportError::Config("rendered text is not valid UTF-8".into()))
}
