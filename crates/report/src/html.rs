//! Small HTML writing helpers shared by the reports.

use std::io::{self, Write};

/// Spaces added per nesting level.
pub const INDENT: usize = 2;

/// Escapes `<` and `>` and trims. Returns `None` for blank text.
pub fn escape(text: &str) -> Option<String> {
	let escaped = text.replace('<', "&lt;").replace('>', "&gt;");
	let trimmed = escaped.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Writes `indentation` spaces.
pub fn write_indentation(out: &mut dyn Write, indentation: usize) -> io::Result<()> {
	write!(out, "{:indentation$}", "")
}

/// Writes ` class="a b"` for the present classes, or nothing if none is.
pub fn write_class_attribute(out: &mut dyn Write, classes: &[Option<&str>]) -> io::Result<()> {
	let mut present = classes.iter().flatten();
	let Some(first) = present.next() else {
		return Ok(());
	};
	write!(out, " class=\"{first}")?;
	for class in present {
		write!(out, " {class}")?;
	}
	out.write_all(b"\"")
}

/// Lower-cased, space-free fragment identifier for a section title.
pub fn anchor(title: &str) -> String {
	title.to_lowercase().replace(' ', "-")
}
