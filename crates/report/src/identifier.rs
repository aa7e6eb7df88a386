//! Identifiers, scoped names and the objects that carry them.
//!
//! These are read-only inputs to the reports. They deserialize from the JSON
//! documents accepted by the command line tool.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::compare::{self, SEPARATOR};

/// A code qualified by an optional code space and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identifier {
	code: Option<String>,
	code_space: Option<String>,
	version: Option<String>,
}

impl Identifier {
	/// Creates an identifier without code space nor version.
	pub fn new(code: impl Into<String>) -> Self {
		Self {
			code: Some(code.into()),
			..Self::default()
		}
	}

	/// Sets the code space.
	pub fn with_code_space(mut self, code_space: impl Into<String>) -> Self {
		self.code_space = Some(code_space.into());
		self
	}

	/// Sets the version.
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = Some(version.into());
		self
	}

	pub fn code(&self) -> Option<&str> {
		self.code.as_deref()
	}

	pub fn code_space(&self) -> Option<&str> {
		self.code_space.as_deref()
	}

	pub fn version(&self) -> Option<&str> {
		self.version.as_deref()
	}
}

impl fmt::Display for Identifier {
	/// `codeSpace:code:version`, omitting absent parts.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(cs) = &self.code_space {
			write!(f, "{cs}{SEPARATOR}")?;
		}
		f.write_str(self.code.as_deref().unwrap_or_default())?;
		if let Some(v) = &self.version {
			write!(f, "{SEPARATOR}{v}")?;
		}
		Ok(())
	}
}

impl PartialOrd for Identifier {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Identifier {
	fn cmp(&self, other: &Self) -> Ordering {
		compare::compare_identifiers(Some(self), Some(other))
	}
}

/// An alias local to a namespace, e.g. `OGC:semi_major`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopedName {
	/// Name of the namespace, absent for global names.
	#[serde(default)]
	pub scope: Option<String>,
	/// The name local to the scope.
	pub tip: String,
}

impl ScopedName {
	pub fn new(scope: impl Into<String>, tip: impl Into<String>) -> Self {
		Self {
			scope: Some(scope.into()),
			tip: tip.into(),
		}
	}
}

impl fmt::Display for ScopedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.tip)
	}
}

/// An object with a primary name, aliases and identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdentifiedObject {
	pub name: Option<Identifier>,
	pub aliases: Vec<ScopedName>,
	pub identifiers: Vec<Identifier>,
	pub remarks: Option<String>,
}

impl IdentifiedObject {
	/// Creates an object with the given primary name.
	pub fn named(name: Identifier) -> Self {
		Self {
			name: Some(name),
			..Self::default()
		}
	}

	/// Adds an alias.
	pub fn with_alias(mut self, alias: ScopedName) -> Self {
		self.aliases.push(alias);
		self
	}
}

/// Name and aliases of `object` in `code_space`, mapped to whether each is
/// the primary name.
///
/// With no code space, every name and alias is returned. A primary name keeps
/// its `true` flag even if an alias repeats it.
pub fn name_and_aliases(object: &IdentifiedObject, code_space: Option<&str>) -> IndexMap<String, bool> {
	let mut names = IndexMap::with_capacity(4);
	collect(object, code_space, false, &mut names);
	names
}

/// Adds every code space used by the name and aliases of `object`.
pub fn code_spaces(object: &IdentifiedObject, into: &mut IndexMap<String, bool>) {
	collect(object, None, true, into);
}

fn collect(
	object: &IdentifiedObject,
	code_space: Option<&str>,
	want_code_spaces: bool,
	names: &mut IndexMap<String, bool>,
) {
	if let Some(name) = &object.name
		&& code_space.is_none_or(|cs| compare::compare(Some(cs), name.code_space()).is_eq())
	{
		let key = if want_code_spaces {
			name.code_space()
		} else {
			name.code()
		};
		if let Some(key) = key {
			names.insert(key.to_string(), true);
		}
	}
	for alias in &object.aliases {
		let Some(scope) = alias.scope.as_deref() else {
			continue;
		};
		if code_space.is_some_and(|cs| compare::compare_str(cs, scope).is_ne()) {
			continue;
		}
		let key = if want_code_spaces { scope } else { alias.tip.as_str() };
		names.entry(key.to_string()).or_insert(false);
	}
}
