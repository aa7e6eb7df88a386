//! Code handles and the [`CodeList`] trait.
//!
//! # Role
//!
//! A [`Code`] is the shared, immutable payload behind every member of a code
//! list: name, ordinal, and the lazily resolved standard identifier. Concrete
//! code list types are thin newtypes over [`Code`] that implement [`CodeList`],
//! usually generated by [`crate::code_list!`].
//!
//! # Invariants
//!
//! - Equality and hashing are by identity. Two handles are equal only if they
//!   point at the same registered entry.
//! - The ordinal of a declared constant equals its index in
//!   [`CodeList::DECLARED`].

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use crate::error::{Result, VocabError};

/// A code list constant declared at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declared {
	/// Programmatic name, e.g. `NORTH`.
	pub name: &'static str,
	/// Identifier in the originating standard, e.g. `north`.
	pub identifier: Option<&'static str>,
}

impl Declared {
	/// Creates a declaration.
	pub const fn new(name: &'static str, identifier: Option<&'static str>) -> Self {
		Self { name, identifier }
	}
}

/// Typed handle to a declared constant of code list `C`.
///
/// Resolved against a registry with [`crate::CodeRegistry::get`].
pub struct Constant<C> {
	ordinal: usize,
	name: &'static str,
	_marker: PhantomData<fn() -> C>,
}

impl<C> Constant<C> {
	#[doc(hidden)]
	pub const fn new(ordinal: usize, name: &'static str) -> Self {
		Self {
			ordinal,
			name,
			_marker: PhantomData,
		}
	}

	/// Ordinal of the constant within its family.
	pub const fn ordinal(&self) -> usize {
		self.ordinal
	}

	/// Programmatic name of the constant.
	pub const fn name(&self) -> &'static str {
		self.name
	}
}

impl<C> Clone for Constant<C> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C> Copy for Constant<C> {}

impl<C> fmt::Debug for Constant<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Constant")
			.field("ordinal", &self.ordinal)
			.field("name", &self.name)
			.finish()
	}
}

struct CodeEntry {
	name: Box<str>,
	ordinal: usize,
	kind: TypeId,
	type_name: &'static str,
	declared: &'static [Declared],
	/// `Some(None)` once resolved to "no identifier".
	identifier: OnceLock<Option<&'static str>>,
}

/// Shared payload of one code list member.
#[derive(Clone)]
pub struct Code(Arc<CodeEntry>);

impl Code {
	pub(crate) fn new<C: CodeList>(name: &str, ordinal: usize) -> Self {
		Self(Arc::new(CodeEntry {
			name: name.into(),
			ordinal,
			kind: TypeId::of::<C>(),
			type_name: C::TYPE_NAME,
			declared: C::DECLARED,
			identifier: OnceLock::new(),
		}))
	}

	/// Programmatic name of this code.
	pub fn name(&self) -> &str {
		&self.0.name
	}

	/// Zero-based position of this code in registration order.
	pub fn ordinal(&self) -> usize {
		self.0.ordinal
	}

	/// Simple name of the code list type this code belongs to.
	pub fn type_name(&self) -> &'static str {
		self.0.type_name
	}

	/// Returns true if this code belongs to code list `C`.
	pub fn is<C: CodeList>(&self) -> bool {
		self.0.kind == TypeId::of::<C>()
	}

	/// Identifier of this code in the originating standard.
	///
	/// Only codes declared as constants carry one. The lookup runs once per
	/// code; an absent result is cached as well.
	pub fn identifier(&self) -> Option<&'static str> {
		*self.0.identifier.get_or_init(|| {
			self.0
				.declared
				.get(self.0.ordinal)
				.filter(|d| d.name == self.name())
				.and_then(|d| d.identifier)
		})
	}

	/// The name, followed by the identifier when it exists and differs.
	pub fn names(&self) -> Vec<&str> {
		let mut names = vec![self.name()];
		if let Some(id) = self.identifier()
			&& id != self.name()
		{
			names.push(id);
		}
		names
	}

	/// Orders by ordinal, breaking ties by identity.
	///
	/// Ties only occur between codes owned by different registries; those
	/// get an arbitrary but consistent order so that `Equal` implies `==`.
	pub fn total_cmp(&self, other: &Code) -> Ordering {
		self.ordinal()
			.cmp(&other.ordinal())
			.then_with(|| Arc::as_ptr(&self.0).cmp(&Arc::as_ptr(&other.0)))
	}

	/// Compares by ordinal, refusing codes of different code list types.
	pub fn try_cmp(&self, other: &Code) -> Result<Ordering> {
		if self.0.kind != other.0.kind {
			return Err(VocabError::TypeMismatch {
				left: self.type_name(),
				right: other.type_name(),
			});
		}
		Ok(self.ordinal().cmp(&other.ordinal()))
	}
}

impl PartialEq for Code {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for Code {}

impl Hash for Code {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::ptr::hash(Arc::as_ptr(&self.0), state);
	}
}

impl fmt::Debug for Code {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Code")
			.field("type", &self.type_name())
			.field("name", &self.name())
			.field("ordinal", &self.ordinal())
			.finish()
	}
}

impl fmt::Display for Code {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}[{}]", self.type_name(), self.name())
	}
}

impl serde::Serialize for Code {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}

/// A controlled vocabulary whose members can be extended at runtime.
///
/// Implementors are cheap handles around a [`Code`]. The registry builds new
/// members through [`CodeList::from_code`], which stands in for a constructor.
pub trait CodeList: Clone + Eq + Hash + Send + Sync + 'static {
	/// Simple type name used in messages and display output.
	const TYPE_NAME: &'static str;

	/// Identifier of the code list type in the originating standard.
	const IDENTIFIER: Option<&'static str> = None;

	/// Whether names absent from the family may be created on lookup.
	const EXTENSIBLE: bool = true;

	/// Constants registered when the family is first initialized, in ordinal order.
	const DECLARED: &'static [Declared];

	/// Wraps a freshly registered code.
	fn from_code(code: Code) -> Self;

	/// The shared payload of this member.
	fn code(&self) -> &Code;

	/// Programmatic name.
	fn name(&self) -> &str {
		self.code().name()
	}

	/// Position in registration order.
	fn ordinal(&self) -> usize {
		self.code().ordinal()
	}

	/// Standard identifier, if declared.
	fn identifier(&self) -> Option<&'static str> {
		self.code().identifier()
	}

	/// Name and, when distinct, identifier.
	fn names(&self) -> Vec<&str> {
		self.code().names()
	}
}
