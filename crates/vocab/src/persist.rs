//! Persisted form of code list members.
//!
//! A member serializes as its name alone. Reading it back goes through
//! [`ResolveSeed`], which hands the name to [`CodeRegistry::resolve`] so the
//! result is the canonical registered member rather than a detached copy.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, Deserializer, Visitor};

use crate::code::CodeList;
use crate::registry::CodeRegistry;

/// Deserializes a member of `C` and re-interns it through a registry.
pub struct ResolveSeed<'a, C> {
	registry: &'a CodeRegistry,
	_marker: PhantomData<fn() -> C>,
}

impl<'a, C> ResolveSeed<'a, C> {
	pub(crate) fn new(registry: &'a CodeRegistry) -> Self {
		Self {
			registry,
			_marker: PhantomData,
		}
	}
}

impl<'de, C: CodeList> DeserializeSeed<'de> for ResolveSeed<'_, C> {
	type Value = C;

	fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<C, D::Error> {
		deserializer.deserialize_str(NameVisitor {
			registry: self.registry,
			_marker: PhantomData,
		})
	}
}

struct NameVisitor<'a, C> {
	registry: &'a CodeRegistry,
	_marker: PhantomData<fn() -> C>,
}

impl<'de, C: CodeList> Visitor<'de> for NameVisitor<'_, C> {
	type Value = C;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "the name of a {} code", C::TYPE_NAME)
	}

	fn visit_str<E: de::Error>(self, name: &str) -> Result<C, E> {
		self.registry.resolve(name).map_err(E::custom)
	}
}
