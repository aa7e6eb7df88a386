//! The type→family registry.
//!
//! # Role
//!
//! [`CodeRegistry`] owns one [`Family`] per code list type and implements the
//! find-or-define lookup that makes code lists extensible.
//!
//! # Concurrency
//!
//! Two lock levels keep unrelated code list types from serializing on each
//! other:
//!
//! - The type→family map sits behind an `RwLock` that is held only while a
//!   family reference is read or installed.
//! - Each family has its own mutex. It is never held while caller code runs:
//!   [`CodeRegistry::lookup_or_create`] scans a snapshot and appends only if
//!   the family is unchanged since that scan.
//!
//! # Invariants
//!
//! - At most one family per type. Enforced in [`CodeRegistry::family`] (double
//!   checked under the write lock) and [`CodeRegistry::associate`].
//! - At most one member per name within a family, even under concurrent
//!   lookups. Enforced by the length check before append.
//! - Ordinals are contiguous from zero in registration order. Enforced in
//!   the family append helper.

use std::any::{Any, TypeId};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::code::{CodeList, Constant};
use crate::error::{Result, VocabError};
use crate::family::{Family, FamilyState, push};
use crate::persist::ResolveSeed;

type AnyFamily = Arc<dyn Any + Send + Sync>;

/// Registry of code list families, keyed by type.
#[derive(Default)]
pub struct CodeRegistry {
	families: RwLock<FxHashMap<TypeId, AnyFamily>>,
}

fn downcast<C: CodeList>(family: &AnyFamily) -> Option<Arc<Family<C>>> {
	Arc::clone(family).downcast::<Family<C>>().ok()
}

impl CodeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Reports whether the family of `C` exists yet.
	pub fn state<C: CodeList>(&self) -> FamilyState {
		if self.families.read().contains_key(&TypeId::of::<C>()) {
			FamilyState::Initialized
		} else {
			FamilyState::Uninitialized
		}
	}

	fn installed<C: CodeList>(&self) -> Option<Arc<Family<C>>> {
		self.families
			.read()
			.get(&TypeId::of::<C>())
			.and_then(downcast::<C>)
	}

	/// Returns the family of `C`, initializing it with the declared constants
	/// on first use.
	pub fn family<C: CodeList>(&self) -> Arc<Family<C>> {
		if let Some(family) = self.installed::<C>() {
			return family;
		}
		let mut map = self.families.write();
		// Another thread may have won the race between the two locks.
		if let Some(family) = map.get(&TypeId::of::<C>()).and_then(downcast::<C>) {
			return family;
		}
		let family = Arc::new(Family::<C>::new());
		map.insert(TypeId::of::<C>(), family.clone());
		debug!(
			code_list = C::TYPE_NAME,
			constants = C::DECLARED.len(),
			"initialized code list family"
		);
		family
	}

	/// Associates `family` with `C`.
	///
	/// Succeeds if `C` has no family yet, or if `family` is the very one
	/// already stored.
	pub fn associate<C: CodeList>(&self, family: &Arc<Family<C>>) -> Result<()> {
		let mut map = self.families.write();
		match map.get(&TypeId::of::<C>()) {
			None => {
				map.insert(TypeId::of::<C>(), family.clone());
				debug!(code_list = C::TYPE_NAME, "associated code list family");
				Ok(())
			}
			Some(existing) => match downcast::<C>(existing) {
				Some(existing) if Arc::ptr_eq(&existing, family) => Ok(()),
				_ => Err(VocabError::FamilyAlreadyAssociated {
					type_name: C::TYPE_NAME,
				}),
			},
		}
	}

	/// Adds a member named `name` to `family`, associating the family with
	/// `C` if needed.
	pub fn register<C: CodeList>(&self, name: &str, family: &Arc<Family<C>>) -> Result<C> {
		self.associate(family)?;
		let mut members = family.lock();
		let code = push(&mut members, name)?;
		debug!(code = %code.code(), "registered code");
		Ok(code)
	}

	/// Returns the first member accepted by `accept`, in ordinal order.
	///
	/// On a miss, a member named `name_if_absent` is created and registered,
	/// unless no name is given or `C` is closed, in which case `Ok(None)` is
	/// returned.
	///
	/// `accept` runs on a snapshot with the family unlocked, so it may call
	/// back into the registry. A member is appended only if the family has
	/// not grown since the last scan; otherwise the newcomers are scanned
	/// first. Concurrent callers asking for the same name therefore get the
	/// same member.
	pub fn lookup_or_create<C, F>(&self, mut accept: F, name_if_absent: Option<&str>) -> Result<Option<C>>
	where
		C: CodeList,
		F: FnMut(&C) -> bool,
	{
		let family = self.family::<C>();
		let mut scanned = 0;
		loop {
			let snapshot: Vec<C> = family.lock()[scanned..].to_vec();
			if let Some(found) = snapshot.iter().find(|m| accept(*m)) {
				return Ok(Some(found.clone()));
			}
			scanned += snapshot.len();
			let Some(name) = name_if_absent else {
				return Ok(None);
			};
			if !C::EXTENSIBLE {
				trace!(code_list = C::TYPE_NAME, name, "closed code list, not creating");
				return Ok(None);
			}
			let mut members = family.lock();
			if members.len() != scanned {
				trace!(code_list = C::TYPE_NAME, name, "family grew during lookup, rescanning");
				continue;
			}
			let code = push(&mut members, name)?;
			debug!(code = %code.code(), ordinal = code.ordinal(), "created code on lookup");
			return Ok(Some(code));
		}
	}

	/// Finds the member named `name`, creating it if the code list is
	/// extensible.
	pub fn value_of<C: CodeList>(&self, name: &str) -> Result<C> {
		let name = name.trim();
		self.lookup_or_create(|m: &C| m.name() == name, Some(name))?
			.ok_or_else(|| VocabError::NotExtensible {
				type_name: C::TYPE_NAME,
				name: name.to_string(),
			})
	}

	/// Finds the member named `name` without creating anything.
	pub fn find<C: CodeList>(&self, name: &str) -> Option<C> {
		let name = name.trim();
		// Without a fallback name, lookup never creates and cannot fail.
		self.lookup_or_create(|m: &C| m.name() == name, None)
			.ok()
			.flatten()
	}

	/// Resolves a declared constant.
	pub fn get<C: CodeList>(&self, constant: Constant<C>) -> C {
		let family = self.family::<C>();
		let members = family.lock();
		// Families are seeded with every declared constant at its ordinal.
		members[constant.ordinal()].clone()
	}

	/// All members of `C` in ordinal order.
	pub fn values<C: CodeList>(&self) -> Vec<C> {
		self.family::<C>().values()
	}

	/// Re-interns a member read back from its persisted form.
	///
	/// Returns the registered member with the same name when there is one;
	/// otherwise registers a new member with that name.
	pub fn resolve<C: CodeList>(&self, name: &str) -> Result<C> {
		let name = name.trim();
		let family = self.family::<C>();
		let mut members = family.lock();
		if let Some(found) = members.iter().find(|m| m.name() == name) {
			trace!(code = %found.code(), "re-interned persisted code");
			return Ok(found.clone());
		}
		if !C::EXTENSIBLE {
			return Err(VocabError::NotExtensible {
				type_name: C::TYPE_NAME,
				name: name.to_string(),
			});
		}
		let code = push(&mut members, name)?;
		debug!(code = %code.code(), "registered persisted code");
		Ok(code)
	}

	/// A [`serde::de::DeserializeSeed`] that re-interns through this registry.
	pub fn seed<C: CodeList>(&self) -> ResolveSeed<'_, C> {
		ResolveSeed::new(self)
	}
}

#[cfg(test)]
mod tests;
