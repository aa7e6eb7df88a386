//! Per-type member collections.

use parking_lot::{Mutex, MutexGuard};

use crate::code::{Code, CodeList};
use crate::error::{Result, VocabError};

/// Lifecycle of a family inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyState {
	/// No member of the type has been registered yet.
	Uninitialized,
	/// The family exists; it is never torn down.
	Initialized,
}

/// All members of one code list type, in ordinal order.
///
/// A new family is seeded with the type's declared constants, so the constant
/// with ordinal `i` always sits at index `i`.
pub struct Family<C> {
	members: Mutex<Vec<C>>,
}

impl<C: CodeList> Family<C> {
	/// Creates a family holding the declared constants of `C`.
	pub fn new() -> Self {
		let members = C::DECLARED
			.iter()
			.enumerate()
			.map(|(ordinal, d)| C::from_code(Code::new::<C>(d.name, ordinal)))
			.collect();
		Self {
			members: Mutex::new(members),
		}
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.members.lock().len()
	}

	/// Returns true if the family has no members.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Copies the members in ordinal order.
	pub fn values(&self) -> Vec<C> {
		self.members.lock().clone()
	}

	/// Locks the family for a scan-then-append sequence.
	pub(crate) fn lock(&self) -> MutexGuard<'_, Vec<C>> {
		self.members.lock()
	}
}

impl<C: CodeList> Default for Family<C> {
	fn default() -> Self {
		Self::new()
	}
}

/// Appends a member named `name` to a locked family.
pub(crate) fn push<C: CodeList>(members: &mut Vec<C>, name: &str) -> Result<C> {
	let name = name.trim();
	if name.is_empty() {
		return Err(VocabError::CannotCreate {
			type_name: C::TYPE_NAME,
			reason: "code name is empty",
		});
	}
	if members.iter().any(|m| m.name() == name) {
		return Err(VocabError::DuplicateName {
			type_name: C::TYPE_NAME,
			name: name.to_string(),
		});
	}
	let member = C::from_code(Code::new::<C>(name, members.len()));
	members.push(member.clone());
	Ok(member)
}
