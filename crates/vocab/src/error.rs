//! Error types for code list registration and lookup.

use thiserror::Error;

/// Errors raised by the code list registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
	/// A second family was offered for a type that already owns one.
	#[error("{type_name} is already associated with a different family")]
	FamilyAlreadyAssociated {
		/// Name of the code list type.
		type_name: &'static str,
	},

	/// A code with the same name is already a member of the family.
	#[error("duplicated value: {type_name}[{name}]")]
	DuplicateName {
		/// Name of the code list type.
		type_name: &'static str,
		/// The offending code name.
		name: String,
	},

	/// A new code could not be constructed.
	#[error("cannot create code of type {type_name}: {reason}")]
	CannotCreate {
		/// Name of the code list type.
		type_name: &'static str,
		/// Why construction was refused.
		reason: &'static str,
	},

	/// The code list is closed and has no member with the requested name.
	#[error("{type_name} is a closed code list without a code named {name:?}")]
	NotExtensible {
		/// Name of the code list type.
		type_name: &'static str,
		/// The requested code name.
		name: String,
	},

	/// Two codes of different code list types were compared.
	#[error("cannot compare {left} to {right}")]
	TypeMismatch {
		/// Type of the left-hand code.
		left: &'static str,
		/// Type of the right-hand code.
		right: &'static str,
	},
}

/// Result type for code list operations.
pub type Result<T, E = VocabError> = std::result::Result<T, E>;
