//! Extensible controlled vocabularies.
//!
//! A code list behaves like an enum whose set of values is open: the
//! constants declared at compile time are always present, and new members can
//! be defined at runtime by name. Membership lives in a [`CodeRegistry`]
//! owned by the application rather than in global state.
//!
//! ```
//! use geoapi_vocab::{AxisDirection, CodeList, CodeRegistry};
//!
//! let registry = CodeRegistry::new();
//! let north = registry.get(AxisDirection::NORTH);
//! assert_eq!(north.identifier(), Some("north"));
//!
//! // Unknown names are defined on first lookup and interned afterwards.
//! let custom = registry.value_of::<AxisDirection>("ALONG_TRACK").unwrap();
//! assert_eq!(custom, registry.value_of::<AxisDirection>("ALONG_TRACK").unwrap());
//! assert_eq!(custom.ordinal(), AxisDirection::DECLARED.len());
//! ```

mod builtins;
mod code;
pub mod error;
mod family;
mod macros;
mod persist;
mod registry;

pub use builtins::{AxisDirection, CharacterSet, PresentationForm, Role, VerticalDatumType};
pub use code::{Code, CodeList, Constant, Declared};
pub use error::{Result, VocabError};
pub use family::{Family, FamilyState};
pub use persist::ResolveSeed;
pub use registry::CodeRegistry;

#[doc(hidden)]
pub mod __private {
	pub use paste::paste;
	pub use serde;
}
