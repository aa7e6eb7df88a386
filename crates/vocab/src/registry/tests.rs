use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use crate::{
	AxisDirection, CodeList, CodeRegistry, Family, FamilyState, Role, VerticalDatumType,
	VocabError, code_list,
};

code_list! {
	/// Closed list used to exercise the non-extensible paths.
	closed struct Switch {
		ON = "on",
		OFF = "off",
	}
}

code_list! {
	struct Bare {}
}

/// The family is created on first access and seeded with the declared constants.
#[test]
fn test_family_initialized_on_first_use() {
	let registry = CodeRegistry::new();
	assert_eq!(registry.state::<AxisDirection>(), FamilyState::Uninitialized);

	let values = registry.values::<AxisDirection>();
	assert_eq!(registry.state::<AxisDirection>(), FamilyState::Initialized);
	assert_eq!(values.len(), AxisDirection::DECLARED.len());
	assert_eq!(values[1].name(), "NORTH");

	// Unrelated types stay untouched.
	assert_eq!(registry.state::<Role>(), FamilyState::Uninitialized);
}

#[test]
fn test_constants_resolve_to_seeded_members() {
	let registry = CodeRegistry::new();
	let north = registry.get(AxisDirection::NORTH);
	assert_eq!(north.name(), "NORTH");
	assert_eq!(north.ordinal(), AxisDirection::NORTH.ordinal());
	assert_eq!(north, registry.get(AxisDirection::NORTH));
	assert_eq!(Some(north), registry.find::<AxisDirection>("NORTH"));
}

/// Looking up the same name twice yields the identical member.
#[test]
fn test_value_of_is_idempotent() {
	let registry = CodeRegistry::new();
	let a = registry.value_of::<AxisDirection>("ALONG_TRACK").unwrap();
	let b = registry.value_of::<AxisDirection>("ALONG_TRACK").unwrap();
	assert_eq!(a, b);
	assert_eq!(a.ordinal(), AxisDirection::DECLARED.len());
	assert_eq!(registry.values::<AxisDirection>().len(), AxisDirection::DECLARED.len() + 1);
}

#[test]
fn test_value_of_trims_names() {
	let registry = CodeRegistry::new();
	let east = registry.value_of::<AxisDirection>("  EAST ").unwrap();
	assert_eq!(east, registry.get(AxisDirection::EAST));
}

#[test]
fn test_ordinals_are_contiguous() {
	let registry = CodeRegistry::new();
	for name in ["A", "B", "C"] {
		registry.value_of::<VerticalDatumType>(name).unwrap();
	}
	let values = registry.values::<VerticalDatumType>();
	for (i, value) in values.iter().enumerate() {
		assert_eq!(value.ordinal(), i);
	}
	assert_eq!(values.last().unwrap().name(), "C");
}

#[test]
fn test_lookup_without_fallback_creates_nothing() {
	let registry = CodeRegistry::new();
	let found = registry
		.lookup_or_create(|c: &Role| c.name() == "JANITOR", None)
		.unwrap();
	assert!(found.is_none());
	assert_eq!(registry.values::<Role>().len(), Role::DECLARED.len());
}

/// The predicate decides the match; the fallback name only matters on a miss.
#[test]
fn test_lookup_by_predicate() {
	let registry = CodeRegistry::new();
	let found = registry
		.lookup_or_create(|c: &Role| c.identifier() == Some("pointOfContact"), Some("unused"))
		.unwrap()
		.unwrap();
	assert_eq!(found, registry.get(Role::POINT_OF_CONTACT));
	assert!(registry.find::<Role>("unused").is_none());
}

/// Runs `f` on its own thread and fails instead of hanging if it deadlocks.
fn within_timeout<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let _ = tx.send(f());
	});
	rx.recv_timeout(Duration::from_secs(5))
		.expect("lookup did not finish; family lock held across predicate")
}

/// A predicate may query the registry for its own type.
#[test]
fn test_lookup_predicate_may_reenter_registry() {
	let registry = Arc::new(CodeRegistry::new());
	let inner = Arc::clone(&registry);
	let found = within_timeout(move || {
		registry
			.lookup_or_create(
				|c: &AxisDirection| inner.find::<AxisDirection>("NORTH").is_some_and(|n| &n == c),
				Some("X"),
			)
			.unwrap()
	});
	assert_eq!(found.unwrap().name(), "NORTH");
}

/// A member added by the predicate itself is found on rescan, not duplicated.
#[test]
fn test_lookup_rescans_members_added_during_scan() {
	let registry = Arc::new(CodeRegistry::new());
	let (found, janitor) = within_timeout({
		let registry = Arc::clone(&registry);
		move || {
			let inner = Arc::clone(&registry);
			let mut created = None;
			let found = registry
				.lookup_or_create(
					|c: &Role| {
						if created.is_none() {
							created = Some(inner.value_of::<Role>("JANITOR").unwrap());
						}
						c.name() == "JANITOR"
					},
					Some("JANITOR"),
				)
				.unwrap();
			(found, created)
		}
	});
	assert_eq!(found, janitor);
	assert_eq!(registry.values::<Role>().len(), Role::DECLARED.len() + 1);
}

#[test]
fn test_closed_list_refuses_creation() {
	let registry = CodeRegistry::new();
	let found = registry
		.lookup_or_create(|c: &Switch| c.name() == "DIMMED", Some("DIMMED"))
		.unwrap();
	assert!(found.is_none());

	let err = registry.value_of::<Switch>("DIMMED").unwrap_err();
	assert_eq!(
		err,
		VocabError::NotExtensible {
			type_name: "Switch",
			name: "DIMMED".to_string(),
		}
	);
	assert_eq!(registry.value_of::<Switch>("ON").unwrap(), registry.get(Switch::ON));
}

#[test]
fn test_empty_name_cannot_be_created() {
	let registry = CodeRegistry::new();
	let err = registry.value_of::<AxisDirection>("   ").unwrap_err();
	assert!(matches!(err, VocabError::CannotCreate { type_name: "AxisDirection", .. }));
}

#[test]
fn test_register_into_new_family() {
	let registry = CodeRegistry::new();
	let family = Arc::new(Family::<Bare>::new());
	assert!(family.is_empty());

	let first = registry.register("FIRST", &family).unwrap();
	let second = registry.register("SECOND", &family).unwrap();
	assert_eq!(first.ordinal(), 0);
	assert_eq!(second.ordinal(), 1);
	assert_eq!(registry.state::<Bare>(), FamilyState::Initialized);
	assert_eq!(registry.find::<Bare>("SECOND"), Some(second));
}

#[test]
fn test_register_rejects_foreign_family() {
	let registry = CodeRegistry::new();
	let family = registry.family::<Role>();
	registry.register("JANITOR", &family).unwrap();

	let other = Arc::new(Family::<Role>::new());
	let err = registry.register("PLUMBER", &other).unwrap_err();
	assert_eq!(err, VocabError::FamilyAlreadyAssociated { type_name: "Role" });
	assert!(registry.find::<Role>("PLUMBER").is_none());
	assert!(other.values().iter().all(|r| r.name() != "PLUMBER"));
}

#[test]
fn test_register_rejects_duplicate_name() {
	let registry = CodeRegistry::new();
	let family = registry.family::<Role>();
	let err = registry.register("OWNER", &family).unwrap_err();
	assert_eq!(
		err,
		VocabError::DuplicateName {
			type_name: "Role",
			name: "OWNER".to_string(),
		}
	);
}

#[test]
fn test_identifier_only_for_declared_constants() {
	let registry = CodeRegistry::new();
	let depth = registry.get(VerticalDatumType::DEPTH);
	assert_eq!(depth.identifier(), Some("depth"));
	assert_eq!(depth.names(), vec!["DEPTH", "depth"]);

	let custom = registry.value_of::<VerticalDatumType>("TIDAL").unwrap();
	assert_eq!(custom.identifier(), None);
	// Cached result stays absent.
	assert_eq!(custom.identifier(), None);
	assert_eq!(custom.names(), vec!["TIDAL"]);
}

#[test]
fn test_codes_order_by_ordinal() {
	let registry = CodeRegistry::new();
	let north = registry.get(AxisDirection::NORTH);
	let south = registry.get(AxisDirection::SOUTH);
	assert!(north < south);

	let mut sorted = vec![south.clone(), north.clone()];
	sorted.sort();
	assert_eq!(sorted, vec![north, south]);
}

#[test]
fn test_cross_type_comparison_fails() {
	let registry = CodeRegistry::new();
	let north = registry.get(AxisDirection::NORTH);
	let owner = registry.get(Role::OWNER);
	let err = north.code().try_cmp(owner.code()).unwrap_err();
	assert_eq!(
		err,
		VocabError::TypeMismatch {
			left: "AxisDirection",
			right: "Role",
		}
	);
	assert!(north.code().try_cmp(registry.get(AxisDirection::UP).code()).is_ok());
}

#[test]
fn test_display() {
	let registry = CodeRegistry::new();
	assert_eq!(registry.get(Role::OWNER).to_string(), "Role[OWNER]");
	assert!(registry.get(Role::OWNER).code().is::<Role>());
}

/// Separate registries hold separate families.
#[test]
fn test_registries_are_isolated() {
	let a = CodeRegistry::new();
	let b = CodeRegistry::new();
	a.value_of::<Role>("JANITOR").unwrap();
	assert!(b.find::<Role>("JANITOR").is_none());
	assert_ne!(a.get(Role::OWNER), b.get(Role::OWNER));
}

/// Equal-ordinal members of different registries stay distinct in ordered sets.
#[test]
fn test_ordering_distinguishes_registries() {
	let a = CodeRegistry::new();
	let b = CodeRegistry::new();
	let (left, right) = (a.get(Role::OWNER), b.get(Role::OWNER));
	assert_ne!(left.cmp(&right), std::cmp::Ordering::Equal);
	assert_eq!(left.cmp(&right), right.cmp(&left).reverse());

	let set: std::collections::BTreeSet<Role> = [left, right].into_iter().collect();
	assert_eq!(set.len(), 2);
	assert!(a.get(Role::OWNER) < a.get(Role::USER));
}
