use std::collections::HashSet;

use crate::{
	AxisDirection, CharacterSet, CodeList, CodeRegistry, Declared, PresentationForm, Role,
	VerticalDatumType,
};

fn assert_unique(type_name: &str, declared: &[Declared]) {
	let mut seen = HashSet::new();
	for d in declared {
		assert!(seen.insert(d.name), "{type_name} declares {} twice", d.name);
		assert!(d.identifier.is_some(), "{type_name}.{} has no identifier", d.name);
	}
}

/// Seeding relies on declared names being unique within each list.
#[test]
fn test_declared_constants_are_unique() {
	assert_unique(AxisDirection::TYPE_NAME, AxisDirection::DECLARED);
	assert_unique(CharacterSet::TYPE_NAME, CharacterSet::DECLARED);
	assert_unique(PresentationForm::TYPE_NAME, PresentationForm::DECLARED);
	assert_unique(Role::TYPE_NAME, Role::DECLARED);
	assert_unique(VerticalDatumType::TYPE_NAME, VerticalDatumType::DECLARED);
}

#[test]
fn test_type_identifiers() {
	assert_eq!(AxisDirection::IDENTIFIER, Some("CS_AxisDirection"));
	assert_eq!(Role::IDENTIFIER, Some("CI_RoleCode"));
	assert!(Role::EXTENSIBLE);
}

#[test]
fn test_character_set() {
	let registry = CodeRegistry::new();
	let utf8 = registry.get(CharacterSet::UTF_8);
	assert_eq!(utf8.name(), "UTF_8");
	assert_eq!(utf8.identifier(), Some("utf8"));
	assert_eq!(utf8.charset_name(), Some("UTF-8"));
	assert_eq!(registry.value_of::<CharacterSet>("UTF_8").unwrap(), utf8);
	assert_ne!(registry.value_of::<CharacterSet>("UTF_7").unwrap(), utf8);
	assert_eq!(registry.get(CharacterSet::EBCDIC).charset_name(), None);
}

#[test]
fn test_axis_opposites_are_symmetric() {
	let registry = CodeRegistry::new();
	for direction in registry.values::<AxisDirection>() {
		if let Some(opposite) = direction.opposite() {
			let back = registry.find::<AxisDirection>(opposite).unwrap();
			assert_eq!(back.opposite(), Some(direction.name()));
		}
	}
	assert_eq!(registry.get(AxisDirection::NORTH).opposite(), Some("SOUTH"));
	assert_eq!(registry.get(AxisDirection::GEOCENTRIC_X).opposite(), None);
}

#[test]
fn test_identifier_with_space() {
	let registry = CodeRegistry::new();
	let other = registry.get(VerticalDatumType::OTHER_SURFACE);
	assert_eq!(other.names(), vec!["OTHER_SURFACE", "other surface"]);
}
