//! Natural ordering of codes and identifiers.
//!
//! Codes are compared after replacing underscores by spaces and trimming.
//! Empty strings come first, then purely numeric strings in numeric order,
//! then everything else case-insensitively with a case-sensitive tie break.
//! A missing value sorts after any present one.

use std::cmp::Ordering;

use crate::identifier::Identifier;

/// Separator of compound codes such as `EPSG:4326`.
pub const SEPARATOR: char = ':';

/// Compares two optional codes.
pub fn compare(a: Option<&str>, b: Option<&str>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) => compare_str(a, b),
	}
}

/// Compares two codes.
pub fn compare_str(a: &str, b: &str) -> Ordering {
	if a == b {
		return Ordering::Equal;
	}
	let a = normalize(a);
	let b = normalize(b);

	match (a.is_empty(), b.is_empty()) {
		(true, true) => return Ordering::Equal,
		(true, false) => return Ordering::Less,
		(false, true) => return Ordering::Greater,
		(false, false) => {}
	}

	// Numbers before any alphabetic string.
	match (is_numeric(&a), is_numeric(&b)) {
		(true, true) => return compare_numeric(&a, &b),
		(true, false) => return Ordering::Less,
		(false, true) => return Ordering::Greater,
		(false, false) => {}
	}

	compare_ignore_case(&a, &b).then_with(|| a.cmp(&b))
}

/// Compares compound codes element by element; on a common prefix the
/// shorter one comes first.
pub fn compare_codes<S: AsRef<str>>(a: &[S], b: &[S]) -> Ordering {
	a.iter()
		.zip(b)
		.map(|(x, y)| compare_str(x.as_ref(), y.as_ref()))
		.find(|c| c.is_ne())
		.unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compares two colon-delimited codes component-wise.
pub fn compare_compound(a: &str, b: &str) -> Ordering {
	let a: Vec<&str> = a.split(SEPARATOR).collect();
	let b: Vec<&str> = b.split(SEPARATOR).collect();
	compare_codes(&a, &b)
}

/// Compares identifiers by code, then code space, then version.
pub fn compare_identifiers(a: Option<&Identifier>, b: Option<&Identifier>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) => compare(a.code(), b.code())
			.then_with(|| compare(a.code_space(), b.code_space()))
			.then_with(|| compare(a.version(), b.version())),
	}
}

fn normalize(s: &str) -> String {
	s.replace('_', " ").trim().to_string()
}

/// All digits, with an optional sign as first character.
fn is_numeric(s: &str) -> bool {
	let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Exact comparison of two numeric strings of any length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
	let (neg_a, mag_a) = split_sign(a);
	let (neg_b, mag_b) = split_sign(b);
	match (neg_a, neg_b) {
		(false, true) => Ordering::Greater,
		(true, false) => Ordering::Less,
		(false, false) => compare_magnitude(mag_a, mag_b),
		(true, true) => compare_magnitude(mag_b, mag_a),
	}
}

/// Sign and magnitude without leading zeros. Negative zero is zero.
fn split_sign(s: &str) -> (bool, &str) {
	let (negative, digits) = match s.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, s.strip_prefix('+').unwrap_or(s)),
	};
	let magnitude = digits.trim_start_matches('0');
	(negative && !magnitude.is_empty(), magnitude)
}

fn compare_magnitude(a: &str, b: &str) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
	let a = a.chars().flat_map(char::to_lowercase);
	let b = b.chars().flat_map(char::to_lowercase);
	a.cmp(b)
}
