//! Code list declaration macro.

/// Declares a code list type with its compile-time constants.
///
/// Each constant becomes an associated [`Constant`](crate::Constant) resolved
/// through [`CodeRegistry::get`](crate::CodeRegistry::get). The optional
/// string after a constant is its identifier in the originating standard.
/// Prefixing `struct` with `closed` declares a code list that never grows
/// past its constants.
///
/// ```
/// use geoapi_vocab::{CodeList, CodeRegistry, code_list};
///
/// code_list! {
/// 	/// Kinds of fruit.
/// 	pub struct Fruit: "FruitCode" {
/// 		APPLE = "apple",
/// 		PEAR,
/// 	}
/// }
///
/// let registry = CodeRegistry::new();
/// let apple = registry.get(Fruit::APPLE);
/// assert_eq!(apple.identifier(), Some("apple"));
/// assert_eq!(registry.get(Fruit::PEAR).ordinal(), 1);
/// ```
#[macro_export]
macro_rules! code_list {
	(@opt $lit:literal) => { Some($lit) };
	(@opt) => { None };

	(
		@impl $extensible:literal;
		$(#[$meta:meta])*
		$vis:vis struct $ty:ident $(: $type_id:literal)? {
			$(
				$(#[$kmeta:meta])*
				$konst:ident $(= $ident:literal)?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, Hash)]
		$vis struct $ty($crate::Code);

		$crate::__private::paste! {
			#[allow(non_camel_case_types, dead_code)]
			enum [<$ty Ordinal>] {
				$($konst),*
			}

			impl $ty {
				$(
					$(#[$kmeta])*
					pub const $konst: $crate::Constant<$ty> =
						$crate::Constant::new([<$ty Ordinal>]::$konst as usize, stringify!($konst));
				)*
			}
		}

		impl $crate::CodeList for $ty {
			const TYPE_NAME: &'static str = stringify!($ty);
			const IDENTIFIER: Option<&'static str> = $crate::code_list!(@opt $($type_id)?);
			const EXTENSIBLE: bool = $extensible;
			const DECLARED: &'static [$crate::Declared] = &[
				$($crate::Declared::new(stringify!($konst), $crate::code_list!(@opt $($ident)?))),*
			];

			fn from_code(code: $crate::Code) -> Self {
				Self(code)
			}

			fn code(&self) -> &$crate::Code {
				&self.0
			}
		}

		impl PartialOrd for $ty {
			fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $ty {
			fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
				self.0.total_cmp(&other.0)
			}
		}

		impl ::std::fmt::Debug for $ty {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::std::fmt::Debug::fmt(&self.0, f)
			}
		}

		impl ::std::fmt::Display for $ty {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::std::fmt::Display::fmt(&self.0, f)
			}
		}

		impl $crate::__private::serde::Serialize for $ty {
			fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				$crate::__private::serde::Serialize::serialize(&self.0, serializer)
			}
		}
	};

	($(#[$meta:meta])* $vis:vis closed struct $($rest:tt)*) => {
		$crate::code_list!(@impl false; $(#[$meta])* $vis struct $($rest)*);
	};

	($(#[$meta:meta])* $vis:vis struct $($rest:tt)*) => {
		$crate::code_list!(@impl true; $(#[$meta])* $vis struct $($rest)*);
	};
}
