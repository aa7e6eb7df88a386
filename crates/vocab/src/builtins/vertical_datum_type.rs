use crate::code_list;

code_list! {
	/// Type of a vertical datum.
	pub struct VerticalDatumType: "CD_VerticalDatumType" {
		/// Heights related to a geoid or other gravity-related surface.
		GEOIDAL = "geoidal",
		/// Depths measured along the direction of gravity, positive downward.
		DEPTH = "depth",
		/// Heights derived from atmospheric pressure.
		BAROMETRIC = "barometric",
		/// Surface not covered by the other types, e.g. an ellipsoid.
		OTHER_SURFACE = "other surface",
	}
}
