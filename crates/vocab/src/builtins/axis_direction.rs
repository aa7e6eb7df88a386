use crate::code_list;

code_list! {
	/// Direction of positive increments along a coordinate system axis.
	///
	/// Directions come in opposite pairs (north/south, up/down, ...); see
	/// [`AxisDirection::opposite`].
	pub struct AxisDirection: "CS_AxisDirection" {
		/// Unknown or unspecified axis orientation.
		OTHER = "CS_AxisOrientationEnum.CS_AO_Other",
		/// Axis positive direction is north.
		NORTH = "north",
		NORTH_NORTH_EAST = "northNorthEast",
		NORTH_EAST = "northEast",
		EAST_NORTH_EAST = "eastNorthEast",
		/// Axis positive direction is π/2 radians clockwise from north.
		EAST = "east",
		EAST_SOUTH_EAST = "eastSouthEast",
		SOUTH_EAST = "southEast",
		SOUTH_SOUTH_EAST = "southSouthEast",
		/// Axis positive direction is π radians clockwise from north.
		SOUTH = "south",
		SOUTH_SOUTH_WEST = "southSouthWest",
		SOUTH_WEST = "southWest",
		WEST_SOUTH_WEST = "westSouthWest",
		/// Axis positive direction is 3π/2 radians clockwise from north.
		WEST = "west",
		WEST_NORTH_WEST = "westNorthWest",
		NORTH_WEST = "northWest",
		NORTH_NORTH_WEST = "northNorthWest",
		/// Axis positive direction is up relative to gravity.
		UP = "up",
		/// Axis positive direction is down relative to gravity.
		DOWN = "down",
		/// Axis positive direction is toward the intersection of the equator and the prime meridian.
		GEOCENTRIC_X = "geocentricX",
		/// Axis positive direction is toward the intersection of the equator and 90°E.
		GEOCENTRIC_Y = "geocentricY",
		/// Axis positive direction is toward the north pole.
		GEOCENTRIC_Z = "geocentricZ",
		FUTURE = "future",
		PAST = "past",
		COLUMN_POSITIVE = "columnPositive",
		COLUMN_NEGATIVE = "columnNegative",
		ROW_POSITIVE = "rowPositive",
		ROW_NEGATIVE = "rowNegative",
		DISPLAY_RIGHT = "displayRight",
		DISPLAY_LEFT = "displayLeft",
		DISPLAY_UP = "displayUp",
		DISPLAY_DOWN = "displayDown",
	}
}

/// Opposite pairs, by name.
const OPPOSITES: &[(&str, &str)] = &[
	("NORTH", "SOUTH"),
	("NORTH_NORTH_EAST", "SOUTH_SOUTH_WEST"),
	("NORTH_EAST", "SOUTH_WEST"),
	("EAST_NORTH_EAST", "WEST_SOUTH_WEST"),
	("EAST", "WEST"),
	("EAST_SOUTH_EAST", "WEST_NORTH_WEST"),
	("SOUTH_EAST", "NORTH_WEST"),
	("SOUTH_SOUTH_EAST", "NORTH_NORTH_WEST"),
	("UP", "DOWN"),
	("FUTURE", "PAST"),
	("COLUMN_POSITIVE", "COLUMN_NEGATIVE"),
	("ROW_POSITIVE", "ROW_NEGATIVE"),
	("DISPLAY_RIGHT", "DISPLAY_LEFT"),
	("DISPLAY_UP", "DISPLAY_DOWN"),
];

impl AxisDirection {
	/// Name of the opposite direction, if this direction has one.
	///
	/// Geocentric axes, `OTHER` and runtime-created directions have none.
	pub fn opposite(&self) -> Option<&'static str> {
		let name = crate::CodeList::name(self);
		OPPOSITES.iter().find_map(|&(a, b)| {
			if a == name {
				Some(b)
			} else if b == name {
				Some(a)
			} else {
				None
			}
		})
	}
}
