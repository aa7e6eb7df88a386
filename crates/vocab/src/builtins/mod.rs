//! Code lists from the ISO 19111 and ISO 19115 models.

mod axis_direction;
mod character_set;
mod presentation_form;
mod role;
mod vertical_datum_type;

pub use axis_direction::AxisDirection;
pub use character_set::CharacterSet;
pub use presentation_form::PresentationForm;
pub use role::Role;
pub use vertical_datum_type::VerticalDatumType;

#[cfg(test)]
mod tests;
