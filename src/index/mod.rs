mod batch;
pub mod constants;
mod decode;
mod encode;
mod validate;

pub use batch::{DecodeOptions, decode_locators};
pub use constants::{
    COORDINATE_DECIMALS, ENCODABLE_PRECISIONS, MAX_LOCATOR_LENGTH, MIN_LOCATOR_LENGTH, cell_span,
};
pub use decode::{maidenhead_to_coordinates, maidenhead_value_to_coordinates};
pub use encode::coordinates_to_maidenhead;
pub use validate::{validate_locator, validate_locator_value};

pub(crate) use decode::{center_offset, southwest_corner};
