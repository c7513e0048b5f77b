//! # maidenhead-rs
//!
//! Maidenhead grid locators (`JN11`, `IO91wm`, `FN31pr21`) as used in
//! amateur radio. There are currently three main entry points.
//!
//! ### 1. Validating and decoding locators
//!
//! ```
//! use maidenhead_rs::{maidenhead_to_coordinates, validate_locator};
//!
//! # fn main() -> Result<(), maidenhead_rs::LocatorError> {
//! assert!(validate_locator("JN11aj")?);
//!
//! // Center of the cell
//! let (lat, lon) = maidenhead_to_coordinates("JN11aj", true)?;
//! assert_eq!((lat, lon), (41.395833, 2.041667));
//!
//! // Southwest corner of the cell
//! let (lat, lon) = maidenhead_to_coordinates("JN11aj", false)?;
//! assert_eq!((lat, lon), (41.375, 2.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GridCell` - Single Cell Operations
//!
//! ```
//! use maidenhead_rs::GridCell;
//!
//! # fn main() -> Result<(), maidenhead_rs::LocatorError> {
//! let cell = GridCell::from_wgs84(&(-0.1276, 51.5072), 6)?;
//! println!("{}", cell.locator());
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Batches of locators
//!
//! ```
//! use maidenhead_rs::{decode_locators, DecodeOptions};
//!
//! # fn main() -> Result<(), maidenhead_rs::LocatorError> {
//! let options = DecodeOptions::new().corner().skip_invalid(true);
//! let positions = decode_locators(&["JN11", "IO91wm", "bad!"], &options)?;
//! assert!(positions[2].is_none());
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;

pub use cell::GridCell;
pub use coord::{Coordinate, LatLon, round_coordinate};
pub use error::{ErrorKind, LocatorError};
pub use geom::{
    create_cell_polygon, create_cell_rect, geometry_positions, parse_geometry, parse_positions,
};
pub use index::{
    COORDINATE_DECIMALS, DecodeOptions, ENCODABLE_PRECISIONS, MAX_LOCATOR_LENGTH,
    MIN_LOCATOR_LENGTH, cell_span, coordinates_to_maidenhead, decode_locators,
    maidenhead_to_coordinates, maidenhead_value_to_coordinates, validate_locator,
    validate_locator_value,
};
pub use io::GridCellsToArrow;

pub use geo_types;
pub use geoarrow_array;
pub use geoarrow_schema;
