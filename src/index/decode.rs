use crate::coord::round_coordinate;
use crate::error::LocatorError;
use crate::index::constants::{
    EXTENDED_SQUARE_DIVISIONS, FIELD_LAT_DEGREES, FIELD_LON_DEGREES, GRID_ORIGIN_LATITUDE,
    GRID_ORIGIN_LONGITUDE, SQUARE_LAT_DEGREES, SQUARE_LON_DEGREES, SUBSQUARE_DIVISIONS, cell_span,
};
use crate::index::validate::validate_locator;
use serde_json::Value;

/// Decodes a Maidenhead locator into `(latitude, longitude)` degrees.
///
/// With `grid_center` set the result is the center of the cell the locator
/// addresses, otherwise its southwest corner. Both values are rounded to
/// six decimal places.
///
/// # Process
///
/// 1. Validates the locator with [`validate_locator`]
/// 2. Characters 0-1 select the 20° x 10° field from (-180, -90)
/// 3. Characters 2-3 add 2° of longitude and 1° of latitude per digit
/// 4. Characters 4-5 (if present) add 2/24° and 1/24° per letter
/// 5. Characters 6-7 (if present) add 2/240° and 1/240° per digit
/// 6. Characters 8-9 (if present) are accepted but do not move the point,
///    and the center offset stays that of an 8-character cell
/// 7. Adds half the cell size when `grid_center` is set, then rounds
///
/// # Example
/// ```
/// use maidenhead_rs::maidenhead_to_coordinates;
///
/// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
/// assert_eq!(maidenhead_to_coordinates("JN11", true)?, (41.5, 3.0));
/// assert_eq!(maidenhead_to_coordinates("JN11", false)?, (41.0, 2.0));
/// assert_eq!(maidenhead_to_coordinates("jn11aj", true)?, (41.395833, 2.041667));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`LocatorError::OddLength`] / [`LocatorError::LengthOutOfRange`] - passed through from validation
/// - [`LocatorError::WrongFormat`] - the locator does not match the grammar
pub fn maidenhead_to_coordinates(
    locator: &str,
    grid_center: bool,
) -> Result<(f64, f64), LocatorError> {
    if !validate_locator(locator)? {
        return Err(LocatorError::WrongFormat(locator.to_string()));
    }
    let locator = locator.to_uppercase();

    let (latitude, longitude) = southwest_corner(locator.as_bytes())
        .ok_or_else(|| LocatorError::WrongFormat(locator.clone()))?;
    let (delta_latitude, delta_longitude) = if grid_center {
        center_offset(locator.len())
    } else {
        (0.0, 0.0)
    };

    Ok((
        round_coordinate(latitude + delta_latitude),
        round_coordinate(longitude + delta_longitude),
    ))
}

/// Decodes a locator taken from a JSON payload.
///
/// Non-string values fail with [`LocatorError::NotText`], strings behave as
/// in [`maidenhead_to_coordinates`].
pub fn maidenhead_value_to_coordinates(
    locator: &Value,
    grid_center: bool,
) -> Result<(f64, f64), LocatorError> {
    match locator.as_str() {
        Some(s) => maidenhead_to_coordinates(s, grid_center),
        None => Err(LocatorError::NotText),
    }
}

/// Unrounded southwest corner `(latitude, longitude)` of an uppercase
/// locator that already passed validation.
///
/// Returns `None` when the bytes do not split into whole character pairs
/// of 4 to 10 characters.
pub(crate) fn southwest_corner(locator: &[u8]) -> Option<(f64, f64)> {
    if cell_span(locator.len()).is_none() {
        return None;
    }
    let [lon_field, lat_field, lon_square, lat_square, rest @ ..] = locator else {
        return None;
    };

    let mut longitude = GRID_ORIGIN_LONGITUDE + f64::from(lon_field - b'A') * FIELD_LON_DEGREES;
    let mut latitude = GRID_ORIGIN_LATITUDE + f64::from(lat_field - b'A') * FIELD_LAT_DEGREES;

    longitude += f64::from(lon_square - b'0') * SQUARE_LON_DEGREES;
    latitude += f64::from(lat_square - b'0') * SQUARE_LAT_DEGREES;

    if let [lon_sub, lat_sub, rest @ ..] = rest {
        longitude += f64::from(lon_sub - b'A') * SQUARE_LON_DEGREES / SUBSQUARE_DIVISIONS;
        latitude += f64::from(lat_sub - b'A') * SQUARE_LAT_DEGREES / SUBSQUARE_DIVISIONS;

        if let [lon_ext, lat_ext, ..] = rest {
            longitude +=
                f64::from(lon_ext - b'0') * SQUARE_LON_DEGREES / EXTENDED_SQUARE_DIVISIONS;
            latitude +=
                f64::from(lat_ext - b'0') * SQUARE_LAT_DEGREES / EXTENDED_SQUARE_DIVISIONS;
        }
    }

    Some((latitude, longitude))
}

/// Offset `(latitude, longitude)` from the southwest corner to the center of
/// a cell addressed by a locator of the given length.
pub(crate) fn center_offset(length: usize) -> (f64, f64) {
    match cell_span(length) {
        Some((lon_span, lat_span)) => (lat_span / 2.0, lon_span / 2.0),
        None => (0.0, 0.0),
    }
}
