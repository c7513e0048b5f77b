use crate::error::LocatorError;
use crate::index::constants::{
    ENCODABLE_PRECISIONS, EXTENDED_LAT_DEGREES, EXTENDED_LON_DEGREES, FIELD_LAT_DEGREES,
    FIELD_LON_DEGREES, GRID_ORIGIN_LATITUDE, GRID_ORIGIN_LONGITUDE, SQUARE_LAT_DEGREES,
    SQUARE_LON_DEGREES, SUBSQUARE_LAT_DEGREES, SUBSQUARE_LON_DEGREES,
};

const FIELDS_PER_AXIS: u8 = 18;
const SUBSQUARES_PER_AXIS: u8 = 24;
const DIGITS_PER_AXIS: u8 = 10;

/// Encodes a WGS84 position into a Maidenhead locator of the given length.
///
/// `precision` is the locator length and must be 4, 6 or 8. The result is
/// uppercase and names the cell containing the point. Points on the
/// northern or eastern edge of the grid (latitude 90, longitude 180) fall
/// into the last cell.
///
/// # Example
/// ```
/// use maidenhead_rs::coordinates_to_maidenhead;
///
/// # fn main() -> Result<(), maidenhead_rs::LocatorError> {
/// assert_eq!(coordinates_to_maidenhead(41.395883, 2.041667, 6)?, "JN11AJ");
/// assert_eq!(coordinates_to_maidenhead(41.395883, 2.041667, 4)?, "JN11");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`LocatorError::InvalidPrecision`] - `precision` is not 4, 6 or 8
/// - [`LocatorError::CoordinateOutOfRange`] - latitude outside [-90, 90],
///   longitude outside [-180, 180], or either is NaN
pub fn coordinates_to_maidenhead(
    latitude: f64,
    longitude: f64,
    precision: usize,
) -> Result<String, LocatorError> {
    if !ENCODABLE_PRECISIONS.contains(&precision) {
        return Err(LocatorError::InvalidPrecision(precision));
    }
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(LocatorError::CoordinateOutOfRange {
            latitude,
            longitude,
        });
    }

    let mut lon = longitude - GRID_ORIGIN_LONGITUDE;
    let mut lat = latitude - GRID_ORIGIN_LATITUDE;
    let mut locator = String::with_capacity(precision);

    let lon_field = cell_index(lon, FIELD_LON_DEGREES, FIELDS_PER_AXIS);
    let lat_field = cell_index(lat, FIELD_LAT_DEGREES, FIELDS_PER_AXIS);
    locator.push(char::from(b'A' + lon_field));
    locator.push(char::from(b'A' + lat_field));
    lon -= f64::from(lon_field) * FIELD_LON_DEGREES;
    lat -= f64::from(lat_field) * FIELD_LAT_DEGREES;

    let lon_square = cell_index(lon, SQUARE_LON_DEGREES, DIGITS_PER_AXIS);
    let lat_square = cell_index(lat, SQUARE_LAT_DEGREES, DIGITS_PER_AXIS);
    locator.push(char::from(b'0' + lon_square));
    locator.push(char::from(b'0' + lat_square));

    if precision > 4 {
        lon -= f64::from(lon_square) * SQUARE_LON_DEGREES;
        lat -= f64::from(lat_square) * SQUARE_LAT_DEGREES;

        let lon_sub = cell_index(lon, SUBSQUARE_LON_DEGREES, SUBSQUARES_PER_AXIS);
        let lat_sub = cell_index(lat, SUBSQUARE_LAT_DEGREES, SUBSQUARES_PER_AXIS);
        locator.push(char::from(b'A' + lon_sub));
        locator.push(char::from(b'A' + lat_sub));

        if precision > 6 {
            lon -= f64::from(lon_sub) * SUBSQUARE_LON_DEGREES;
            lat -= f64::from(lat_sub) * SUBSQUARE_LAT_DEGREES;

            let lon_ext = cell_index(lon, EXTENDED_LON_DEGREES, DIGITS_PER_AXIS);
            let lat_ext = cell_index(lat, EXTENDED_LAT_DEGREES, DIGITS_PER_AXIS);
            locator.push(char::from(b'0' + lon_ext));
            locator.push(char::from(b'0' + lat_ext));
        }
    }

    Ok(locator)
}

/// Index of the cell of size `span` containing `offset`, clamped to `[0, count)`.
fn cell_index(offset: f64, span: f64, count: u8) -> u8 {
    let index = (offset / span).floor().max(0.0) as u8;
    index.min(count - 1)
}
