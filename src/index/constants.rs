/// Shortest accepted locator (field + square)
pub const MIN_LOCATOR_LENGTH: usize = 4;

/// Longest accepted locator (field + square + subsquare + extended square + one unmodeled pair)
pub const MAX_LOCATOR_LENGTH: usize = 10;

/// Locator lengths that decode to distinct cell sizes and can be encoded
pub const ENCODABLE_PRECISIONS: [usize; 3] = [4, 6, 8];

/// Last letter of the field alphabet (18 fields per axis)
pub const FIELD_LETTER_MAX: u8 = b'R';

/// Last letter of the subsquare alphabet (24 subsquares per axis)
pub const SUBSQUARE_LETTER_MAX: u8 = b'X';

/// Origin of the grid, the southwest corner of field `AA`
pub const GRID_ORIGIN_LONGITUDE: f64 = -180.0;
pub const GRID_ORIGIN_LATITUDE: f64 = -90.0;

/// Field size in degrees
pub const FIELD_LON_DEGREES: f64 = 20.0;
pub const FIELD_LAT_DEGREES: f64 = 10.0;

/// Square size in degrees (4-character locator)
pub const SQUARE_LON_DEGREES: f64 = 2.0;
pub const SQUARE_LAT_DEGREES: f64 = 1.0;

/// Subsquares per square along each axis
pub const SUBSQUARE_DIVISIONS: f64 = 24.0;

/// Extended squares per square along each axis (10 per subsquare)
pub const EXTENDED_SQUARE_DIVISIONS: f64 = 240.0;

/// Subsquare size in degrees (6-character locator)
pub const SUBSQUARE_LON_DEGREES: f64 = SQUARE_LON_DEGREES / SUBSQUARE_DIVISIONS;
pub const SUBSQUARE_LAT_DEGREES: f64 = SQUARE_LAT_DEGREES / SUBSQUARE_DIVISIONS;

/// Extended square size in degrees (8-character locator)
pub const EXTENDED_LON_DEGREES: f64 = SQUARE_LON_DEGREES / EXTENDED_SQUARE_DIVISIONS;
pub const EXTENDED_LAT_DEGREES: f64 = SQUARE_LAT_DEGREES / EXTENDED_SQUARE_DIVISIONS;

/// Decimal places kept in decoded coordinates
pub const COORDINATE_DECIMALS: u32 = 6;

/// `10^COORDINATE_DECIMALS`
pub(crate) const ROUNDING_FACTOR: f64 = 1_000_000.0;

/// Cell size `(lon_degrees, lat_degrees)` for a locator of the given length.
///
/// Ten-character locators reuse the 8-character size, the fifth pair is not modeled.
pub fn cell_span(length: usize) -> Option<(f64, f64)> {
    match length {
        4 => Some((SQUARE_LON_DEGREES, SQUARE_LAT_DEGREES)),
        6 => Some((SUBSQUARE_LON_DEGREES, SUBSQUARE_LAT_DEGREES)),
        8 | 10 => Some((EXTENDED_LON_DEGREES, EXTENDED_LAT_DEGREES)),
        _ => None,
    }
}
