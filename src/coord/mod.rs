use crate::index::constants::ROUNDING_FACTOR;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and
/// [`LatLon`]. `x` is the longitude and `y` the latitude, matching the
/// GeoJSON/WKT axis order used throughout `geo_types`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// A WGS84 position in decimal degrees.
///
/// This is the plain value a station record holds; it carries no reference
/// back to the locator it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the position as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Builds a `LatLon` from a `(latitude, longitude)` pair, the order
/// [`maidenhead_to_coordinates`](crate::maidenhead_to_coordinates) returns.
impl From<(f64, f64)> for LatLon {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<LatLon> for (f64, f64) {
    fn from(value: LatLon) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate for LatLon {
    fn x(&self) -> f64 {
        self.longitude
    }
    fn y(&self) -> f64 {
        self.latitude
    }
}

/// Rounds a coordinate to six decimal places.
pub fn round_coordinate(value: f64) -> f64 {
    (value * ROUNDING_FACTOR).round() / ROUNDING_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (2.04, 41.39);
        assert_eq!(tuple.x(), 2.04);
        assert_eq!(tuple.y(), 41.39);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(2.04, 41.39);
        assert_eq!(point.x(), 2.04);
        assert_eq!(point.y(), 41.39);
    }

    #[test]
    fn test_latlon_axis_order() {
        let pos = LatLon::from((41.39, 2.04));
        assert_eq!(pos.x(), 2.04);
        assert_eq!(pos.y(), 41.39);
        assert_eq!(pos.to_point(), Point::new(2.04, 41.39));

        let pair: (f64, f64) = pos.into();
        assert_eq!(pair, (41.39, 2.04));
    }

    #[test]
    fn test_latlon_serde() {
        let pos = LatLon::new(41.395833, 2.041667);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"latitude":41.395833,"longitude":2.041667}"#);

        let back: LatLon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn test_round_coordinate() {
        assert_eq!(round_coordinate(2.0416666666666665), 2.041667);
        assert_eq!(round_coordinate(41.395833333333336), 41.395833);
        assert_eq!(round_coordinate(-179.99583333333334), -179.995833);
        assert_eq!(round_coordinate(44.5), 44.5);
    }
}
